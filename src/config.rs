//! User settings loaded from `config.toml`.
//!
//! ```toml
//! [grid]
//! rows = 12
//! cols = 6
//!
//! [border]
//! color = "#333"
//! width = 2
//! style = "dashed"
//! ```

use clubgrid_core::{BorderPatch, GridDefaults};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    grid: Option<GridSection>,
    border: Option<BorderPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct GridSection {
    rows: Option<usize>,
    cols: Option<usize>,
}

pub(crate) fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("org", "clubgrid", "clubgrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load grid defaults. `config_file` wins over the user config; a missing
/// user config is not an error. Problems are returned as warnings and the
/// built-in defaults are used instead.
pub fn load_config(config_file: Option<&PathBuf>, no_config: bool) -> (GridDefaults, Vec<String>) {
    let mut warnings = Vec::new();
    let path = match config_file {
        Some(path) => Some(path.clone()),
        None if no_config => None,
        None => user_config_path(),
    };

    let Some(path) = path else {
        return (GridDefaults::default(), warnings);
    };
    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (GridDefaults::default(), warnings);
    }

    match read_config(&path) {
        Ok(defaults) => {
            log::debug!("using config {}", path.display());
            (defaults, warnings)
        }
        Err(warning) => {
            warnings.push(warning);
            (GridDefaults::default(), warnings)
        }
    }
}

fn read_config(path: &Path) -> Result<GridDefaults, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    parse_config(&content).map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn parse_config(content: &str) -> Result<GridDefaults, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut defaults = GridDefaults::default();
    if let Some(grid) = file.grid {
        defaults.rows = grid.rows.unwrap_or(defaults.rows).max(1);
        defaults.cols = grid.cols.unwrap_or(defaults.cols).max(1);
    }
    if let Some(border) = file.border {
        defaults.border = border;
    }
    Ok(defaults)
}

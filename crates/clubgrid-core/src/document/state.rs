use crate::error::Result;
use clubgrid_engine::engine::{Border, BorderPatch, Grid};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of rows of a new table.
pub const DEFAULT_ROWS: usize = 10;
/// Default number of columns of a new table.
pub const DEFAULT_COLS: usize = 5;

/// Shape and border used when a table is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridDefaults {
    pub rows: usize,
    pub cols: usize,
    pub border: BorderPatch,
}

impl Default for GridDefaults {
    fn default() -> Self {
        GridDefaults {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            border: BorderPatch::default(),
        }
    }
}

/// UI-agnostic document state for one table view.
pub struct Document {
    /// The cell matrix, owned exclusively by this document
    pub grid: Grid,
    /// Current file path
    pub file_path: Option<PathBuf>,
    /// Whether the grid has been modified since load/save
    pub modified: bool,
}

impl Document {
    /// Create a document with a blank `rows` x `cols` table.
    pub fn new(rows: usize, cols: usize) -> Self {
        Document::from_grid(Grid::new(rows, cols))
    }

    pub fn with_defaults(defaults: &GridDefaults) -> Self {
        let border = Border::from_patch(&defaults.border);
        Document::from_grid(Grid::with_border(defaults.rows, defaults.cols, border))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Document {
            grid,
            file_path: None,
            modified: false,
        }
    }

    /// Create a new document and load a CSV file if provided.
    ///
    /// A path that does not exist yet becomes the save target of an empty table.
    pub fn with_file(path: Option<PathBuf>, defaults: &GridDefaults) -> Result<Self> {
        let mut doc = Self::with_defaults(defaults);
        if let Some(p) = path {
            if p.exists() {
                doc.load_file(&p)?;
            } else {
                log::info!("{} does not exist yet, starting empty", p.display());
                doc.file_path = Some(p);
            }
        }
        Ok(doc)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::with_defaults(&GridDefaults::default())
    }
}

//! Cell data structures for the table grid.
//!
//! - [`Cell`] - raw value, optional formula and border of one cell
//! - [`Border`] - a fully specified border
//! - [`BorderPatch`] - a partial border merged over an existing one
//! - [`BorderStyle`] - line style of a border

use serde::{Deserialize, Serialize};

/// Smallest border width in pixels.
pub const MIN_BORDER_WIDTH: u8 = 1;
/// Largest border width in pixels.
pub const MAX_BORDER_WIDTH: u8 = 8;

/// Line style of a cell border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

impl std::str::FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(BorderStyle::Solid),
            "dashed" => Ok(BorderStyle::Dashed),
            "dotted" => Ok(BorderStyle::Dotted),
            other => Err(format!("Unknown border style: {}", other)),
        }
    }
}

/// Border drawn around a cell. `width` always lies in 1..=8.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Border {
    pub color: String,
    pub width: u8,
    pub style: BorderStyle,
}

impl Default for Border {
    fn default() -> Self {
        Border {
            color: "#222".to_string(),
            width: MIN_BORDER_WIDTH,
            style: BorderStyle::Solid,
        }
    }
}

impl Border {
    /// Apply the fields present in `patch`, keeping the others.
    pub fn merge(&mut self, patch: &BorderPatch) {
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(width) = patch.width {
            self.width = clamp_width(width);
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
    }

    /// Defaults with `patch` applied on top.
    pub fn from_patch(patch: &BorderPatch) -> Border {
        let mut border = Border::default();
        border.merge(patch);
        border
    }
}

/// Partial border; `None` fields leave the target untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderPatch {
    pub color: Option<String>,
    pub width: Option<u32>,
    pub style: Option<BorderStyle>,
}

impl BorderPatch {
    pub fn width(width: u32) -> Self {
        BorderPatch {
            width: Some(width),
            ..Default::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        BorderPatch {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn style(style: BorderStyle) -> Self {
        BorderPatch {
            style: Some(style),
            ..Default::default()
        }
    }
}

fn clamp_width(width: u32) -> u8 {
    width.clamp(MIN_BORDER_WIDTH as u32, MAX_BORDER_WIDTH as u32) as u8
}

/// A cell in the table grid.
///
/// `value` is the raw literal the user typed. `formula`, when present, starts
/// with `=`; its result is derived on demand and never written into `value`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    pub formula: Option<String>,
    pub border: Border,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::default()
    }

    pub fn with_border(border: Border) -> Cell {
        Cell {
            border,
            ..Default::default()
        }
    }

    /// Store `text` as the formula. Empty text clears it and a missing
    /// leading `=` is added.
    pub(crate) fn set_formula(&mut self, text: &str) {
        self.formula = if text.is_empty() {
            None
        } else if text.starts_with('=') {
            Some(text.to_string())
        } else {
            Some(format!("={}", text))
        };
    }
}

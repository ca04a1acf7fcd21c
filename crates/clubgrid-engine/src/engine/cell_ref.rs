//! Cell reference parsing and formatting.
//!
//! Converts between table labels (e.g. "A1", "C10") and zero-indexed
//! row/column coordinates. Formulas only address single-letter columns
//! (A-Z); [`CellRef::col_to_letters`] still renders wider headers for display.
//!
//! # Examples
//!
//! ```
//! use clubgrid_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// Anchored single-letter label, e.g. `A1` or `c10`.
fn label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i-u)^(?<letter>[A-Z])(?<numbers>[0-9]+)$").expect("label regex is valid")
    })
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from table notation (e.g., "A1", "b12").
    /// Returns None for multi-letter columns, row 0 or a row number that
    /// does not fit in `usize`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_label(name)
    }

    fn parse_label(name: &str) -> Option<CellRef> {
        let caps = label_re().captures(name)?;
        let letter = caps["letter"].as_bytes()[0].to_ascii_uppercase();
        let col = (letter - b'A') as usize;
        let row = caps["numbers"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(col, row))
    }

    /// Convert column index to header letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_parse_row_overflow_returns_none() {
        let huge = format!("A{}", "9".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }

    #[test]
    fn test_row_zero_is_rejected() {
        assert!(CellRef::from_str("A0").is_none());
    }

    #[test]
    fn test_multi_letter_columns_are_rejected() {
        assert!(CellRef::from_str("AA1").is_none());
    }

    #[test]
    fn test_non_ascii_letters_are_rejected() {
        // Kelvin sign case-folds to 'k' under Unicode rules.
        assert!(CellRef::from_str("\u{212A}1").is_none());
        assert!(CellRef::from_str("A\u{0661}").is_none());
    }

    #[test]
    fn test_col_to_letters_handles_max_usize() {
        let letters = CellRef::col_to_letters(usize::MAX);
        assert!(!letters.is_empty());
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_from_str_trait_reports_input() {
        let err = "1A".parse::<CellRef>().unwrap_err();
        assert_eq!(err, "Invalid cell reference: 1A");
    }
}

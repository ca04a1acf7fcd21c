//! The table formula grammar.
//!
//! Only three forms are recognized, tried in this order:
//!
//! 1. `=SUM(A1:B5)` - sum over a rectangular range (`SUM` in any case)
//! 2. `=A1*B2` - product of two cells
//! 3. `=C3` - the raw value of one cell
//!
//! Text without a leading `=` is a literal. There is no nesting and no
//! whitespace inside formulas.

use regex::Regex;
use std::sync::OnceLock;

use super::cell_ref::CellRef;

/// A cell reference as written in a formula.
///
/// The row number is taken as-is: row 0 lies before the grid (`row` is
/// `None`) and a number too large for `usize` saturates, which puts it past
/// any grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormulaRef {
    pub col: usize,
    pub row: Option<usize>,
}

impl FormulaRef {
    /// Decode a label already matched by the grammar (`[A-Za-z][0-9]+`).
    fn decode(label: &str) -> FormulaRef {
        let bytes = label.as_bytes();
        let col = (bytes[0].to_ascii_uppercase() - b'A') as usize;
        let number = bytes[1..].iter().fold(0usize, |acc, d| {
            acc.saturating_mul(10).saturating_add((d - b'0') as usize)
        });
        FormulaRef {
            col,
            row: number.checked_sub(1),
        }
    }

    /// The grid position, or `None` for row 0.
    pub fn cell_ref(&self) -> Option<CellRef> {
        self.row.map(|row| CellRef::new(self.col, row))
    }
}

/// A parsed formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula<'a> {
    /// Input without a leading `=`, passed through unchanged.
    Literal(&'a str),
    SumRange { start: FormulaRef, end: FormulaRef },
    Product(FormulaRef, FormulaRef),
    Reference(FormulaRef),
    /// Starts with `=` but matches none of the known forms.
    Unsupported,
}

fn sum_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i-u)^=SUM\(([A-Z][0-9]+):([A-Z][0-9]+)\)$").expect("sum regex is valid")
    })
}

fn product_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i-u)^=([A-Z][0-9]+)\*([A-Z][0-9]+)$").expect("product regex is valid")
    })
}

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i-u)^=([A-Z][0-9]+)$").expect("reference regex is valid"))
}

impl<'a> Formula<'a> {
    /// Classify `text`. Never fails; unknown input maps to
    /// [`Formula::Unsupported`].
    pub fn parse(text: &'a str) -> Formula<'a> {
        if !text.starts_with('=') {
            return Formula::Literal(text);
        }

        if let Some(caps) = sum_re().captures(text) {
            return Formula::SumRange {
                start: FormulaRef::decode(&caps[1]),
                end: FormulaRef::decode(&caps[2]),
            };
        }

        if let Some(caps) = product_re().captures(text) {
            return Formula::Product(FormulaRef::decode(&caps[1]), FormulaRef::decode(&caps[2]));
        }

        if let Some(caps) = reference_re().captures(text) {
            return Formula::Reference(FormulaRef::decode(&caps[1]));
        }

        Formula::Unsupported
    }

}

//! Table engine API.
//!
//! - [`Cell`], [`Border`], [`BorderPatch`], [`BorderStyle`] - cell data
//! - [`Grid`] - the rectangular Grid Store
//! - [`CellRef`] - cell reference parsing (A1 notation <-> row/col indices)
//! - [`Formula`] - the formula grammar
//! - [`evaluate`] - formula evaluation
//! - [`format_number`], [`format_value`] - values for display

mod cell;
mod cell_ref;
mod eval;
mod format;
mod formula;
mod grid;
mod number;
mod value;

pub use cell::{Border, BorderPatch, BorderStyle, Cell, MAX_BORDER_WIDTH, MIN_BORDER_WIDTH};
pub use cell_ref::CellRef;
pub use eval::evaluate;
pub use format::{format_number, format_value};
pub use formula::{Formula, FormulaRef};
pub use grid::{Grid, create_grid};
pub use number::parse_number;
pub use value::{ERROR_SENTINEL, Value};

//! Error types for Clubgrid core.

use clubgrid_engine::engine::CellRef;
use thiserror::Error;

/// Errors that can occur while editing, loading or exporting a table
#[derive(Error, Debug)]
pub enum ClubgridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Cell {0} is outside the table")]
    OutOfBounds(CellRef),

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error("CSV file is empty")]
    EmptyCsv,
}

pub type Result<T> = std::result::Result<T, ClubgridError>;

//! clubgrid-core - UI-agnostic document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Document, GridDefaults};
pub use error::{ClubgridError, Result};

pub use clubgrid_engine::engine::{BorderPatch, BorderStyle, CellRef, Value};

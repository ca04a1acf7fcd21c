//! clubgrid_engine - table grid, formula grammar and evaluation.

pub mod engine;

//! The Grid Store: an owned, rectangular matrix of [`Cell`]s.
//!
//! Reads outside the grid return `None` and writes outside it are ignored,
//! so callers can forward user input without checking bounds first.

use super::cell::{Border, BorderPatch, Cell};
use super::cell_ref::CellRef;

/// Rectangular cell matrix addressed by zero-based `(row, col)`.
///
/// Every row has exactly `cols` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    cols: usize,
    default_border: Border,
}

impl Grid {
    /// Create a grid of empty cells with the default border.
    /// Zero dimensions are raised to 1.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid::with_border(rows, cols, Border::default())
    }

    /// Create a grid whose new cells start out with `border`.
    pub fn with_border(rows: usize, cols: usize, border: Border) -> Grid {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cells = (0..rows)
            .map(|_| vec![Cell::with_border(border.clone()); cols])
            .collect();
        Grid {
            cells,
            cols,
            default_border: border,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn default_border(&self) -> &Border {
        &self.default_border
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    pub fn get_ref(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.get(cell_ref.row, cell_ref.col)
    }

    /// Look up a cell by label such as `"B3"`.
    pub fn get_by_label(&self, label: &str) -> Option<&Cell> {
        let cell_ref = CellRef::from_str(label)?;
        self.get_ref(&cell_ref)
    }

    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Replace the raw value of a cell. No-op outside the grid.
    pub fn set_value(&mut self, row: usize, col: usize, text: &str) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.value = text.to_string();
        }
    }

    /// Replace the formula of a cell; empty text clears it. No-op outside the grid.
    pub fn set_formula(&mut self, row: usize, col: usize, formula: &str) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.set_formula(formula);
        }
    }

    /// Merge `patch` over the cell's border. No-op outside the grid.
    pub fn set_border(&mut self, row: usize, col: usize, patch: &BorderPatch) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.border.merge(patch);
        }
    }

    /// Resize to `rows` x `cols` (each at least 1), keeping overlapping cells.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let blank = Cell::with_border(self.default_border.clone());
        for row in &mut self.cells {
            row.resize(cols, blank.clone());
        }
        self.cells.resize(rows, vec![blank; cols]);
        self.cols = cols;
    }

    pub fn add_row(&mut self) {
        self.resize(self.rows() + 1, self.cols);
    }

    pub fn add_column(&mut self) {
        self.resize(self.rows(), self.cols + 1);
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (CellRef::new(col, row), cell))
        })
    }
}

/// Create a `rows` x `cols` grid of empty cells.
pub fn create_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols)
}

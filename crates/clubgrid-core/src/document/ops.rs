use super::Document;
use crate::error::{ClubgridError, Result};
use clubgrid_engine::engine::{BorderPatch, CellRef, Formula, Value, evaluate};

impl Document {
    fn check_bounds(&self, cell_ref: &CellRef) -> Result<()> {
        if self.grid.contains(cell_ref.row, cell_ref.col) {
            Ok(())
        } else {
            Err(ClubgridError::OutOfBounds(*cell_ref))
        }
    }

    /// Route user input into a cell: text starting with `=` replaces the
    /// formula and leaves the value alone, anything else replaces the value
    /// and clears the formula.
    pub fn set_cell_from_input(&mut self, cell_ref: CellRef, input: &str) -> Result<()> {
        self.check_bounds(&cell_ref)?;
        if input.starts_with('=') {
            self.grid.set_formula(cell_ref.row, cell_ref.col, input);
        } else {
            self.grid.set_value(cell_ref.row, cell_ref.col, input);
            self.grid.set_formula(cell_ref.row, cell_ref.col, "");
        }
        self.modified = true;
        log::debug!("{} <- {:?}", cell_ref, input);
        Ok(())
    }

    /// Replace the raw value only.
    pub fn set_value(&mut self, cell_ref: CellRef, text: &str) -> Result<()> {
        self.check_bounds(&cell_ref)?;
        self.grid.set_value(cell_ref.row, cell_ref.col, text);
        self.modified = true;
        Ok(())
    }

    /// Replace the formula only; empty text clears it.
    pub fn set_formula(&mut self, cell_ref: CellRef, formula: &str) -> Result<()> {
        self.check_bounds(&cell_ref)?;
        self.grid.set_formula(cell_ref.row, cell_ref.col, formula);
        self.modified = true;
        Ok(())
    }

    pub fn set_border(&mut self, cell_ref: CellRef, patch: &BorderPatch) -> Result<()> {
        self.check_bounds(&cell_ref)?;
        self.grid.set_border(cell_ref.row, cell_ref.col, patch);
        self.modified = true;
        Ok(())
    }

    /// Clear value and formula, keeping the border.
    pub fn clear_cell(&mut self, cell_ref: CellRef) -> Result<()> {
        self.check_bounds(&cell_ref)?;
        self.grid.set_value(cell_ref.row, cell_ref.col, "");
        self.grid.set_formula(cell_ref.row, cell_ref.col, "");
        self.modified = true;
        Ok(())
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.grid.resize(rows, cols);
        self.modified = true;
    }

    /// Grow (never shrink) so that `rows` x `cols` fits.
    pub fn ensure_size(&mut self, rows: usize, cols: usize) {
        let rows = rows.max(self.grid.rows());
        let cols = cols.max(self.grid.cols());
        if rows != self.grid.rows() || cols != self.grid.cols() {
            self.resize(rows, cols);
        }
    }

    pub fn add_row(&mut self) {
        self.grid.add_row();
        self.modified = true;
    }

    pub fn add_column(&mut self) {
        self.grid.add_column();
        self.modified = true;
    }

    /// Result of the cell's formula, or `None` for plain cells and positions
    /// outside the table.
    pub fn evaluate_cell(&self, cell_ref: &CellRef) -> Option<Value> {
        let formula = self.grid.get_ref(cell_ref)?.formula.as_deref()?;
        let value = evaluate(formula, &self.grid);
        if value.is_error() {
            log::debug!("{}: {:?} is {:?}", cell_ref, formula, Formula::parse(formula));
        }
        Some(value)
    }

    /// Text shown for a cell: the formula result if it has one, else its value.
    pub fn display(&self, cell_ref: &CellRef) -> String {
        match self.evaluate_cell(cell_ref) {
            Some(value) => value.to_string(),
            None => self
                .grid
                .get_ref(cell_ref)
                .map(|c| c.value.clone())
                .unwrap_or_default(),
        }
    }

    /// Evaluate every formula cell from scratch, in row-major order.
    pub fn recalculate(&self) -> Vec<(CellRef, Value)> {
        let results: Vec<(CellRef, Value)> = self
            .grid
            .iter()
            .filter_map(|(cell_ref, cell)| {
                let formula = cell.formula.as_deref()?;
                Some((cell_ref, evaluate(formula, &self.grid)))
            })
            .collect();
        log::trace!("recalculated {} formula cells", results.len());
        results
    }

    /// Parse a label like `B3` into a reference inside this table.
    pub fn resolve_label(&self, label: &str) -> Result<CellRef> {
        let cell_ref = CellRef::from_str(label.trim())
            .ok_or_else(|| ClubgridError::InvalidCellRef(label.to_string()))?;
        self.check_bounds(&cell_ref)?;
        Ok(cell_ref)
    }
}

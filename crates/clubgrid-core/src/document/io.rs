use super::Document;
use crate::error::Result;
use crate::storage::{CsvInput, parse_csv, parse_csv_str, write_csv_display, write_markdown};
use clubgrid_engine::engine::CellRef;
use std::path::Path;

impl Document {
    /// Load a CSV file, replacing the current contents. The table grows to
    /// fit the file but keeps at least its current size.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let rows = parse_csv(path)?;
        self.replace_with(rows);
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            self.grid.rows(),
            self.grid.cols()
        );
        Ok(())
    }

    /// Import CSV text, replacing the current contents.
    pub fn import_csv_raw(&mut self, content: &str) -> Result<()> {
        let rows = parse_csv_str(content)?;
        self.replace_with(rows);
        self.modified = true;
        Ok(())
    }

    fn replace_with(&mut self, rows: Vec<Vec<CsvInput>>) {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let (rows_now, cols_now) = (self.grid.rows(), self.grid.cols());
        self.grid = clubgrid_engine::engine::Grid::with_border(
            rows.len().max(rows_now),
            width.max(cols_now),
            self.grid.default_border().clone(),
        );
        for (row, fields) in rows.into_iter().enumerate() {
            for (col, input) in fields.into_iter().enumerate() {
                match input {
                    CsvInput::Value(value) => self.grid.set_value(row, col, &value),
                    CsvInput::Formula(formula) => self.grid.set_formula(row, col, &formula),
                }
            }
        }
    }

    /// Write evaluated values as CSV for other spreadsheet applications.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        write_csv_display(path, self)?;
        log::info!("exported {}", path.display());
        Ok(())
    }

    /// Write the evaluated table as a markdown document.
    pub fn export_markdown(&self, path: &Path) -> Result<()> {
        write_markdown(path, self)?;
        log::info!("exported {}", path.display());
        Ok(())
    }

    /// Label of the bottom-right cell, e.g. `E10`.
    pub fn last_cell_label(&self) -> String {
        CellRef::new(self.grid.cols() - 1, self.grid.rows() - 1).to_string()
    }
}

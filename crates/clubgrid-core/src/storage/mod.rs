//! File formats: CSV import, CSV and Markdown export.

mod csv;
mod md;

pub use csv::{CsvInput, parse_csv, parse_csv_str, write_csv_display};
pub use md::{render_markdown, write_markdown};

//! Markdown export functionality

use crate::document::Document;
use clubgrid_engine::engine::CellRef;
use std::io::Write;
use std::path::Path;

/// Write the table, with formula results, to a markdown file
pub fn write_markdown(path: &Path, doc: &Document) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    render_markdown(&mut file, doc)
}

/// Render the table as a markdown document
pub fn render_markdown<W: Write>(w: &mut W, doc: &Document) -> std::io::Result<()> {
    let title = doc
        .file_path
        .as_ref()
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Table".to_string());
    writeln!(w, "# {}", title)?;
    writeln!(w)?;

    // Header with column letters
    write!(w, "|   |")?;
    for col in 0..doc.grid.cols() {
        write!(w, " {} |", CellRef::col_to_letters(col))?;
    }
    writeln!(w)?;

    write!(w, "|---|")?;
    for _ in 0..doc.grid.cols() {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for row in 0..doc.grid.rows() {
        write!(w, "| {} |", row + 1)?; // 1-based row numbers
        for col in 0..doc.grid.cols() {
            let display = doc.display(&CellRef::new(col, row));
            write!(w, " {} |", escape_markdown(&display))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

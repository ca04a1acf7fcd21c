//! Plain-text rendering of the evaluated table.

use clubgrid_core::{CellRef, Document};
use std::io::Write;

/// Print the table with column letters and 1-based row numbers. Formula
/// cells show their result.
pub fn write_table<W: Write>(w: &mut W, doc: &Document) -> std::io::Result<()> {
    let rows = doc.grid.rows();
    let cols = doc.grid.cols();

    let cells: Vec<Vec<String>> = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| doc.display(&CellRef::new(col, row)).replace(['\n', '\r'], " "))
                .collect()
        })
        .collect();

    let headers: Vec<String> = (0..cols).map(CellRef::col_to_letters).collect();
    let widths: Vec<usize> = (0..cols)
        .map(|col| {
            cells
                .iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(headers[col].len()))
                .max()
                .unwrap_or(1)
        })
        .collect();
    let label_width = rows.to_string().len();

    write!(w, "{:label_width$}", "")?;
    for (header, width) in headers.iter().zip(&widths) {
        write!(w, " | {:<width$}", header, width = width)?;
    }
    writeln!(w)?;

    for (row, values) in cells.iter().enumerate() {
        write!(w, "{:>label_width$}", row + 1)?;
        for (value, width) in values.iter().zip(&widths) {
            write!(w, " | {:<width$}", value, width = width)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table() {
        let mut doc = Document::new(2, 2);
        doc.set_cell_from_input(CellRef::new(0, 0), "12").unwrap();
        doc.set_cell_from_input(CellRef::new(1, 1), "=A1").unwrap();

        let mut out = Vec::new();
        write_table(&mut out, &doc).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  | A  | B \n1 | 12 |   \n2 |    | 12\n"
        );
    }
}

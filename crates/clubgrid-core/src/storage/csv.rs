//! CSV import/export functionality
//!
//! Import reads raw inputs (values and formulas). Export writes evaluated
//! results for other spreadsheet applications.

use crate::document::Document;
use crate::error::{ClubgridError, Result};
use clubgrid_engine::engine::CellRef;
use std::io::Write;
use std::path::Path;

/// One parsed CSV field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CsvInput {
    Value(String),
    Formula(String),
}

impl CsvInput {
    fn classify(field: String) -> CsvInput {
        if field.starts_with('=') {
            return CsvInput::Formula(field);
        }
        match field.strip_prefix('\'') {
            Some(rest) if is_formula_like(rest) => CsvInput::Value(rest.to_string()),
            _ => CsvInput::Value(field),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, CsvInput::Value(v) if v.is_empty())
    }
}

/// Parse a CSV file into rows of inputs.
pub fn parse_csv(path: &Path) -> Result<Vec<Vec<CsvInput>>> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_str(&content)
}

/// Parse CSV text into rows of inputs.
///
/// Fields starting with `=` are formulas. A field of the form `'=...` (any
/// number of apostrophes before the `=`) loses one apostrophe and stays a
/// plain value.
pub fn parse_csv_str(content: &str) -> Result<Vec<Vec<CsvInput>>> {
    let rows: Vec<Vec<CsvInput>> = content
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            parse_csv_line(line)
                .map(|fields| fields.into_iter().map(CsvInput::classify).collect())
                .ok_or_else(|| ClubgridError::Parse {
                    line: line_idx + 1,
                    message: "unterminated quoted field".to_string(),
                })
        })
        .collect::<Result<_>>()?;

    if rows.iter().all(|r| r.iter().all(CsvInput::is_blank)) {
        return Err(ClubgridError::EmptyCsv);
    }
    Ok(rows)
}

/// Parse a single CSV line, handling quoted fields.
/// Returns None when a quote is left open at the end of the line.
pub(crate) fn parse_csv_line(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    field_was_quoted = true;
                }
                ',' => {
                    if field_was_quoted {
                        fields.push(std::mem::take(&mut current));
                    } else {
                        fields.push(current.trim().to_string());
                        current.clear();
                    }
                    field_was_quoted = false;
                }
                _ => current.push(c),
            }
        }
    }
    if in_quotes {
        return None;
    }
    if field_was_quoted {
        fields.push(current);
    } else {
        fields.push(current.trim().to_string());
    }
    Some(fields)
}

/// `true` for text of the form `'*=...`.
fn is_formula_like(text: &str) -> bool {
    text.trim_start_matches('\'').starts_with('=')
}

/// Export the table using evaluated display values.
pub fn write_csv_display(path: &Path, doc: &Document) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    for row in 0..doc.grid.rows() {
        let fields: Vec<String> = (0..doc.grid.cols())
            .map(|col| escape_csv_field(&doc.display(&CellRef::new(col, row))))
            .collect();
        writeln!(file, "{}", fields.join(","))?;
    }
    Ok(())
}

fn quote_csv_field(field: &str) -> String {
    if field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
        || field != field.trim()
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Escape a display field for CSV output
fn escape_csv_field(field: &str) -> String {
    // Guard against CSV formula injection in spreadsheet apps.
    let first_non_space = field.trim_start_matches([' ', '\t']).chars().next();
    if matches!(first_non_space, Some('=' | '+' | '-' | '@')) {
        quote_csv_field(&format!("'{}", field))
    } else {
        quote_csv_field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cleanup(std::path::PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "clubgrid_{}_{}_{:?}.csv",
            name,
            std::process::id(),
            std::thread::current().id(),
        ))
    }

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(parse_csv_line("a,b,c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        assert_eq!(
            parse_csv_line(r#"a,"hello, world",c"#).unwrap(),
            vec!["a", "hello, world", "c"]
        );
    }

    #[test]
    fn test_parse_csv_line_quoted_preserves_whitespace() {
        assert_eq!(
            parse_csv_line(r#""  keep me  ",x"#).unwrap(),
            vec!["  keep me  ", "x"]
        );
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        assert_eq!(
            parse_csv_line(r#"a,"say ""hello""",c"#).unwrap(),
            vec!["a", r#"say "hello""#, "c"]
        );
    }

    #[test]
    fn test_parse_csv_line_unterminated_quote() {
        assert!(parse_csv_line(r#"a,"open"#).is_none());
        assert!(matches!(
            parse_csv_str("a\n\"b"),
            Err(ClubgridError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_csv_str_empty() {
        assert!(matches!(parse_csv_str(""), Err(ClubgridError::EmptyCsv)));
        assert!(matches!(parse_csv_str(",,\n,"), Err(ClubgridError::EmptyCsv)));
    }

    #[test]
    fn test_apostrophe_escaping() {
        let value = |s: &str| CsvInput::Value(s.to_string());
        assert_eq!(CsvInput::classify("'=not a formula".into()), value("=not a formula"));
        assert_eq!(CsvInput::classify("''=x".into()), value("'=x"));
        assert_eq!(CsvInput::classify("'tis".into()), value("'tis"));
        assert_eq!(
            CsvInput::classify("=A1".into()),
            CsvInput::Formula("=A1".to_string())
        );
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_field_formula_injection() {
        assert_eq!(escape_csv_field("=1+1"), "'=1+1");
        assert_eq!(escape_csv_field("-2"), "'-2");
        assert_eq!(escape_csv_field("@cmd"), "'@cmd");
    }

    #[test]
    fn test_parse_csv_str_inputs() {
        let rows = parse_csv_str("2,\"hello, club\",'=literal\n=SUM(A1:A1),,").unwrap();
        let value = |s: &str| CsvInput::Value(s.to_string());
        assert_eq!(
            rows,
            vec![
                vec![value("2"), value("hello, club"), value("=literal")],
                vec![CsvInput::Formula("=SUM(A1:A1)".to_string()), value(""), value("")],
            ]
        );
    }

    #[test]
    fn test_display_file_uses_results() {
        let mut doc = Document::new(1, 3);
        doc.set_cell_from_input(CellRef::new(0, 0), "3").unwrap();
        doc.set_cell_from_input(CellRef::new(1, 0), "=A1*A1").unwrap();
        doc.set_cell_from_input(CellRef::new(2, 0), "=B9").unwrap();

        let path = temp_path("display");
        let _cleanup = Cleanup(path.clone());
        write_csv_display(&path, &doc).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "3,9,Fel i formel");
    }
}

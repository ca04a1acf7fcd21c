//! Integration tests for command mode (-c/--command flag)

use std::path::PathBuf;
use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_clubgrid"))
        // Tests must be deterministic and not depend on a user's config.toml.
        .arg("--no-config")
        .args(args)
        .env_remove("CLUBGRID_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn temp_file(name: &str, contents: Option<&str>) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "clubgrid_cli_{}_{}",
        std::process::id(),
        name
    ));
    if let Some(contents) = contents {
        std::fs::write(&path, contents).unwrap();
    }
    path
}

#[test]
fn test_product() {
    let (stdout, _, code) = run_command(&["-s", "A1=3", "-s", "B1=4", "-c", "=A1*B1"]);
    assert_eq!(stdout.trim(), "12");
    assert_eq!(code, 0);
}

#[test]
fn test_product_with_text_operand() {
    let (stdout, _, code) = run_command(&["-s", "A1=x", "-s", "B1=4", "-c", "=A1*B1"]);
    assert_eq!(stdout.trim(), "Fel i formel");
    assert_eq!(code, 0);
}

#[test]
fn test_sum_skips_text() {
    let (stdout, _, code) = run_command(&[
        "-s", "A1=2", "-s", "A2=abc", "-s", "A3=5", "-c", "=SUM(A1:A3)",
    ]);
    assert_eq!(stdout.trim(), "7");
    assert_eq!(code, 0);
}

#[test]
fn test_reversed_sum_is_zero() {
    let (stdout, _, _) = run_command(&["-s", "A1=2", "-s", "A3=5", "-c", "=sum(A3:A1)"]);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_literal_passes_through() {
    let (stdout, _, code) = run_command(&["-c", "hello"]);
    assert_eq!(stdout.trim(), "hello");
    assert_eq!(code, 0);
}

#[test]
fn test_reference_outside_table() {
    let (stdout, _, _) = run_command(&["--rows", "2", "--cols", "2", "-c", "=C1"]);
    assert_eq!(stdout.trim(), "Fel i formel");
}

#[test]
fn test_set_outside_table_fails() {
    let (_, stderr, code) = run_command(&["--rows", "2", "--cols", "2", "-s", "C1=1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("outside the table"), "{stderr}");
}

#[test]
fn test_unknown_option() {
    let (_, stderr, code) = run_command(&["--bogus"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown option: --bogus"));
}

#[test]
fn test_csv_file_with_formulas() {
    let path = temp_file("league.csv", Some("Team,Won,Points\nIFK,3,=B2*C1\n"));
    let (stdout, _, code) = run_command(&[path.to_str().unwrap(), "-s", "C1=3", "-c", "=C2"]);
    let _ = std::fs::remove_file(&path);
    // Direct references return the raw value, not another cell's result.
    assert_eq!(stdout.trim(), "");
    assert_eq!(code, 0);
}

#[test]
fn test_print_table() {
    let (stdout, _, code) = run_command(&[
        "--rows", "2", "--cols", "2", "-s", "A1=3", "-s", "B1=4", "-s", "B2==A1*B1",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "  | A | B \n1 | 3 | 4 \n2 |   | 12\n");
}

#[test]
fn test_export_markdown_and_csv() {
    let input = temp_file("fixtures.csv", Some("2,5,=SUM(A1:B1)\n"));
    let md = temp_file("fixtures.md", None);
    let csv = temp_file("fixtures_out.csv", None);

    let (stdout, _, code) = run_command(&[
        input.to_str().unwrap(),
        "--cols", "3",
        "-o", md.to_str().unwrap(),
        "--export-csv", csv.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Exported to"));
    let markdown = std::fs::read_to_string(&md).unwrap();
    assert!(markdown.contains("| 1 | 2 | 5 | 7 |"), "{markdown}");
    let exported = std::fs::read_to_string(&csv).unwrap();
    assert!(exported.starts_with("2,5,7\n"), "{exported}");

    // The input file is only read.
    assert_eq!(std::fs::read_to_string(&input).unwrap(), "2,5,=SUM(A1:B1)\n");

    for path in [input, md, csv] {
        let _ = std::fs::remove_file(&path);
    }
}

#[test]
fn test_sum_with_row_zero_corner() {
    let (stdout, _, code) = run_command(&[
        "-s", "A1=2", "-s", "A2=3", "-s", "A3=5", "-c", "=SUM(A0:A3)",
    ]);
    assert_eq!(stdout.trim(), "10");
    assert_eq!(code, 0);
}

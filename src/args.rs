//! Command-line parsing.

use crate::error::CliError;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: clubgrid [OPTIONS] [FILE]

Arguments:
  [FILE]                    Table to open (.csv)

Options:
  -c, --command <FORMULA>   Evaluate a formula against the table and print it
  -s, --set <CELL=INPUT>    Edit a cell before anything else (can be repeated)
  -o, --output <FILE>       Export to markdown file
      --export-csv <FILE>   Export evaluated values as CSV
      --rows <N>            Minimum number of rows
      --cols <N>            Minimum number of columns
      --config <FILE>       Load settings from this TOML file
      --no-config           Ignore the user config file
  -v, --verbose             Log debug messages to stderr
  -h, --help                Print help";

/// One `--set` edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub label: String,
    pub input: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub file: Option<PathBuf>,
    pub command: Option<String>,
    pub edits: Vec<Edit>,
    pub markdown_out: Option<PathBuf>,
    pub csv_out: Option<PathBuf>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub config: Option<PathBuf>,
    pub no_config: bool,
    pub verbose: bool,
}

impl Options {
    /// Whether anything besides printing the table was requested.
    pub fn has_action(&self) -> bool {
        self.command.is_some()
            || self.markdown_out.is_some()
            || self.csv_out.is_some()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Help,
    Run(Options),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Parsed, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "-c" | "--command" => {
                opts.command = Some(args.next().ok_or(CliError::MissingValue("--command"))?);
            }
            "-s" | "--set" => {
                let spec = args.next().ok_or(CliError::MissingValue("--set"))?;
                opts.edits.push(parse_edit(&spec)?);
            }
            "-o" | "--output" => {
                let path = args.next().ok_or(CliError::MissingValue("--output"))?;
                opts.markdown_out = Some(PathBuf::from(path));
            }
            "--export-csv" => {
                let path = args.next().ok_or(CliError::MissingValue("--export-csv"))?;
                opts.csv_out = Some(PathBuf::from(path));
            }
            "--rows" => {
                let value = args.next().ok_or(CliError::MissingValue("--rows"))?;
                opts.rows = Some(parse_count("--rows", value)?);
            }
            "--cols" => {
                let value = args.next().ok_or(CliError::MissingValue("--cols"))?;
                opts.cols = Some(parse_count("--cols", value)?);
            }
            "--config" => {
                let path = args.next().ok_or(CliError::MissingValue("--config"))?;
                opts.config = Some(PathBuf::from(path));
            }
            "--no-config" => opts.no_config = true,
            "-v" | "--verbose" => opts.verbose = true,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(CliError::UnknownOption(arg));
            }
            _ => {
                if opts.file.is_none() {
                    opts.file = Some(PathBuf::from(arg));
                } else {
                    return Err(CliError::UnexpectedArgument(arg));
                }
            }
        }
    }

    Ok(Parsed::Run(opts))
}

fn parse_count(option: &'static str, value: String) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidNumber { option, value }),
    }
}

/// Split `A1=3` or `C1==A1*B1` at the first `=`.
fn parse_edit(spec: &str) -> Result<Edit, CliError> {
    let (label, input) = spec
        .split_once('=')
        .ok_or_else(|| CliError::InvalidSet(spec.to_string()))?;
    if label.trim().is_empty() {
        return Err(CliError::InvalidSet(spec.to_string()));
    }
    Ok(Edit {
        label: label.trim().to_string(),
        input: input.to_string(),
    })
}

//! Error types for the command-line front end

use thiserror::Error;

/// Problems with the command line itself
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("{option} expects a positive number, got {value:?}")]
    InvalidNumber { option: &'static str, value: String },

    #[error("--set expects CELL=INPUT, got {0:?}")]
    InvalidSet(String),
}

use std::fmt;

/// Text shown in place of a result when a formula cannot be evaluated.
pub const ERROR_SENTINEL: &str = "Fel i formel";

/// Result of evaluating a cell formula.
///
/// Evaluation never fails with an `Err`; problems surface as [`Value::Error`],
/// which displays as [`ERROR_SENTINEL`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Error,
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::format::format_value(self))
    }
}

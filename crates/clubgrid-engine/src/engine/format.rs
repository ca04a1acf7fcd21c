use super::value::{ERROR_SENTINEL, Value};

/// Format an evaluation result for display.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => format_number(*n),
        Value::Text(s) => s.clone(),
        Value::Error => ERROR_SENTINEL.to_string(),
    }
}

/// Format a number the way a browser prints it: integral values without a
/// fraction, exponent notation outside `1e-6..1e21`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // Also covers negative zero.
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let s = format!("{:e}", n);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        }
    } else {
        format!("{}", n)
    }
}

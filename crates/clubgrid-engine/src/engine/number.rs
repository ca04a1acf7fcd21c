//! Lenient numeric coercion of raw cell values.

/// Parse the leading decimal number of `text`, the way a browser's
/// `parseFloat` does.
///
/// Leading whitespace is skipped and anything after the longest numeric
/// prefix is ignored, so `" 12kg"` yields `12.0`. `Infinity` (optionally
/// signed) is accepted. Returns `None` when there is no numeric prefix.
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            end = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
    }

    #[test]
    fn test_prefix_and_whitespace() {
        assert_eq!(parse_number("  12kg"), Some(12.0));
        assert_eq!(parse_number("\t\n8"), Some(8.0));
        assert_eq!(parse_number("3e"), Some(3.0));
        assert_eq!(parse_number("3e+"), Some(3.0));
        assert_eq!(parse_number("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("infinity"), None);
    }

    #[test]
    fn test_not_numeric() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("e5"), None);
        assert_eq!(parse_number("\u{0663}"), None);
    }
}

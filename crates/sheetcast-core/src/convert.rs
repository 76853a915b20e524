//! Scalar conversion
//!
//! Pure functions turning a cell's text into one of the supported primitive
//! kinds. Integer parsing is base-flexible: a `0x`, `0o` or `0b` prefix
//! selects the radix, otherwise the text is parsed as decimal.

use std::num::{ParseFloatError, ParseIntError};

/// Convert cell text to a boolean.
///
/// `"true"` and `"1"` are true; every other text (including empty) is false.
/// Never fails.
pub fn parse_bool(text: &str) -> bool {
    text == "true" || text == "1"
}

/// Parse cell text as a signed integer, honoring base prefixes.
pub fn parse_int(text: &str) -> Result<i64, ParseIntError> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, digits) = strip_radix(unsigned);
    let magnitude = i64::from_str_radix(digits, radix)?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse cell text as an unsigned integer, honoring base prefixes.
///
/// A leading `-` is rejected as a parse failure.
pub fn parse_uint(text: &str) -> Result<u64, ParseIntError> {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let (radix, digits) = strip_radix(unsigned);

    u64::from_str_radix(digits, radix)
}

/// Parse cell text as a decimal or scientific float.
pub fn parse_float(text: &str) -> Result<f64, ParseFloatError> {
    text.parse()
}

/// Split a base prefix off an unsigned integer literal
fn strip_radix(text: &str) -> (u32, &str) {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (16, digits)
    } else if let Some(digits) = text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
        (8, digits)
    } else if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (2, digits)
    } else {
        (10, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("1"));

        assert!(!parse_bool(""));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("no"));
        assert!(!parse_bool("TRUE"));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn test_parse_int_decimal() {
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("-42").unwrap(), -42);
        assert_eq!(parse_int("+42").unwrap(), 42);
        assert_eq!(parse_int("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_int_base_prefixes() {
        assert_eq!(parse_int("0x2A").unwrap(), 42);
        assert_eq!(parse_int("0X2a").unwrap(), 42);
        assert_eq!(parse_int("0o52").unwrap(), 42);
        assert_eq!(parse_int("0b101010").unwrap(), 42);
        assert_eq!(parse_int("-0x10").unwrap(), -16);
    }

    #[test]
    fn test_parse_int_failures() {
        assert!(parse_int("abc").is_err());
        assert!(parse_int("").is_err());
        assert!(parse_int("0x").is_err());
        assert!(parse_int("4.2").is_err());
    }

    #[test]
    fn test_parse_uint() {
        assert_eq!(parse_uint("42").unwrap(), 42);
        assert_eq!(parse_uint("0x2A").unwrap(), 42);
        assert_eq!(parse_uint("+7").unwrap(), 7);
    }

    #[test]
    fn test_parse_uint_rejects_negative() {
        assert!(parse_uint("-1").is_err());
        assert!(parse_uint("-0x10").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("3.14").unwrap(), 3.14);
        assert_eq!(parse_float("-2.5e3").unwrap(), -2500.0);
        assert_eq!(parse_float("42").unwrap(), 42.0);

        assert!(parse_float("abc").is_err());
        assert!(parse_float("").is_err());
    }
}

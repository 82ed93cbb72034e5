//! Lenient string and value coercions.

use once_cell::sync::Lazy;
use regex::Regex;

use kitbag_values::Value;

static TRUE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(true|t|yes|y)$").expect("valid literal pattern"));
static FALSE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(false|f|no|n)$").expect("valid literal pattern"));

/// Read a boolean out of loose text: yes/no words, true/false words,
/// single letters, or anything numeric (nonzero is true). `None` when the
/// text has no boolean reading; callers supply their own default via
/// `unwrap_or`.
///
/// # Examples
///
/// ```
/// use kitbag_util::coerce::to_boolean;
///
/// assert_eq!(to_boolean("t"), Some(true));
/// assert_eq!(to_boolean("YES"), Some(true));
/// assert_eq!(to_boolean("False"), Some(false));
/// assert_eq!(to_boolean("0"), Some(false));
/// assert_eq!(to_boolean("?"), None);
/// assert!(to_boolean("?").unwrap_or(true));
/// ```
pub fn to_boolean(s: &str) -> Option<bool> {
    let trimmed = s.trim();
    if TRUE_WORDS.is_match(trimmed) {
        return Some(true);
    }
    if FALSE_WORDS.is_match(trimmed) {
        return Some(false);
    }
    to_number(trimmed).map(|n| n != 0.0)
}

/// Parse a decimal number. `None` for empty or unparseable text.
pub fn to_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Like [`to_number`], but collapses missing and non-finite readings to 0.
pub fn to_valid_number(s: &str) -> f64 {
    to_number(s).filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Parse a decimal integer. `None` for unparseable text.
pub fn to_int(s: &str) -> Option<i64> {
    to_int_radix(s, 10)
}

/// Parse an integer in the given radix (2–36).
///
/// # Examples
///
/// ```
/// use kitbag_util::coerce::{to_int, to_int_radix};
///
/// assert_eq!(to_int("-47"), Some(-47));
/// assert_eq!(to_int("foo"), None);
/// assert_eq!(to_int_radix("1011", 2), Some(11));
/// assert_eq!(to_int_radix("cafebabe", 16), Some(3_405_691_582));
/// assert_eq!(to_int_radix("cafegabe", 16), None);
/// assert_eq!(to_int_radix("g", 30), Some(16));
/// ```
pub fn to_int_radix(s: &str, radix: u32) -> Option<i64> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    i64::from_str_radix(s.trim(), radix).ok()
}

/// Like [`to_int`], but truncates fractional text and collapses missing
/// readings to 0.
pub fn to_valid_int(s: &str) -> i64 {
    match to_int(s) {
        Some(n) => n,
        None => to_number(s)
            .filter(|n| n.is_finite())
            .map(|n| n.trunc() as i64)
            .unwrap_or(0),
    }
}

/// The numeric reading of a value: numbers as themselves, booleans as 0/1,
/// `Null` as 0, strings and big integers parsed, dates as epoch
/// milliseconds. `None` for everything else.
pub fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Str(s) => to_number(s),
        Value::BigInt(n) => n.to_string().parse::<f64>().ok(),
        Value::Date(date) => Some(date.time() as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_boolean() {
        assert_eq!(to_boolean("t"), Some(true));
        assert_eq!(to_boolean("YES"), Some(true));
        assert_eq!(to_boolean("False"), Some(false));
        assert_eq!(to_boolean("n"), Some(false));
        assert_eq!(to_boolean("?"), None);
        assert!(to_boolean("?").unwrap_or(true));
        assert!(!to_boolean("?").unwrap_or(false));
        assert_eq!(to_boolean(""), None);
        assert_eq!(to_boolean("3"), Some(true));
        assert_eq!(to_boolean("0"), Some(false));
        assert_eq!(to_boolean("-1.5"), Some(true));
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int("-47"), Some(-47));
        assert_eq!(to_int("foo"), None);
        assert_eq!(to_int("foo").unwrap_or(99), 99);
        assert_eq!(to_int_radix("1011", 2), Some(11));
        assert_eq!(to_int_radix("cafebabe", 16), Some(3_405_691_582));
        assert_eq!(to_int_radix("cafegabe", 16), None);
        assert_eq!(to_int_radix("10", 1), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number("3.4"), Some(3.4));
        assert_eq!(to_number("!3.4"), None);
        assert_eq!(to_number("!3.4").unwrap_or(7.0), 7.0);
        assert_eq!(to_number("  12  "), Some(12.0));
        assert_eq!(to_number(""), None);
    }

    #[test]
    fn test_valid_variants() {
        assert_eq!(to_valid_number("3.4"), 3.4);
        assert_eq!(to_valid_number("!3.4"), 0.0);
        assert_eq!(to_valid_number("inf"), 0.0);
        assert_eq!(to_valid_int("123"), 123);
        assert_eq!(to_valid_int("123.4"), 123);
        assert_eq!(to_valid_int("!123"), 0);
    }

    #[test]
    fn test_value_to_number() {
        assert_eq!(value_to_number(&Value::number(3.4)), Some(3.4));
        assert_eq!(value_to_number(&Value::str("5")), Some(5.0));
        assert_eq!(value_to_number(&Value::Bool(true)), Some(1.0));
        assert_eq!(value_to_number(&Value::Null), Some(0.0));
        assert_eq!(value_to_number(&Value::Undefined), None);
        assert_eq!(value_to_number(&Value::bigint(42)), Some(42.0));
        assert_eq!(value_to_number(&Value::date(7_000)), Some(7_000.0));
        assert_eq!(value_to_number(&Value::record()), None);
    }
}

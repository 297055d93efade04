//! Lenient readers for numeric metrics stored as loosely-typed JSON
//!
//! Counts and rates arrive as JSON numbers or as display strings such as
//! `"245K"`, `"1.2M"`, `"4.2%"` or `"12,400"`. Anything unreadable is `None`.

use serde_json::Value;

/// Parse a quantity with optional `k`/`m` suffix, `%` sign and thousands separators
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '%')
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        return None;
    }

    let (digits, multiplier) = match cleaned.chars().last() {
        Some('k') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('m') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    // f64's parser also accepts "inf" and "nan"; a metric must be plain digits
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    digits
        .parse::<f64>()
        .ok()
        .map(|n| n * multiplier)
        .filter(|n| n.is_finite())
}

/// Read a non-negative decimal from a JSON number or numeric string
pub fn decimal_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite() && *n >= 0.0),
        Value::String(s) => parse_quantity(s),
        _ => None,
    }
}

/// Read a whole count from a JSON number or numeric string
pub fn count_from_value(value: &Value) -> Option<u64> {
    decimal_from_value(value).map(|n| n.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_quantity_suffixes() {
        assert_eq!(parse_quantity("245K"), Some(245_000.0));
        assert_eq!(parse_quantity("1.2M"), Some(1_200_000.0));
        assert_eq!(parse_quantity("12,400"), Some(12_400.0));
        assert_eq!(parse_quantity("4.2%"), Some(4.2));
        assert_eq!(parse_quantity(" 10 k "), Some(10_000.0));
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("k"), None);
        assert_eq!(parse_quantity("lots"), None);
        assert_eq!(parse_quantity("inf"), None);
        assert_eq!(parse_quantity("-5"), None);
        assert_eq!(parse_quantity("1.2.3"), None);
    }

    #[test]
    fn test_values_from_json() {
        assert_eq!(count_from_value(&json!(50000)), Some(50_000));
        assert_eq!(count_from_value(&json!("580K")), Some(580_000));
        assert_eq!(count_from_value(&json!(null)), None);
        assert_eq!(count_from_value(&json!(-3)), None);
        assert_eq!(decimal_from_value(&json!(6.8)), Some(6.8));
        assert_eq!(decimal_from_value(&json!({"value": 1})), None);
    }
}

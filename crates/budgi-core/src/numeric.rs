//! Numeric coercion for loosely-typed store values
//!
//! The hosted store hands back amounts as numbers, numeric strings, or
//! nothing at all depending on which layer wrote the row. Everything funnels
//! through [`to_number`] so downstream arithmetic never sees NaN and never
//! panics.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value to a finite f64.
///
/// Finite numbers pass through. Strings are trimmed and their longest
/// numeric prefix parsed, so `"12abc"` coerces to 12 the way the upstream
/// parseFloat-based layers already treat it. Everything else (null,
/// booleans, arrays, objects, unparseable or non-finite values) collapses
/// to 0.0. Total over all inputs.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_float_prefix(s.trim()),
        _ => 0.0,
    }
}

/// Longest numeric prefix of the string, 0.0 when none parses or the value
/// is not finite.
fn parse_float_prefix(s: &str) -> f64 {
    for end in (1..=s.len()).rev() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = s[..end].parse::<f64>() {
            return if value.is_finite() { value } else { 0.0 };
        }
    }
    0.0
}

/// Serde adapter applying [`to_number`] during deserialization.
///
/// Used on amount fields so the coercion happens exactly once, at the store
/// boundary, and the engine only ever sees finite numbers.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(to_number).unwrap_or(0.0))
}

/// Like [`lenient_f64`] but keeps absence distinct from zero.
pub fn lenient_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(to_number(&v)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(to_number(&json!(42.5)), 42.5);
        assert_eq!(to_number(&json!(0)), 0.0);
        assert_eq!(to_number(&json!(-7)), -7.0);
    }

    #[test]
    fn test_numeric_strings_parse() {
        assert_eq!(to_number(&json!("1500")), 1500.0);
        assert_eq!(to_number(&json!("  99.99 ")), 99.99);
        assert_eq!(to_number(&json!("-3.5")), -3.5);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(to_number(&json!("abc")), 0.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 0.0);
        assert_eq!(to_number(&json!(false)), 0.0);
        assert_eq!(to_number(&json!([1, 2])), 0.0);
        assert_eq!(to_number(&json!({"amount": 5})), 0.0);
        assert_eq!(to_number(&json!("NaN")), 0.0);
        assert_eq!(to_number(&json!("inf")), 0.0);
    }

    #[test]
    fn test_numeric_prefix_parses() {
        assert_eq!(to_number(&json!("12abc")), 12.0);
        assert_eq!(to_number(&json!("3.5 remaining")), 3.5);
        assert_eq!(to_number(&json!("-2x")), -2.0);
        // prefix must start numeric
        assert_eq!(to_number(&json!("e5")), 0.0);
        assert_eq!(to_number(&json!("px12")), 0.0);
    }

    #[test]
    fn test_totality_always_finite() {
        let inputs = vec![
            json!(1.25),
            json!("200"),
            json!("not a number"),
            json!(null),
            json!(true),
            json!([]),
            json!({}),
            json!("1e309"), // overflows to infinity when parsed
        ];
        for input in inputs {
            let n = to_number(&input);
            assert!(n.is_finite(), "expected finite for {:?}, got {}", input, n);
        }
    }

    #[test]
    fn test_lenient_field_deserialization() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "lenient_f64")]
            amount: f64,
        }

        let as_string: Row = serde_json::from_str(r#"{"amount": "250.5"}"#).unwrap();
        assert_eq!(as_string.amount, 250.5);

        let as_null: Row = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(as_null.amount, 0.0);

        let missing: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(missing.amount, 0.0);
    }

    #[test]
    fn test_lenient_opt_keeps_absence() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "lenient_f64_opt")]
            pct: Option<f64>,
        }

        let present: Row = serde_json::from_str(r#"{"pct": "15"}"#).unwrap();
        assert_eq!(present.pct, Some(15.0));

        let absent: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.pct, None);

        let null: Row = serde_json::from_str(r#"{"pct": null}"#).unwrap();
        assert_eq!(null.pct, None);
    }
}

//! Tolerant decoding of loosely typed JSON fields.
//!
//! The broker API behind the backend reports most figures as strings
//! (`"pnl": "-125.50"`, `"netqty": "25"`) while the option chain uses
//! real JSON numbers. Every numeric field goes through [`number`], which
//! mirrors JavaScript's `parseFloat`: the longest numeric prefix of a
//! string wins, anything else is treated as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` helper for `Option<f64>` fields.
pub fn f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

/// `deserialize_with` helper for text fields that may be null or numeric.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// `deserialize_with` helper for flags that may arrive as bools or 0/1.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().map(|x| x != 0.0).unwrap_or(false),
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Numeric view of a JSON value.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// `parseFloat`: skip leading whitespace, then take the longest prefix
/// that reads as a decimal number.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
        }
        mantissa_digits += end - frac_start;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

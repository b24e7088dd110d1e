//! opportunistic json coercion and text rendering of stored values

use serde_json::{Number, Value};

// largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// parse `raw` as json, falling back to the raw text when it is not valid json
pub fn coerce(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("keep {:?} as plain text, {}", raw, e);
            Value::String(raw.to_owned())
        }
    }
}

/// strings without quotes, everything else as json text
pub fn render_plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_owned(),
        Value::Number(n) => integral(n).map_or_else(|| n.to_string(), |i| i.to_string()),
        other => other.to_string(),
    }
}

/// an f64 with no fractional part prints as an integer, `1e3` is `1000`
fn integral(n: &Number) -> Option<i64> {
    let f = n.as_f64().filter(|_| n.is_f64())?;
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Some(f as i64)
    } else {
        None
    }
}

// applies the integral number rule inside arrays and objects too
fn normalized(value: &Value) -> Value {
    match value {
        Value::Number(n) => integral(n).map_or_else(|| value.clone(), Value::from),
        Value::Array(items) => Value::Array(items.iter().map(normalized).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.to_owned(), normalized(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// pretty json (two-space indent) for composites and null, plain text otherwise
pub fn render_pretty(value: &Value) -> String {
    if is_structured(value) {
        let value = normalized(value);
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    } else {
        render_plain(value)
    }
}

/// compact json for composites and null, plain text otherwise
pub fn render_compact(value: &Value) -> String {
    if is_structured(value) {
        normalized(value).to_string()
    } else {
        render_plain(value)
    }
}

// null renders like a composite, so it never prints as an empty line
fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_) | Value::Null)
}

//! Extract-or-default helpers over untyped JSON.
//!
//! Every helper answers `None` (or the zero value) when a key is absent or holds the
//! wrong JSON type. Lookups never fail as a whole: each path is walked on its own.

use serde_json::Value;

/// Walks nested object keys, e.g. `&["main", "temp"]`.
pub(crate) fn field<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(payload, |value, key| value.as_object()?.get(*key))
}

/// First element of the array stored under `key`, e.g. `weather[0]`.
pub(crate) fn first_element<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.as_object()?.get(key)?.as_array()?.first()
}

pub(crate) fn opt_f64(payload: &Value, path: &[&str]) -> Option<f64> {
    field(payload, path).and_then(Value::as_f64)
}

pub(crate) fn opt_i64(payload: &Value, path: &[&str]) -> Option<i64> {
    let value = field(payload, path)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

pub(crate) fn opt_str<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a str> {
    field(payload, path).and_then(Value::as_str)
}

/// Nearest whole number, half away from zero. Absent readings are zero.
pub(crate) fn rounded(value: Option<f64>) -> i32 {
    value.map(|v| v.round() as i32).unwrap_or_default()
}

/// Truncated whole percent, clamped to 0..=100.
pub(crate) fn percent(value: Option<f64>) -> u8 {
    value
        .map(|v| v.trunc().clamp(0.0, 100.0) as u8)
        .unwrap_or_default()
}

pub(crate) fn text(value: Option<&str>) -> String {
    value.map(str::to_owned).unwrap_or_default()
}

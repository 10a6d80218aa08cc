//! Response-envelope normalization.
//!
//! The backend is inconsistent about wrapping: list endpoints return either a
//! bare array or `{"rides": [...]}`; record endpoints return either the bare
//! record or `{"ride": {...}}`.  The original client scattered `data.rides ||
//! data` fallbacks across every call site; these two functions are the only
//! place that tolerance lives now.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Deserialize a list body, unwrapping `{"<key>": [...]}` when present.
pub fn unwrap_list<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, ApiError> {
    let inner = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove(key).ok_or_else(|| {
            ApiError::Body(format!("expected an array or an object with `{key}`"))
        })?,
        other => {
            return Err(ApiError::Body(format!(
                "expected an array or an object, got {other}"
            )))
        }
    };

    serde_json::from_value(inner).map_err(|e| ApiError::Body(e.to_string()))
}

/// Deserialize a single-record body, unwrapping `{"<key>": {...}}` when
/// present.
pub fn unwrap_record<T: DeserializeOwned>(value: Value, key: &str) -> Result<T, ApiError> {
    let inner = match value {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    };

    serde_json::from_value(inner).map_err(|e| ApiError::Body(e.to_string()))
}

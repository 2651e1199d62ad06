//! Helpers for reading typed configuration values from a `serde_json::Value` object.
//!
//! Scalar helpers take a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! [`param_enum`] is the exception: enumerated settings map onto GL codes, so a
//! name outside the allowed set is reported instead of silently replaced.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::GlError;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts an `i64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_i64(params: &Value, name: &str, default: i64) -> i64 {
    params.get(name).and_then(Value::as_i64).unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts an enumerated value named by a string at `params[name]`.
///
/// Returns `default` when the key is missing or null. A non-string value is
/// a [`GlError::ParamTypeMismatch`]; an unknown name is a [`GlError::InvalidValue`].
pub fn param_enum<T: DeserializeOwned>(params: &Value, name: &str, default: T) -> Result<T, GlError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value @ Value::String(s)) => {
            serde_json::from_value(value.clone()).map_err(|_| GlError::InvalidValue {
                name: name.to_owned(),
                value: s.clone(),
            })
        }
        Some(other) => Err(GlError::ParamTypeMismatch {
            name: name.to_owned(),
            expected: "string".to_owned(),
            got: json_type_name(other).to_owned(),
        }),
    }
}

/// Short JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use crate::osc::DecodeError;
use serde_json::{Map, Value};

/// Typed accessors on a decoded JSON value that fail with a [`DecodeError::TypeMismatch`] naming `key`.
pub trait JsonValueExt: Sized {
    /// Returns the name of the JSON type of `self`, as used in error messages.
    fn json_type(&self) -> &'static str;

    fn into_string(self, key: &str) -> Result<String, DecodeError>;

    fn as_boolean(&self, key: &str) -> Result<bool, DecodeError>;

    /// Returns the number truncated towards zero.
    fn as_truncated(&self, key: &str) -> Result<i64, DecodeError>;

    fn into_array(self, key: &str) -> Result<Vec<Value>, DecodeError>;

    fn into_object(self, key: &str) -> Result<Map<String, Value>, DecodeError>;
}

impl JsonValueExt for Value {
    fn json_type(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }

    fn into_string(self, key: &str) -> Result<String, DecodeError> {
        match self {
            Value::String(value) => Ok(value),
            other => Err(mismatch(key, "a string", &other)),
        }
    }

    fn as_boolean(&self, key: &str) -> Result<bool, DecodeError> {
        self.as_bool().ok_or_else(|| mismatch(key, "a boolean", self))
    }

    fn as_truncated(&self, key: &str) -> Result<i64, DecodeError> {
        self.as_f64().map(|number| number.trunc() as i64).ok_or_else(|| mismatch(key, "a number", self))
    }

    fn into_array(self, key: &str) -> Result<Vec<Value>, DecodeError> {
        match self {
            Value::Array(values) => Ok(values),
            other => Err(mismatch(key, "an array", &other)),
        }
    }

    fn into_object(self, key: &str) -> Result<Map<String, Value>, DecodeError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(mismatch(key, "an object", &other)),
        }
    }
}

pub(crate) fn mismatch(key: &str, expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        key: key.to_owned(),
        expected,
        found: found.json_type(),
    }
}

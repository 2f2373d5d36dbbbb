//! Level-by-level decoding of the entries document.
//!
//! Locations use `$` for the document root and otherwise a dotted path with
//! array indexes, e.g. `systems[0].entry_groups[1].entries[2]`.

use crate::error::ReadError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode one JSON object into its raw shape.
///
/// Raw shapes only hold optional values, so the only failure is a value that
/// is not an object at all.
pub fn decode_object<T: DeserializeOwned>(value: Value, path: &str) -> Result<T, ReadError> {
    if !value.is_object() {
        return Err(ReadError::Schema {
            path: path.to_string(),
            reason: format!("expected a JSON object, found {}", type_name(&value)),
        });
    }

    serde_json::from_value(value).map_err(|e| ReadError::Schema {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Elements of an optional array value. Absent or `null` is an empty list.
pub fn elements(value: Option<Value>, path: &str) -> Result<Vec<Value>, ReadError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ReadError::Schema {
            path: path.to_string(),
            reason: format!("expected an array, found {}", type_name(&other)),
        }),
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

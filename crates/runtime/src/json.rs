//!
//! JSON interchange module.
//!
//! Converts between runtime values and JSON documents. Importing preserves
//! key order ; exporting goes through the enumerable view of containers.

use serde_json::{Map, Number, Value as JsonValue};
use thiserror::Error;

use crate::{
    gc::GcCell,
    values::{ListValue, RuntimeValue, StructValue, ValueType},
};

/// Error raised when exporting a value with no JSON counterpart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot represent a {typ} value in JSON")]
pub struct JsonExportError {
    pub typ: ValueType,
}

/// Convert a JSON document into a runtime value
pub fn json_to_value(json: &JsonValue) -> RuntimeValue {
    match json {
        JsonValue::Null => RuntimeValue::Null,

        JsonValue::Bool(bool) => RuntimeValue::Bool(*bool),

        JsonValue::Number(num) => match num.as_i64() {
            Some(int) => RuntimeValue::Int(int),
            None => RuntimeValue::Float(num.as_f64().unwrap_or(f64::NAN)),
        },

        JsonValue::String(string) => RuntimeValue::String(string.clone()),

        JsonValue::Array(items) => RuntimeValue::List(GcCell::new(ListValue::new(
            items.iter().map(json_to_value).collect(),
        ))),

        JsonValue::Object(entries) => {
            let mut value = StructValue::new();

            for (key, item) in entries {
                value.props.set(key.clone(), json_to_value(item));
            }

            RuntimeValue::Struct(GcCell::new(value))
        }
    }
}

/// Convert a runtime value into a JSON document
///
/// Boxed text exports as its text, and named properties of lists are dropped
/// as JSON arrays cannot carry them. Functions, symbols, custom values and
/// the `Void` sentinel have no JSON counterpart.
pub fn value_to_json(value: &RuntimeValue) -> Result<JsonValue, JsonExportError> {
    match value {
        RuntimeValue::Null => Ok(JsonValue::Null),

        RuntimeValue::Bool(bool) => Ok(JsonValue::Bool(*bool)),

        RuntimeValue::Int(int) => Ok(JsonValue::Number(Number::from(*int))),

        // Non-finite numbers have no JSON literal
        RuntimeValue::Float(float) => Ok(match Number::from_f64(*float) {
            Some(num) => JsonValue::Number(num),
            None => JsonValue::Null,
        }),

        RuntimeValue::String(string) => Ok(JsonValue::String(string.clone())),

        RuntimeValue::BoxedString(cell) => Ok(JsonValue::String(cell.read().text.clone())),

        RuntimeValue::List(cell) => {
            let list = cell.read();

            let mut items = Vec::with_capacity(list.items.len());

            for item in &list.items {
                items.push(value_to_json(item)?);
            }

            Ok(JsonValue::Array(items))
        }

        RuntimeValue::Struct(cell) => {
            let value = cell.read();

            let mut entries = Map::new();

            for (key, item) in value.props.enumerable_entries() {
                entries.insert(key.to_owned(), value_to_json(item)?);
            }

            Ok(JsonValue::Object(entries))
        }

        RuntimeValue::Void
        | RuntimeValue::Function(_)
        | RuntimeValue::Symbol(_)
        | RuntimeValue::Custom(_) => Err(JsonExportError {
            typ: value.compute_type(),
        }),
    }
}

//! Generic data model — [`ModelValue`] and JSON-to-model conversion.
//!
//! Input documents are parsed with serde_json's `preserve_order` and
//! `arbitrary_precision` features enabled, so object key order survives
//! parsing and numbers keep their exact decimal form (`1.10` stays `1.10`,
//! never a float approximation).

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::{io_err, CoreError};

/// Engine-agnostic representation of one input document.
///
/// An explicit tagged union over the JSON value space. Serializes back to the
/// structurally identical JSON shape (`#[serde(untagged)]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelValue {
    Null,
    Bool(bool),
    /// Exact decimal value. With `arbitrary_precision` the literal text of
    /// the source number is retained, so money-like and identifier-like
    /// fields render verbatim.
    Number(Number),
    String(String),
    Array(Vec<ModelValue>),
    /// Insertion-ordered mapping. Duplicate keys in the source document are
    /// last-value-wins, per standard JSON parse semantics.
    Object(IndexMap<String, ModelValue>),
}

impl ModelValue {
    /// True if this value is an object (the only permitted document root).
    pub fn is_object(&self) -> bool {
        matches!(self, ModelValue::Object(_))
    }
}

/// Convert a parsed JSON value tree into a [`ModelValue`].
///
/// Pure and total: the match is exhaustive over all six JSON kinds, so a
/// mishandled kind is a compile error rather than a runtime surprise.
/// Recursion depth equals the document's nesting depth; serde_json's own
/// recursion limit (128 levels by default) bounds what can reach this point.
pub fn convert(value: Value) -> ModelValue {
    match value {
        Value::Null => ModelValue::Null,
        Value::Bool(b) => ModelValue::Bool(b),
        Value::Number(n) => ModelValue::Number(n),
        Value::String(s) => ModelValue::String(s),
        Value::Array(items) => ModelValue::Array(items.into_iter().map(convert).collect()),
        Value::Object(entries) => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key, convert(value));
            }
            ModelValue::Object(map)
        }
    }
}

/// Read `path` as UTF-8, parse it as JSON, and convert to a [`ModelValue`].
///
/// The document root must be an object; anything else is rejected with
/// [`CoreError::NonObjectRoot`] before conversion.
pub fn load_document(path: &Path) -> Result<ModelValue, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| CoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let document = convert(value);
    if !document.is_object() {
        return Err(CoreError::NonObjectRoot {
            path: path.to_path_buf(),
        });
    }
    Ok(document)
}

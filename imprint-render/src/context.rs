//! Render context construction — bridge from [`ModelValue`] into Tera.
//!
//! Tera formats non-integer numbers through f64, which drops trailing zeros
//! and rounds high-precision decimals. Integers are carried as numbers (so
//! template arithmetic and comparisons keep working on them); every other
//! numeric literal is carried as its exact source text and renders verbatim.

use serde_json::{Map, Number};
use tera::{Context, Value};

use imprint_core::ModelValue;

use crate::error::RenderError;

/// Build the render context for one document.
///
/// The document root is an object, so this can only fail if a non-object
/// model reaches the engine.
pub(crate) fn build_context(model: &ModelValue) -> Result<Context, RenderError> {
    Context::from_value(context_value(model)).map_err(RenderError::Context)
}

fn context_value(model: &ModelValue) -> Value {
    match model {
        ModelValue::Null => Value::Null,
        ModelValue::Bool(b) => Value::Bool(*b),
        ModelValue::Number(n) => number_value(n),
        ModelValue::String(s) => Value::String(s.clone()),
        ModelValue::Array(items) => Value::Array(items.iter().map(context_value).collect()),
        ModelValue::Object(entries) => {
            let map: Map<String, Value> = entries
                .iter()
                .map(|(key, value)| (key.clone(), context_value(value)))
                .collect();
            Value::Object(map)
        }
    }
}

fn number_value(n: &Number) -> Value {
    // i64/u64 print losslessly through Tera. Decimals, exponents, and
    // integers beyond the u64 range would be float-rounded, so they are
    // carried as their literal text instead.
    if n.is_i64() || n.is_u64() {
        Value::Number(n.clone())
    } else {
        Value::String(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imprint_core::convert;

    fn model(json: &str) -> ModelValue {
        convert(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn integers_stay_numbers() {
        let value = context_value(&model(r#"{"n":42,"neg":-7}"#));
        assert_eq!(value["n"], Value::from(42));
        assert_eq!(value["neg"], Value::from(-7));
    }

    #[test]
    fn decimals_are_carried_as_literal_text() {
        let value = context_value(&model(r#"{"price":1.10,"tiny":2.5e-10}"#));
        assert_eq!(value["price"], Value::String("1.10".to_string()));
        assert_eq!(value["tiny"], Value::String("2.5e-10".to_string()));
    }

    #[test]
    fn oversized_integers_are_carried_as_literal_text() {
        let value = context_value(&model(r#"{"big":123456789012345678901234567890}"#));
        assert_eq!(
            value["big"],
            Value::String("123456789012345678901234567890".to_string())
        );
    }

    #[test]
    fn nested_containers_keep_shape_and_order() {
        let value = context_value(&model(r#"{"z":{"a":[1,true,null]},"a":"last"}"#));
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(map["z"]["a"], serde_json::json!([1, true, null]));
    }
}

#![forbid(unsafe_code)]
//! lazyq-json: turn JSON text into queries.
//!
//! ```text
//! from_json("[1,2,3]")         -> Query<Value> over 1, 2, 3
//! from_json("{\"a\":1}")       -> Query<Value> over ["a", 1]
//! from_json("42")              -> Query<Value> over 42
//! from_json_object("{\"a\":1}") -> Query<(String, Value)> over ("a", 1)
//! ```
//!
//! Malformed text fails with `Error::Json`, carrying serde_json's own error.

pub mod compare;

use serde::de::DeserializeOwned;
use serde_json::Value;

use lazyq_core::error::{Error, Result};
use lazyq_query::Query;

pub use compare::compare_values;

/// Arrays yield their elements, objects yield `[key, value]` pairs, anything
/// else yields itself once.
pub fn from_json(text: &str) -> Result<Query<Value>> {
    let parsed: Value = serde_json::from_str(text)?;
    let items = match parsed {
        Value::Array(elements) => elements,
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| Value::Array(vec![Value::String(key), value]))
            .collect(),
        primitive => vec![primitive],
    };
    Ok(Query::from_vec(items))
}

pub fn from_json_array(text: &str) -> Result<Query<Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(elements) => Ok(Query::from_vec(elements)),
        _ => Err(Error::type_conversion("JSON value is not an array")),
    }
}

/// Like [`from_json_array`], deserializing every element into `T` up front.
pub fn from_json_array_as<T>(text: &str) -> Result<Query<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let elements = match serde_json::from_str::<Value>(text)? {
        Value::Array(elements) => elements,
        _ => return Err(Error::type_conversion("JSON value is not an array")),
    };
    let typed = elements
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(Query::from_vec(typed))
}

/// Entry pairs of a JSON object, in document order. `null` and arrays are
/// rejected like any other non-object.
pub fn from_json_object(text: &str) -> Result<Query<(String, Value)>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(Query::from_map(map)),
        _ => Err(Error::type_conversion("JSON value is not an object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_generic_shapes() {
        assert_eq!(from_json("[1,2]").unwrap().to_vec(), vec![json!(1), json!(2)]);
        assert_eq!(
            from_json(r#"{"a":1,"b":"x"}"#).unwrap().to_vec(),
            vec![json!(["a", 1]), json!(["b", "x"])]
        );
        assert_eq!(from_json("true").unwrap().to_vec(), vec![json!(true)]);
        assert_eq!(from_json("null").unwrap().to_vec(), vec![Value::Null]);
    }

    #[test]
    fn test_array_only() {
        assert_eq!(
            from_json_array(r#"["x","y"]"#).unwrap().to_vec(),
            vec![json!("x"), json!("y")]
        );
        let err = from_json_array(r#"{"a":1}"#).err().unwrap();
        assert!(matches!(err, Error::TypeConversion(_)));
        assert_eq!(err.to_string(), "JSON value is not an array");
    }

    #[test]
    fn test_object_only_rejects_null_and_arrays() {
        for text in ["null", "[1]", "3", "\"s\""] {
            let err = from_json_object(text).err().unwrap();
            assert_eq!(err.to_string(), "JSON value is not an object");
        }
    }

    #[test]
    fn test_object_entries_keep_document_order() {
        let keys: Vec<String> = from_json_object(r#"{"z":1,"a":2,"m":3}"#)
            .unwrap()
            .select(|(k, _), _| k.clone())
            .to_vec();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_malformed_text_is_json_error() {
        let expected = serde_json::from_str::<Value>("{oops").unwrap_err().to_string();
        let err = from_json("{oops").err().unwrap();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_typed_array() {
        let q = from_json_array_as::<Point>(r#"[{"x":1,"y":2},{"x":3,"y":4}]"#).unwrap();
        assert_eq!(q.filter(|p, _| p.x > 1).to_vec(), vec![Point { x: 3, y: 4 }]);

        let err = from_json_array_as::<Point>(r#"[{"x":1}]"#).err().unwrap();
        assert!(matches!(err, Error::Json(_)));
    }
}

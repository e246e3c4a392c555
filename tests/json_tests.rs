//! JSON adapter tests

use lazyq::{compare_values, from_json, from_json_array, from_json_array_as, from_json_object, Error};
use serde::Deserialize;
use serde_json::{json, Value};

#[test]
fn test_object_filter_select() {
    let keys = from_json_object(r#"{"a":1,"b":2}"#)
        .unwrap()
        .filter(|(_, v), _| v.as_i64().is_some_and(|n| n > 1))
        .select(|(k, _), _| k.clone())
        .to_vec();
    assert_eq!(keys, vec!["b".to_string()]);
}

#[test]
fn test_array_round_trip() {
    let text = r#"[3, "two", 1.5, "zero"]"#;
    let items = from_json_array(text).unwrap().to_vec();
    let original: Value = serde_json::from_str(text).unwrap();
    assert_eq!(Value::Array(items), original);
}

#[test]
fn test_wrong_shapes() {
    let err = from_json_array(r#"{"a":1}"#).err().unwrap();
    assert!(matches!(err, Error::TypeConversion(_)));
    assert_eq!(err.to_string(), "JSON value is not an array");

    for text in ["null", "[]", "true"] {
        let err = from_json_object(text).err().unwrap();
        assert!(matches!(err, Error::TypeConversion(_)));
        assert_eq!(err.to_string(), "JSON value is not an object");
    }
}

#[test]
fn test_parse_error_passes_through() {
    let err = from_json_array("[1, 2").err().unwrap();
    let Error::Json(inner) = err else {
        panic!("expected a JSON parse error");
    };
    assert!(inner.is_eof());
}

#[test]
fn test_generic_entrypoint() {
    assert_eq!(from_json("[]").unwrap().count(), 0);
    assert_eq!(from_json("\"solo\"").unwrap().to_vec(), vec![json!("solo")]);
    let pairs = from_json(r#"{"k":[1]}"#).unwrap().to_vec();
    assert_eq!(pairs, vec![json!(["k", [1]])]);
}

#[test]
fn test_numeric_aggregates_over_json() {
    let q = from_json_array("[1, 2.5, 4]").unwrap();
    assert_eq!(q.sum().unwrap(), 7.5);
    assert_eq!(q.max().unwrap(), Some(4.0));

    let err = from_json_array(r#"[1, "x"]"#).unwrap().sum().unwrap_err();
    assert_eq!(err.to_string(), "sum: value must be a finite number.");
}

#[test]
fn test_sort_json_values_with_nulls_first() {
    let out = from_json_array(r#"[3, null, 1, 2]"#)
        .unwrap()
        .order_by_with(|v| v.clone(), compare_values)
        .to_vec();
    assert_eq!(out, vec![Value::Null, json!(1), json!(2), json!(3)]);
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Order {
    id: u32,
    total: f64,
}

#[test]
fn test_typed_elements() {
    let orders = from_json_array_as::<Order>(
        r#"[{"id":1,"total":9.5},{"id":2,"total":20.0},{"id":3,"total":0.5}]"#,
    )
    .unwrap();
    assert_eq!(orders.sum_by(|o| o.total).unwrap(), 30.0);
    let big: Vec<u32> = orders.filter(|o, _| o.total > 5.0).select(|o, _| o.id).to_vec();
    assert_eq!(big, vec![1, 2]);
}

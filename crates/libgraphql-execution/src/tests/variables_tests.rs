use crate::Value;
use crate::Variables;
use indexmap::IndexMap;
use std::sync::Arc;

#[test]
fn empty_is_a_shared_instance() {
    let a = Variables::empty();
    let b = Variables::empty();

    assert!(a.is_empty());
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn insert_replaces_existing_binding() {
    let mut variables = Variables::new();

    assert_eq!(variables.insert("id", 42), None);
    assert_eq!(variables.insert("id", 43), Some(Value::Int(42)));
    assert_eq!(variables.len(), 1);
    assert_eq!(variables.get("id"), Some(&Value::Int(43)));
}

#[test]
fn equality_ignores_insertion_order() {
    let a = Variables::from_iter([("first", 1), ("second", 2)]);
    let b = Variables::from_iter([("second", 2), ("first", 1)]);

    assert_eq!(a, b);
}

#[test]
fn keys_follow_insertion_order() {
    let variables = Variables::from_iter([("b", true), ("a", false)]);

    let keys: Vec<&String> = variables.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);

    let pairs: Vec<(&String, &Value)> = (&variables).into_iter().collect();
    assert_eq!(pairs[0].1, &Value::Bool(true));
}

#[test]
fn values_convert_from_rust_primitives() {
    assert_eq!(Value::from(7), Value::Int(7));
    assert_eq!(Value::from(7_i64), Value::Int(7));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("JEDI"), Value::String("JEDI".to_string()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(
        Value::from(vec![1, 2]),
        Value::List(vec![Value::Int(1), Value::Int(2)]),
    );
    assert!(Value::Null.is_null());
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from("x").as_i64(), None);
    assert_eq!(Value::from("x").as_str(), Some("x"));
}

#[test]
fn deserializes_from_json_request_variables() {
    let variables: Variables = serde_json::from_str(
        r#"{
            "id": 42,
            "ratio": 0.5,
            "episode": "JEDI",
            "draft": false,
            "after": null,
            "ids": [1, 2],
            "filter": { "name": "Luke" }
        }"#,
    )
    .unwrap();

    let mut filter = IndexMap::new();
    filter.insert("name".to_string(), Value::from("Luke"));

    assert_eq!(variables.len(), 7);
    assert_eq!(variables.get("id"), Some(&Value::Int(42)));
    assert_eq!(variables.get("ratio"), Some(&Value::Float(0.5)));
    assert_eq!(variables.get("episode"), Some(&Value::from("JEDI")));
    assert_eq!(variables.get("draft"), Some(&Value::Bool(false)));
    assert_eq!(variables.get("after"), Some(&Value::Null));
    assert_eq!(variables.get("ids"), Some(&Value::from(vec![1, 2])));
    assert_eq!(variables.get("filter"), Some(&Value::Object(filter)));
}

#[test]
fn serializes_to_plain_json_object() {
    let variables = Variables::from_iter([("id", Value::from(42)), ("after", Value::Null)]);

    let json = serde_json::to_string(&variables).unwrap();

    assert_eq!(json, r#"{"id":42,"after":null}"#);
}

#[test]
fn integers_above_i64_max_round_trip_unchanged() {
    let json = r#"{"id":18446744073709551615}"#;

    let variables: Variables = serde_json::from_str(json).unwrap();

    assert_eq!(variables.get("id"), Some(&Value::UInt(u64::MAX)));
    assert_eq!(variables.get("id").and_then(Value::as_u64), Some(u64::MAX));
    assert_eq!(serde_json::to_string(&variables).unwrap(), json);
}

#[test]
fn integers_within_i64_range_stay_signed() {
    let variables: Variables =
        serde_json::from_str(r#"{"max":9223372036854775807,"min":-9223372036854775808}"#)
            .unwrap();

    assert_eq!(variables.get("max"), Some(&Value::Int(i64::MAX)));
    assert_eq!(variables.get("min"), Some(&Value::Int(i64::MIN)));
    assert_eq!(Value::from(u64::MAX).as_i64(), None);
}

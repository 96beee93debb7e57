//! Serialization integration tests
//!
//! Maps serialize as plain JSON objects - no tagging, no wrapper struct -
//! and deserialization rebuilds the same typed entries in document order.

use pathmap::{PathMap, Value};

use crate::helpers::user_profile;

// ===== SERIALIZATION =====

#[test]
fn test_map_serializes_as_plain_json_object() {
    let map = PathMap::new()
        .assoc("name", "Alice")
        .assoc("age", 30)
        .assoc("active", true);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"name":"Alice","age":30,"active":true}"#);
}

#[test]
fn test_nested_maps_serialize_inline() {
    let map = PathMap::new()
        .assoc_path("server.host", "localhost")
        .unwrap()
        .assoc_path("server.port", 8080)
        .unwrap();

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"server":{"host":"localhost","port":8080}}"#);
}

#[test]
fn test_values_serialize_without_tags() {
    assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(serde_json::to_string(&Value::Int(-7)).unwrap(), "-7");
    assert_eq!(
        serde_json::to_string(&Value::Text("hi".to_string())).unwrap(),
        r#""hi""#
    );
    assert_eq!(
        serde_json::to_string(&Value::Map(PathMap::new().assoc("x", 1))).unwrap(),
        r#"{"x":1}"#
    );
}

#[test]
fn test_null_entries_serialize_as_json_null() {
    let map = PathMap::new().assoc("note", Value::Null).assoc("kept", 1);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"note":null,"kept":1}"#);

    // The null entry survives a round trip as a present key with no value
    let back: PathMap = serde_json::from_str(&json).unwrap();
    assert!(back.contains_key("note"));
    assert_eq!(back.get("note"), None);
}

#[test]
fn test_serialization_order_follows_insertion_order() {
    let forward = PathMap::new().assoc("a", 1).assoc("b", 2).assoc("c", 3);
    let backward = PathMap::new().assoc("c", 3).assoc("b", 2).assoc("a", 1);

    assert_eq!(
        serde_json::to_string(&forward).unwrap(),
        r#"{"a":1,"b":2,"c":3}"#
    );
    assert_eq!(
        serde_json::to_string(&backward).unwrap(),
        r#"{"c":3,"b":2,"a":1}"#
    );
}

// ===== DESERIALIZATION =====

#[test]
fn test_deserialize_builds_typed_entries() {
    let json = r#"{"name":"Alice","age":30,"active":true,"extra":null,"nested":{"x":1}}"#;

    let map: PathMap = serde_json::from_str(json).unwrap();

    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        vec!["name", "age", "active", "extra", "nested"]
    );
    assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
    assert_eq!(map.get_as::<i64>("age"), Some(30));
    assert_eq!(map.get_as::<bool>("active"), Some(true));
    assert!(map.contains_key("extra"));
    assert_eq!(map.get("extra"), None);
    assert_eq!(map.get_as::<i64>("nested.x"), Some(1));
}

#[test]
fn test_roundtrip_preserves_entries_and_order() {
    let original = user_profile();

    let json = serde_json::to_string(&original).unwrap();
    let back: PathMap = serde_json::from_str(&json).unwrap();

    assert_eq!(back, original);
    assert_eq!(
        back.keys().collect::<Vec<_>>(),
        original.keys().collect::<Vec<_>>()
    );
}

#[test]
fn test_deserialize_rejects_shapes_outside_the_value_model() {
    // No floating point variant
    assert!(serde_json::from_str::<PathMap>(r#"{"x":1.5}"#).is_err());
    // No array variant
    assert!(serde_json::from_str::<PathMap>(r#"{"x":[1,2]}"#).is_err());
    // Integers beyond i64 do not fit
    assert!(serde_json::from_str::<PathMap>(r#"{"x":9223372036854775808}"#).is_err());
    // The top level must be an object
    assert!(serde_json::from_str::<PathMap>("42").is_err());
}

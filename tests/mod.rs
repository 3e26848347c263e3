
#[cfg(test)]
mod tests {
  use serde_json_ordered::*;
  use serde::{Serialize, Deserialize};
  use serde_json::{json, Map, Value};
  use pretty_assertions::assert_eq;

  fn object(v: Value) -> Map<String, Value> {
    match v {
      Value::Object(m) => m,
      other => panic!("not an object: {}", other),
    }
  }

  fn with(order: &[&str], data: Value) -> OrderedMap {
    OrderedMap {
      order: order.iter().map(|s| s.to_string()).collect(),
      data: Some(object(data)),
    }
  }

  fn roundtrip(input: &str) -> String {
    let mut map = OrderedMap::new();
    map.decode(input.as_bytes()).unwrap();
    map.encode_to_string().unwrap()
  }

  #[test]
  fn test_roundtrip_keeps_order() {
    let orig = r#"{
      "name": "John",
      "age": 20,
      "zeta": {"nested": [1, 2.5, "x", true, null]},
      "alpha": false
    }"#;
    let mut map = OrderedMap::new();
    map.decode(orig.as_bytes()).unwrap();
    assert_eq!(map.order, vec!["name", "age", "zeta", "alpha"]);

    let out = map.encode().unwrap();
    assert_eq!(
      String::from_utf8(out.clone()).unwrap(),
      r#"{"name":"John","age":20,"zeta":{"nested":[1,2.5,"x",true,null]},"alpha":false}"#
    );

    // same content as the original, whatever the order
    let a: Value = serde_json::from_str(orig).unwrap();
    let b: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(a, b);

    // decoding the output again gives the same order
    let mut again = OrderedMap::new();
    again.decode(&out).unwrap();
    assert_eq!(map, again);
  }

  #[test]
  fn test_roundtrip_many_keys_reverse_order() {
    let keys: Vec<String> = (0..50).rev().map(|i| format!("k{:02}", i)).collect();
    let body: Vec<String> = keys.iter().enumerate().map(|(i, k)| format!("\"{}\":{}", k, i)).collect();
    let input = format!("{{{}}}", body.join(","));
    assert_eq!(roundtrip(&input), input);
  }

  #[test]
  fn test_null_idempotence() {
    assert_eq!(roundtrip("null"), "null");
    assert_eq!(roundtrip(" null "), "null");
  }

  #[test]
  fn test_empty_object_idempotence() {
    assert_eq!(roundtrip("{}"), "{}");
    assert_eq!(roundtrip("{ \n }"), "{}");
  }

  #[test]
  fn test_default_is_null() {
    let map = OrderedMap::default();
    assert!(map.is_null());
    assert_eq!(map.encode().unwrap(), b"null");
  }

  #[test]
  fn test_stale_order_entries_dropped() {
    let map = with(&["a", "c", "b"], json!({"a": 1, "b": 2}));
    assert_eq!(map.encode_to_string().unwrap(), r#"{"a":1,"b":2}"#);
  }

  #[test]
  fn test_foreign_keys_sorted_and_appended() {
    let map = with(&["b"], json!({"a": 1, "b": 2, "z": 3}));
    assert_eq!(map.encode_to_string().unwrap(), r#"{"b":2,"a":1,"z":3}"#);
  }

  #[test]
  fn test_foreign_keys_bytewise_sort() {
    let map = with(&["m"], json!({"m": 0, "é": 1, "Z": 2, "a": 3, "10": 4, "9": 5}));
    assert_eq!(map.encode_to_string().unwrap(), r#"{"m":0,"10":4,"9":5,"Z":2,"a":3,"é":1}"#);
  }

  #[test]
  #[cfg(not(feature = "preserve_order"))]
  fn test_empty_order_falls_back_to_default() {
    let mut map = OrderedMap::new();
    map.insert("y", json!(2));
    map.insert("x", json!(1));
    map.order.clear();
    assert_eq!(map.encode_to_string().unwrap(), r#"{"x":1,"y":2}"#);
    assert_eq!(map.encode_to_string().unwrap(), serde_json::to_string(map.data.as_ref().unwrap()).unwrap());
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["x", "y"]);
  }

  #[test]
  fn test_duplicate_keys_in_source() {
    let mut map = OrderedMap::new();
    map.decode(br#"{"a":1,"b":true,"a":2}"#).unwrap();
    assert_eq!(map.get("a"), Some(&json!(2)));
    assert_eq!(map.len(), 2);
    assert_eq!(map.order, vec!["a", "b", "a"]);
    assert_eq!(map.encode_to_string().unwrap(), r#"{"a":2,"b":true}"#);
  }

  #[test]
  fn test_non_object_rejected() {
    for input in ["[1,2,3]", "\"str\"", "42", "false"] {
      let mut map = OrderedMap::new();
      let err = map.decode(input.as_bytes()).unwrap_err();
      assert!(err.is_type(), "{}: {}", input, err);
      assert!(matches!(err, Error::Type(_)));
    }
  }

  #[test]
  fn test_malformed_rejected() {
    for input in [r#"{"a":}"#, r#"{"a":1"#, r#"{a:1}"#, "nul", "{} {}"] {
      let mut map = OrderedMap::new();
      let err = map.decode(input.as_bytes()).unwrap_err();
      assert!(err.is_syntax(), "{}: {}", input, err);
      assert!(std::error::Error::source(&err).is_some());
    }
  }

  #[test]
  #[cfg(feature = "arbitrary_precision")]
  fn test_number_text_preserved() {
    let input = r#"{"big":123456789012345678901234567890,"neg":-9223372036854775809,"pi":3.14159265358979323846264338327950288,"f":1.50}"#;
    assert_eq!(roundtrip(input), input);
  }

  #[test]
  fn test_u64_preserved() {
    let input = r#"{"max":18446744073709551615,"min":-9223372036854775808}"#;
    assert_eq!(roundtrip(input), input);
  }

  #[test]
  fn test_mutation_between_calls() {
    let mut map = OrderedMap::new();
    map.decode(br#"{"c":3,"a":1,"b":2}"#).unwrap();

    map.remove("a");
    map.insert("d", json!(4));
    map.order.swap(0, 1);
    assert_eq!(map.order, vec!["b", "c", "d"]);
    assert_eq!(map.encode_to_string().unwrap(), r#"{"b":2,"c":3,"d":4}"#);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c", "d"]);
  }

  #[test]
  fn test_collect_and_extend() {
    let mut map: OrderedMap = vec![
      ("second".to_string(), json!(2)),
      ("first".to_string(), json!(1)),
    ].into_iter().collect();
    map.extend(vec![("third".to_string(), json!(3))]);
    assert_eq!(map.encode_to_string().unwrap(), r#"{"second":2,"first":1,"third":3}"#);

    let empty: OrderedMap = Vec::<(String, Value)>::new().into_iter().collect();
    assert_eq!(empty.encode().unwrap(), b"{}");
  }

  #[test]
  fn test_struct_attr_nested() {
    #[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
    struct Outer {
      pub id: u32,
      pub inner: OrderedMap,
      pub maybe: OrderedMap,
    }

    let input = r#"{"id":7,"inner":{"z":1,"y":{"b":1,"a":2},"x":[]},"maybe":null}"#;
    let outer: Outer = serde_json::from_str(input).unwrap();
    assert_eq!(outer.inner.order, vec!["z", "y", "x"]);
    assert!(outer.maybe.is_null());

    let serialized = serde_json::to_string(&outer).unwrap();
    #[cfg(not(feature = "preserve_order"))]
    assert_eq!(serialized, r#"{"id":7,"inner":{"z":1,"y":{"a":2,"b":1},"x":[]},"maybe":null}"#);
    let deser: Outer = serde_json::from_str(&serialized).unwrap();
    assert_eq!(outer, deser);

    let bad = serde_json::from_str::<Outer>(r#"{"id":7,"inner":[1],"maybe":null}"#);
    assert!(bad.is_err());
  }

  #[test]
  fn test_from_value() {
    let map: OrderedMap = serde_json::from_value(json!({"k": "v"})).unwrap();
    assert_eq!(map.order, vec!["k"]);
    let null: OrderedMap = serde_json::from_value(Value::Null).unwrap();
    assert!(null.is_null());
    assert!(serde_json::from_value::<OrderedMap>(json!([1])).is_err());
  }

  #[test]
  fn test_pretty_output() {
    let map = with(&["b", "a"], json!({"a": [1, 2], "b": {}}));
    let pretty = String::from_utf8(map.encode_pretty().unwrap()).unwrap();
    assert_eq!(pretty, "{\n  \"b\": {},\n  \"a\": [\n    1,\n    2\n  ]\n}");
    assert_eq!(OrderedMap::new().encode_pretty().unwrap(), b"null");
  }

  #[test]
  fn test_parse_via_from_str() {
    let map: OrderedMap = r#"{"q":1,"p":2}"#.parse().unwrap();
    assert_eq!(map.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["q", "p"]);
    assert!("[]".parse::<OrderedMap>().unwrap_err().is_type());
  }
}

// Examples of how to use the library

use serde::{Serialize, Deserialize};
use serde_json::json;
use serde_json_ordered::*;

#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Request {
  pub method: String,
  pub headers: OrderedMap,
  pub body: OrderedMap,
}

fn main() {
  let original = br#"{"name": "John", "age": 20, "tags": ["a", "b"]}"#;

  // A plain serde_json::Value loses the order of the keys
  // Prints {"age":20,"name":"John","tags":["a","b"]}
  let plain: serde_json::Value = serde_json::from_slice(original).unwrap();
  println!("0 - {}", serde_json::to_string(&plain).unwrap());

  // OrderedMap keeps it
  // Prints {"name":"John","age":20,"tags":["a","b"]}
  let mut map = OrderedMap::new();
  map.decode(original).unwrap();
  println!("1 - {}", map.encode_to_string().unwrap());
  println!("2 - order: {:?}", map.order);

  // Clearing the order falls back to serde_json's own ordering
  let saved = std::mem::take(&mut map.order);
  println!("3 - {}", map.encode_to_string().unwrap());
  map.order = saved;

  // Keys missing from the order are appended, sorted
  map.data.as_mut().unwrap().insert("zip".to_string(), json!("75001"));
  map.data.as_mut().unwrap().insert("city".to_string(), json!("Paris"));
  println!("4 - {}", map.encode_to_string().unwrap());

  // Stale entries in the order are skipped
  map.order.insert(0, "gone".to_string());
  println!("5 - {}", map.encode_to_string().unwrap());

  // insert() and remove() keep the order list in step
  map.remove("tags");
  map.insert("email", json!("john@example.com"));
  println!("6 - {}", String::from_utf8(map.encode_pretty().unwrap()).unwrap());

  // Errors are sorted into syntax and type errors
  match map.decode(br#"{"a":}"#) {
    Ok(()) => { println!("7 - unexpected success"); }
    Err(e) => { println!("7 - Syntax error as expected: {}", e); }
  }
  match map.decode(b"[1, 2, 3]") {
    Ok(()) => { println!("8 - unexpected success"); }
    Err(e) => { println!("8 - Type error as expected: {}", e); }
  }

  // Nested in a struct, using the usual serde_json functions
  let req: Request = serde_json::from_str(r#"{
    "method": "POST",
    "headers": {"X-Trace": "1", "Content-Type": "application/json", "Accept": "*/*"},
    "body": {"query": "{ id }", "variables": null}
  }"#).unwrap();
  let serialized = serde_json::to_string(&req).unwrap();
  println!("9 - {}", serialized);
  let deser: Request = serde_json::from_str(&serialized).unwrap();
  assert_eq!(req, deser);
}

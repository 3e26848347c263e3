//! ##### Why? : a `serde_json::Map` forgets the order its keys were written in, so decoding and re-encoding a JSON object reshuffles it.
//! ##### What?: This crate pairs the map with an explicit list of keys, [OrderedMap](struct.OrderedMap.html), and uses that list when encoding.
//!
//! Call [.decode()](struct.OrderedMap.html#method.decode) to parse a JSON object, recording the order of its keys,
//! and [.encode()](struct.OrderedMap.html#method.encode) to write it back in that order.
//! Both `order` and `data` are public fields and can be edited between the two calls.
//! Keys missing from `order` are appended in sorted order; entries of `order` missing from `data` are skipped.
//!
//! `OrderedMap` also implements `Serialize` and `Deserialize`, so it can be nested in other serde types.
//! ```
//! use serde::{Serialize, Deserialize};
//! use serde_json::json;
//! use serde_json_ordered::*;
//!
//! fn try_main() -> Result<()> {
//!
//! // Keys come back in the order they were read
//! let mut map = OrderedMap::new();
//! map.decode(br#"{"name": "John", "age": 20}"#)?;
//! assert_eq!(map.encode_to_string()?, r#"{"name":"John","age":20}"#);
//!
//! // Keys left out of `order` go last, sorted
//! map.order = vec!["age".to_string()];
//! assert_eq!(map.encode_to_string()?, r#"{"age":20,"name":"John"}"#);
//!
//! // insert() appends new keys to `order`
//! map.insert("city", json!("Paris"));
//! assert_eq!(map.encode_to_string()?, r#"{"age":20,"city":"Paris","name":"John"}"#);
//!
//! // Nested in a struct, using the usual serde_json functions
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Envelope {
//!   id: u32,
//!   headers: OrderedMap,
//! }
//! let env: Envelope = serde_json::from_str(r#"{"id": 1, "headers": {"x-b": "1", "x-a": "2"}}"#).unwrap();
//! assert_eq!(serde_json::to_string(&env).unwrap(), r#"{"id":1,"headers":{"x-b":"1","x-a":"2"}}"#);
//! Ok(()) }
//! try_main().unwrap();
//! ```

// modules
mod error;
mod map_iter;
mod ordered_map;
mod ordered_map_to_json;
mod json_to_ordered_map;

// exports
pub use error::{Error, Result};
pub use ordered_map::OrderedMap;

use map_iter::MapIter;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer, SerializeMap};
use serde_json::{Map, Value};
use tracing::trace;

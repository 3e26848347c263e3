use super::*;
use serde::de::{DeserializeSeed, MapAccess, Visitor};
use std::fmt;
use std::str::FromStr;

impl OrderedMap {
  /// Parse `bytes` into self, recording the key order of the top-level object.
  ///
  /// - `null` sets `data` to `None` and leaves `order` alone
  /// - an object replaces both `order` and `data`; every occurrence of a repeated key is pushed to `order`, the last value wins in `data`
  /// - anything else fails with [Error::Type](enum.Error.html#variant.Type)
  ///
  /// Malformed input fails with [Error::Syntax](enum.Error.html#variant.Syntax).
  /// After an error the contents of self are unspecified and should be discarded.
  ///
  /// # Examples
  /// ```
  /// use serde_json_ordered::*;
  ///
  /// fn try_main() -> Result<()> {
  /// let mut map = OrderedMap::new();
  /// map.decode(br#"{"name": "John", "age": 20}"#)?;
  /// assert_eq!(map.order, vec!["name", "age"]);
  /// assert_eq!(map.encode()?, br#"{"name":"John","age":20}"#);
  ///
  /// assert!(map.decode(b"[1, 2, 3]").unwrap_err().is_type());
  /// Ok(()) }
  /// try_main().unwrap();
  /// ```
  pub fn decode(&mut self, bytes: &[u8]) -> Result<()> {
    match bytes {
      b"null" => {
        trace!("decoded null (fast path)");
        self.data = None;
        return Ok(());
      }
      b"{}" => {
        trace!("decoded empty object (fast path)");
        self.clear();
        return Ok(());
      }
      _ => {}
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    DecodeInto(self).deserialize(&mut de).map_err(Error::from_decode)?;
    de.end().map_err(Error::from_decode)?;
    trace!(keys = self.len(), order = self.order.len(), "decoded ordered map");
    Ok(())
  }

  /// Decode into a new container.
  pub fn from_slice(bytes: &[u8]) -> Result<Self> {
    let mut map = OrderedMap::new();
    map.decode(bytes)?;
    Ok(map)
  }
}

impl FromStr for OrderedMap {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    OrderedMap::from_slice(s.as_bytes())
  }
}

impl<'de> Deserialize<'de> for OrderedMap {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where
    D: Deserializer<'de>
  {
    let mut map = OrderedMap::new();
    DecodeInto(&mut map).deserialize(deserializer)?;
    Ok(map)
  }
}

/// Decodes in place, so that `null` can leave the existing order list untouched.
struct DecodeInto<'a>(&'a mut OrderedMap);

impl<'a,'de> DeserializeSeed<'de> for DecodeInto<'a> {
  type Value = ();

  fn deserialize<D>(self, deserializer: D) -> std::result::Result<(), D::Error> where
    D: Deserializer<'de>
  {
    // null goes to visit_none, anything else to visit_some which insists on a map
    deserializer.deserialize_option(self)
  }
}

impl<'a,'de> Visitor<'de> for DecodeInto<'a> {
  type Value = ();

  fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(formatter, "a JSON object or null")
  }

  fn visit_none<E>(self) -> std::result::Result<(), E> where
    E: serde::de::Error
  {
    self.0.data = None;
    Ok(())
  }

  fn visit_unit<E>(self) -> std::result::Result<(), E> where
    E: serde::de::Error
  {
    self.visit_none()
  }

  fn visit_some<D>(self, deserializer: D) -> std::result::Result<(), D::Error> where
    D: Deserializer<'de>
  {
    deserializer.deserialize_map(self)
  }

  fn visit_map<A>(self, access: A) -> std::result::Result<(), A::Error> where
    A: MapAccess<'de>
  {
    let target = self.0;
    target.order.clear();
    let mut data = Map::new();
    for entry in MapIter::<'de, A, String, Value>::new(access) {
      let (key, value) = entry?;
      target.order.push(key.clone());
      data.insert(key, value);
    }
    target.data = Some(data);
    Ok(())
  }
}

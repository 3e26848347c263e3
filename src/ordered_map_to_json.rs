use super::*;

impl OrderedMap {
  /// Serialize to JSON bytes, honoring `order`:
  /// - `data == None` gives `null`
  /// - an empty `data` gives `{}`
  /// - an empty `order` leaves the key order to serde_json (sorted, unless its `preserve_order` feature is on)
  /// - otherwise keys listed in `order` come first, in that sequence, followed by the remaining keys sorted byte-wise
  ///
  /// Entries of `order` that are not in `data` are ignored, and a key listed twice is written once, at its first position.
  /// **This does not modify self.** Nothing is returned on failure, there is no partial output.
  ///
  /// # Examples
  /// ```
  /// use serde_json_ordered::*;
  ///
  /// fn try_main() -> Result<()> {
  /// let mut map = OrderedMap::from_slice(br#"{"a":1,"b":2,"z":3}"#)?;
  /// map.order = vec!["b".to_string(), "missing".to_string()];
  ///
  /// // "missing" is skipped, "a" and "z" are appended in sorted order
  /// assert_eq!(map.encode()?, br#"{"b":2,"a":1,"z":3}"#);
  /// Ok(()) }
  /// try_main().unwrap();
  /// ```
  pub fn encode(&self) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(self).map_err(Error::Encoding)?;
    trace!(keys = self.len(), order = self.order.len(), bytes = bytes.len(), "encoded ordered map");
    Ok(bytes)
  }

  /// Same as [encode()](#method.encode), returning a `String`.
  pub fn encode_to_string(&self) -> Result<String> {
    serde_json::to_string(self).map_err(Error::Encoding)
  }

  /// Same key order as [encode()](#method.encode), with serde_json's pretty formatter.
  pub fn encode_pretty(&self) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(self).map_err(Error::Encoding)
  }
}

impl Serialize for OrderedMap {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
    S: Serializer
  {
    let data = match &self.data {
      Some(data) => data,
      None => return serializer.serialize_unit(),
    };
    if data.is_empty() {
      return serializer.serialize_map(Some(0))?.end();
    }
    if self.order.is_empty() {
      return data.serialize(serializer);
    }

    let mut ser_map = serializer.serialize_map(Some(data.len()))?;
    for (key, value) in self.iter() {
      ser_map.serialize_entry(key, value)?;
    }
    ser_map.end()
  }
}

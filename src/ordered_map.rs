use std::collections::HashSet;
use serde_json::{Map, Value};

/// A JSON object that remembers the order of its keys.
///
/// `data` holds the values, `order` says where each key goes when the map is encoded.
/// Both fields are public and may be edited freely between calls; the two do not need to agree:
/// - keys listed in `order` but missing from `data` are skipped when encoding
/// - keys in `data` but missing from `order` are written after the ordered ones, sorted
///
/// `data == None` (the default) stands for JSON `null`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use serde_json_ordered::*;
///
/// fn try_main() -> Result<()> {
/// let mut map = OrderedMap::new();
/// map.insert("zebra", json!(1));
/// map.insert("apple", json!(2));
/// assert_eq!(map.encode_to_string()?, r#"{"zebra":1,"apple":2}"#);
///
/// // the fields can also be edited directly
/// map.order = vec!["apple".to_string(), "zebra".to_string()];
/// assert_eq!(map.encode_to_string()?, r#"{"apple":2,"zebra":1}"#);
/// Ok(()) }
/// try_main().unwrap();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedMap {
  /// Order of keys
  pub order: Vec<String>,
  pub data: Option<Map<String, Value>>,
}

impl OrderedMap {
  /// An empty container, encoded as `null`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace the order list, keeping `data` as is.
  pub fn with_order<I, S>(mut self, order: I) -> Self where
  I: IntoIterator<Item=S>,
  S: Into<String>
  {
    self.order = order.into_iter().map(Into::into).collect();
    self
  }

  /// True when the container stands for JSON `null`.
  pub fn is_null(&self) -> bool {
    self.data.is_none()
  }

  pub fn len(&self) -> usize {
    self.data.as_ref().map_or(0, Map::len)
  }

  /// True for both `null` and `{}`.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.data.as_ref().map_or(false, |data| data.contains_key(key))
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.data.as_ref()?.get(key)
  }

  pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
    self.data.as_mut()?.get_mut(key)
  }

  /// Insert a value, returning the previous one.
  ///
  /// A key that is not yet in `order` is appended to it. A key that already is keeps its position,
  /// even when it was a stale entry. A `null` container becomes an object first.
  pub fn insert<K>(&mut self, key: K, value: Value) -> Option<Value> where
  K: Into<String>
  {
    let key = key.into();
    if !self.order.iter().any(|k| *k == key) {
      self.order.push(key.clone());
    }
    self.data.get_or_insert_with(Map::new).insert(key, value)
  }

  /// Remove a key from `data` and every occurrence of it from `order`.
  pub fn remove(&mut self, key: &str) -> Option<Value> {
    self.order.retain(|k| k != key);
    self.data.as_mut()?.remove(key)
  }

  /// Turn the container into an empty object `{}`.
  pub fn clear(&mut self) {
    self.order.clear();
    self.data = Some(Map::new());
  }

  /// Keys in the order [encode()](#method.encode) writes them.
  pub fn keys(&self) -> impl Iterator<Item=&str> + '_ {
    self.serialization_order().into_iter()
  }

  /// `(key, value)` pairs in the order [encode()](#method.encode) writes them.
  pub fn iter(&self) -> impl Iterator<Item=(&str, &Value)> + '_ {
    let data = self.data.as_ref();
    self.serialization_order().into_iter()
      .filter_map(move |k| data.and_then(|d| d.get(k)).map(|v| (k, v)))
  }

  /// Reconcile `order` with `data`: ordered keys first (stale and repeated entries dropped),
  /// then foreign keys sorted byte-wise.
  /// An empty `order` yields the map's own iteration order, matching the encoder's fallback.
  pub(crate) fn serialization_order(&self) -> Vec<&str> {
    let data = match &self.data {
      Some(data) => data,
      None => return Vec::new(),
    };
    if self.order.is_empty() {
      return data.keys().map(String::as_str).collect();
    }

    let mut seen = HashSet::with_capacity(self.order.len());
    let mut keys = Vec::with_capacity(data.len());
    for key in &self.order {
      if data.contains_key(key.as_str()) && seen.insert(key.as_str()) {
        keys.push(key.as_str());
      }
    }
    if keys.len() < data.len() {
      let mut foreign: Vec<&str> = data.keys()
        .map(String::as_str)
        .filter(|k| !seen.contains(k))
        .collect();
      foreign.sort_unstable();
      keys.extend(foreign);
    }
    keys
  }
}

impl Extend<(String, Value)> for OrderedMap {
  fn extend<T: IntoIterator<Item=(String, Value)>>(&mut self, iter: T) {
    for (k, v) in iter {
      self.insert(k, v);
    }
  }
}

/// Collects into an object (never `null`), keeping the iteration order.
impl FromIterator<(String, Value)> for OrderedMap {
  fn from_iter<T: IntoIterator<Item=(String, Value)>>(iter: T) -> Self {
    let mut map = OrderedMap {
      order: Vec::new(),
      data: Some(Map::new()),
    };
    map.extend(iter);
    map
  }
}

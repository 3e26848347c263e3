use std::marker::PhantomData;
use serde::de::{Deserialize, MapAccess};

/// Adapts a `MapAccess` into an iterator of `(K,V)` entries, in the order the deserializer yields them.
pub(crate) struct MapIter<'de,A,K,V> {
  pub access: A,
  marker: PhantomData<(&'de (),K,V)>,
}

impl<'de,A,K,V> MapIter<'de,A,K,V> {
  pub fn new(access: A) -> Self
  where
    A: MapAccess<'de>,
  {
    Self {
      access,
      marker: PhantomData,
    }
  }
}

impl<'de,A,K,V> Iterator for MapIter<'de,A,K,V>
where
  A: MapAccess<'de>,
  K: Deserialize<'de>,
  V: Deserialize<'de>,
{
  type Item = Result<(K,V), A::Error>;

  fn next(&mut self) -> Option<Self::Item> {
    self.access.next_entry().transpose()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match self.access.size_hint() {
      Some(size) => (size, Some(size)),
      None => (0, None),
    }
  }
}

// waypoint/src/core/answers.rs

//! The flat answer map a wizard accumulates while the user fills it in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form answers keyed by field name.
///
/// The engine only ever reads from an `AnswerSet`; the caller owns its
/// lifecycle. A field that was never answered reads as the empty string, so
/// `isEmpty` holds for it and `notIn` trivially succeeds against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the answer for `field`, or `""` if it is absent.
  pub fn get(&self, field: &str) -> &str {
    self.0.get(field).map(String::as_str).unwrap_or("")
  }

  pub fn contains(&self, field: &str) -> bool {
    self.0.contains_key(field)
  }

  /// Sets `field`, returning the previous value if there was one.
  pub fn set<K: Into<String>, V: Into<String>>(&mut self, field: K, value: V) -> Option<String> {
    self.0.insert(field.into(), value.into())
  }

  pub fn remove(&mut self, field: &str) -> Option<String> {
    self.0.remove(field)
  }

  /// Builder-style `set`, handy for fixtures.
  pub fn with<K: Into<String>, V: Into<String>>(mut self, field: K, value: V) -> Self {
    self.set(field, value);
    self
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn clear(&mut self) {
    self.0.clear();
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    AnswerSet(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for AnswerSet {
  fn from(pairs: [(K, V); N]) -> Self {
    pairs.into_iter().collect()
  }
}

impl From<std::collections::HashMap<String, String>> for AnswerSet {
  fn from(map: std::collections::HashMap<String, String>) -> Self {
    AnswerSet(map.into_iter().collect())
  }
}

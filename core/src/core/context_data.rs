// waypoint/src/core/context_data.rs
use super::answers::AnswerSet;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared, interior-mutable handle to a session's answers.
///
/// The host UI writes through it as the user types; navigation reads a
/// consistent view under the read lock. Guards are blocking and MUST NOT be
/// held across `.await` points or while calling back into the session.
#[derive(Debug, Default)]
pub struct SharedAnswers(Arc<RwLock<AnswerSet>>);

impl SharedAnswers {
  pub fn new(answers: AnswerSet) -> Self {
    SharedAnswers(Arc::new(RwLock::new(answers)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, AnswerSet> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, AnswerSet> {
    self.0.write()
  }

  /// Owned copy of the current answers, for handing off at submission time.
  pub fn snapshot(&self) -> AnswerSet {
    self.0.read().clone()
  }

  pub fn set<K: Into<String>, V: Into<String>>(&self, field: K, value: V) -> Option<String> {
    self.0.write().set(field, value)
  }

  pub fn remove(&self, field: &str) -> Option<String> {
    self.0.write().remove(field)
  }
}

impl Clone for SharedAnswers {
  fn clone(&self) -> Self {
    SharedAnswers(Arc::clone(&self.0))
  }
}

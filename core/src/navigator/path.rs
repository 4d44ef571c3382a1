// waypoint/src/navigator/path.rs

use crate::core::step::Step;
use std::collections::HashSet;

/// The ordered, non-skipped steps reachable from a start step under one
/// answer set. Computed eagerly by [`crate::Navigator::build_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPath<'a> {
  steps: Vec<&'a Step>,
}

impl<'a> StepPath<'a> {
  pub(crate) fn new(steps: Vec<&'a Step>) -> Self {
    Self { steps }
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &'a Step> + '_ {
    self.steps.iter().copied()
  }

  pub fn steps(&self) -> &[&'a Step] {
    &self.steps
  }

  pub fn ids(&self) -> Vec<&'a str> {
    self.steps.iter().map(|s| s.id.as_str()).collect()
  }

  pub fn first(&self) -> Option<&'a Step> {
    self.steps.first().copied()
  }

  pub fn last(&self) -> Option<&'a Step> {
    self.steps.last().copied()
  }

  pub fn position(&self, step_id: &str) -> Option<usize> {
    self.steps.iter().position(|s| s.id == step_id)
  }

  pub fn contains(&self, step_id: &str) -> bool {
    self.position(step_id).is_some()
  }

  /// The step shown before `step_id`, for back navigation.
  pub fn previous(&self, step_id: &str) -> Option<&'a Step> {
    match self.position(step_id)? {
      0 => None,
      idx => Some(self.steps[idx - 1]),
    }
  }

  pub fn next(&self, step_id: &str) -> Option<&'a Step> {
    let idx = self.position(step_id)?;
    self.steps.get(idx + 1).copied()
  }

  /// `(position + 1) / len`, or `0.0` when `step_id` is not on the path.
  pub fn progress_of(&self, step_id: &str) -> f64 {
    match self.position(step_id) {
      Some(idx) => (idx + 1) as f64 / self.steps.len() as f64,
      None => 0.0,
    }
  }

  /// Distinct group ids in the order the path enters them.
  pub fn groups(&self) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    self
      .steps
      .iter()
      .map(|s| s.group.as_str())
      .filter(|g| seen.insert(*g))
      .collect()
  }
}

impl<'a> IntoIterator for StepPath<'a> {
  type Item = &'a Step;
  type IntoIter = std::vec::IntoIter<&'a Step>;

  fn into_iter(self) -> Self::IntoIter {
    self.steps.into_iter()
  }
}

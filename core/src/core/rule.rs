// waypoint/src/core/rule.rs

use super::condition::Condition;
use super::step::StepId;
use serde::{Deserialize, Serialize};

/// A prioritized redirect attached to a step.
///
/// All `conditions` must hold for the rule to fire. A rule without
/// conditions never fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRule {
  #[serde(default)]
  pub conditions: Vec<Condition>,
  /// Absent target: the rule matches but routes nowhere (terminal).
  #[serde(default)]
  pub target: Option<StepId>,
  /// Higher fires first. Equal priorities keep authoring order.
  #[serde(default)]
  pub priority: i32,
  /// Diagnostic only.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub description: String,
}

impl RoutingRule {
  pub fn new<T: Into<StepId>>(target: T, priority: i32) -> Self {
    Self {
      conditions: Vec::new(),
      target: Some(target.into()),
      priority,
      description: String::new(),
    }
  }

  pub fn when(mut self, condition: Condition) -> Self {
    self.conditions.push(condition);
    self
  }

  pub fn described<D: Into<String>>(mut self, description: D) -> Self {
    self.description = description.into();
    self
  }
}

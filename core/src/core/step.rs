// waypoint/src/core/step.rs

//! Defines the structure for a single wizard step and the display groups
//! steps belong to.

use super::condition::Condition;
use super::rule::RoutingRule;
use serde::{Deserialize, Serialize};

/// Stable step identifier (a slug such as `"leather-type"`).
pub type StepId = String;

/// A display-only cluster of steps sharing a progress-bar segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepGroup {
  pub id: String,
  pub display_order: i32,
  #[serde(default)]
  pub label: String,
}

impl StepGroup {
  pub fn new<I: Into<String>, L: Into<String>>(id: I, display_order: i32, label: L) -> Self {
    Self {
      id: id.into(),
      display_order,
      label: label.into(),
    }
  }
}

/// Definition of a wizard step: where it sits, whether it may be skipped,
/// and where it routes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
  pub id: StepId,
  pub group: String,
  /// Ordering hint inside the group. Never consulted for routing.
  #[serde(default)]
  pub default_order: i32,
  /// Names the UI component that renders the step. Opaque to the engine.
  #[serde(default)]
  pub component: String,
  #[serde(default)]
  pub is_optional: bool,
  // Honored only when `is_optional` is set; any one of them skips the step.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub skip_conditions: Vec<Condition>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub rules: Vec<RoutingRule>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default_next_step: Option<StepId>,
}

impl Step {
  pub fn new<I: Into<StepId>, G: Into<String>>(id: I, group: G) -> Self {
    Self {
      id: id.into(),
      group: group.into(),
      default_order: 0,
      component: String::new(),
      is_optional: false,
      skip_conditions: Vec::new(),
      rules: Vec::new(),
      default_next_step: None,
    }
  }

  pub fn ordered(mut self, default_order: i32) -> Self {
    self.default_order = default_order;
    self
  }

  pub fn component<C: Into<String>>(mut self, component: C) -> Self {
    self.component = component.into();
    self
  }

  /// Marks the step optional and adds a skip condition.
  pub fn skip_when(mut self, condition: Condition) -> Self {
    self.is_optional = true;
    self.skip_conditions.push(condition);
    self
  }

  pub fn optional(mut self, is_optional: bool) -> Self {
    self.is_optional = is_optional;
    self
  }

  pub fn rule(mut self, rule: RoutingRule) -> Self {
    self.rules.push(rule);
    self
  }

  pub fn then<N: Into<StepId>>(mut self, next: N) -> Self {
    self.default_next_step = Some(next.into());
    self
  }

  /// True when the step has no outgoing references at all.
  pub fn is_terminal(&self) -> bool {
    self.default_next_step.is_none() && self.rules.iter().all(|r| r.target.is_none())
  }
}

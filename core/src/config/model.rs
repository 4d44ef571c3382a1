// waypoint/src/config/model.rs

//! Defines `WizardConfig`, the immutable, indexed set of groups and steps a
//! `Navigator` routes over, and `WizardDocument`, its serialized shape.

use crate::core::step::{Step, StepGroup, StepId};
use crate::error::{WaypointError, WaypointResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{event, instrument, Level};

/// The on-the-wire shape of a wizard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardDocument {
  #[serde(default)]
  pub groups: Vec<StepGroup>,
  #[serde(default)]
  pub steps: Vec<Step>,
}

/// Groups and steps indexed for O(1) lookup.
///
/// Construction only rejects duplicate identifiers. Next-step references are
/// not checked here: a partially published configuration must still load,
/// and dangling references are reported when routing actually hits them (or
/// up front via [`WizardConfig::integrity_report`]).
#[derive(Debug, Clone)]
pub struct WizardConfig {
  /// Sorted by display order; ties keep authoring order.
  groups: Vec<StepGroup>,
  /// Authoring order.
  steps: Vec<Step>,
  step_index: HashMap<StepId, usize>,
  group_index: HashMap<String, usize>,
  /// Group id -> step ids ordered by `default_order`, then authoring order.
  group_steps: HashMap<String, Vec<StepId>>,
}

impl WizardConfig {
  #[instrument(name = "WizardConfig::new", skip_all, fields(num_groups = groups.len(), num_steps = steps.len()), err(Display))]
  pub fn new(groups: Vec<StepGroup>, steps: Vec<Step>) -> WaypointResult<Self> {
    let mut group_index = HashMap::with_capacity(groups.len());
    let mut sorted_groups = groups;
    sorted_groups.sort_by_key(|g| g.display_order);
    for (idx, group) in sorted_groups.iter().enumerate() {
      if group_index.insert(group.id.clone(), idx).is_some() {
        return Err(WaypointError::DuplicateGroupId {
          group_id: group.id.clone(),
        });
      }
    }
    for pair in sorted_groups.windows(2) {
      if pair[0].display_order == pair[1].display_order {
        event!(
          Level::WARN,
          first = %pair[0].id,
          second = %pair[1].id,
          display_order = pair[0].display_order,
          "Step groups share a display order; keeping authoring order."
        );
      }
    }

    let mut step_index = HashMap::with_capacity(steps.len());
    for (idx, step) in steps.iter().enumerate() {
      if step_index.insert(step.id.clone(), idx).is_some() {
        return Err(WaypointError::DuplicateStepId {
          step_id: step.id.clone(),
        });
      }
    }

    let mut by_group: HashMap<String, Vec<(i32, usize)>> = HashMap::new();
    for (idx, step) in steps.iter().enumerate() {
      by_group
        .entry(step.group.clone())
        .or_default()
        .push((step.default_order, idx));
    }
    let group_steps = by_group
      .into_iter()
      .map(|(group_id, mut members)| {
        members.sort();
        let ids = members.into_iter().map(|(_, idx)| steps[idx].id.clone()).collect();
        (group_id, ids)
      })
      .collect();

    event!(Level::DEBUG, "Wizard configuration indexed.");
    Ok(Self {
      groups: sorted_groups,
      steps,
      step_index,
      group_index,
      group_steps,
    })
  }

  pub fn from_document(document: WizardDocument) -> WaypointResult<Self> {
    Self::new(document.groups, document.steps)
  }

  pub fn from_json_str(json: &str) -> WaypointResult<Self> {
    Self::from_document(serde_json::from_str(json)?)
  }

  pub fn from_json_slice(json: &[u8]) -> WaypointResult<Self> {
    Self::from_document(serde_json::from_slice(json)?)
  }

  pub fn from_json_value(value: serde_json::Value) -> WaypointResult<Self> {
    Self::from_document(serde_json::from_value(value)?)
  }

  /// Back to the serialized shape (groups in display order, steps in
  /// authoring order).
  pub fn to_document(&self) -> WizardDocument {
    WizardDocument {
      groups: self.groups.clone(),
      steps: self.steps.clone(),
    }
  }

  // --- Lookup ---

  pub fn step(&self, step_id: &str) -> Option<&Step> {
    self.step_index.get(step_id).map(|&idx| &self.steps[idx])
  }

  pub fn contains_step(&self, step_id: &str) -> bool {
    self.step_index.contains_key(step_id)
  }

  /// All steps in authoring order.
  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn group(&self, group_id: &str) -> Option<&StepGroup> {
    self.group_index.get(group_id).map(|&idx| &self.groups[idx])
  }

  /// All groups in display order.
  pub fn groups(&self) -> &[StepGroup] {
    &self.groups
  }

  /// Step ids of a group, ordered by their default-order hint. Empty for an
  /// unknown group.
  pub fn steps_in_group(&self, group_id: &str) -> &[StepId] {
    self.group_steps.get(group_id).map(Vec::as_slice).unwrap_or(&[])
  }

  /// The group a step belongs to, if both exist.
  pub fn group_of(&self, step_id: &str) -> Option<&StepGroup> {
    self.step(step_id).and_then(|step| self.group(&step.group))
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

impl TryFrom<WizardDocument> for WizardConfig {
  type Error = WaypointError;

  fn try_from(document: WizardDocument) -> Result<Self, Self::Error> {
    WizardConfig::from_document(document)
  }
}

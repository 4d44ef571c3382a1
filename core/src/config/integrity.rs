// waypoint/src/config/integrity.rs

//! Non-fatal configuration problems.
//!
//! These are emitted, never returned as errors: a content-authoring mistake
//! in one branch of the wizard must not take down navigation elsewhere.

use super::model::WizardConfig;
use crate::core::step::StepId;
use std::fmt;

/// Which outgoing reference of a step is affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
  /// Index into the step's rules as authored, not as sorted.
  Rule { index: usize, priority: i32 },
  DefaultNext,
}

impl fmt::Display for ReferenceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReferenceKind::Rule { index, priority } => write!(f, "rule #{} (priority {})", index, priority),
      ReferenceKind::DefaultNext => f.write_str("default next step"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityWarning {
  /// A rule target or default next step names a step that doesn't exist.
  DanglingReference {
    step_id: StepId,
    target: StepId,
    via: ReferenceKind,
  },
  UnrecognizedOperator {
    step_id: StepId,
    field: String,
    operator: String,
  },
  /// Skip resolution starting after `step_id` came back to a step it had
  /// already skipped; resolution ended as terminal.
  SkipCycle { step_id: StepId, revisited: StepId },
  /// Skip resolution starting after `step_id` passed more skipped steps than
  /// the navigator allows; resolution ended as terminal.
  SkipHopLimit { step_id: StepId, limit: usize },
  UnknownGroup { step_id: StepId, group: String },
  /// Skip conditions on a non-optional step. They are never evaluated.
  IgnoredSkipConditions { step_id: StepId, count: usize },
}

impl IntegrityWarning {
  /// The step whose configuration carries the problem.
  pub fn step_id(&self) -> &str {
    match self {
      IntegrityWarning::DanglingReference { step_id, .. }
      | IntegrityWarning::UnrecognizedOperator { step_id, .. }
      | IntegrityWarning::SkipCycle { step_id, .. }
      | IntegrityWarning::SkipHopLimit { step_id, .. }
      | IntegrityWarning::UnknownGroup { step_id, .. }
      | IntegrityWarning::IgnoredSkipConditions { step_id, .. } => step_id,
    }
  }
}

impl fmt::Display for IntegrityWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IntegrityWarning::DanglingReference { step_id, target, via } => {
        write!(f, "step '{}': {} points to missing step '{}'", step_id, via, target)
      }
      IntegrityWarning::UnrecognizedOperator {
        step_id,
        field,
        operator,
      } => write!(
        f,
        "step '{}': condition on field '{}' uses unrecognized operator '{}'",
        step_id, field, operator
      ),
      IntegrityWarning::SkipCycle { step_id, revisited } => write!(
        f,
        "step '{}': skip resolution looped back to '{}'",
        step_id, revisited
      ),
      IntegrityWarning::SkipHopLimit { step_id, limit } => write!(
        f,
        "step '{}': skip resolution passed more than {} skipped step(s)",
        step_id, limit
      ),
      IntegrityWarning::UnknownGroup { step_id, group } => {
        write!(f, "step '{}': group '{}' does not exist", step_id, group)
      }
      IntegrityWarning::IgnoredSkipConditions { step_id, count } => write!(
        f,
        "step '{}': {} skip condition(s) ignored because the step is not optional",
        step_id, count
      ),
    }
  }
}

impl WizardConfig {
  /// Audits the whole configuration without routing through it.
  ///
  /// Reports dangling references, unrecognized operators (rule and skip
  /// conditions), steps in unknown groups and skip conditions that will never
  /// be honored. Warnings come out in step authoring order.
  pub fn integrity_report(&self) -> Vec<IntegrityWarning> {
    let mut warnings = Vec::new();
    for step in self.steps() {
      if self.group(&step.group).is_none() {
        warnings.push(IntegrityWarning::UnknownGroup {
          step_id: step.id.clone(),
          group: step.group.clone(),
        });
      }
      if !step.is_optional && !step.skip_conditions.is_empty() {
        warnings.push(IntegrityWarning::IgnoredSkipConditions {
          step_id: step.id.clone(),
          count: step.skip_conditions.len(),
        });
      }

      let conditions = step
        .skip_conditions
        .iter()
        .chain(step.rules.iter().flat_map(|r| r.conditions.iter()));
      for condition in conditions {
        if !condition.operator.is_recognized() {
          warnings.push(IntegrityWarning::UnrecognizedOperator {
            step_id: step.id.clone(),
            field: condition.field.clone(),
            operator: condition.operator.to_string(),
          });
        }
      }

      for (index, rule) in step.rules.iter().enumerate() {
        if let Some(target) = &rule.target {
          if !self.contains_step(target) {
            warnings.push(IntegrityWarning::DanglingReference {
              step_id: step.id.clone(),
              target: target.clone(),
              via: ReferenceKind::Rule {
                index,
                priority: rule.priority,
              },
            });
          }
        }
      }
      if let Some(target) = &step.default_next_step {
        if !self.contains_step(target) {
          warnings.push(IntegrityWarning::DanglingReference {
            step_id: step.id.clone(),
            target: target.clone(),
            via: ReferenceKind::DefaultNext,
          });
        }
      }
    }
    warnings
  }
}

// waypoint/src/core/control.rs

//! Outcome of moving a wizard session forward or backward.

use super::step::StepId;

/// What the host application should do after a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
  /// Show `to` next. `from` is the step that was displayed.
  Moved { from: StepId, to: StepId },
  /// No step follows `at`; the wizard is complete.
  Finished { at: StepId },
  /// Back navigation requested on the first step of the path (or on a step
  /// the current answers no longer reach). Position is unchanged.
  AtStart { at: StepId },
}

impl Transition {
  /// The step the session is positioned at after the transition.
  pub fn current(&self) -> &str {
    match self {
      Transition::Moved { to, .. } => to,
      Transition::Finished { at } | Transition::AtStart { at } => at,
    }
  }

  pub fn is_finished(&self) -> bool {
    matches!(self, Transition::Finished { .. })
  }
}

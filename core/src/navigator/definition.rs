// waypoint/src/navigator/definition.rs

//! Contains the `Navigator` struct, its options, and the lookup helpers it
//! exposes over the configuration it owns.

use crate::config::integrity::IntegrityWarning;
use crate::config::model::WizardConfig;
use crate::core::answers::AnswerSet;
use crate::core::condition::Condition;
use crate::core::step::{Step, StepGroup, StepId};
use crate::error::{WaypointError, WaypointResult};
use crate::navigator::diagnostics::DiagnosticSink;
use std::sync::Arc;

/// Tuning knobs for a `Navigator`.
#[derive(Clone, Default)]
pub struct NavigatorOptions {
  /// Upper bound on consecutive skipped steps one resolution may pass
  /// through. `None` means the number of steps in the configuration.
  pub(crate) max_skip_hops: Option<usize>,
  pub(crate) sink: Option<DiagnosticSink>,
}

impl NavigatorOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn max_skip_hops(mut self, hops: usize) -> Self {
    self.max_skip_hops = Some(hops);
    self
  }

  /// Receives every integrity warning in addition to the WARN log line.
  pub fn on_warning(mut self, sink: impl Fn(&IntegrityWarning) + Send + Sync + 'static) -> Self {
    self.sink = Some(Arc::new(sink));
    self
  }
}

// DiagnosticSink doesn't implement Debug.
impl std::fmt::Debug for NavigatorOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NavigatorOptions")
      .field("max_skip_hops", &self.max_skip_hops)
      .field("sink_present", &self.sink.is_some())
      .finish()
  }
}

/// Routes over an immutable `WizardConfig`.
///
/// Every query is a pure function of the configuration, the answers passed
/// in and the step ids passed in. A `Navigator` is `Send + Sync` and can be
/// shared behind an `Arc` and queried from many threads at once.
#[derive(Debug)]
pub struct Navigator {
  pub(crate) config: WizardConfig,
  pub(crate) options: NavigatorOptions,
}

impl Navigator {
  pub fn new(config: WizardConfig) -> Self {
    Self::with_options(config, NavigatorOptions::default())
  }

  pub fn with_options(config: WizardConfig, options: NavigatorOptions) -> Self {
    Self { config, options }
  }

  pub fn config(&self) -> &WizardConfig {
    &self.config
  }

  pub fn step(&self, step_id: &str) -> Option<&Step> {
    self.config.step(step_id)
  }

  pub fn group_of(&self, step_id: &str) -> Option<&StepGroup> {
    self.config.group_of(step_id)
  }

  /// Like [`Navigator::step`] but fails with `UnknownStep`.
  pub fn lookup(&self, step_id: &str) -> WaypointResult<&Step> {
    self
      .config
      .step(step_id)
      .ok_or_else(|| WaypointError::unknown_step(step_id))
  }

  /// `should_skip(step, answers)`, reporting unrecognized operators through
  /// this navigator's diagnostics.
  pub fn should_skip(&self, step: &Step, answers: &AnswerSet) -> bool {
    crate::conditional::evaluate::should_skip_reporting(step, answers, &mut |condition: &Condition| {
      self.report_unrecognized(&step.id, condition)
    })
  }

  /// Step ids of a group in default order.
  pub fn steps_in_group(&self, group_id: &str) -> &[StepId] {
    self.config.steps_in_group(group_id)
  }

  pub(crate) fn max_skip_hops(&self) -> usize {
    self.options.max_skip_hops.unwrap_or(self.config.len())
  }
}

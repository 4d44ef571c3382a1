// waypoint/src/navigator/diagnostics.rs

//! Routing-time reporting of configuration integrity problems.
//!
//! Every warning goes to `tracing` at WARN. A `Navigator` can additionally be
//! given a `DiagnosticSink` so authoring tools and tests can observe the
//! warnings without scraping logs.

use crate::config::integrity::IntegrityWarning;
use crate::core::condition::Condition;
use crate::navigator::definition::Navigator;
use std::sync::Arc;
use tracing::{event, Level};

/// Callback receiving each integrity warning as routing encounters it.
///
/// Called synchronously from inside navigation. `WizardSession` holds no
/// locks while routing, so a sink may read or update the session.
pub type DiagnosticSink = Arc<dyn Fn(&IntegrityWarning) + Send + Sync + 'static>;

impl Navigator {
  pub(crate) fn report(&self, warning: IntegrityWarning) {
    event!(Level::WARN, step_id = %warning.step_id(), "Configuration integrity warning: {}", warning);
    if let Some(sink) = &self.options.sink {
      sink(&warning);
    }
  }

  pub(crate) fn report_unrecognized(&self, step_id: &str, condition: &Condition) {
    self.report(IntegrityWarning::UnrecognizedOperator {
      step_id: step_id.to_string(),
      field: condition.field.clone(),
      operator: condition.operator.to_string(),
    });
  }
}

// waypoint/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Structural and integration failures. Data-quality problems in the
/// configuration are not errors; see [`crate::IntegrityWarning`].
#[derive(Debug, Error)]
pub enum WaypointError {
  #[error("Unknown step: {step_id}")]
  UnknownStep { step_id: String },

  #[error("Duplicate step id in wizard configuration: {step_id}")]
  DuplicateStepId { step_id: String },

  #[error("Duplicate group id in wizard configuration: {group_id}")]
  DuplicateGroupId { group_id: String },

  #[error("Failed to parse wizard configuration. Source: {source}")]
  ConfigParse {
    #[source]
    source: serde_json::Error,
  },

  #[error("Configuration source '{source_name}' failed. Source: {source}")]
  ConfigSourceFailure {
    source_name: String,
    #[source]
    source: AnyhowError,
  },
}

impl WaypointError {
  pub(crate) fn unknown_step(step_id: &str) -> Self {
    WaypointError::UnknownStep {
      step_id: step_id.to_string(),
    }
  }
}

impl From<serde_json::Error> for WaypointError {
  fn from(source: serde_json::Error) -> Self {
    WaypointError::ConfigParse { source }
  }
}

pub type WaypointResult<T, E = WaypointError> = std::result::Result<T, E>;

// demos/tailor_wizard/src/errors.rs

use thiserror::Error;
use waypoint::WaypointError;

#[derive(Debug, Error)]
pub enum DemoError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Wizard Error: {source}")]
  Wizard {
    #[from]
    source: WaypointError,
  },

  #[error("Wizard configuration has {0} integrity problem(s) and strict mode is on")]
  Integrity(usize),
}

pub type Result<T, E = DemoError> = std::result::Result<T, E>;

// waypoint/src/config/mod.rs

//! The wizard configuration: the immutable, indexed model the navigator
//! routes over, the sources it is loaded from, and its integrity audit.

pub mod integrity;
pub mod model;
pub mod provider;

pub use integrity::{IntegrityWarning, ReferenceKind};
pub use model::{WizardConfig, WizardDocument};
pub use provider::{ConfigSource, FunctionalConfigSource, JsonConfigSource, StaticConfigSource};

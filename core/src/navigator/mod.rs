// waypoint/src/navigator/mod.rs

//! Defines the `Navigator`: step lookup, next-step resolution, dynamic path
//! construction and progress over an immutable `WizardConfig`.

pub mod definition;
pub mod diagnostics;
pub mod execution;
pub mod path;

// Re-export the main Navigator struct
pub use definition::{Navigator, NavigatorOptions};
pub use diagnostics::DiagnosticSink;
pub use path::StepPath;

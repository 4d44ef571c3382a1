// src/lib.rs

//! Waypoint: a data-driven step-routing engine for multi-step wizards.
//!
//! The order of a wizard's steps is not compiled in; it is supplied as data
//! that content editors can change independently of the application:
//!  - Steps, grouped into display groups for the progress bar.
//!  - Prioritized routing rules per step, each a conjunction of conditions
//!    over the user's answers, plus a fallback default next step.
//!  - Optional steps with skip conditions (any one of them skips the step).
//!
//! Given the configuration, an answer set and a position, the `Navigator`
//! resolves the next step, reconstructs the full dynamic path (cycle-safe,
//! since edited data can contain loops) and computes a progress ratio. It
//! never mutates the answers and keeps no state between calls.
//!
//! Configuration problems that only affect one branch (a rule pointing at a
//! step that doesn't exist, an unknown operator) never fail navigation; they
//! are reported as `IntegrityWarning`s through `tracing` and an optional
//! `DiagnosticSink`.

pub mod conditional;
pub mod config;
pub mod core;
pub mod error;
pub mod navigator;
pub mod session;

// --- Re-exports for the Public API ---

// Data model
pub use crate::core::answers::AnswerSet;
pub use crate::core::condition::{Condition, Operator};
pub use crate::core::context_data::SharedAnswers;
pub use crate::core::control::Transition;
pub use crate::core::rule::RoutingRule;
pub use crate::core::step::{Step, StepGroup, StepId};

// Evaluation of conditions, rules and skip conditions
pub use crate::conditional::{evaluate, rule_matches, should_skip};

// Configuration and where it comes from
pub use crate::config::{
  ConfigSource, FunctionalConfigSource, IntegrityWarning, JsonConfigSource, ReferenceKind, StaticConfigSource,
  WizardConfig, WizardDocument,
};

pub use crate::navigator::{DiagnosticSink, Navigator, NavigatorOptions, StepPath};
pub use crate::session::{TransitionListener, WizardSession};

pub use crate::error::{WaypointError, WaypointResult};

/*
    Typical use:
    1. Load a `WizardConfig` (directly, from JSON, or through a `ConfigSource`).
    2. Build one `Navigator` per configuration and share it behind an `Arc`.
    3. Per user, create a `WizardSession` at the start step; write answers as
       the user fills in each step.
    4. Call `advance()` / `go_back()` and map the returned `Transition` to a
       screen change; render `progress()` and `path()` in the progress bar.
*/

// waypoint/src/conditional/mod.rs

//! Evaluates the conditional parts of a wizard configuration against an
//! answer set: single conditions, routing rules (all-of) and skip conditions
//! (any-of).
//!
//! Every function here is total. A condition whose operator is not
//! recognized evaluates to `false` and is handed to a reporter callback so
//! the caller can surface it as an integrity warning.

pub mod evaluate;

pub use evaluate::{check, evaluate, rule_matches, should_skip, Evaluation};

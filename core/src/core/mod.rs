pub mod answers;
pub mod condition;
pub mod context_data;
pub mod control;
pub mod rule;
pub mod step;

// Re-export key types for easier access from other Waypoint modules (and lib.rs)
pub use answers::AnswerSet;
pub use condition::{Condition, Operator};
pub use context_data::SharedAnswers;
pub use control::Transition;
pub use rule::RoutingRule;
pub use step::{Step, StepGroup, StepId};

// waypoint/src/conditional/evaluate.rs

use crate::core::answers::AnswerSet;
use crate::core::condition::{Condition, Operator};
use crate::core::rule::RoutingRule;
use crate::core::step::Step;
use tracing::{event, Level};

/// Raw outcome of checking one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
  Holds,
  Fails,
  /// The operator is not one the engine knows. Treated as `Fails`.
  Unrecognized,
}

impl Evaluation {
  pub fn holds(self) -> bool {
    matches!(self, Evaluation::Holds)
  }

  fn from_bool(b: bool) -> Self {
    if b {
      Evaluation::Holds
    } else {
      Evaluation::Fails
    }
  }
}

/// Checks `condition` against `answers` without logging anything.
pub fn check(condition: &Condition, answers: &AnswerSet) -> Evaluation {
  let v = answers.get(&condition.field);
  let values = &condition.values;
  match &condition.operator {
    Operator::Equals => Evaluation::from_bool(values.first().is_some_and(|first| first == v)),
    Operator::In => Evaluation::from_bool(values.iter().any(|candidate| candidate == v)),
    // A missing comparison value never matches, same as `equals`.
    Operator::NotEquals => Evaluation::from_bool(values.first().is_some_and(|first| first != v)),
    Operator::NotIn => Evaluation::from_bool(!values.iter().any(|candidate| candidate == v)),
    Operator::IsEmpty => Evaluation::from_bool(v.is_empty()),
    Operator::IsNotEmpty => Evaluation::from_bool(!v.is_empty()),
    Operator::Unrecognized(_) => Evaluation::Unrecognized,
  }
}

/// `evaluate(condition, answers) -> bool`.
///
/// Fails closed on an unrecognized operator and logs it at WARN.
pub fn evaluate(condition: &Condition, answers: &AnswerSet) -> bool {
  evaluate_reporting(condition, answers, &mut log_unrecognized)
}

/// True iff the rule has at least one condition and all of them hold.
pub fn rule_matches(rule: &RoutingRule, answers: &AnswerSet) -> bool {
  rule_matches_reporting(rule, answers, &mut log_unrecognized)
}

/// True iff the step is optional and any of its skip conditions holds.
pub fn should_skip(step: &Step, answers: &AnswerSet) -> bool {
  should_skip_reporting(step, answers, &mut log_unrecognized)
}

pub(crate) fn evaluate_reporting(
  condition: &Condition,
  answers: &AnswerSet,
  on_unrecognized: &mut dyn FnMut(&Condition),
) -> bool {
  match check(condition, answers) {
    Evaluation::Unrecognized => {
      on_unrecognized(condition);
      false
    }
    outcome => outcome.holds(),
  }
}

pub(crate) fn rule_matches_reporting(
  rule: &RoutingRule,
  answers: &AnswerSet,
  on_unrecognized: &mut dyn FnMut(&Condition),
) -> bool {
  // An unguarded rule would always fire.
  if rule.conditions.is_empty() {
    return false;
  }
  rule
    .conditions
    .iter()
    .all(|c| evaluate_reporting(c, answers, on_unrecognized))
}

pub(crate) fn should_skip_reporting(
  step: &Step,
  answers: &AnswerSet,
  on_unrecognized: &mut dyn FnMut(&Condition),
) -> bool {
  if !step.is_optional || step.skip_conditions.is_empty() {
    return false;
  }
  step
    .skip_conditions
    .iter()
    .any(|c| evaluate_reporting(c, answers, on_unrecognized))
}

fn log_unrecognized(condition: &Condition) {
  event!(
    Level::WARN,
    field = %condition.field,
    operator = %condition.operator,
    "Unrecognized condition operator; evaluating to false."
  );
}

// tests/condition_tests.rs
mod common;

use common::*;
use waypoint::conditional::{check, Evaluation};
use waypoint::{evaluate, rule_matches, should_skip, AnswerSet, Condition, Operator, RoutingRule, Step};

fn answers() -> AnswerSet {
  AnswerSet::from([("garmentSlug", "upper-body"), ("note", "")])
}

#[test]
fn test_equals_and_not_equals() {
  setup_tracing();
  let a = answers();
  assert!(evaluate(&Condition::equals("garmentSlug", "upper-body"), &a));
  assert!(!evaluate(&Condition::equals("garmentSlug", "lower-body"), &a));
  assert!(evaluate(&Condition::not_equals("garmentSlug", "lower-body"), &a));
  assert!(!evaluate(&Condition::not_equals("garmentSlug", "upper-body"), &a));
}

#[test]
fn test_equals_compares_only_first_value() {
  setup_tracing();
  let cond = Condition::new("garmentSlug", Operator::Equals, &["lower-body", "upper-body"]);
  assert!(!evaluate(&cond, &answers()));
}

#[test]
fn test_missing_comparison_value_never_matches() {
  setup_tracing();
  let a = answers();
  assert!(!evaluate(&Condition::new("garmentSlug", Operator::Equals, &[]), &a));
  assert!(!evaluate(&Condition::new("garmentSlug", Operator::NotEquals, &[]), &a));
  assert!(!evaluate(&Condition::new("garmentSlug", Operator::In, &[]), &a));
  // Nothing to exclude.
  assert!(evaluate(&Condition::new("garmentSlug", Operator::NotIn, &[]), &a));
}

#[test]
fn test_in_and_not_in() {
  setup_tracing();
  let a = answers();
  assert!(evaluate(&Condition::is_in("garmentSlug", &["lower-body", "upper-body"]), &a));
  assert!(!evaluate(&Condition::is_in("garmentSlug", &["leather-items"]), &a));
  assert!(evaluate(&Condition::not_in("garmentSlug", &["leather-items"]), &a));
  assert!(!evaluate(&Condition::not_in("garmentSlug", &["upper-body"]), &a));
}

#[test]
fn test_emptiness_checks_treat_absent_as_empty() {
  setup_tracing();
  let a = answers();
  assert!(evaluate(&Condition::is_empty("note"), &a));
  assert!(evaluate(&Condition::is_empty("never-asked"), &a));
  assert!(!evaluate(&Condition::is_not_empty("never-asked"), &a));
  assert!(evaluate(&Condition::is_not_empty("garmentSlug"), &a));
}

#[test]
fn test_absent_field_compares_as_empty_string() {
  setup_tracing();
  let a = AnswerSet::new();
  assert!(evaluate(&Condition::not_in("garmentSlug", &["leather-items"]), &a));
  assert!(evaluate(&Condition::equals("garmentSlug", ""), &a));
  assert!(evaluate(&Condition::is_in("garmentSlug", &["", "upper-body"]), &a));
}

#[test]
fn test_unrecognized_operator_is_false() {
  setup_tracing();
  let cond = Condition::new("garmentSlug", Operator::from("contains"), &["upper"]);
  assert_eq!(check(&cond, &answers()), Evaluation::Unrecognized);
  assert!(!evaluate(&cond, &answers()));
}

#[test]
fn test_operator_spellings() {
  for (raw, op) in [
    ("equals", Operator::Equals),
    ("in", Operator::In),
    ("notEquals", Operator::NotEquals),
    ("notIn", Operator::NotIn),
    ("isEmpty", Operator::IsEmpty),
    ("isNotEmpty", Operator::IsNotEmpty),
  ] {
    assert_eq!(Operator::from(raw), op);
    assert_eq!(op.as_str(), raw);
    assert!(op.is_recognized());
  }
  assert_eq!(Operator::from("not_in"), Operator::Unrecognized("not_in".to_string()));
  assert!(!Operator::IsEmpty.needs_values());
  assert!(Operator::NotIn.needs_values());
}

#[test]
fn test_rule_needs_every_condition() {
  setup_tracing();
  let rule = RoutingRule::new("sleeve-measurement", 10)
    .when(Condition::is_in("repairTypeSlug", &["hemming"]))
    .when(Condition::is_in("garmentSlug", &["upper-body"]));

  let both = AnswerSet::from([("repairTypeSlug", "hemming"), ("garmentSlug", "upper-body")]);
  assert!(rule_matches(&rule, &both));
  assert!(!rule_matches(&rule, &both.clone().with("repairTypeSlug", "sew-button")));
  assert!(!rule_matches(&rule, &both.with("garmentSlug", "lower-body")));
  assert!(!rule_matches(&RoutingRule::new("anywhere", 1), &AnswerSet::new()));
}

#[test]
fn test_should_skip_requires_optional_flag() {
  setup_tracing();
  let optional = Step::new("leather-type", "garment").skip_when(Condition::not_in("garmentSlug", &["leather-items"]));
  let upper = AnswerSet::from([("garmentSlug", "upper-body")]);
  assert!(should_skip(&optional, &upper));
  assert!(!should_skip(&optional, &AnswerSet::from([("garmentSlug", "leather-items")])));

  let mandatory = optional.clone().optional(false);
  assert!(!should_skip(&mandatory, &upper));

  // Optional but nothing to test: never skipped.
  let bare = Step::new("notes", "garment").optional(true);
  assert!(!should_skip(&bare, &AnswerSet::new()));
}

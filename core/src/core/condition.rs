// waypoint/src/core/condition.rs

//! A single predicate over one answer field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a [`Condition`].
///
/// Configuration documents spell operators in camelCase (`"notIn"`). Any
/// other spelling loads as [`Operator::Unrecognized`] instead of failing the
/// whole document; such a condition never holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
  Equals,
  In,
  NotEquals,
  NotIn,
  IsEmpty,
  IsNotEmpty,
  Unrecognized(String),
}

impl Operator {
  pub fn as_str(&self) -> &str {
    match self {
      Operator::Equals => "equals",
      Operator::In => "in",
      Operator::NotEquals => "notEquals",
      Operator::NotIn => "notIn",
      Operator::IsEmpty => "isEmpty",
      Operator::IsNotEmpty => "isNotEmpty",
      Operator::Unrecognized(raw) => raw.as_str(),
    }
  }

  pub fn is_recognized(&self) -> bool {
    !matches!(self, Operator::Unrecognized(_))
  }

  /// Emptiness checks ignore the configured value list.
  pub fn needs_values(&self) -> bool {
    !matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
  }
}

impl From<String> for Operator {
  fn from(raw: String) -> Self {
    match raw.as_str() {
      "equals" => Operator::Equals,
      "in" => Operator::In,
      "notEquals" => Operator::NotEquals,
      "notIn" => Operator::NotIn,
      "isEmpty" => Operator::IsEmpty,
      "isNotEmpty" => Operator::IsNotEmpty,
      _ => Operator::Unrecognized(raw),
    }
  }
}

impl From<&str> for Operator {
  fn from(raw: &str) -> Self {
    Operator::from(raw.to_string())
  }
}

impl From<Operator> for String {
  fn from(op: Operator) -> Self {
    match op {
      Operator::Unrecognized(raw) => raw,
      other => other.as_str().to_string(),
    }
  }
}

impl fmt::Display for Operator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// `answers[field] <operator> values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
  pub field: String,
  pub operator: Operator,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub values: Vec<String>,
}

impl Condition {
  pub fn new<F: Into<String>>(field: F, operator: Operator, values: &[&str]) -> Self {
    Self {
      field: field.into(),
      operator,
      values: values.iter().map(|v| (*v).to_string()).collect(),
    }
  }

  pub fn equals<F: Into<String>>(field: F, value: &str) -> Self {
    Self::new(field, Operator::Equals, &[value])
  }

  pub fn is_in<F: Into<String>>(field: F, values: &[&str]) -> Self {
    Self::new(field, Operator::In, values)
  }

  pub fn not_equals<F: Into<String>>(field: F, value: &str) -> Self {
    Self::new(field, Operator::NotEquals, &[value])
  }

  pub fn not_in<F: Into<String>>(field: F, values: &[&str]) -> Self {
    Self::new(field, Operator::NotIn, values)
  }

  pub fn is_empty<F: Into<String>>(field: F) -> Self {
    Self::new(field, Operator::IsEmpty, &[])
  }

  pub fn is_not_empty<F: Into<String>>(field: F) -> Self {
    Self::new(field, Operator::IsNotEmpty, &[])
  }
}

// demos/tailor_wizard/src/config.rs

use crate::errors::{DemoError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use waypoint::AnswerSet;

#[derive(Debug, Clone)]
pub struct DemoConfig {
  pub wizard_path: PathBuf,
  pub start_step: String,
  /// Answers to apply before walking, from `WIZARD_ANSWERS=field=value,field=value`.
  pub answers: AnswerSet,
  /// Refuse to run when the configuration audit finds problems.
  pub strict: bool,
}

impl DemoConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let wizard_path = env::var("WIZARD_CONFIG_PATH")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("wizard.json"));
    let start_step = env::var("WIZARD_START_STEP").unwrap_or_else(|_| "garment".to_string());
    let answers = parse_answers(&env::var("WIZARD_ANSWERS").unwrap_or_default())?;
    let strict = env::var("WIZARD_STRICT")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| DemoError::Config(format!("Invalid WIZARD_STRICT value: {}", e)))?;

    tracing::info!(path = %wizard_path.display(), %start_step, "Demo configuration loaded.");
    Ok(Self {
      wizard_path,
      start_step,
      answers,
      strict,
    })
  }
}

fn parse_answers(raw: &str) -> Result<AnswerSet> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|pair| !pair.is_empty())
    .map(|pair| {
      pair
        .split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| DemoError::Config(format!("Invalid WIZARD_ANSWERS entry '{}': expected field=value", pair)))
    })
    .collect()
}

// demos/tailor_wizard/src/main.rs

mod config;
mod errors;

use crate::config::DemoConfig;
use crate::errors::{DemoError, Result};
use anyhow::Context;
use tracing::Level;
use waypoint::{FunctionalConfigSource, NavigatorOptions, Transition, WizardDocument, WizardSession};

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .init();

  let demo_config = DemoConfig::from_env()?;

  // Stands in for the CMS fetch a real host would do.
  let path = demo_config.wizard_path.clone();
  let source = FunctionalConfigSource::new("wizard-file", move || {
    let path = path.clone();
    async move {
      let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
      let document: WizardDocument = serde_json::from_str(&raw).context("parsing wizard document")?;
      Ok::<_, anyhow::Error>(document)
    }
  });

  let options = NavigatorOptions::new().on_warning(|warning| eprintln!("integrity: {}", warning));
  let session = WizardSession::load(&source, options, &demo_config.start_step).await?;

  let problems = session.navigator().config().integrity_report();
  for problem in &problems {
    tracing::warn!(%problem, "Wizard configuration problem.");
  }
  if demo_config.strict && !problems.is_empty() {
    return Err(DemoError::Integrity(problems.len()));
  }

  for (field, value) in demo_config.answers.iter() {
    session.set_answer(field, value);
  }

  session.on_transition(|transition| match transition {
    Transition::Moved { from, to } => println!("  {} -> {}", from, to),
    Transition::Finished { at } => println!("  finished at {}", at),
    Transition::AtStart { at } => println!("  already at start ({})", at),
  });

  println!("path: {}", session.path()?.join(" -> "));
  loop {
    let group = session.current_group().map(|g| g.label).unwrap_or_default();
    println!(
      "[{:>3.0}%] {} ({})",
      session.progress()? * 100.0,
      session.current_step(),
      group
    );
    if session.advance()?.is_finished() {
      break;
    }
  }

  Ok(())
}

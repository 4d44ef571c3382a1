// waypoint/examples/basic_navigation.rs

use std::sync::Arc;
use tracing::info;
use waypoint::{Navigator, Step, StepGroup, Transition, WaypointError, WizardConfig, WizardSession};

fn main() -> Result<(), WaypointError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Navigation Example ---");

  // 1. Describe the wizard as data.
  let config = WizardConfig::new(
    vec![
      StepGroup::new("garment", 1, "Garment"),
      StepGroup::new("repair", 2, "Repair"),
      StepGroup::new("checkout", 3, "Checkout"),
    ],
    vec![
      Step::new("garment", "garment").then("service"),
      Step::new("service", "repair").then("category"),
      Step::new("category", "repair").then("cart"),
      Step::new("cart", "checkout"),
    ],
  )?;

  // 2. One navigator per configuration, one session per user.
  let session = WizardSession::new(Arc::new(Navigator::new(config)), "garment")?;
  session.on_transition(|t| info!(?t, "Host would change route here."));

  // 3. Walk to the end.
  loop {
    info!(
      step = %session.current_step(),
      progress = %format!("{:.0}%", session.progress()? * 100.0),
      "Showing step."
    );
    if let Transition::Finished { at } = session.advance()? {
      info!(%at, "Wizard finished.");
      break;
    }
  }

  Ok(())
}

// waypoint/examples/conditional_routing.rs

use std::sync::Arc;
use tracing::{info, warn};
use waypoint::{
  AnswerSet, JsonConfigSource, Navigator, NavigatorOptions, WaypointError, WizardConfig, WizardSession,
};

const WIZARD: &str = r#"{
  "groups": [
    { "id": "garment", "displayOrder": 1, "label": "Garment" },
    { "id": "repair", "displayOrder": 2, "label": "Repair" }
  ],
  "steps": [
    { "id": "garment", "group": "garment", "defaultNextStep": "leather-type" },
    { "id": "leather-type", "group": "garment", "isOptional": true,
      "skipConditions": [{ "field": "garmentSlug", "operator": "notIn", "values": ["leather-items"] }],
      "defaultNextStep": "service" },
    { "id": "service", "group": "repair",
      "rules": [
        { "conditions": [{ "field": "repairTypeSlug", "operator": "in", "values": ["hemming"] }],
          "target": "measurement", "priority": 9, "description": "hemming needs a length" },
        { "conditions": [{ "field": "repairTypeSlug", "operator": "in", "values": ["zip"] }],
          "target": "zip-colour", "priority": 5, "description": "not published yet" }
      ],
      "defaultNextStep": "category" },
    { "id": "measurement", "group": "repair", "defaultNextStep": "category" },
    { "id": "category", "group": "repair" }
  ]
}"#;

#[tokio::main]
async fn main() -> Result<(), WaypointError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Conditional Routing Example ---");

  // Audit before serving: the zip rule points at a step that isn't published.
  for warning in WizardConfig::from_json_str(WIZARD)?.integrity_report() {
    warn!(%warning, "Configuration problem.");
  }

  let source = JsonConfigSource::new("inline", WIZARD);
  let session = WizardSession::load(&source, NavigatorOptions::new(), "garment").await?;
  let navigator: &Arc<Navigator> = session.navigator();

  for (garment, repair) in [
    ("upper-body", "hemming"),
    ("leather-items", "sew-button"),
    ("upper-body", "zip"),
  ] {
    let answers = AnswerSet::from([("garmentSlug", garment), ("repairTypeSlug", repair)]);
    let path = navigator.build_path("garment", &answers)?;
    info!(garment, repair, path = ?path.ids(), "Dynamic path.");
  }

  Ok(())
}

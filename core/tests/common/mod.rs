// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every fixture

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Level;
use waypoint::{
  Condition, IntegrityWarning, Navigator, NavigatorOptions, RoutingRule, Step, StepGroup, WizardConfig,
};

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Recording diagnostics sink ---
#[derive(Clone, Default)]
pub struct RecordingSink(Arc<Mutex<Vec<IntegrityWarning>>>);

impl RecordingSink {
  pub fn options(&self) -> NavigatorOptions {
    let warnings = self.0.clone();
    NavigatorOptions::new().on_warning(move |w| warnings.lock().push(w.clone()))
  }

  pub fn warnings(&self) -> Vec<IntegrityWarning> {
    self.0.lock().clone()
  }

  pub fn clear(&self) {
    self.0.lock().clear();
  }
}

pub fn navigator_recording(config: WizardConfig) -> (Navigator, RecordingSink) {
  let sink = RecordingSink::default();
  let navigator = Navigator::with_options(config, sink.options());
  (navigator, sink)
}

// --- Common Configurations ---

pub fn groups() -> Vec<StepGroup> {
  vec![
    StepGroup::new("garment", 1, "Your garment"),
    StepGroup::new("repair", 2, "Repair"),
    StepGroup::new("checkout", 3, "Checkout"),
  ]
}

/// garment -> service -> category -> cart, no rules, nothing optional.
pub fn linear_config() -> WizardConfig {
  WizardConfig::new(
    groups(),
    vec![
      Step::new("garment", "garment").ordered(1).component("GarmentPicker").then("service"),
      Step::new("service", "repair").ordered(2).component("ServicePicker").then("category"),
      Step::new("category", "repair").ordered(3).component("CategoryPicker").then("cart"),
      Step::new("cart", "checkout").ordered(4).component("Cart"),
    ],
  )
  .expect("linear config is valid")
}

/// The tailoring wizard:
///
/// ```text
/// garment -> leather-type? -> service -+-> sleeve-measurement -+-> category -> cart
///                                      +-> measurement --------+
///                                      +-----------------------+
/// ```
///
/// `leather-type` is skipped unless `garmentSlug` is `leather-items`.
/// `service` routes hemming on upper-body garments to `sleeve-measurement`
/// (priority 10), any other hemming to `measurement` (priority 9).
pub fn tailor_config() -> WizardConfig {
  WizardConfig::new(
    groups(),
    vec![
      Step::new("garment", "garment").ordered(1).then("leather-type"),
      Step::new("leather-type", "garment")
        .ordered(2)
        .skip_when(Condition::not_in("garmentSlug", &["leather-items"]))
        .then("service"),
      Step::new("service", "repair")
        .ordered(1)
        .rule(
          RoutingRule::new("measurement", 9)
            .when(Condition::is_in("repairTypeSlug", &["hemming"]))
            .described("hemming needs a length"),
        )
        .rule(
          RoutingRule::new("sleeve-measurement", 10)
            .when(Condition::is_in("repairTypeSlug", &["hemming"]))
            .when(Condition::is_in("garmentSlug", &["upper-body"]))
            .described("hemming an upper-body garment means sleeves"),
        )
        .then("category"),
      Step::new("measurement", "repair").ordered(2).then("category"),
      Step::new("sleeve-measurement", "repair").ordered(3).then("category"),
      Step::new("category", "repair").ordered(4).then("cart"),
      Step::new("cart", "checkout").ordered(1),
    ],
  )
  .expect("tailor config is valid")
}

pub const TAILOR_JSON: &str = r#"{
  "groups": [
    { "id": "checkout", "displayOrder": 3, "label": "Checkout" },
    { "id": "garment", "displayOrder": 1, "label": "Your garment" },
    { "id": "repair", "displayOrder": 2, "label": "Repair" }
  ],
  "steps": [
    { "id": "garment", "group": "garment", "defaultOrder": 1, "component": "GarmentPicker",
      "defaultNextStep": "leather-type" },
    { "id": "leather-type", "group": "garment", "defaultOrder": 2, "component": "LeatherPicker",
      "isOptional": true,
      "skipConditions": [
        { "field": "garmentSlug", "operator": "notIn", "values": ["leather-items"] }
      ],
      "defaultNextStep": "service" },
    { "id": "service", "group": "repair", "defaultOrder": 1, "component": "ServicePicker",
      "rules": [
        { "conditions": [{ "field": "repairTypeSlug", "operator": "in", "values": ["hemming"] }],
          "target": "measurement", "priority": 9, "description": "hemming needs a length" }
      ],
      "defaultNextStep": "category" },
    { "id": "measurement", "group": "repair", "defaultOrder": 2, "defaultNextStep": "category" },
    { "id": "category", "group": "repair", "defaultOrder": 3, "defaultNextStep": "cart" },
    { "id": "cart", "group": "checkout" }
  ]
}"#;

// tests/session_tests.rs
mod common;

use common::*;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;
use waypoint::{
  AnswerSet, Condition, JsonConfigSource, Navigator, NavigatorOptions, Operator, RoutingRule, StaticConfigSource,
  Step, StepGroup, Transition, WaypointError, WizardConfig, WizardSession,
};

fn tailor_session() -> WizardSession {
  WizardSession::new(Arc::new(Navigator::new(tailor_config())), "garment").unwrap()
}

#[test]
fn test_session_advances_through_linear_wizard() {
  setup_tracing();
  let session = WizardSession::new(Arc::new(Navigator::new(linear_config())), "garment").unwrap();
  assert_eq!(session.current_step(), "garment");
  assert_eq!(session.progress().unwrap(), 0.25);

  let t = session.advance().unwrap();
  assert_eq!(
    t,
    Transition::Moved {
      from: "garment".to_string(),
      to: "service".to_string()
    }
  );
  session.advance().unwrap();
  session.advance().unwrap();
  assert_eq!(session.current_step(), "cart");
  assert_eq!(session.progress().unwrap(), 1.0);

  let done = session.advance().unwrap();
  assert!(done.is_finished());
  assert_eq!(done.current(), "cart");
  assert_eq!(session.current_step(), "cart");
}

#[test]
fn test_session_routing_follows_answers() {
  setup_tracing();
  let session = tailor_session();
  session.set_answer("garmentSlug", "upper-body");
  assert_eq!(session.advance().unwrap().current(), "service");

  // Answers written through the shared handle are seen by the next request.
  let answers = session.answers();
  answers.set("repairTypeSlug", "hemming");
  assert_eq!(session.advance().unwrap().current(), "sleeve-measurement");
  assert_eq!(
    session.path().unwrap(),
    vec!["garment", "service", "sleeve-measurement", "category", "cart"]
  );
  assert_eq!(session.progress().unwrap(), 3.0 / 5.0);
}

#[test]
fn test_session_go_back_uses_dynamic_path() {
  setup_tracing();
  let session = tailor_session();
  session.set_answer("garmentSlug", "upper-body");
  session.set_answer("repairTypeSlug", "sew-button");
  session.advance().unwrap(); // service
  session.advance().unwrap(); // category

  assert_eq!(session.go_back().unwrap().current(), "service");
  assert_eq!(session.go_back().unwrap().current(), "garment");
  let at_start = session.go_back().unwrap();
  assert_eq!(
    at_start,
    Transition::AtStart {
      at: "garment".to_string()
    }
  );
}

#[test]
fn test_go_back_from_step_no_longer_on_path() {
  setup_tracing();
  let session = tailor_session();
  session.set_answer("garmentSlug", "leather-items");
  assert_eq!(session.advance().unwrap().current(), "leather-type");

  // Changing the garment makes leather-type skipped: the session stays put
  // and reports zero progress until the user moves on.
  session.set_answer("garmentSlug", "upper-body");
  assert_eq!(session.progress().unwrap(), 0.0);
  assert!(matches!(session.go_back().unwrap(), Transition::AtStart { .. }));
  assert_eq!(session.advance().unwrap().current(), "service");
}

#[test]
fn test_navigation_never_mutates_answers() {
  setup_tracing();
  let session = tailor_session();
  session.set_answer("garmentSlug", "upper-body");
  let before = session.answers().snapshot();
  session.advance().unwrap();
  session.path().unwrap();
  session.progress().unwrap();
  session.go_back().unwrap();
  assert_eq!(session.answers().snapshot(), before);
}

#[test]
fn test_jump_to_and_current_group() {
  setup_tracing();
  let session = tailor_session();
  assert_eq!(session.current_group().map(|g| g.id), Some("garment".to_string()));

  session.jump_to("category").unwrap();
  assert_eq!(session.current_step(), "category");
  assert_eq!(session.current_group().map(|g| g.id), Some("repair".to_string()));

  assert!(matches!(
    session.jump_to("nowhere"),
    Err(WaypointError::UnknownStep { .. })
  ));
  assert_eq!(session.current_step(), "category");
}

#[test]
fn test_transition_listeners_receive_every_transition() {
  setup_tracing();
  let session = WizardSession::new(Arc::new(Navigator::new(linear_config())), "category").unwrap();
  let seen: Arc<Mutex<Vec<Transition>>> = Arc::default();
  let sink = seen.clone();
  session.on_transition(move |t| sink.lock().push(t.clone()));

  session.advance().unwrap();
  session.advance().unwrap();
  session.go_back().unwrap();

  assert_eq!(
    *seen.lock(),
    vec![
      Transition::Moved {
        from: "category".to_string(),
        to: "cart".to_string()
      },
      Transition::Finished {
        at: "cart".to_string()
      },
      Transition::Moved {
        from: "cart".to_string(),
        to: "category".to_string()
      },
    ]
  );
}

#[test]
fn test_session_with_answers_and_unknown_start() {
  setup_tracing();
  let nav = Arc::new(Navigator::new(tailor_config()));
  let restored = AnswerSet::from([("garmentSlug", "leather-items")]);
  let session = WizardSession::with_answers(nav.clone(), "garment", restored).unwrap();
  assert_eq!(session.advance().unwrap().current(), "leather-type");

  match WizardSession::new(nav, "missing") {
    Err(WaypointError::UnknownStep { step_id }) => assert_eq!(step_id, "missing"),
    other => panic!("Expected UnknownStep, got {:?}", other),
  }
}

#[tokio::test]
async fn test_session_loads_from_source() {
  setup_tracing();
  let source = JsonConfigSource::new("cms", TAILOR_JSON);
  let session = WizardSession::load(&source, NavigatorOptions::new(), "garment").await.unwrap();
  session.set_answer("repairTypeSlug", "hemming");
  assert_eq!(
    session.path().unwrap(),
    vec!["garment", "service", "measurement", "category", "cart"]
  );

  let static_source = StaticConfigSource::new(linear_config());
  assert!(matches!(
    WizardSession::load(&static_source, NavigatorOptions::new(), "nope").await,
    Err(WaypointError::UnknownStep { .. })
  ));
}

#[tokio::test]
async fn test_session_reports_integrity_warnings_through_options() {
  setup_tracing();
  let json = r#"{
    "groups": [{ "id": "g", "displayOrder": 1 }],
    "steps": [
      { "id": "a", "group": "g", "defaultNextStep": "unpublished" }
    ]
  }"#;
  let sink = RecordingSink::default();
  let session = WizardSession::load(&JsonConfigSource::new("draft", json), sink.options(), "a")
    .await
    .unwrap();

  assert!(session.advance().unwrap().is_finished());
  assert_eq!(sink.warnings().len(), 1);
  assert_eq!(sink.warnings()[0].step_id(), "a");
}

// --- Diagnostic sinks that use the session ---

#[test]
fn test_diagnostic_sink_may_call_back_into_session() {
  setup_tracing();
  let config = WizardConfig::new(
    vec![StepGroup::new("g", 1, "G")],
    vec![Step::new("a", "g").then("unpublished")],
  )
  .unwrap();

  let cell: Arc<OnceCell<Arc<WizardSession>>> = Arc::default();
  let seen: Arc<Mutex<Vec<String>>> = Arc::default();
  let options = {
    let cell = cell.clone();
    let seen = seen.clone();
    NavigatorOptions::new().on_warning(move |_| {
      if let Some(session) = cell.get() {
        let at = session.current_step();
        session.set_answer("warnedAt", at.clone());
        seen.lock().push(at);
      }
    })
  };
  let session = Arc::new(WizardSession::new(Arc::new(Navigator::with_options(config, options)), "a").unwrap());
  cell.set(session.clone()).ok();

  let (tx, rx) = mpsc::channel();
  let worker = session.clone();
  thread::spawn(move || {
    let advanced = worker.advance().map(|t| t.is_finished()).ok();
    let went_back = worker.go_back().map(|t| matches!(t, Transition::AtStart { .. })).ok();
    let progress = worker.progress().ok();
    tx.send((advanced, went_back, progress)).ok();
  });

  let (advanced, went_back, progress) = rx
    .recv_timeout(Duration::from_secs(5))
    .expect("navigation must not block while the sink uses the session");
  assert_eq!(advanced, Some(true));
  assert_eq!(went_back, Some(true));
  assert_eq!(progress, Some(1.0));
  assert_eq!(*seen.lock(), vec!["a".to_string(); 3]);
  assert_eq!(session.answers().snapshot().get("warnedAt"), "a");
}

#[test]
fn test_move_made_by_sink_during_advance_wins() {
  setup_tracing();
  let config = WizardConfig::new(
    vec![StepGroup::new("g", 1, "G")],
    vec![
      Step::new("a", "g")
        .rule(RoutingRule::new("b", 1).when(Condition::new("x", Operator::from("regex"), &[".*"])))
        .then("c"),
      Step::new("b", "g"),
      Step::new("c", "g"),
      Step::new("d", "g"),
    ],
  )
  .unwrap();

  let cell: Arc<OnceCell<Arc<WizardSession>>> = Arc::default();
  let jumped = Arc::new(AtomicBool::new(false));
  let options = {
    let cell = cell.clone();
    let jumped = jumped.clone();
    NavigatorOptions::new().on_warning(move |_| {
      if let Some(session) = cell.get() {
        if !jumped.swap(true, Ordering::SeqCst) {
          session.jump_to("d").unwrap();
        }
      }
    })
  };
  let session = Arc::new(WizardSession::new(Arc::new(Navigator::with_options(config, options)), "a").unwrap());
  cell.set(session.clone()).ok();

  let transition = session.advance().unwrap();
  assert_eq!(
    transition,
    Transition::Moved {
      from: "a".to_string(),
      to: "d".to_string()
    }
  );
  assert_eq!(session.current_step(), "d");
}

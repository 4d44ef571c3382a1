// waypoint/src/session.rs

//! Defines `WizardSession`, the thin binding between a host UI and a shared
//! `Navigator`. The session owns what the navigator must not: the answers the
//! user is filling in and the step currently displayed. It asks the
//! navigator where to go and hands the result to transition listeners,
//! which the host uses to drive its own routing (e.g. a route change).

use crate::config::provider::ConfigSource;
use crate::core::answers::AnswerSet;
use crate::core::context_data::SharedAnswers;
use crate::core::control::Transition;
use crate::core::step::{StepGroup, StepId};
use crate::error::WaypointResult;
use crate::navigator::definition::{Navigator, NavigatorOptions};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Called after every navigation request, once the session state has been
/// updated and all session locks are released.
pub type TransitionListener = Arc<dyn Fn(&Transition) + Send + Sync + 'static>;

/// One user's pass through a wizard.
pub struct WizardSession {
  navigator: Arc<Navigator>,
  start: StepId,
  answers: SharedAnswers,
  current: RwLock<StepId>,
  listeners: Mutex<Vec<TransitionListener>>,
}

impl WizardSession {
  /// Starts a session at `start_step_id` with no answers.
  pub fn new(navigator: Arc<Navigator>, start_step_id: &str) -> WaypointResult<Self> {
    Self::with_answers(navigator, start_step_id, AnswerSet::new())
  }

  /// Starts a session with pre-filled answers (e.g. restored from a draft).
  pub fn with_answers(navigator: Arc<Navigator>, start_step_id: &str, answers: AnswerSet) -> WaypointResult<Self> {
    let start = navigator.lookup(start_step_id)?.id.clone();
    event!(Level::DEBUG, start = %start, "Wizard session created.");
    Ok(Self {
      navigator,
      current: RwLock::new(start.clone()),
      start,
      answers: SharedAnswers::new(answers),
      listeners: Mutex::new(Vec::new()),
    })
  }

  /// Loads a configuration from `source` and starts a session over it.
  #[instrument(name = "WizardSession::load", skip_all, fields(source = %source.name(), start = %start_step_id), err(Display))]
  pub async fn load<S>(source: &S, options: NavigatorOptions, start_step_id: &str) -> WaypointResult<Self>
  where
    S: ConfigSource + ?Sized,
  {
    let config = source.load().await?;
    event!(Level::INFO, num_steps = config.len(), "Wizard configuration loaded.");
    Self::new(Arc::new(Navigator::with_options(config, options)), start_step_id)
  }

  pub fn navigator(&self) -> &Arc<Navigator> {
    &self.navigator
  }

  pub fn start_step(&self) -> &str {
    &self.start
  }

  pub fn current_step(&self) -> StepId {
    self.current.read().clone()
  }

  /// The group of the displayed step, for highlighting the progress bar.
  pub fn current_group(&self) -> Option<StepGroup> {
    let current = self.current.read();
    self.navigator.group_of(&current).cloned()
  }

  /// Shared handle to the answers; writes through it are seen by the next
  /// navigation request.
  pub fn answers(&self) -> SharedAnswers {
    self.answers.clone()
  }

  pub fn set_answer<K: Into<String>, V: Into<String>>(&self, field: K, value: V) -> Option<String> {
    self.answers.set(field, value)
  }

  pub fn clear_answer(&self, field: &str) -> Option<String> {
    self.answers.remove(field)
  }

  pub fn on_transition(&self, listener: impl Fn(&Transition) + Send + Sync + 'static) {
    self.listeners.lock().push(Arc::new(listener));
  }

  /// Moves to the step the current answers route to.
  #[instrument(name = "WizardSession::advance", skip_all, err(Display))]
  pub fn advance(&self) -> WaypointResult<Transition> {
    let (from, answers) = self.state();
    let next = self.navigator.next_step(&from, &answers)?;
    let transition = match next {
      Some(to) => self.commit(from, to),
      None => Transition::Finished { at: from },
    };
    event!(Level::DEBUG, ?transition, "Advanced.");
    self.notify(&transition);
    Ok(transition)
  }

  /// Moves to the step before the current one on the path the current
  /// answers produce from the start step.
  #[instrument(name = "WizardSession::go_back", skip_all, err(Display))]
  pub fn go_back(&self) -> WaypointResult<Transition> {
    let (from, answers) = self.state();
    let previous = self.navigator.previous_step(&from, &answers, &self.start)?;
    let transition = match previous {
      Some(to) => self.commit(from, to),
      None => Transition::AtStart { at: from },
    };
    event!(Level::DEBUG, ?transition, "Went back.");
    self.notify(&transition);
    Ok(transition)
  }

  /// Repositions the session on `step_id` regardless of routing (e.g. the
  /// user clicked a progress-bar segment). Fails with `UnknownStep`.
  pub fn jump_to(&self, step_id: &str) -> WaypointResult<Transition> {
    let to = self.navigator.lookup(step_id)?.id.clone();
    let transition = {
      let mut current = self.current.write();
      let from = std::mem::replace(&mut *current, to.clone());
      Transition::Moved { from, to }
    };
    self.notify(&transition);
    Ok(transition)
  }

  /// Ids of the dynamic path from the start step under the current answers.
  pub fn path(&self) -> WaypointResult<Vec<StepId>> {
    let answers = self.answers.snapshot();
    let path = self.navigator.build_path(&self.start, &answers)?;
    Ok(path.ids().into_iter().map(str::to_string).collect())
  }

  /// Progress ratio of the displayed step, in `[0, 1]`.
  pub fn progress(&self) -> WaypointResult<f64> {
    let (current, answers) = self.state();
    self.navigator.progress(&current, &answers, &self.start)
  }

  /// Copies of the current step and answers. Navigator calls may reach a
  /// diagnostic sink that uses this session, so no guard outlives this call.
  fn state(&self) -> (StepId, AnswerSet) {
    let current = self.current.read().clone();
    (current, self.answers.snapshot())
  }

  /// Moves from `from` to `to` unless the session was repositioned while the
  /// move was being resolved; the other move wins and is reported as is.
  fn commit(&self, from: StepId, to: StepId) -> Transition {
    let mut current = self.current.write();
    if *current != from {
      event!(Level::DEBUG, expected = %from, actual = %current.as_str(), "Session moved during resolution; keeping its position.");
      return Transition::Moved {
        from,
        to: current.clone(),
      };
    }
    *current = to.clone();
    Transition::Moved { from, to }
  }

  fn notify(&self, transition: &Transition) {
    // Clone out so listeners may register further listeners.
    let listeners: Vec<TransitionListener> = self.listeners.lock().clone();
    for listener in listeners {
      listener(transition);
    }
  }
}

impl std::fmt::Debug for WizardSession {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WizardSession")
      .field("start", &self.start)
      .field("current", &*self.current.read())
      .field("answers", &*self.answers.read())
      .field("num_listeners", &self.listeners.lock().len())
      .finish()
  }
}

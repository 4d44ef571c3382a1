// waypoint/src/navigator/execution.rs

//! Contains the routing queries of `Navigator`: next-step resolution,
//! dynamic path construction, progress and back navigation.

use crate::conditional::evaluate::rule_matches_reporting;
use crate::config::integrity::{IntegrityWarning, ReferenceKind};
use crate::core::answers::AnswerSet;
use crate::core::condition::Condition;
use crate::core::step::{Step, StepId};
use crate::error::WaypointResult;
use crate::navigator::definition::Navigator;
use crate::navigator::path::StepPath;
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::{event, instrument, Level};

impl Navigator {
  /// Resolves the step that follows `current_step_id`.
  ///
  /// Rules are tried by descending priority (ties in authoring order); the
  /// first one whose conditions all hold supplies the target, otherwise the
  /// default next step does. A target that should be skipped is resolved
  /// through in turn. Returns `Ok(None)` when the wizard ends here, including
  /// when the chosen reference dangles (reported, not tried further).
  #[instrument(
        name = "Navigator::next_step",
        skip_all,
        fields(current = %current_step_id),
        err(Display)
    )]
  pub fn next_step(&self, current_step_id: &str, answers: &AnswerSet) -> WaypointResult<Option<StepId>> {
    let current = self.lookup(current_step_id)?;
    let next = self.resolve_after(current, answers).map(|step| step.id.clone());
    event!(Level::DEBUG, next = ?next, "Next step resolved.");
    Ok(next)
  }

  /// Walks from `start_step_id` via [`Navigator::next_step`], collecting the
  /// steps that aren't skipped under `answers` (the start step included).
  /// Stops at the terminal step or at the first revisit of a step.
  #[instrument(
        name = "Navigator::build_path",
        skip_all,
        fields(start = %start_step_id),
        err(Display)
    )]
  pub fn build_path(&self, start_step_id: &str, answers: &AnswerSet) -> WaypointResult<StepPath<'_>> {
    let start = self.lookup(start_step_id)?;
    let mut visited: HashSet<&str> = HashSet::new();
    let mut steps = Vec::new();

    // Steps after the start come out of resolve_after, which never yields a
    // skipped step; only the start needs its own skip check.
    if self.should_skip(start, answers) {
      event!(Level::TRACE, step_id = %start.id, "Skipped start step left off the path.");
    } else {
      steps.push(start);
    }
    visited.insert(start.id.as_str());

    let mut cursor = self.resolve_after(start, answers);
    while let Some(step) = cursor {
      if !visited.insert(step.id.as_str()) {
        event!(Level::DEBUG, revisited = %step.id, "Path walk reached a visited step; stopping.");
        break;
      }
      steps.push(step);
      cursor = self.resolve_after(step, answers);
    }

    event!(Level::DEBUG, len = steps.len(), "Path built.");
    Ok(StepPath::new(steps))
  }

  /// `(index of current on the path + 1) / path length`, in `[0, 1]`.
  ///
  /// `0.0` when `current_step_id` is not on the path built from
  /// `start_step_id` (e.g. the current answers skip it).
  #[instrument(
        name = "Navigator::progress",
        skip_all,
        fields(current = %current_step_id, start = %start_step_id),
        err(Display)
    )]
  pub fn progress(&self, current_step_id: &str, answers: &AnswerSet, start_step_id: &str) -> WaypointResult<f64> {
    let path = self.build_path(start_step_id, answers)?;
    Ok(path.progress_of(current_step_id))
  }

  /// The step before `current_step_id` on the path from `start_step_id`.
  pub fn previous_step(
    &self,
    current_step_id: &str,
    answers: &AnswerSet,
    start_step_id: &str,
  ) -> WaypointResult<Option<StepId>> {
    let path = self.build_path(start_step_id, answers)?;
    Ok(path.previous(current_step_id).map(|step| step.id.clone()))
  }

  /// Next-step resolution from a step known to exist.
  pub(crate) fn resolve_after<'a>(&'a self, origin: &'a Step, answers: &AnswerSet) -> Option<&'a Step> {
    let max_hops = self.max_skip_hops();
    let mut through_skipped: HashSet<&str> = HashSet::new();
    through_skipped.insert(origin.id.as_str());

    let mut from = origin;
    let mut hops = 0usize;
    loop {
      let (target_id, via) = self.candidate(from, answers)?;
      let Some(target) = self.config.step(target_id) else {
        self.report(IntegrityWarning::DanglingReference {
          step_id: from.id.clone(),
          target: target_id.clone(),
          via,
        });
        return None;
      };

      if !self.should_skip(target, answers) {
        return Some(target);
      }

      hops += 1;
      event!(Level::TRACE, skipped = %target.id, hops, "Target is skipped; resolving past it.");
      if !through_skipped.insert(target.id.as_str()) {
        self.report(IntegrityWarning::SkipCycle {
          step_id: origin.id.clone(),
          revisited: target.id.clone(),
        });
        return None;
      }
      if hops > max_hops {
        self.report(IntegrityWarning::SkipHopLimit {
          step_id: origin.id.clone(),
          limit: max_hops,
        });
        return None;
      }
      from = target;
    }
  }

  /// The reference `step` routes to before skip resolution: the first
  /// matching rule by priority, else the default next step.
  fn candidate<'a>(&self, step: &'a Step, answers: &AnswerSet) -> Option<(&'a StepId, ReferenceKind)> {
    let mut order: Vec<usize> = (0..step.rules.len()).collect();
    // sort_by_key is stable: equal priorities keep authoring order.
    order.sort_by_key(|&idx| Reverse(step.rules[idx].priority));

    let mut on_unrecognized = |condition: &Condition| self.report_unrecognized(&step.id, condition);
    for idx in order {
      let rule = &step.rules[idx];
      if rule_matches_reporting(rule, answers, &mut on_unrecognized) {
        event!(
          Level::TRACE,
          step_id = %step.id,
          rule_index = idx,
          priority = rule.priority,
          description = %rule.description,
          "Routing rule matched."
        );
        let via = ReferenceKind::Rule {
          index: idx,
          priority: rule.priority,
        };
        return rule.target.as_ref().map(|target| (target, via));
      }
    }

    step
      .default_next_step
      .as_ref()
      .map(|target| (target, ReferenceKind::DefaultNext))
  }
}

//! Step navigator state machine.

use super::config::NavigatorConfig;
use super::history::{MoveKind, NavigationHistory, StepMove};
use super::view::{CompletionEvent, NavigatorView, StepStatus};
use crate::core::{GuideDefinition, Guard, Position, Step};
use crate::progress::ProgressTracker;
use crate::store::ProgressStore;
use chrono::Utc;
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Callback invoked when a guide is finished.
pub type CompletionCallback = Box<dyn FnMut(&CompletionEvent) + Send>;

/// Drives a learner through the steps of one guide.
///
/// The current index always lies in `[0, N-1]`. Requests that would leave
/// that range, or that a guard refuses, do nothing and return `false`.
/// Every applied move records the new index as the last viewed step.
///
/// # Example
///
/// ```rust
/// use waymark::core::{GuideDefinition, Step};
/// use waymark::navigator::StepNavigator;
/// use waymark::progress::ProgressTracker;
/// use waymark::store::MemoryStore;
///
/// let guide = GuideDefinition::new(
///     "rcd",
///     vec![
///         Step::new("isolate", "Isolate"),
///         Step::new("connect", "Connect tester"),
///         Step::new("trip", "Trip test"),
///         Step::new("record", "Record result"),
///     ],
/// )
/// .unwrap();
///
/// let mut nav = StepNavigator::open(guide, ProgressTracker::new(MemoryStore::new()));
///
/// nav.complete_current_step();
/// nav.complete_current_step();
///
/// assert_eq!(nav.current_step_index(), 2);
/// assert_eq!(nav.progress_percent(), 50.0);
/// assert!(nav.previous());
/// assert_eq!(nav.current_step_index(), 1);
/// assert!(nav.is_current_step_complete());
/// ```
pub struct StepNavigator<S: ProgressStore> {
    guide: GuideDefinition,
    tracker: ProgressTracker<S>,
    current: usize,
    config: NavigatorConfig,
    advance_guard: Guard<Position>,
    retreat_guard: Guard<Position>,
    on_complete: Option<CompletionCallback>,
    history: NavigationHistory,
}

impl<S: ProgressStore> StepNavigator<S> {
    /// Open a guide with default configuration.
    pub fn open(guide: GuideDefinition, tracker: ProgressTracker<S>) -> Self {
        Self::with_parts(guide, tracker, NavigatorConfig::default(), None, None)
    }

    pub(crate) fn with_parts(
        guide: GuideDefinition,
        mut tracker: ProgressTracker<S>,
        config: NavigatorConfig,
        extra_advance_guard: Option<Guard<Position>>,
        on_complete: Option<CompletionCallback>,
    ) -> Self {
        let stored = tracker
            .test_progress(guide.id())
            .and_then(|record| record.last_step_viewed);
        let current = config.resume.resolve(stored, guide.step_count());

        if let Some(index) = stored.filter(|&i| !guide.contains_index(i)) {
            warn!(
                guide_id = guide.id(),
                stored = index,
                step_count = guide.step_count(),
                resumed_at = current,
                "stored position is past the end of the guide"
            );
        }

        tracker.set_last_step_viewed(guide.id(), current);
        debug!(guide_id = guide.id(), current, "guide opened");

        let advance_guard = Guard::new(|p: &Position| !p.is_last())
            .and(extra_advance_guard.unwrap_or_else(Guard::always));

        Self {
            guide,
            tracker,
            current,
            config,
            advance_guard,
            retreat_guard: Guard::new(|p: &Position| !p.is_first()),
            on_complete,
            history: NavigationHistory::new(),
        }
    }

    pub fn guide(&self) -> &GuideDefinition {
        &self.guide
    }

    pub fn guide_id(&self) -> &str {
        self.guide.id()
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn tracker(&self) -> &ProgressTracker<S> {
        &self.tracker
    }

    pub fn into_tracker(self) -> ProgressTracker<S> {
        self.tracker
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn current_step_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.guide.steps()[self.current]
    }

    pub fn step_count(&self) -> usize {
        self.guide.step_count()
    }

    pub fn position(&self) -> Position {
        self.position_at(self.current)
    }

    fn position_at(&self, index: usize) -> Position {
        Position {
            index,
            step_count: self.guide.step_count(),
            current_complete: self.is_step_complete(index),
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.guide.last_index()
    }

    pub fn is_step_complete(&self, index: usize) -> bool {
        self.tracker.is_step_complete(self.guide.id(), index)
    }

    pub fn is_current_step_complete(&self) -> bool {
        self.is_step_complete(self.current)
    }

    pub fn is_test_complete(&self) -> bool {
        self.tracker.is_test_complete(self.guide.id())
    }

    /// Number of completed steps that belong to this guide.
    pub fn completed_count(&self) -> usize {
        self.tracker
            .store()
            .get_record(self.guide.id())
            .completed_within(self.guide.step_count())
    }

    /// Percentage of steps completed, between 0 and 100.
    pub fn progress_percent(&self) -> f64 {
        self.completed_count() as f64 * 100.0 / self.guide.step_count() as f64
    }

    /// Move forward one step. Does nothing on the last step.
    pub fn next(&mut self) -> bool {
        if !self.advance_guard.check(&self.position()) {
            trace!(guide_id = self.guide.id(), current = self.current, "advance refused");
            return false;
        }
        self.move_to(self.current + 1, MoveKind::Advance);
        true
    }

    /// Move back one step. Does nothing on the first step.
    pub fn previous(&mut self) -> bool {
        if !self.retreat_guard.check(&self.position()) {
            trace!(guide_id = self.guide.id(), current = self.current, "retreat refused");
            return false;
        }
        self.move_to(self.current - 1, MoveKind::Retreat);
        true
    }

    /// Jump straight to a step. Out-of-range indices are ignored. A forward
    /// jump must pass the advance guards at every step it crosses.
    pub fn select_step(&mut self, index: usize) -> bool {
        if !self.position().contains(index) {
            trace!(
                guide_id = self.guide.id(),
                requested = index,
                step_count = self.guide.step_count(),
                "jump out of range ignored"
            );
            return false;
        }
        if index == self.current {
            return false;
        }
        if let Some(blocked) =
            (self.current..index).find(|&i| !self.advance_guard.check(&self.position_at(i)))
        {
            trace!(
                guide_id = self.guide.id(),
                requested = index,
                blocked_at = blocked,
                "forward jump refused"
            );
            return false;
        }
        self.move_to(index, MoveKind::Jump);
        true
    }

    /// Mark the current step complete, then advance unless this is the last
    /// step. Returns whether it advanced.
    pub fn complete_current_step(&mut self) -> bool {
        self.tracker.mark_step_complete(self.guide.id(), self.current);
        if self.is_last_step() {
            return false;
        }
        self.next()
    }

    /// Finish the guide. Only applies on the last step: completes it, flags
    /// the guide complete and notifies the completion callback.
    pub fn complete_guide(&mut self) -> bool {
        if !self.is_last_step() {
            trace!(
                guide_id = self.guide.id(),
                current = self.current,
                "finish requested before last step"
            );
            return false;
        }

        self.tracker.finish_guide(self.guide.id(), self.guide.last_index());

        let event = CompletionEvent {
            guide_id: self.guide.id().to_string(),
            step_count: self.guide.step_count(),
            completed_at: Utc::now(),
        };
        info!(guide_id = %event.guide_id, steps = event.step_count, "guide complete");

        if let Some(callback) = self.on_complete.as_mut() {
            callback(&event);
        }
        true
    }

    /// The learner is leaving the guide. Nothing is cleared; the stored
    /// position already reflects where they were.
    pub fn exit(&self) {
        debug!(guide_id = self.guide.id(), current = self.current, "guide exited");
    }

    /// Derived values for a render pass.
    pub fn view(&self) -> NavigatorView {
        let record = self.tracker.store().get_record(self.guide.id());
        let steps = self
            .guide
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| StepStatus {
                index,
                id: step.id.clone(),
                complete: record.is_step_complete(index),
                current: index == self.current,
            })
            .collect();

        NavigatorView {
            guide_id: self.guide.id().to_string(),
            current_step_index: self.current,
            step_count: self.guide.step_count(),
            progress_percent: self.progress_percent(),
            is_last_step: self.is_last_step(),
            is_current_step_complete: record.is_step_complete(self.current),
            is_test_complete: record.test_complete,
            steps,
        }
    }

    fn move_to(&mut self, to: usize, kind: MoveKind) {
        let from = self.current;
        self.current = to;
        self.tracker.set_last_step_viewed(self.guide.id(), to);

        if self.config.record_history {
            self.history = self.history.record(StepMove {
                from,
                to,
                kind,
                timestamp: Utc::now(),
            });
        }
        debug!(guide_id = self.guide.id(), from, to, ?kind, "moved");
    }
}

impl<S: ProgressStore> fmt::Debug for StepNavigator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepNavigator")
            .field("guide_id", &self.guide.id())
            .field("current", &self.current)
            .field("step_count", &self.guide.step_count())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

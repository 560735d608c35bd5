//! Builder for constructing navigators.

use super::config::{NavigatorConfig, ResumePolicy};
use super::error::BuildError;
use super::machine::{CompletionCallback, StepNavigator};
use super::view::CompletionEvent;
use crate::core::{GuideDefinition, Guard, Position};
use crate::progress::ProgressTracker;
use crate::store::ProgressStore;

/// Builder for constructing navigators with a fluent API.
///
/// # Example
///
/// ```rust
/// use waymark::core::{GuideDefinition, Step};
/// use waymark::navigator::{NavigatorBuilder, ResumePolicy};
/// use waymark::store::MemoryStore;
///
/// let guide = GuideDefinition::new(
///     "pfc",
///     vec![Step::new("connect", "Connect"), Step::new("read", "Read PFC")],
/// )
/// .unwrap();
///
/// let mut nav = NavigatorBuilder::new()
///     .guide(guide)
///     .store(MemoryStore::new())
///     .resume(ResumePolicy::Restart)
///     .require_completion_to_advance()
///     .build()
///     .unwrap();
///
/// assert!(!nav.next());
/// assert!(nav.complete_current_step());
/// assert_eq!(nav.current_step_index(), 1);
/// ```
pub struct NavigatorBuilder<S: ProgressStore> {
    guide: Option<GuideDefinition>,
    tracker: Option<ProgressTracker<S>>,
    config: NavigatorConfig,
    advance_guard: Option<Guard<Position>>,
    on_complete: Option<CompletionCallback>,
}

impl<S: ProgressStore> NavigatorBuilder<S> {
    pub fn new() -> Self {
        Self {
            guide: None,
            tracker: None,
            config: NavigatorConfig::default(),
            advance_guard: None,
            on_complete: None,
        }
    }

    /// Set the guide to navigate (required).
    pub fn guide(mut self, guide: GuideDefinition) -> Self {
        self.guide = Some(guide);
        self
    }

    /// Track progress in this store (required unless `tracker` is given).
    pub fn store(mut self, store: S) -> Self {
        self.tracker = Some(ProgressTracker::new(store));
        self
    }

    pub fn tracker(mut self, tracker: ProgressTracker<S>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: NavigatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn resume(mut self, policy: ResumePolicy) -> Self {
        self.config.resume = policy;
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Add a condition forward moves must also satisfy. Repeated calls
    /// accumulate; every condition must hold.
    pub fn advance_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Position) -> bool + Send + Sync + 'static,
    {
        let guard = Guard::new(predicate);
        self.advance_guard = Some(match self.advance_guard.take() {
            Some(existing) => existing.and(guard),
            None => guard,
        });
        self
    }

    /// Only allow moving forward from a completed step. A forward jump
    /// needs every step it crosses to be complete.
    pub fn require_completion_to_advance(self) -> Self {
        self.advance_when(|p| p.current_complete)
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&CompletionEvent) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Build the navigator.
    /// Returns an error if the guide or store is missing.
    pub fn build(self) -> Result<StepNavigator<S>, BuildError> {
        let guide = self.guide.ok_or(BuildError::MissingGuide)?;
        let tracker = self.tracker.ok_or(BuildError::MissingTracker)?;

        Ok(StepNavigator::with_parts(
            guide,
            tracker,
            self.config,
            self.advance_guard,
            self.on_complete,
        ))
    }
}

impl<S: ProgressStore> Default for NavigatorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Step;
    use crate::store::MemoryStore;
    use std::sync::{Arc, Mutex};

    fn guide() -> GuideDefinition {
        GuideDefinition::new(
            "functional-testing",
            vec![
                Step::new("a", "A"),
                Step::new("b", "B"),
                Step::new("c", "C"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn missing_guide_is_reported() {
        let result = NavigatorBuilder::new().store(MemoryStore::new()).build();
        assert!(matches!(result, Err(BuildError::MissingGuide)));
    }

    #[test]
    fn missing_store_is_reported() {
        let result = NavigatorBuilder::<MemoryStore>::new().guide(guide()).build();
        assert!(matches!(result, Err(BuildError::MissingTracker)));
    }

    #[test]
    fn builder_applies_config() {
        let nav = NavigatorBuilder::new()
            .guide(guide())
            .store(MemoryStore::new())
            .resume(ResumePolicy::Restart)
            .record_history(false)
            .build()
            .unwrap();

        assert_eq!(nav.config().resume, ResumePolicy::Restart);
        assert!(!nav.config().record_history);
    }

    #[test]
    fn completion_gate_blocks_next_and_forward_jumps() {
        let mut nav = NavigatorBuilder::new()
            .guide(guide())
            .store(MemoryStore::new())
            .require_completion_to_advance()
            .build()
            .unwrap();

        assert!(!nav.next());
        assert!(!nav.select_step(2));
        assert_eq!(nav.current_step_index(), 0);

        assert!(nav.complete_current_step());
        assert_eq!(nav.current_step_index(), 1);
        assert!(nav.previous());
        assert!(nav.select_step(1));
    }

    #[test]
    fn completion_gate_checks_every_step_a_jump_crosses() {
        let mut nav = NavigatorBuilder::new()
            .guide(guide())
            .store(MemoryStore::new())
            .require_completion_to_advance()
            .build()
            .unwrap();

        nav.complete_current_step();
        assert!(nav.previous());

        assert!(!nav.select_step(2));
        assert_eq!(nav.current_step_index(), 0);

        assert!(nav.select_step(1));
        nav.complete_current_step();
        assert!(nav.select_step(0));
        assert!(nav.select_step(2));
        assert_eq!(nav.current_step_index(), 2);
    }

    #[test]
    fn advance_guards_accumulate() {
        let mut nav = NavigatorBuilder::new()
            .guide(guide())
            .store(MemoryStore::new())
            .advance_when(|p| p.index < 5)
            .advance_when(|p| p.index < 1)
            .build()
            .unwrap();

        assert!(nav.next());
        assert!(!nav.next());
        assert_eq!(nav.current_step_index(), 1);
    }

    #[test]
    fn completion_callback_receives_event() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);

        let mut nav = NavigatorBuilder::new()
            .guide(guide())
            .store(MemoryStore::new())
            .on_complete(move |event| sink.lock().unwrap().push(event.clone()))
            .build()
            .unwrap();

        nav.select_step(2);
        nav.complete_guide();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].guide_id, "functional-testing");
        assert_eq!(events[0].step_count, 3);
    }
}

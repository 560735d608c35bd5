//! Progress accessor API.
//!
//! [`ProgressTracker`] is the only code that changes a [`ProgressRecord`].
//! Queries read straight through to the store, so every read sees the most
//! recent write.
//!
//! The tracker has no idea how many steps a guide has. Indices are accepted
//! as given; bounds are the navigator's concern.

use crate::core::ProgressRecord;
use crate::store::ProgressStore;
use chrono::Utc;
use tracing::{debug, trace};

/// Query and command functions over a progress store.
///
/// # Example
///
/// ```rust
/// use waymark::progress::ProgressTracker;
/// use waymark::store::MemoryStore;
///
/// let mut tracker = ProgressTracker::new(MemoryStore::new());
///
/// tracker.mark_step_complete("zs-test", 0);
/// tracker.mark_step_complete("zs-test", 0);
/// tracker.mark_step_complete("zs-test", 1);
///
/// assert_eq!(tracker.completed_step_count("zs-test"), 2);
/// assert!(tracker.is_step_complete("zs-test", 1));
/// assert!(!tracker.is_test_complete("zs-test"));
/// ```
#[derive(Debug, Default)]
pub struct ProgressTracker<S: ProgressStore> {
    store: S,
}

impl<S: ProgressStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn completed_step_count(&self, guide_id: &str) -> usize {
        self.store.get_record(guide_id).completed_count()
    }

    pub fn is_step_complete(&self, guide_id: &str, step_index: usize) -> bool {
        self.store.get_record(guide_id).is_step_complete(step_index)
    }

    pub fn is_test_complete(&self, guide_id: &str) -> bool {
        self.store.get_record(guide_id).test_complete
    }

    /// Sorted indices of completed steps.
    pub fn completed_steps(&self, guide_id: &str) -> Vec<usize> {
        self.store
            .get_record(guide_id)
            .completed_steps
            .into_iter()
            .collect()
    }

    /// Raw record, absent if nothing has been stored for this guide.
    pub fn test_progress(&self, guide_id: &str) -> Option<ProgressRecord> {
        self.store.find_record(guide_id)
    }

    /// Add a step to the completed set. Marking an already completed step
    /// changes nothing.
    pub fn mark_step_complete(&mut self, guide_id: &str, step_index: usize) {
        let mut record = self.store.get_record(guide_id);
        if !record.completed_steps.insert(step_index) {
            trace!(guide_id, step_index, "step already complete");
            return;
        }
        debug!(guide_id, step_index, "step marked complete");
        self.save(guide_id, record);
    }

    /// Flag the guide as finished.
    ///
    /// Does not check that the final step was completed first; callers that
    /// want that guarantee should use [`ProgressTracker::finish_guide`].
    pub fn mark_test_complete(&mut self, guide_id: &str) {
        let mut record = self.store.get_record(guide_id);
        if record.test_complete {
            trace!(guide_id, "guide already complete");
            return;
        }
        record.test_complete = true;
        debug!(guide_id, "guide marked complete");
        self.save(guide_id, record);
    }

    /// Complete the final step and flag the guide as finished in one write.
    pub fn finish_guide(&mut self, guide_id: &str, last_index: usize) {
        let mut record = self.store.get_record(guide_id);
        let newly_completed = record.completed_steps.insert(last_index);
        if !newly_completed && record.test_complete {
            trace!(guide_id, "guide already finished");
            return;
        }
        record.test_complete = true;
        debug!(guide_id, last_index, "guide finished");
        self.save(guide_id, record);
    }

    pub fn set_last_step_viewed(&mut self, guide_id: &str, step_index: usize) {
        let mut record = self.store.get_record(guide_id);
        record.last_step_viewed = Some(step_index);
        trace!(guide_id, step_index, "last viewed step updated");
        self.save(guide_id, record);
    }

    fn save(&mut self, guide_id: &str, mut record: ProgressRecord) {
        record.updated_at = Some(Utc::now());
        self.store.put_record(guide_id, record);
    }
}

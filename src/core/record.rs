//! Per-guide progress record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Completion and position state for one learner on one guide.
///
/// Records are plain values. Stores hand out copies and accept whole
/// replacements; only [`crate::progress::ProgressTracker`] decides how fields
/// change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Identifier of the guide this record belongs to
    pub guide_id: String,

    /// Indices of steps marked complete
    #[serde(default)]
    pub completed_steps: BTreeSet<usize>,

    /// Index of the step most recently shown, absent until the guide is opened
    #[serde(default)]
    pub last_step_viewed: Option<usize>,

    /// Set once the final step has been completed and the guide finished
    #[serde(default)]
    pub test_complete: bool,

    /// When the record was last changed
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// Fresh record for a guide that has never been touched.
    pub fn new(guide_id: impl Into<String>) -> Self {
        Self {
            guide_id: guide_id.into(),
            completed_steps: BTreeSet::new(),
            last_step_viewed: None,
            test_complete: false,
            updated_at: None,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed_steps.len()
    }

    pub fn is_step_complete(&self, index: usize) -> bool {
        self.completed_steps.contains(&index)
    }

    /// Completed indices that fall inside a guide of `step_count` steps.
    pub fn completed_within(&self, step_count: usize) -> usize {
        self.completed_steps.range(..step_count).count()
    }
}

//! Values handed to whoever renders a guide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-step state for rendering a step pill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStatus {
    pub index: usize,
    pub id: String,
    pub complete: bool,
    pub current: bool,
}

/// Everything a render pass needs, computed fresh from the navigator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigatorView {
    pub guide_id: String,
    pub current_step_index: usize,
    pub step_count: usize,
    pub progress_percent: f64,
    pub is_last_step: bool,
    pub is_current_step_complete: bool,
    pub is_test_complete: bool,
    pub steps: Vec<StepStatus>,
}

/// Passed to the completion callback when a guide is finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub guide_id: String,
    pub step_count: usize,
    pub completed_at: DateTime<Utc>,
}

//! Navigator position within a guide.

use serde::{Deserialize, Serialize};

/// Where a navigator currently sits, as seen by guard predicates.
///
/// `step_count` is always at least 1 and `index` always below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub index: usize,
    pub step_count: usize,
    pub current_complete: bool,
}

impl Position {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.step_count
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.step_count
    }
}

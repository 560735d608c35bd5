//! Navigator configuration.

use serde::{Deserialize, Serialize};

/// What to do when the stored position no longer fits the guide, which
/// happens when a guide loses steps between sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumePolicy {
    /// Resume at the last step
    #[default]
    Clamp,
    /// Resume at the first step
    Restart,
}

impl ResumePolicy {
    /// Starting index for a guide of `step_count` steps given the stored
    /// position. `step_count` must be at least 1.
    pub fn resolve(self, stored: Option<usize>, step_count: usize) -> usize {
        match stored {
            Some(index) if index < step_count => index,
            Some(_) => match self {
                Self::Clamp => step_count - 1,
                Self::Restart => 0,
            },
            None => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub resume: ResumePolicy,
    /// Keep a [`super::NavigationHistory`] of applied moves
    pub record_history: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            resume: ResumePolicy::Clamp,
            record_history: true,
        }
    }
}

//! Guide content error types.

use thiserror::Error;

/// A single problem found while validating guide content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentIssue {
    #[error("guide id is empty")]
    EmptyGuideId,

    #[error("guide has no steps")]
    NoSteps,

    #[error("step {index} has an empty id")]
    EmptyStepId { index: usize },

    #[error("step id '{id}' appears more than once (first at {first}, again at {duplicate})")]
    DuplicateStepId {
        id: String,
        first: usize,
        duplicate: usize,
    },
}

/// Errors that can occur when accepting a guide from a content source
#[derive(Debug, Error)]
pub enum GuideError {
    /// Content failed validation. Carries every issue found, not just the first.
    #[error("invalid guide content: {}", format_issues(.0))]
    Invalid(Vec<ContentIssue>),

    /// Content could not be parsed
    #[error("failed to parse guide content: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GuideError {
    /// Issues reported by validation, empty for parse failures.
    pub fn issues(&self) -> &[ContentIssue] {
        match self {
            Self::Invalid(issues) => issues,
            Self::Parse(_) => &[],
        }
    }
}

fn format_issues(issues: &[ContentIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

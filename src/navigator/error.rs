//! Build errors for the navigator builder.

use thiserror::Error;

/// Errors that can occur when building a navigator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Guide not specified. Call .guide(definition) before .build()")]
    MissingGuide,

    #[error("Progress store not specified. Call .store(store) or .tracker(tracker) before .build()")]
    MissingTracker,
}

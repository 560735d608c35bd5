//! Core guide and progress types.
//!
//! This module contains the plain data the rest of the crate works on:
//! - Validated guide definitions supplied by a content source
//! - Per-guide progress records
//! - Navigator positions and the guard predicates evaluated against them
//!
//! Nothing here touches a store or performs side effects.

mod error;
mod guard;
mod guide;
mod position;
mod record;

pub use error::{ContentIssue, GuideError};
pub use guard::Guard;
pub use guide::{GuideDefinition, Step};
pub use position::Position;
pub use record::ProgressRecord;

//! Step navigation over a guide.
//!
//! The navigator owns the learner's current position and decides which moves
//! are valid. Completion bookkeeping is delegated to a
//! [`crate::progress::ProgressTracker`], so a navigator dropped mid-guide and
//! reopened later over the same store resumes where it left off.
//!
//! # Moves
//!
//! - `next` / `previous`: one step forward or back, ignored at either end
//! - `select_step`: jump to any valid index, ignored when out of range
//! - `complete_current_step`: mark complete, then advance unless on the last step
//! - `complete_guide`: on the last step only, finish and notify

mod builder;
mod config;
mod error;
mod history;
mod machine;
mod view;

pub use builder::NavigatorBuilder;
pub use config::{NavigatorConfig, ResumePolicy};
pub use error::BuildError;
pub use history::{MoveKind, NavigationHistory, StepMove};
pub use machine::{CompletionCallback, StepNavigator};
pub use view::{CompletionEvent, NavigatorView, StepStatus};

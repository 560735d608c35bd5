//! Waymark: progress tracking and step navigation for interactive guides
//!
//! A guide is an ordered list of steps a learner works through. Waymark keeps
//! track of which steps are done, where the learner last was, and whether the
//! guide has been finished, and it enforces which moves between steps are
//! valid. Rendering and content live elsewhere; waymark only needs the step
//! count and ordering.
//!
//! # Layers
//!
//! - **Store**: guide id to progress record mapping, swappable via `ProgressStore`
//! - **Tracker**: the only code that mutates records
//! - **Navigator**: bounded state machine over step indices
//!
//! Invalid requests (jumping out of range, advancing past the end) are
//! no-ops rather than errors.
//!
//! # Example
//!
//! ```rust
//! use waymark::core::{GuideDefinition, Step};
//! use waymark::navigator::StepNavigator;
//! use waymark::progress::ProgressTracker;
//! use waymark::store::MemoryStore;
//!
//! let guide = GuideDefinition::new(
//!     "insulation-resistance",
//!     vec![
//!         Step::new("isolate", "Isolate the circuit"),
//!         Step::new("disconnect", "Disconnect sensitive equipment"),
//!         Step::new("test", "Test between conductors"),
//!         Step::new("record", "Record readings"),
//!     ],
//! )
//! .unwrap();
//!
//! let mut store = MemoryStore::new();
//! {
//!     let mut nav = StepNavigator::open(guide.clone(), ProgressTracker::new(&mut store));
//!     nav.complete_current_step();
//!     nav.complete_current_step();
//!     assert_eq!(nav.progress_percent(), 50.0);
//! }
//!
//! // Reopening over the same store resumes where the learner left off.
//! let nav = StepNavigator::open(guide, ProgressTracker::new(&mut store));
//! assert_eq!(nav.current_step_index(), 2);
//! assert!(nav.is_step_complete(1));
//! ```

pub mod core;
pub mod navigator;
pub mod progress;
pub mod store;

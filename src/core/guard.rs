//! Guard predicates for controlling navigation.
//!
//! Guards are pure boolean functions that decide whether a move may happen
//! from a given position. A move whose guard fails is simply not taken.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a move can execute.
///
/// # Example
///
/// ```rust
/// use waymark::core::{Guard, Position};
///
/// let can_advance = Guard::new(|p: &Position| !p.is_last());
///
/// let middle = Position { index: 1, step_count: 3, current_complete: false };
/// let last = Position { index: 2, step_count: 3, current_complete: false };
///
/// assert!(can_advance.check(&middle));
/// assert!(!can_advance.check(&last));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self
    where
        T: 'static,
    {
        Self::new(|_| true)
    }

    /// Check if the guard allows the move.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Guard that passes only when both guards pass.
    pub fn and(self, other: Guard<T>) -> Self
    where
        T: 'static,
    {
        let (left, right) = (self.predicate, other.predicate);
        Guard {
            predicate: Arc::new(move |value| left(value) && right(value)),
        }
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

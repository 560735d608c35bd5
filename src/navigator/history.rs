//! Navigation history tracking.
//!
//! Keeps an immutable, ordered log of the moves a navigator has made.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a move was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// `next`, or the advance half of `complete_current_step`
    Advance,
    /// `previous`
    Retreat,
    /// `select_step`
    Jump,
}

/// Record of a single applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMove {
    /// Step index being left
    pub from: usize,
    /// Step index being entered
    pub to: usize,
    pub kind: MoveKind,
    /// When the move happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of moves.
///
/// `record` returns a new history with the move appended; the original is
/// left untouched.
///
/// # Example
///
/// ```rust
/// use waymark::navigator::{MoveKind, NavigationHistory, StepMove};
/// use chrono::Utc;
///
/// let history = NavigationHistory::new();
/// let history = history.record(StepMove {
///     from: 0,
///     to: 1,
///     kind: MoveKind::Advance,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StepMove {
///     from: 1,
///     to: 3,
///     kind: MoveKind::Jump,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![0, 1, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistory {
    moves: Vec<StepMove>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move, returning a new history.
    pub fn record(&self, step_move: StepMove) -> Self {
        let mut moves = self.moves.clone();
        moves.push(step_move);
        Self { moves }
    }

    /// Step indices visited in order: the starting index, then the target of
    /// each move. Empty if nothing has moved.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.moves.len() + 1);
        if let Some(first) = self.moves.first() {
            path.push(first.from);
        }
        path.extend(self.moves.iter().map(|m| m.to));
        path
    }

    /// Time between the first and last recorded move.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.moves.first()?, self.moves.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn moves(&self) -> &[StepMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

//! Move history with a time-travel cursor.
//!
//! The history is an append-only sequence of immutable board snapshots,
//! each paired with the move that produced it. A cursor selects the
//! active snapshot; jumping the cursor backward and then playing a move
//! branches the game, discarding the abandoned future.

use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board snapshot paired with the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The board after the move was applied.
    pub board: Board,
    /// The move that produced this board. `None` only for the initial entry.
    pub origin: Option<Position>,
}

/// Error that can occur when navigating the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested entry index is outside the recorded history.
    #[display("Move index {index} is out of range (history has {len} entries)")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of recorded entries.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Ordered sequence of board snapshots with a current-position cursor.
///
/// Invariants maintained by the operations below:
/// - Entry 0 is always the empty board with no origin move.
/// - Each later entry differs from its predecessor in exactly one
///   square, which transitions from empty to occupied.
/// - The cursor is always a valid index into the entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl MoveHistory {
    /// Creates a history holding the single initial entry (empty board).
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: Board::new(),
                origin: None,
            }],
            cursor: 0,
        }
    }

    /// Records a new snapshot, branching if the cursor is not at the end.
    ///
    /// Entries beyond the cursor are discarded first, then the new entry
    /// is appended and the cursor advances to it. The caller is
    /// responsible for move legality; this always succeeds.
    #[instrument(skip(self, board))]
    pub fn append(&mut self, board: Board, origin: Position) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            board,
            origin: Some(origin),
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Moves the cursor to a recorded entry without altering the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index` does not name a
    /// recorded entry.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Returns the entry at the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded entries (moves played + 1).
    // The initial snapshot is never removed, so a container-style
    // `is_empty` would always be false; `at_start` is the useful query.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True until the first move is recorded.
    pub fn at_start(&self) -> bool {
        self.entries.len() == 1
    }

    /// Read-only view of all entries in recorded (ascending) order.
    ///
    /// A front end may reverse this for display, but `jump_to` arguments
    /// must remain indices into this ascending order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

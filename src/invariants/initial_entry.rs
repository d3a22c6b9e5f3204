//! Initial entry invariant: the history always starts from a blank slate.

use super::Invariant;
use crate::{Board, GameController};

/// Invariant: entry 0 is the empty board with no origin move.
///
/// Appends truncate at `cursor + 1`, never below one entry, so the
/// starting snapshot can never be discarded or replaced.
pub struct InitialEntryInvariant;

impl Invariant<GameController> for InitialEntryInvariant {
    fn holds(game: &GameController) -> bool {
        let first = &game.history().entries()[0];
        first.board == Board::new() && first.origin.is_none()
    }

    fn description() -> &'static str {
        "First history entry is the empty board with no originating move"
    }
}

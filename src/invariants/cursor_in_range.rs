//! Cursor range invariant: the cursor always names a recorded entry.

use super::Invariant;
use crate::GameController;

/// Invariant: cursor is a valid index into the history.
///
/// `jump_to` rejects out-of-range indices and `append` moves the cursor
/// to the entry it just pushed, so the active snapshot always exists.
pub struct CursorInRangeInvariant;

impl Invariant<GameController> for CursorInRangeInvariant {
    fn holds(game: &GameController) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor is a valid index into the recorded history"
    }
}

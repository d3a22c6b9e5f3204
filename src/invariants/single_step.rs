//! Single step invariant: each entry adds exactly one mark.

use super::Invariant;
use crate::{GameController, Square};

/// Invariant: consecutive entries differ in exactly one square, which
/// transitions from empty to occupied.
///
/// Marks are never moved, replaced, or erased; every snapshot is its
/// predecessor plus one placement.
pub struct SingleStepInvariant;

impl Invariant<GameController> for SingleStepInvariant {
    fn holds(game: &GameController) -> bool {
        for window in game.history().entries().windows(2) {
            let (prev, next) = (&window[0].board, &window[1].board);

            let mut changed = 0;
            for (a, b) in prev.squares().iter().zip(next.squares()) {
                if a != b {
                    changed += 1;
                    if *a != Square::Empty || *b == Square::Empty {
                        return false;
                    }
                }
            }
            if changed != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Consecutive entries differ in exactly one square, empty to occupied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        let game = GameController::new();
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_legal_play_holds() {
        let mut game = GameController::new();
        for pos in [
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ] {
            game.play_move(pos);
        }
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_rejected_moves_leave_invariant_intact() {
        let mut game = GameController::new();
        game.play_move(Position::Center);
        game.play_move(Position::Center);
        game.play_move(Position::Center);

        assert!(SingleStepInvariant::holds(&game));
        assert_eq!(game.history().len(), 2);
    }
}

//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line of three: the winning player and the squares that won.
///
/// The squares are reported so a front end can highlight the winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// The player who completed the line.
    pub player: Player,
    /// The three positions of the completed line, in enumeration order.
    pub squares: [Position; 3],
}

/// The 8 possible winning lines, in priority order.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in the fixed enumeration order
/// (rows, then columns, then diagonals). The order only matters for
/// malformed boards with multiple complete lines; legal play ends on
/// the first completing move.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(WinLine {
                    player,
                    squares: line,
                }),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: Board, player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(board, |b, pos| b.with(*pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = mark(
            Board::new(),
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let win = check_winner(&board).expect("top row should win");
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.squares,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_left_column() {
        let board = mark(
            Board::new(),
            Player::X,
            &[Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        );
        let win = check_winner(&board).expect("left column should win");
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.squares,
            [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft
            ]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = mark(
            Board::new(),
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        let win = check_winner(&board).expect("diagonal should win");
        assert_eq!(win.player, Player::O);
        assert_eq!(
            win.squares,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = mark(
            Board::new(),
            Player::X,
            &[Position::TopLeft, Position::TopCenter],
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_multiple_lines_first_in_order_wins() {
        // Malformed board: X owns the top row and the left column.
        // Rows are enumerated before columns, so the row is reported.
        let board = mark(
            Board::new(),
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        let win = check_winner(&board).expect("board has complete lines");
        assert_eq!(
            win.squares,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}

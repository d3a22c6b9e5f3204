//! Game controller: turn alternation and the move legality gate.

use crate::history::{HistoryError, MoveHistory};
use crate::rules::{self, WinLine};
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game at the active history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(WinLine),
    /// Board is full with no winner.
    Draw,
}

/// The single state machine of the game.
///
/// The controller owns the [`MoveHistory`]; everything else - whose turn
/// it is, whether the game is won or drawn - is derived from the entry at
/// the cursor on every query. Nothing is cached, so jumping the cursor
/// backward from a decided game returns it to play without any status
/// field to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameController {
    history: MoveHistory,
}

impl GameController {
    /// Creates a controller over a fresh game (empty board, cursor 0).
    pub fn new() -> Self {
        Self {
            history: MoveHistory::new(),
        }
    }

    /// The board at the active history entry.
    pub fn board(&self) -> &Board {
        &self.history.current().board
    }

    /// The player to move at the active entry.
    ///
    /// X moves on even-numbered entries, O on odd. Derived from the
    /// cursor rather than tracked, so time travel cannot desync it.
    pub fn to_move(&self) -> Player {
        if self.history.cursor() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Game status at the active entry, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(win) = rules::check_winner(board) {
            GameStatus::Won(win)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Illegal attempts - the game is already decided, or the square is
    /// occupied - are silent no-ops, matching a front end that simply
    /// ignores clicks it cannot honor. The history is untouched in that
    /// case.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play_move(&mut self, pos: Position) {
        if rules::check_winner(self.board()).is_some() {
            debug!(%pos, "move ignored: game already decided");
            return;
        }
        if !self.board().is_empty(pos) {
            debug!(%pos, "move ignored: square occupied");
            return;
        }

        let next = self.board().with(pos, Square::Occupied(self.to_move()));
        self.history.append(next, pos);
    }

    /// Jumps the active entry to a recorded index (time travel).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index` names no entry.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    /// Read-only access to the underlying history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The cursor into the history.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

//! Application state and logic.

use rewind_tictactoe::{GameController, GameStatus, Position};
use tracing::debug;

/// One row of the move list: the underlying history index plus its label.
pub struct MoveLabel {
    /// Index into the ascending history, valid as a jump target.
    pub index: usize,
    /// Text shown for this entry.
    pub text: String,
    /// Whether this entry is the active one (at the cursor).
    pub current: bool,
}

/// Main application state.
///
/// The game itself lives in the engine's [`GameController`]; the app
/// only adds presentation state - the move-list selection and the
/// ascending/descending display flag. Reversing the list is a view
/// transform over `(index, label)` pairs, so jump targets stay valid
/// underlying indices in either order.
pub struct App {
    game: GameController,
    ascending: bool,
    selected: usize,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: GameController::new(),
            ascending: true,
            selected: 0,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Position of the selection within the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Status line text for the active board.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(win) => format!("Winner: {}", win.player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.game.to_move()),
        }
    }

    /// Label for the sort toggle button.
    pub fn sort_label(&self) -> &'static str {
        if self.ascending { "Sort ↓" } else { "Sort ↑" }
    }

    /// Plays a move on the square numbered 1-9 (row-major).
    ///
    /// Out-of-range keys and illegal moves are ignored, like clicks the
    /// board does not honor.
    pub fn play_square(&mut self, number: usize) {
        let Some(pos) = number.checked_sub(1).and_then(Position::from_index) else {
            debug!(number, "ignoring key outside 1-9");
            return;
        };
        self.game.play_move(pos);
        self.clamp_selection();
    }

    /// Move list rows in display order.
    pub fn move_labels(&self) -> Vec<MoveLabel> {
        let cursor = self.game.cursor();
        let mut labels: Vec<MoveLabel> = self
            .game
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let coords = entry
                    .origin
                    .map(|pos| format!(" {pos}"))
                    .unwrap_or_default();
                let text = if index == cursor {
                    format!("You are at move #{index}{coords}")
                } else if index > 0 {
                    format!("Go to move #{index}{coords}")
                } else {
                    "Go to game start".to_string()
                };
                MoveLabel {
                    index,
                    text,
                    current: index == cursor,
                }
            })
            .collect();

        if !self.ascending {
            labels.reverse();
        }
        labels
    }

    /// Moves the selection up one row in the displayed list.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the selection down one row in the displayed list.
    pub fn select_next(&mut self) {
        let last = self.game.history().len() - 1;
        self.selected = (self.selected + 1).min(last);
    }

    /// Jumps to the selected history entry (time travel).
    pub fn jump_to_selected(&mut self) {
        let labels = self.move_labels();
        let Some(label) = labels.get(self.selected) else {
            return;
        };
        if let Err(e) = self.game.jump_to(label.index) {
            // Unreachable for labels built from entries(), but don't panic.
            debug!(error = %e, "jump rejected");
        }
    }

    /// Flips the display order of the move list.
    ///
    /// Keeps the selection on the same underlying entry by mirroring it.
    pub fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
        let last = self.game.history().len() - 1;
        self.selected = last - self.selected;
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameController::new();
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let last = self.game.history().len() - 1;
        self.selected = self.selected.min(last);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

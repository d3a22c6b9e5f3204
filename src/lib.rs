//! Rewind Tic-Tac-Toe - a game engine with time travel
//!
//! The engine keeps every board the game has passed through as an
//! immutable snapshot in a [`MoveHistory`], with a cursor selecting the
//! active one. Jumping the cursor backward rewinds the game; playing a
//! move from there branches it, discarding the abandoned future. Turn
//! order and win/draw status are derived from the active snapshot on
//! every query, never stored.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, GameStatus, Position};
//!
//! let mut game = GameController::new();
//! game.play_move(Position::Center);
//! game.play_move(Position::TopLeft);
//!
//! // Rewind to before O's reply and branch.
//! game.jump_to(1)?;
//! game.play_move(Position::BottomRight);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), rewind_tictactoe::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod history;
mod position;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Controller
pub use controller::{GameController, GameStatus};

// Crate-level exports - History
pub use history::{HistoryEntry, HistoryError, MoveHistory};

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::WinLine;

//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are separated
//! from board storage so the controller can derive game status on every
//! query instead of caching it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, check_winner};

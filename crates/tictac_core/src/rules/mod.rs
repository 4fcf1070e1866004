//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They hold no state and
//! never mutate the board, so the move selector and the session share them.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, outcome_after};
pub use win::{WINNING_LINES, has_won, winner};

//! Tic-tac-toe with an unbeatable computer opponent.
//!
//! # Architecture
//!
//! - **Board**: a 9-cell value type with index accessors
//! - **Rules**: win detection, draw detection and outcome evaluation
//! - **Minimax**: exhaustive move selection for either side
//! - **Session**: turn order and game mode for a front end to drive
//!
//! # Example
//!
//! ```
//! use tictac_core::{Board, COMPUTER, Player, select_move};
//!
//! let mut board = Board::new();
//! board.place(0, Player::X)?;
//!
//! let chosen = select_move(&board, COMPUTER)?;
//! assert_eq!(chosen.index, 4);
//! board.place(chosen.index, COMPUTER)?;
//! # Ok::<(), tictac_core::TicTacToeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod minimax;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::{TicTacToeError, TicTacToeErrorKind, TicTacToeResult};
pub use minimax::{
    DRAW_SCORE, LOSS_SCORE, MoveSelector, ScoredMove, WIN_SCORE, evaluate, select_move,
};
pub use position::Position;
pub use rules::{Outcome, WINNING_LINES, has_won, is_draw, outcome_after, winner};
pub use session::{GameMode, GameSession};
pub use types::{Board, CELL_COUNT, COMPUTER, HUMAN, Mark, Player};

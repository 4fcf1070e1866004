//! Error types for tic-tac-toe operations.

use super::types::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TicTacToeErrorKind {
    /// Cell index outside 0-8.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Attempt to place a mark on an occupied cell.
    #[display("Cell {} is already occupied", _0)]
    InvalidMove(usize),

    /// Move selection requested on a board that is already won or full.
    #[display("Cannot select a move: the game is already decided")]
    PrematureSelection,

    /// Move attempted after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// The requested player is not the one to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// A board string could not be parsed.
    #[display("Invalid board: {}", _0)]
    Parse(String),
}

/// Tic-tac-toe error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct TicTacToeError {
    /// Error kind.
    pub kind: TicTacToeErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TicTacToeError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: TicTacToeErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &TicTacToeErrorKind {
        &self.kind
    }
}

impl From<TicTacToeErrorKind> for TicTacToeError {
    #[track_caller]
    fn from(kind: TicTacToeErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias for tic-tac-toe operations.
pub type TicTacToeResult<T> = Result<T, TicTacToeError>;

//! Outcome evaluation after a placed mark.

use super::win::has_won;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// State of a game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates the board right after `mover` placed a mark.
///
/// The win check runs before the draw check: a final move that fills the
/// board and completes a line is a win.
#[instrument]
pub fn outcome_after(board: &Board, mover: Player) -> Outcome {
    let outcome = if has_won(board, mover) {
        Outcome::Win(mover)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    debug!(?outcome, "Evaluated outcome");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(outcome_after(&board, Player::X), Outcome::InProgress);
    }

    #[test]
    fn test_last_move_that_completes_line_is_win() {
        // X's ninth mark at index 8 fills the board and completes the diagonal.
        let board: Board = "XOOOXXXOX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(outcome_after(&board, Player::X), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(outcome_after(&board, Player::X), Outcome::Draw);
    }
}

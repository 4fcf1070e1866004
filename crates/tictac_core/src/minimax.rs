//! Exhaustive minimax move selection.
//!
//! Scores are always from the computer's point of view: [`WIN_SCORE`] when
//! [`COMPUTER`] completes a line, [`LOSS_SCORE`] when [`HUMAN`] does,
//! [`DRAW_SCORE`] for a full board. The computer maximizes, the human
//! minimizes, and the full game tree is searched on every call.
//!
//! # Undo contract
//!
//! The search mutates a scratch board in place. Every trial placement is
//! cleared before the next candidate is tried and before the frame returns,
//! so each recursive frame hands the board back to its caller exactly as it
//! received it. Debug builds assert this after every trial.

use crate::error::{TicTacToeError, TicTacToeErrorKind, TicTacToeResult};
use crate::position::Position;
use crate::rules::has_won;
use crate::types::{Board, COMPUTER, HUMAN, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Score of a position the computer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a position the human has won.
pub const LOSS_SCORE: i32 = -10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// A chosen cell and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index (0-8).
    pub index: usize,
    /// Minimax score from the computer's point of view.
    pub score: i32,
}

impl ScoredMove {
    /// Position of the chosen cell.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell {} (score {})", self.index, self.score)
    }
}

/// Result of one search frame. Terminal positions carry no index.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    index: Option<usize>,
    score: i32,
}

/// Score of a terminal board, `None` while moves remain.
///
/// A human line is checked first, then a computer line, then a full board.
fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, HUMAN) {
        Some(LOSS_SCORE)
    } else if has_won(board, COMPUTER) {
        Some(WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Full-depth minimax search over a private scratch copy of a board.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    board: Board,
    nodes: u64,
}

impl MoveSelector {
    /// Creates a selector searching a copy of `board`.
    pub fn new(board: &Board) -> Self {
        Self {
            board: *board,
            nodes: 0,
        }
    }

    /// The scratch board. Identical to the input board between searches.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Positions visited by all searches run on this selector.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Selects the best move for `player`.
    ///
    /// Ties go to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns `PrematureSelection` if the board is already won or full.
    #[instrument(skip(self), fields(board = ?self.board))]
    pub fn select(&mut self, player: Player) -> TicTacToeResult<ScoredMove> {
        if let Some(score) = terminal_score(&self.board) {
            warn!(score, "Move selection requested on a decided board");
            return Err(TicTacToeError::new(TicTacToeErrorKind::PrematureSelection));
        }

        let start = self.nodes;
        let evaluation = self.search(player);
        let index = evaluation
            .index
            .ok_or_else(|| TicTacToeError::new(TicTacToeErrorKind::PrematureSelection))?;

        debug!(
            index,
            score = evaluation.score,
            nodes = self.nodes - start,
            "Selected move"
        );
        Ok(ScoredMove {
            index,
            score: evaluation.score,
        })
    }

    /// Minimax value of the board with `player` to move.
    #[instrument(skip(self), fields(board = ?self.board))]
    pub fn evaluate(&mut self, player: Player) -> i32 {
        self.search(player).score
    }

    fn search(&mut self, player: Player) -> Evaluation {
        self.nodes += 1;

        if let Some(score) = terminal_score(&self.board) {
            return Evaluation { index: None, score };
        }

        #[cfg(debug_assertions)]
        let before = self.board;

        let mut best: Option<ScoredMove> = None;
        for index in self.board.empty_indices() {
            self.board.put(index, Mark::Occupied(player));
            let score = self.search(player.opponent()).score;
            self.board.put(index, Mark::Empty);

            #[cfg(debug_assertions)]
            debug_assert_eq!(self.board, before, "trial at {} was not undone", index);

            // Strict comparison keeps the earliest index on ties.
            let improves = match best {
                None => true,
                Some(current) if player == COMPUTER => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove { index, score });
            }
        }

        match best {
            Some(chosen) => Evaluation {
                index: Some(chosen.index),
                score: chosen.score,
            },
            None => Evaluation {
                index: None,
                score: DRAW_SCORE,
            },
        }
    }
}

/// Selects the best move for `player` on `board`.
///
/// The caller's board is never modified; apply the returned index
/// explicitly.
///
/// # Errors
///
/// Returns `PrematureSelection` if the board is already won or full.
pub fn select_move(board: &Board, player: Player) -> TicTacToeResult<ScoredMove> {
    MoveSelector::new(board).select(player)
}

/// Minimax value of `board` with `player` to move.
///
/// Terminal boards evaluate to their terminal score.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    MoveSelector::new(board).evaluate(player)
}

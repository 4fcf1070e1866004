//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Player};
use tracing::instrument;

/// The 8 lines that win the game: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` owns a complete line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    let mark = Mark::Occupied(player);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == mark))
}

/// Returns the player owning a complete line, if any.
///
/// X is reported first on the (unreachable) board where both sides have a line.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&p| has_won(board, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_top_row() {
        let mut board = Board::new();
        for i in [0, 1, 2] {
            board.place(i, Player::X).unwrap();
        }
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::new();
        for i in [0, 1, 3] {
            board.place(i, Player::X).unwrap();
        }
        assert!(!has_won(&board, Player::X));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for i in line {
                board.place(i, Player::O).unwrap();
            }
            assert_eq!(winner(&board), Some(Player::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_anti_diagonal() {
        let board: Board = "..O.O.O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }
}

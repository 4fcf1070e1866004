//! Core domain types for tic-tac-toe.

use super::error::{TicTacToeError, TicTacToeErrorKind, TicTacToeResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

/// The human side. Always moves first.
pub const HUMAN: Player = Player::X;

/// The side played by the move selector in computer mode.
pub const COMPUTER: Player = Player::O;

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// The value occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// No mark.
    #[default]
    Empty,
    /// Cell owned by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the owner of the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(p) => Some(p),
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Occupied(Player::X) => 'X',
            Mark::Occupied(Player::O) => 'O',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: copying it is how callers hand out scratch boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Gets the mark at the given index (0-8).
    pub fn get(&self, index: usize) -> TicTacToeResult<Mark> {
        self.cells
            .get(index)
            .copied()
            .ok_or_else(|| TicTacToeError::new(TicTacToeErrorKind::OutOfRange(index)))
    }

    /// Overwrites the cell at the given index.
    ///
    /// Does not check whether the cell was empty; use [`Board::place`] for
    /// player moves.
    pub fn set(&mut self, index: usize, mark: Mark) -> TicTacToeResult<()> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| TicTacToeError::new(TicTacToeErrorKind::OutOfRange(index)))?;
        *cell = mark;
        Ok(())
    }

    /// Resets the cell at the given index to empty.
    pub fn clear(&mut self, index: usize) -> TicTacToeResult<()> {
        self.set(index, Mark::Empty)
    }

    /// Places a player's mark on an empty cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> TicTacToeResult<()> {
        if self.get(index)? != Mark::Empty {
            return Err(TicTacToeError::new(TicTacToeErrorKind::InvalidMove(index)));
        }
        self.cells[index] = Mark::Occupied(player);
        Ok(())
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Mark::Empty))
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| *m != Mark::Empty)
    }

    /// Number of marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|m| **m == Mark::Occupied(player))
            .count()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Player to move if both sides alternated with X first.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    // Unchecked write for the search, which only touches indices it got
    // from `empty_indices`.
    pub(crate) fn put(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let line: String = chunk.iter().map(|m| m.symbol()).collect();
            if row < 2 {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Parses 9 cells from `X`, `O` and `.` (also `-` or `_` for empty).
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(TicTacToeError::new(TicTacToeErrorKind::Parse(format!(
                "expected {} cells, found {}",
                CELL_COUNT,
                symbols.len()
            ))));
        }

        let mut board = Board::new();
        for (i, c) in symbols.into_iter().enumerate() {
            board.cells[i] = match c.to_ascii_uppercase() {
                'X' => Mark::Occupied(Player::X),
                'O' => Mark::Occupied(Player::O),
                '.' | '-' | '_' => Mark::Empty,
                other => {
                    return Err(TicTacToeError::new(TicTacToeErrorKind::Parse(format!(
                        "unexpected character {:?} at cell {}",
                        other, i
                    ))));
                }
            };
        }
        Ok(board)
    }
}

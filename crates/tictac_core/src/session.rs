//! Game session: board, turn order and mode for one game at a time.

use crate::error::{TicTacToeError, TicTacToeErrorKind, TicTacToeResult};
use crate::minimax::{ScoredMove, select_move};
use crate::rules::{Outcome, outcome_after};
use crate::types::{Board, COMPUTER, HUMAN, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[strum(to_string = "2-Player")]
    TwoPlayer,
    /// O is played by the move selector.
    #[default]
    #[strum(to_string = "AI")]
    VsComputer,
}

impl GameMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsComputer,
            GameMode::VsComputer => GameMode::TwoPlayer,
        }
    }
}

/// A single game and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    mode: GameMode,
    outcome: Outcome,
    history: Vec<usize>,
}

impl GameSession {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            current_player: HUMAN,
            mode,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or who made the final move once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the game outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Cells played, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Clears the board and gives the first move to X.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.board = Board::new();
        self.current_player = HUMAN;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    /// Toggles between two-player and computer mode, then restarts.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        info!(to = %self.mode, "Switched game mode");
        self.restart();
    }

    /// Whether the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.outcome == Outcome::InProgress
            && self.current_player == COMPUTER
    }

    /// Places the current human player's mark at `index`.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `NotYourTurn` while the computer
    /// is to move, `OutOfRange` for an index outside 0-8, `InvalidMove` for
    /// an occupied cell.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, index: usize) -> TicTacToeResult<Outcome> {
        if self.outcome.is_terminal() {
            warn!("Move attempted after game over");
            return Err(TicTacToeError::new(TicTacToeErrorKind::GameOver));
        }
        if self.is_computer_turn() {
            warn!("Human move attempted on the computer's turn");
            return Err(TicTacToeError::new(TicTacToeErrorKind::NotYourTurn(
                COMPUTER,
            )));
        }
        self.apply(index)
    }

    /// Lets the move selector play the computer's turn.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `NotYourTurn` if it is not the
    /// computer's turn in computer mode.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> TicTacToeResult<(ScoredMove, Outcome)> {
        if self.outcome.is_terminal() {
            return Err(TicTacToeError::new(TicTacToeErrorKind::GameOver));
        }
        if !self.is_computer_turn() {
            return Err(TicTacToeError::new(TicTacToeErrorKind::NotYourTurn(
                COMPUTER,
            )));
        }

        let chosen = select_move(&self.board, COMPUTER)?;
        debug!(index = chosen.index, score = chosen.score, "Computer move");
        let outcome = self.apply(chosen.index)?;
        Ok((chosen, outcome))
    }

    // Places the current player's mark and advances the turn. Callers check
    // game over and whose turn it is.
    fn apply(&mut self, index: usize) -> TicTacToeResult<Outcome> {
        let mover = self.current_player;
        self.board.place(index, mover)?;
        self.history.push(index);

        self.outcome = outcome_after(&self.board, mover);
        match self.outcome {
            Outcome::InProgress => self.current_player = mover.opponent(),
            Outcome::Win(winner) => info!(%winner, "Game won"),
            Outcome::Draw => info!("Game drawn"),
        }
        Ok(self.outcome)
    }

    /// Short status text for display.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("{}'s turn", self.current_player),
            Outcome::Win(winner) => format!("{} Wins!", winner),
            Outcome::Draw => "It's a Draw!".to_string(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

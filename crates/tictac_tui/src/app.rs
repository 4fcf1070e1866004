//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictac_core::{GameMode, GameSession, Outcome, Position, TicTacToeErrorKind};
use tracing::{debug, info, warn};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh session.
    pub fn new(session: GameSession) -> Self {
        let status_message = session.status_line();
        Self {
            session,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text of the mode toggle, naming the mode it switches to.
    pub fn mode_toggle_label(&self) -> String {
        format!("Switch to {} Mode", self.session.mode().toggled())
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('m') => self.switch_mode(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Tab => self.next_free_cell(),
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
        }
    }

    /// Restarts the game in the current mode.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.status_message = format!("Game restarted. {}", self.session.status_line());
    }

    /// Toggles between two-player and computer mode.
    pub fn switch_mode(&mut self) {
        self.session.switch_mode();
        self.status_message = match self.session.mode() {
            GameMode::TwoPlayer => "2-Player mode. X's turn".to_string(),
            GameMode::VsComputer => "AI mode: you are X. X's turn".to_string(),
        };
    }

    /// Moves the cursor to the next unoccupied cell, wrapping past the last.
    /// Leaves it in place on a full board.
    pub fn next_free_cell(&mut self) {
        let free = Position::valid_moves(self.session.board());
        let current = self.cursor.to_index();
        if let Some(&next) = free
            .iter()
            .find(|pos| pos.to_index() > current)
            .or_else(|| free.first())
        {
            self.cursor = next;
        }
    }

    /// Places the current player's mark, then lets the computer answer.
    fn play(&mut self, pos: Position) {
        let mover = self.session.current_player();
        match self.session.play(pos.to_index()) {
            Ok(outcome) => {
                debug!(player = %mover, position = %pos, "Move applied");
                self.status_message = self.finish_turn(outcome);
                if outcome == Outcome::InProgress && self.session.is_computer_turn() {
                    self.play_computer();
                }
            }
            Err(e) => {
                warn!(error = %e, position = %pos, "Move rejected");
                self.status_message = match e.kind() {
                    TicTacToeErrorKind::InvalidMove(_) => {
                        format!("{} is taken. {}", pos.label(), self.session.status_line())
                    }
                    TicTacToeErrorKind::GameOver => {
                        "Game over. Press 'r' to restart.".to_string()
                    }
                    other => other.to_string(),
                };
            }
        }
    }

    fn play_computer(&mut self) {
        match self.session.play_computer() {
            Ok((chosen, outcome)) => {
                let label = chosen.position().map_or("?", |p| p.label());
                self.status_message =
                    format!("Computer played {}. {}", label, self.finish_turn(outcome));
            }
            Err(e) => {
                warn!(error = %e, "Computer move failed");
                self.status_message = e.kind().to_string();
            }
        }
    }

    fn finish_turn(&self, outcome: Outcome) -> String {
        if outcome.is_terminal() {
            format!("{} Press 'r' to restart.", self.session.status_line())
        } else {
            self.session.status_line()
        }
    }
}

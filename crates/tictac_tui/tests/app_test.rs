//! Key handling tests for the terminal app.

use crossterm::event::KeyCode;
use tictac_core::{Board, GameMode, GameSession, Mark, Outcome, Player, Position};
use tictac_tui::App;

fn new_app(mode: GameMode) -> App {
    App::new(GameSession::new(mode))
}

#[test]
fn test_digit_places_mark_and_moves_cursor() {
    let mut app = new_app(GameMode::TwoPlayer);
    app.handle_key(KeyCode::Char('3'));
    assert_eq!(app.session().board().get(2).unwrap(), Mark::Occupied(Player::X));
    assert_eq!(app.cursor(), Position::TopRight);
    assert_eq!(app.status_message(), "O's turn");
}

#[test]
fn test_enter_places_at_cursor() {
    let mut app = new_app(GameMode::TwoPlayer);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.session().board().get(0).unwrap(), Mark::Occupied(Player::X));
}

#[test]
fn test_computer_replies_immediately() {
    let mut app = new_app(GameMode::VsComputer);
    app.handle_key(KeyCode::Char('1'));
    let board = app.session().board();
    assert_eq!(board.get(0).unwrap(), Mark::Occupied(Player::X));
    assert_eq!(board.get(4).unwrap(), Mark::Occupied(Player::O));
    assert_eq!(app.session().current_player(), Player::X);
    assert_eq!(app.status_message(), "Computer played Center. X's turn");
}

#[test]
fn test_tab_skips_to_next_free_cell() {
    let mut app = new_app(GameMode::TwoPlayer);
    for key in ['6', '7'] {
        app.handle_key(KeyCode::Char(key));
    }
    assert_eq!(app.cursor(), Position::BottomLeft);

    app.handle_key(KeyCode::Tab);
    assert_eq!(app.cursor(), Position::BottomCenter);
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.cursor(), Position::BottomRight);

    // Wraps to the first free cell.
    app.handle_key(KeyCode::Char('9'));
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.cursor(), Position::TopLeft);

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.cursor(), Position::TopCenter);

    // Occupied middle-right and bottom-left are skipped.
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.cursor(), Position::BottomCenter);
}

#[test]
fn test_occupied_cell_is_rejected() {
    let mut app = new_app(GameMode::TwoPlayer);
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('5'));
    assert_eq!(app.status_message(), "Center is taken. O's turn");
    assert_eq!(app.session().history(), &[4]);
}

#[test]
fn test_win_message_and_lockout() {
    let mut app = new_app(GameMode::TwoPlayer);
    for key in ['1', '4', '2', '5', '3'] {
        app.handle_key(KeyCode::Char(key));
    }
    assert_eq!(app.session().outcome(), Outcome::Win(Player::X));
    assert_eq!(app.status_message(), "X Wins! Press 'r' to restart.");

    app.handle_key(KeyCode::Char('9'));
    assert_eq!(app.status_message(), "Game over. Press 'r' to restart.");
    assert!(app.session().board().is_empty(8));
}

#[test]
fn test_restart_and_mode_switch() {
    let mut app = new_app(GameMode::TwoPlayer);
    assert_eq!(app.mode_toggle_label(), "Switch to AI Mode");
    app.handle_key(KeyCode::Char('1'));

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.session().board(), &Board::new());
    assert_eq!(app.session().mode(), GameMode::TwoPlayer);

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('m'));
    assert_eq!(app.session().mode(), GameMode::VsComputer);
    assert_eq!(app.session().board(), &Board::new());
    assert_eq!(app.mode_toggle_label(), "Switch to 2-Player Mode");
}

#[test]
fn test_quit_keys() {
    let mut app = new_app(GameMode::VsComputer);
    assert!(!app.should_quit());
    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit());

    let mut app = new_app(GameMode::VsComputer);
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}

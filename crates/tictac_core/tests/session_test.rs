//! Full games driven through the session API.

use tictac_core::{GameMode, GameSession, Outcome, Player, TicTacToeErrorKind};

/// Plays every possible human line against the computer and returns the
/// number of finished games.
fn explore(session: &GameSession) -> usize {
    let mut games = 0;
    for index in session.board().empty_indices() {
        let mut next = session.clone();
        let outcome = next.play(index).expect("empty cell");
        let outcome = if outcome == Outcome::InProgress {
            let (_, outcome) = next.play_computer().expect("computer's turn");
            outcome
        } else {
            outcome
        };

        match outcome {
            Outcome::InProgress => games += explore(&next),
            Outcome::Win(Player::X) => panic!("human beat the computer:\n{}", next.board()),
            Outcome::Win(Player::O) | Outcome::Draw => games += 1,
        }
    }
    games
}

#[test]
fn test_computer_never_loses() {
    let session = GameSession::new(GameMode::VsComputer);
    assert!(explore(&session) > 0);
}

#[test]
fn test_two_player_draw() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    // X O X / X O O / O X X
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for (i, index) in moves.iter().enumerate() {
        let outcome = session.play(*index).unwrap();
        if i < moves.len() - 1 {
            assert_eq!(outcome, Outcome::InProgress, "after move {}", i);
        } else {
            assert_eq!(outcome, Outcome::Draw);
        }
    }
    assert_eq!(session.status_line(), "It's a Draw!");
}

#[test]
fn test_restart_clears_game() {
    let mut session = GameSession::new(GameMode::VsComputer);
    session.play(4).unwrap();
    session.play_computer().unwrap();
    session.restart();
    assert!(session.history().is_empty());
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.mode(), GameMode::VsComputer);
}

#[test]
fn test_human_cannot_move_after_loss() {
    let mut session = GameSession::new(GameMode::VsComputer);
    // Human wastes moves on the edges; the computer completes a line.
    let mut outcome = Outcome::InProgress;
    for index in [1, 3, 5, 7] {
        if session.board().is_empty(index) && !outcome.is_terminal() {
            session.play(index).unwrap();
            outcome = session.play_computer().unwrap().1;
        }
    }
    assert_eq!(outcome, Outcome::Win(Player::O));
    let err = session.play_computer().unwrap_err();
    assert_eq!(err.kind, TicTacToeErrorKind::GameOver);
}

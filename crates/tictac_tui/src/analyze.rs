//! Headless board analysis for the `analyze` subcommand.

use anyhow::{Context, Result};
use std::fmt::Write;
use tictac_core::{Board, MoveSelector, Player, is_draw, winner};
use tracing::{info, instrument};

/// Builds the analysis report for a board string.
///
/// When `player` is `None` the side to move is inferred from the mark counts.
#[instrument]
pub fn analyze(board: &str, player: Option<Player>) -> Result<String> {
    let board: Board = board.parse().context("Failed to parse board")?;
    let mut report = format!("{}\n\n", board);

    if let Some(winner) = winner(&board) {
        writeln!(report, "Game over: {} wins", winner)?;
        return Ok(report);
    }
    if is_draw(&board) {
        writeln!(report, "Game over: draw")?;
        return Ok(report);
    }

    let player = player.unwrap_or_else(|| board.next_player());
    let mut selector = MoveSelector::new(&board);
    let chosen = selector
        .select(player)
        .context("Failed to select a move")?;
    info!(
        index = chosen.index,
        score = chosen.score,
        nodes = selector.nodes(),
        "Analysis complete"
    );

    let label = chosen.position().map_or("?", |p| p.label());
    writeln!(
        report,
        "Best move for {}: {} (cell {}), score {}",
        player, label, chosen.index, chosen.score
    )?;
    writeln!(report, "Positions searched: {}", selector.nodes())?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_blocking_move() {
        let report = analyze("XX..O....", None).unwrap();
        assert!(report.starts_with("XX.\n.O.\n..."));
        assert!(report.contains("Best move for O: Top-right (cell 2), score 0"));
    }

    #[test]
    fn test_explicit_player() {
        let report = analyze("....X...O", Some(Player::X)).unwrap();
        assert!(report.contains("Best move for X: Top-left (cell 0), score 0"));
    }

    #[test]
    fn test_finished_board() {
        let report = analyze("XXXOO....", None).unwrap();
        assert!(report.contains("Game over: X wins"));
        let report = analyze("XOXXOOOXX", None).unwrap();
        assert!(report.contains("Game over: draw"));
    }

    #[test]
    fn test_bad_board() {
        assert!(analyze("XYZ", None).is_err());
    }
}

//! Terminal setup and the blocking event loop.

use crate::app::App;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tictac_core::GameSession;
use tracing::{error, info, instrument};

/// Runs the TUI until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all, fields(mode = %session.mode()))]
pub fn run(session: GameSession) -> Result<()> {
    info!("Starting TUI");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, App::new(session));
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = ?e, "Game loop error");
    }
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    info!("TUI exited");
    Ok(())
}

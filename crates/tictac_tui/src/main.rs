//! tictac - tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictac_core::GameSession;
use tictac_tui::{AppConfig, Cli, Command, ModeArg, PlayerArg, analyze, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { mode } => run_play(config, mode),
        Command::Analyze { board, player } => run_analyze(&config, &board, player),
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal game, logging to a file so the screen stays clean
#[instrument(skip(config))]
fn run_play(config: AppConfig, mode: Option<ModeArg>) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = match mode {
        Some(mode) => config.with_mode(mode.into()),
        None => config,
    };
    info!(mode = %config.mode(), "Starting game");

    tui::run(GameSession::new(*config.mode()))
}

/// Print the selected move for a board
fn run_analyze(config: &AppConfig, board: &str, player: Option<PlayerArg>) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let report = analyze::analyze(board, player.map(Into::into))?;
    print!("{}", report);
    Ok(())
}

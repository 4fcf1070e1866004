//! Command-line interface for tictac.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictac_core::{GameMode, Player};

/// Tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe in the terminal with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictac.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Starting mode (overrides the config file)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Print the move the computer would choose for a board
    Analyze {
        /// Nine cells of X, O or '.', row by row (e.g. "X...O....")
        board: String,

        /// Player to move (inferred from mark counts if omitted)
        #[arg(short, long, value_enum, ignore_case = true)]
        player: Option<PlayerArg>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { mode: None }
    }
}

/// Game mode as a CLI value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans share the board
    TwoPlayer,
    /// Play X against the computer
    VsComputer,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VsComputer => GameMode::VsComputer,
        }
    }
}

/// Player as a CLI value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerArg {
    /// X, the human side
    X,
    /// O, the computer side
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictac"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Play { mode: None });
        assert_eq!(cli.config, PathBuf::from("tictac.toml"));
    }

    #[test]
    fn test_play_mode_flag() {
        let cli = Cli::try_parse_from(["tictac", "play", "--mode", "two-player"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                mode: Some(ModeArg::TwoPlayer)
            })
        );
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from(["tictac", "analyze", "X...O....", "--player", "X"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Analyze {
                board: "X...O....".to_string(),
                player: Some(PlayerArg::X),
            })
        );
    }
}

//! Terminal front end for tictac.
//!
//! Drives a [`tictac_core::GameSession`] from keyboard input and renders it
//! with ratatui. The `analyze` module backs the headless subcommand.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command, ModeArg, PlayerArg};
pub use config::{AppConfig, ConfigError};

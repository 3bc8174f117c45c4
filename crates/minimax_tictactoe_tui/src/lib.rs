//! Terminal front-end for minimax tic-tac-toe.
//!
//! - **Orchestrator**: drives the [`Session`](minimax_tictactoe::Session) and
//!   defers the computer's reply on the tokio runtime
//! - **App**: turns key presses into moves and game events into status text
//! - **UI**: stateless ratatui rendering of the app
//! - **Config**: TOML settings with CLI overrides
//! - **Advice**: the headless `best-move` answer for a board in play

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod advice;
mod app;
mod cli;
mod config;
mod input;
mod orchestrator;
mod terminal;
mod ui;

pub use advice::best_move;
pub use app::{App, Control};
pub use cli::{Cli, Command, ModeArg};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use input::{digit_to_index, move_cursor};
pub use orchestrator::{DeferredAction, Orchestrator};
pub use terminal::run_tui;

//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand, ValueEnum};
use minimax_tictactoe::GameMode;
use std::path::PathBuf;

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Who plays O
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Log file (the terminal is taken by the game)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the computer's move for a board
    BestMove {
        /// Nine squares in row-major order, e.g. "XX_/O__/___"
        board: String,
    },
}

/// Game mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Human X against the computer O
    VsComputer,
    /// Two humans
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::VsComputer => GameMode::VsComputer,
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

//! Tic-tac-toe against a minimax opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use minimax_tictactoe::{Board, Position};
use minimax_tictactoe_tui::{Cli, Command, TuiConfig, best_move, run_tui};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            delay_ms,
            log_file,
        } => run_play(config, mode.map(Into::into), delay_ms, log_file).await,
        Command::BestMove { board } => run_best_move(&board),
    }
}

/// Run the interactive game
async fn run_play(
    config: Option<PathBuf>,
    mode: Option<minimax_tictactoe::GameMode>,
    delay_ms: Option<u64>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let config = TuiConfig::load(config.as_deref())?.with_overrides(mode, delay_ms, log_file);
    initialize_file_tracing(&config)?;
    info!(?config, "Configuration resolved");
    run_tui(&config).await
}

/// Print the computer's choice for a board
#[instrument]
fn run_best_move(board: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let board: Board = board.parse().context("Invalid board")?;
    let report = best_move(&board)?;
    let label = Position::from_index(*report.index()).map_or("?", Position::label);

    println!("{}\n", board);
    println!(
        "Best move: {} ({}), score {}, {} nodes searched",
        report.index() + 1,
        label,
        report.score(),
        report.nodes()
    );
    Ok(())
}

/// Sends logs to the configured file so they don't corrupt the game screen.
fn initialize_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

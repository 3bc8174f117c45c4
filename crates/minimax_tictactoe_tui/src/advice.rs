//! Headless move advice for the `best-move` command.

use minimax_tictactoe::{Board, GameError, SearchReport, evaluate_outcome, minimax};
use tracing::{instrument, warn};

/// Asks the move selector for O's reply on a board still in play.
///
/// # Errors
///
/// - `GameAlreadyOver` if the board is already won or drawn
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> Result<SearchReport, GameError> {
    let outcome = evaluate_outcome(board);
    if outcome.is_terminal() {
        warn!(%outcome, "Board is already decided");
        return Err(GameError::GameAlreadyOver { outcome });
    }
    minimax::search(board)
}

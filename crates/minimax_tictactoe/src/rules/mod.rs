//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates its
//! input, so the outcome can be recomputed after every move instead of being
//! stored next to the board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner, winning_line};

use super::types::{Board, Outcome};

/// Evaluates the board.
///
/// Win lines are checked rows first, then columns, then diagonals; the first
/// complete line decides the winner. A full board without a winner is a draw.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

//! Exhaustive minimax search for the computer player.
//!
//! The computer always plays O and maximizes; the human plays X and
//! minimizes. The whole tree is searched with no pruning and no cache: a 3x3
//! board has at most 9! leaf paths.

use super::error::GameError;
use super::rules::evaluate_outcome;
use super::types::{Board, Outcome, Player, Square};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// The move chosen by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct SearchReport {
    /// Board index of the chosen move.
    index: usize,
    /// Minimax score of the chosen move.
    score: i32,
    /// Nodes visited, root placements included.
    nodes: u64,
}

/// Scores `board` for O.
///
/// Terminal boards score `WIN_SCORE - depth` for an O win, `depth - WIN_SCORE`
/// for an X win and zero for a draw, so faster wins and slower losses are
/// preferred. Otherwise every empty square is tried in ascending order with
/// the mark of the side to move, and the placement is undone before the next
/// sibling. The board is unchanged when this returns.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    let mut nodes = 0;
    score(board, depth, maximizing, &mut nodes)
}

fn score(board: &mut Board, depth: i32, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;
    match evaluate_outcome(board) {
        Outcome::Won(Player::O) => return WIN_SCORE - depth,
        Outcome::Won(Player::X) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mark = if maximizing { Player::O } else { Player::X };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in 0..Board::SIZE {
        if !board.is_empty(index) {
            continue;
        }
        board.put(index, Square::Occupied(mark));
        let value = score(board, depth + 1, !maximizing, nodes);
        board.put(index, Square::Empty);

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Runs the root search and reports the chosen move.
///
/// Each empty square is tried with O and scored with the human to reply.
/// Only a strictly greater score replaces the best so far, so the lowest
/// index wins ties.
///
/// # Errors
///
/// `NoMovesAvailable` if the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board) -> Result<SearchReport, GameError> {
    let mut scratch = *board;
    let mut nodes = 0;
    let mut best: Option<(usize, i32)> = None;

    for index in 0..Board::SIZE {
        if !scratch.is_empty(index) {
            continue;
        }
        scratch.put(index, Square::Occupied(Player::O));
        let value = score(&mut scratch, 0, false, &mut nodes);
        scratch.put(index, Square::Empty);

        debug!(index, score = value, "Scored candidate");
        if best.is_none_or(|(_, best_score)| value > best_score) {
            best = Some((index, value));
        }
    }

    let (index, value) = best.ok_or(GameError::NoMovesAvailable)?;
    debug_assert_eq!(&scratch, board, "search leaked a hypothetical move");
    debug!(index, score = value, nodes, "Search complete");
    Ok(SearchReport::new(index, value, nodes))
}

/// Picks the computer's move on `board`.
///
/// # Errors
///
/// `NoMovesAvailable` if the board is full.
#[instrument(skip(board))]
pub fn pick_best_move(board: &Board) -> Result<usize, GameError> {
    search(board).map(|report| *report.index())
}

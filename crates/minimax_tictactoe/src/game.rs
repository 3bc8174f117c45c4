//! Game state and move transitions.

use super::error::GameError;
use super::rules::evaluate_outcome;
use super::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: the board and whose turn it is.
///
/// Transitions return a new value; the outcome is always recomputed from the
/// board rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
        }
    }

    /// Discards this state and returns a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Builds a state from an existing board.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Evaluates the board.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    /// Places `player`'s mark at `index`.
    ///
    /// The turn is not switched; callers alternate with
    /// [`switch_player`](Self::switch_player) once the move is known not to
    /// have ended the game.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` if the board is already won or drawn
    /// - `IndexOutOfRange` if `index` is not 0-8
    /// - `InvalidMove` if the square is occupied
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Self, GameError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameAlreadyOver { outcome });
        }
        if index >= Board::SIZE {
            return Err(GameError::IndexOutOfRange { index });
        }
        if !self.board.is_empty(index) {
            return Err(GameError::InvalidMove { index });
        }

        let mut next = *self;
        next.board.put(index, Square::Occupied(player));
        debug!(moves = next.board.move_count(), "Move applied");
        Ok(next)
    }

    /// Hands the turn to the other player.
    pub fn switch_player(&self) -> Self {
        Self {
            board: self.board,
            current_player: self.current_player.opponent(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

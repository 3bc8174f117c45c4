//! Errors raised by game operations.

use super::types::Outcome;

/// Error that can occur when applying a move or asking for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", index)]
    InvalidMove {
        /// Requested board index.
        index: usize,
    },

    /// The index is outside 0-8.
    #[display("Index {} is out of range (must be 0-8)", index)]
    IndexOutOfRange {
        /// Requested board index.
        index: usize,
    },

    /// The game has already ended.
    #[display("Game is already over ({})", outcome)]
    GameAlreadyOver {
        /// The terminal outcome.
        outcome: Outcome,
    },

    /// The move selector was asked to move on a full board.
    #[display("No moves available")]
    NoMovesAvailable,

    /// Input arrived while the computer's turn is pending.
    #[display("Wait for the computer to move")]
    ComputerTurnPending,

    /// A computer move was requested outside the computer's turn.
    #[display("It is not the computer's turn")]
    NotComputerTurn,
}

impl GameError {
    /// Returns true for errors the front-end may ignore and keep playing.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, GameError::NoMovesAvailable | GameError::NotComputerTurn)
    }
}

impl std::error::Error for GameError {}

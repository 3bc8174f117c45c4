//! Tic-tac-toe game logic with an optimal computer opponent.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players and outcomes
//! - **Rules**: pure win/draw evaluation over the fixed win lines
//! - **Game**: the immutable game state and its move transitions
//! - **Minimax**: exhaustive game-tree search choosing the computer's move
//! - **Session**: the game state machine a front-end drives, emitting events
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{GameMode, GameEvent, Session};
//!
//! let mut session = Session::new(GameMode::VsComputer);
//! let events = session.apply_human_move(4).unwrap();
//! assert!(events.contains(&GameEvent::ComputerThinking));
//!
//! // The front-end decides when the computer actually moves.
//! session.play_computer_move().unwrap();
//! assert!(!session.is_locked());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod minimax;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::GameError;
pub use game::GameState;
pub use minimax::{SearchReport, pick_best_move};
pub use position::Position;
pub use rules::{WIN_LINES, evaluate_outcome, winning_line};
pub use session::{COMPUTER, GameEvent, GameMode, Phase, Session};
pub use types::{Board, BoardParseError, Outcome, Player, Square};

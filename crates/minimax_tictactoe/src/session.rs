//! Game session state machine.
//!
//! A [`Session`] is the single live game a front-end holds. It sequences human
//! and computer turns, locks out human input while the computer's turn is
//! pending, and reports every transition as a list of [`GameEvent`]s for the
//! front-end to render.

use super::error::GameError;
use super::game::GameState;
use super::minimax;
use super::rules::winning_line;
use super::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The mark the computer plays.
pub const COMPUTER: Player = Player::O;

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// The human plays X against the minimax computer.
    #[default]
    VsComputer,
    /// Two humans share the board.
    TwoPlayer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::VsComputer => "vs computer",
            Self::TwoPlayer => "two players",
        }
    }
}

/// Where the session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a human to place the given mark.
    AwaitingHuman(Player),
    /// The computer's turn is scheduled; human input is rejected.
    ComputingMove,
    /// The game ended. Only a reset leaves this phase.
    Finished(Outcome),
}

/// Notification for the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MoveApplied {
        /// Board index of the move.
        index: usize,
        /// Mark placed.
        mark: Player,
    },
    /// The game ended.
    GameEnded {
        /// Terminal outcome.
        outcome: Outcome,
        /// The completed line for a win, `None` for a draw.
        winning_line: Option<[usize; 3]>,
    },
    /// The turn passed to a new player.
    TurnChanged(Player),
    /// The computer's reply is pending.
    ComputerThinking,
    /// The board was reset.
    Restarted,
}

/// A live game plus its turn-cycle bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: GameState,
    mode: GameMode,
    phase: Phase,
    started: bool,
}

impl Session {
    /// Creates a session at the initial state: empty board, X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(),
            mode,
            phase: Phase::AwaitingHuman(Player::X),
            started: false,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// True while the computer's turn is pending.
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::ComputingMove
    }

    /// True once a human has made the first move of this game.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// True when `player` is played by the computer in this mode.
    pub fn is_computer(&self, player: Player) -> bool {
        self.mode == GameMode::VsComputer && player == COMPUTER
    }

    /// Places the current player's mark for a human.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` once the game has ended
    /// - `ComputerTurnPending` while the computer's turn is pending
    /// - `IndexOutOfRange` / `InvalidMove` for a bad square
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<Vec<GameEvent>, GameError> {
        let player = match self.phase {
            Phase::AwaitingHuman(player) => player,
            Phase::ComputingMove => {
                warn!("Human move rejected while computer is thinking");
                return Err(GameError::ComputerTurnPending);
            }
            Phase::Finished(outcome) => return Err(GameError::GameAlreadyOver { outcome }),
        };

        let events = self.place(index, player)?;
        self.started = true;
        Ok(events)
    }

    /// Runs the move selector and plays its choice as the computer.
    ///
    /// # Errors
    ///
    /// `NotComputerTurn` unless the computer's turn is pending.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.phase != Phase::ComputingMove {
            return Err(GameError::NotComputerTurn);
        }

        let report = minimax::search(self.state.board())?;
        info!(
            index = report.index(),
            score = report.score(),
            nodes = report.nodes(),
            "Computer chose move"
        );
        self.place(*report.index(), COMPUTER)
    }

    /// Restores the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<GameEvent> {
        info!("Resetting game");
        *self = Self::new(self.mode);
        vec![GameEvent::Restarted, GameEvent::TurnChanged(Player::X)]
    }

    fn place(&mut self, index: usize, player: Player) -> Result<Vec<GameEvent>, GameError> {
        self.state = self.state.apply_move(index, player)?;
        let mut events = vec![GameEvent::MoveApplied {
            index,
            mark: player,
        }];

        let outcome = self.state.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.phase = Phase::Finished(outcome);
            events.push(GameEvent::GameEnded {
                outcome,
                winning_line: winning_line(self.state.board()).map(|(_, line)| line),
            });
            return Ok(events);
        }

        self.state = self.state.switch_player();
        let next = self.state.current_player();
        events.push(GameEvent::TurnChanged(next));

        if self.is_computer(next) {
            debug!("Computer turn pending");
            self.phase = Phase::ComputingMove;
            events.push(GameEvent::ComputerThinking);
        } else {
            self.phase = Phase::AwaitingHuman(next);
        }
        Ok(events)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let session = Session::new(GameMode::VsComputer);
        assert_eq!(session.phase(), Phase::AwaitingHuman(Player::X));
        assert!(!session.has_started());
        assert!(!session.is_locked());
    }

    #[test]
    fn test_human_move_hands_turn_to_computer() {
        let mut session = Session::new(GameMode::VsComputer);
        let events = session.apply_human_move(4).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::MoveApplied {
                    index: 4,
                    mark: Player::X
                },
                GameEvent::TurnChanged(Player::O),
                GameEvent::ComputerThinking,
            ]
        );
        assert!(session.is_locked());
        assert!(session.has_started());
    }

    #[test]
    fn test_input_locked_during_computer_turn() {
        let mut session = Session::new(GameMode::VsComputer);
        session.apply_human_move(4).unwrap();
        let before = session.clone();
        assert_eq!(
            session.apply_human_move(0),
            Err(GameError::ComputerTurnPending)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_computer_move_returns_turn() {
        let mut session = Session::new(GameMode::VsComputer);
        session.apply_human_move(0).unwrap();
        let events = session.play_computer_move().unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::MoveApplied {
                    index: 4,
                    mark: Player::O
                },
                GameEvent::TurnChanged(Player::X),
            ]
        );
        assert_eq!(session.phase(), Phase::AwaitingHuman(Player::X));
    }

    #[test]
    fn test_computer_move_outside_its_turn() {
        let mut session = Session::new(GameMode::VsComputer);
        assert_eq!(session.play_computer_move(), Err(GameError::NotComputerTurn));
    }

    #[test]
    fn test_two_player_mode_never_locks() {
        let mut session = Session::new(GameMode::TwoPlayer);
        session.apply_human_move(0).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingHuman(Player::O));
        assert!(!session.is_locked());
        session.apply_human_move(4).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingHuman(Player::X));
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut session = Session::new(GameMode::TwoPlayer);
        session.apply_human_move(0).unwrap();
        let events = session.reset();
        assert_eq!(
            events,
            vec![GameEvent::Restarted, GameEvent::TurnChanged(Player::X)]
        );
        assert_eq!(session, Session::new(GameMode::TwoPlayer));
    }
}

//! Application state and logic.

use super::input::{digit_to_index, move_cursor};
use super::orchestrator::{DeferredAction, Orchestrator};
use crossterm::event::KeyCode;
use minimax_tictactoe::{GameError, GameEvent, Phase, Player, Position, Session};
use tracing::{debug, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    orchestrator: Orchestrator,
    cursor: Position,
    status_message: String,
    winning_line: Option<[usize; 3]>,
}

impl App {
    /// Creates a new application.
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            cursor: Position::Center,
            status_message: "Pick a square to start".to_string(),
            winning_line: None,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        self.orchestrator.session()
    }

    /// Returns the orchestrator.
    pub fn orchestrator_mut(&mut self) -> &mut Orchestrator {
        &mut self.orchestrator
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns the completed line of a won game.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// True when the restart key is active.
    pub fn can_restart(&self) -> bool {
        matches!(self.session().phase(), Phase::Finished(_))
    }

    /// Title text: a prompt before the first move, then the turn or result.
    pub fn header(&self) -> String {
        match self.session().phase() {
            Phase::Finished(outcome) => outcome.to_string(),
            Phase::ComputingMove => "Computer is thinking...".to_string(),
            Phase::AwaitingHuman(_) if !self.session().has_started() => "Choose".to_string(),
            Phase::AwaitingHuman(player) => format!("{}'s turn", player),
        }
    }

    /// The player whose indicator is highlighted.
    pub fn active_player(&self) -> Option<Player> {
        match self.session().phase() {
            Phase::Finished(_) => None,
            _ => Some(self.session().state().current_player()),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') if self.can_restart() => {
                let events = self.orchestrator.restart();
                self.handle_events(events);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.place(index);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
        Control::Continue
    }

    /// Runs a due deferred action.
    ///
    /// # Errors
    ///
    /// Errors the player cannot recover from, such as the selector finding no
    /// move, are returned to abort the game loop.
    pub fn run_deferred(&mut self, action: DeferredAction) -> Result<(), GameError> {
        match self.orchestrator.run_action(action) {
            Ok(events) => {
                self.handle_events(events);
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "Deferred action rejected");
                self.status_message = e.to_string();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn place(&mut self, index: usize) {
        match self.orchestrator.human_move(index) {
            Ok(events) => self.handle_events(events),
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                self.status_message = rejection_message(e);
            }
        }
    }

    /// Updates the display state from game events.
    pub fn handle_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::MoveApplied { index, mark } => {
                    let label = Position::from_index(index).map_or("?", Position::label);
                    self.status_message = format!("{} played {}", mark, label);
                }
                GameEvent::TurnChanged(_) | GameEvent::ComputerThinking => {}
                GameEvent::GameEnded {
                    outcome,
                    winning_line,
                } => {
                    self.winning_line = winning_line;
                    self.status_message = match outcome.winner() {
                        Some(player) if self.session().is_computer(player) => {
                            "The computer wins. Press 'r' to restart or 'q' to quit.".to_string()
                        }
                        Some(player) => {
                            format!("{} wins! Press 'r' to restart or 'q' to quit.", player)
                        }
                        None => "Draw! Press 'r' to restart or 'q' to quit.".to_string(),
                    };
                }
                GameEvent::Restarted => {
                    self.winning_line = None;
                    self.cursor = Position::Center;
                    self.status_message = "Game restarted. Player X's turn.".to_string();
                }
            }
        }
    }
}

/// Describes a rejected move using the 1-9 numbering shown on the board.
fn rejection_message(error: GameError) -> String {
    match error {
        GameError::InvalidMove { index } => format!("Square {} is already occupied", index + 1),
        GameError::IndexOutOfRange { index } => {
            format!("Square {} is not on the board", index + 1)
        }
        other => other.to_string(),
    }
}

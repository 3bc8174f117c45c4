//! Turn orchestration with a deferred computer reply.

use minimax_tictactoe::{GameError, GameEvent, GameMode, Session};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Work scheduled to run after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// The computer should now take its turn.
    ComputerTurn {
        /// Game the turn was scheduled for.
        generation: u64,
    },
}

/// Owns the live [`Session`] and schedules the computer's reply.
///
/// After a human move hands the turn to the computer, a task sleeps for the
/// configured delay and then sends [`DeferredAction::ComputerTurn`]. The
/// session stays locked until that action is run. Each reset starts a new
/// generation so an action scheduled for an old game is dropped.
pub struct Orchestrator {
    session: Session,
    delay: Duration,
    generation: u64,
    action_tx: mpsc::UnboundedSender<DeferredAction>,
    action_rx: mpsc::UnboundedReceiver<DeferredAction>,
}

impl Orchestrator {
    /// Creates an orchestrator for a new game.
    #[instrument]
    pub fn new(mode: GameMode, delay: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(mode),
            delay,
            generation: 0,
            action_tx,
            action_rx,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies a human move and schedules the computer if it is next.
    ///
    /// Must be called inside a tokio runtime.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn human_move(&mut self, index: usize) -> Result<Vec<GameEvent>, GameError> {
        let events = self.session.apply_human_move(index)?;
        if self.session.is_locked() {
            self.schedule_computer_turn();
        }
        Ok(events)
    }

    fn schedule_computer_turn(&self) {
        let tx = self.action_tx.clone();
        let delay = self.delay;
        let generation = self.generation;
        debug!(?delay, generation, "Scheduling computer turn");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the orchestrator.
            let _ = tx.send(DeferredAction::ComputerTurn { generation });
        });
    }

    /// Returns a due action without waiting.
    pub fn try_next_action(&mut self) -> Option<DeferredAction> {
        self.action_rx.try_recv().ok()
    }

    /// Waits for the next due action.
    pub async fn next_action(&mut self) -> Option<DeferredAction> {
        self.action_rx.recv().await
    }

    /// Runs a due action. Actions from a previous game yield no events.
    #[instrument(skip(self))]
    pub fn run_action(&mut self, action: DeferredAction) -> Result<Vec<GameEvent>, GameError> {
        match action {
            DeferredAction::ComputerTurn { generation } if generation != self.generation => {
                debug!(current = self.generation, "Dropping stale computer turn");
                Ok(Vec::new())
            }
            DeferredAction::ComputerTurn { .. } => self.session.play_computer_move(),
        }
    }

    /// Starts a new game in the same mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.generation += 1;
        info!(generation = self.generation, "Restarting");
        self.session.reset()
    }
}

//! Controller: owns the round and serializes every mutation.
//!
//! Keyboard actions and timer ticks arrive as [`Command`]s on a bounded
//! single-consumer queue. The controller applies them one at a time, so a
//! player move and an enemy step can never interleave.

use tokio::sync::mpsc;

use crate::config::EngineConfig;
use crate::core::{GameState, RoundSnapshot};
use crate::types::{Direction, GameAction, Outcome};

/// A unit of work for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Player input (move, start, restart).
    Action(GameAction),
    /// Periodic enemy step, stamped with the round it was scheduled for.
    /// Ticks for any other round are ignored.
    Tick { round: u32 },
}

/// Result of one applied command: the updated round, or its terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Snapshot(RoundSnapshot),
    Outcome(Outcome),
}

impl StepResult {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            StepResult::Outcome(o) => Some(*o),
            StepResult::Snapshot(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("command queue is full")]
    Full,
    #[error("command queue is closed")]
    Closed,
}

/// Cloneable producer handle for the command queue.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<Command>,
}

impl CommandSender {
    /// Enqueue without waiting (safe to call from sync code).
    pub fn submit(&self, cmd: Command) -> Result<(), QueueError> {
        self.tx.try_send(cmd).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => QueueError::Full,
            mpsc::error::TrySendError::Closed(_) => QueueError::Closed,
        })
    }

    /// Enqueue, waiting for capacity.
    pub async fn send(&self, cmd: Command) -> Result<(), QueueError> {
        self.tx.send(cmd).await.map_err(|_| QueueError::Closed)
    }
}

pub struct Controller {
    state: GameState,
    rx: mpsc::Receiver<Command>,
    tx: CommandSender,
    snapshot: RoundSnapshot,
}

impl Controller {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_state(GameState::new(config.seed), config.queue_capacity)
    }

    /// Wrap an existing game state (scripted rounds in tests and benches).
    pub fn with_state(state: GameState, queue_capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        let snapshot = state.snapshot();
        Self {
            state,
            rx,
            tx: CommandSender { tx },
            snapshot,
        }
    }

    pub fn sender(&self) -> CommandSender {
        self.tx.clone()
    }

    pub fn submit(&self, cmd: Command) -> Result<(), QueueError> {
        self.tx.submit(cmd)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot as of the last applied command.
    pub fn snapshot(&self) -> &RoundSnapshot {
        &self.snapshot
    }

    pub fn initialize(&mut self) -> RoundSnapshot {
        self.state.initialize();
        self.refresh()
    }

    pub fn restart(&mut self) -> RoundSnapshot {
        self.state.restart();
        self.refresh()
    }

    pub fn apply_player_move(&mut self, dir: Direction) -> StepResult {
        let outcome = self.state.apply_player_move(dir);
        self.settle(outcome)
    }

    pub fn advance_enemy(&mut self) -> StepResult {
        let outcome = self.state.advance_enemy();
        self.settle(outcome)
    }

    /// Apply a single command immediately.
    pub fn handle(&mut self, cmd: Command) -> StepResult {
        match cmd {
            Command::Action(action) => {
                let outcome = self.state.apply_action(action);
                self.settle(outcome)
            }
            Command::Tick { round } if round != self.state.round_id() => {
                tracing::trace!(round, current = self.state.round_id(), "stale tick ignored");
                StepResult::Snapshot(self.snapshot)
            }
            Command::Tick { .. } => self.advance_enemy(),
        }
    }

    /// Apply every queued command in arrival order.
    ///
    /// `on_step` sees each result before the next command runs. Returns the
    /// number of commands applied.
    pub fn process_pending(&mut self, mut on_step: impl FnMut(&StepResult)) -> usize {
        let mut applied = 0;
        while let Ok(cmd) = self.rx.try_recv() {
            tracing::trace!(?cmd, "applying command");
            let result = self.handle(cmd);
            on_step(&result);
            applied += 1;
        }
        applied
    }

    /// Apply every queued command and collect the results.
    pub fn drain(&mut self) -> Vec<StepResult> {
        let mut results = Vec::new();
        self.process_pending(|r| results.push(*r));
        results
    }

    fn settle(&mut self, outcome: Option<Outcome>) -> StepResult {
        self.refresh();
        match outcome {
            Some(o) => StepResult::Outcome(o),
            None => StepResult::Snapshot(self.snapshot),
        }
    }

    fn refresh(&mut self) -> RoundSnapshot {
        self.state.snapshot_into(&mut self.snapshot);
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Layout;
    use crate::types::{Position, RoundStatus};

    fn scripted(layout: Layout) -> Controller {
        Controller::with_state(GameState::from_layout(&layout).unwrap(), 16)
    }

    #[test]
    fn initialize_returns_running_snapshot() {
        let mut ctl = Controller::new(&EngineConfig::default());
        assert_eq!(ctl.snapshot().status, RoundStatus::Idle);

        let snap = ctl.initialize();
        assert_eq!(snap.status, RoundStatus::Running);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.score, 0);
        assert_eq!(ctl.snapshot(), &snap);
    }

    #[test]
    fn queued_commands_apply_in_order() {
        let mut ctl = scripted(
            Layout::new()
                .with_player(Position::new(2, 2))
                .with_enemy(Position::new(10, 2))
                .with_treasure(Position::new(12, 12)),
        );

        ctl.submit(Command::Action(GameAction::Move(Direction::Right))).unwrap();
        ctl.submit(Command::Tick { round: 1 }).unwrap();
        ctl.submit(Command::Action(GameAction::Move(Direction::Down))).unwrap();

        let mut players = Vec::new();
        let applied = ctl.process_pending(|r| {
            if let StepResult::Snapshot(s) = r {
                players.push((s.player, s.enemy));
            }
        });

        assert_eq!(applied, 3);
        assert_eq!(
            players,
            vec![
                (Position::new(3, 2), Position::new(10, 2)),
                (Position::new(3, 2), Position::new(9, 2)),
                (Position::new(3, 3), Position::new(9, 2)),
            ]
        );
        assert_eq!(ctl.process_pending(|_| {}), 0);
    }

    #[test]
    fn outcome_is_reported_once_then_snapshots() {
        let mut ctl = scripted(
            Layout::new()
                .with_player(Position::new(2, 2))
                .with_treasure(Position::new(3, 2)),
        );

        let result = ctl.apply_player_move(Direction::Right);
        assert_eq!(result, StepResult::Outcome(Outcome::won(1)));
        assert_eq!(ctl.snapshot().status, RoundStatus::Won);

        // Terminal: later commands only echo the frozen round.
        match ctl.advance_enemy() {
            StepResult::Snapshot(s) => {
                assert_eq!(s.status, RoundStatus::Won);
                assert_eq!(s.outcome, Some(Outcome::won(1)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn drain_collects_results_in_arrival_order() {
        let mut ctl = scripted(
            Layout::new()
                .with_player(Position::new(2, 2))
                .with_treasure(Position::new(3, 2)),
        );

        ctl.submit(Command::Tick { round: 1 }).unwrap();
        ctl.submit(Command::Action(GameAction::Move(Direction::Right))).unwrap();
        ctl.submit(Command::Tick { round: 1 }).unwrap();

        let results = ctl.drain();
        assert_eq!(results.len(), 3);
        assert!(matches!(results[0], StepResult::Snapshot(_)));
        assert_eq!(results[1], StepResult::Outcome(Outcome::won(1)));
        assert_eq!(results[2].outcome(), None);
        assert!(ctl.drain().is_empty());
    }

    #[test]
    fn full_queue_is_reported() {
        let ctl = Controller::with_state(GameState::new(1), 1);
        ctl.submit(Command::Tick { round: 1 }).unwrap();
        assert_eq!(ctl.submit(Command::Tick { round: 1 }), Err(QueueError::Full));
    }

    #[test]
    fn restart_command_resets_round() {
        let mut ctl = scripted(
            Layout::new()
                .with_player(Position::new(5, 5))
                .with_enemy(Position::new(5, 6))
                .with_lives(1)
                .with_treasure(Position::new(0, 14)),
        );
        assert_eq!(ctl.handle(Command::Tick { round: 1 }), StepResult::Outcome(Outcome::lost(0)));

        let result = ctl.handle(Command::Action(GameAction::Restart));
        let StepResult::Snapshot(snap) = result else {
            panic!("restart should yield a snapshot");
        };
        assert_eq!(snap.status, RoundStatus::Running);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.treasures_left, 3);
    }

    #[test]
    fn ticks_from_a_previous_round_are_ignored() {
        let mut ctl = scripted(
            Layout::new()
                .with_player(Position::new(2, 2))
                .with_enemy(Position::new(2, 6))
                .with_treasure(Position::new(12, 12)),
        );

        // A tick from round 1 is still queued when the restart lands.
        ctl.submit(Command::Action(GameAction::Restart)).unwrap();
        ctl.submit(Command::Tick { round: 1 }).unwrap();
        ctl.submit(Command::Tick { round: 2 }).unwrap();

        let results = ctl.drain();
        assert_eq!(results.len(), 3);
        let StepResult::Snapshot(after_restart) = results[0] else {
            panic!("restart should yield a snapshot");
        };
        assert_eq!(after_restart.round_id, 2);
        assert_eq!(results[1], StepResult::Snapshot(after_restart));
        assert_eq!(ctl.state().round_id(), 2);
        assert_eq!(ctl.state().ticks(), 1);
    }
}

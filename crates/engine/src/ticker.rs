//! Periodic tick source.
//!
//! Runs on a tokio runtime and feeds round-stamped [`Command::Tick`]s into
//! the controller's queue. Stopping the ticker is how a round is halted:
//! nothing else needs to be cancelled because every command completes
//! synchronously.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::controller::{Command, CommandSender};

pub struct Ticker {
    runtime: Handle,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(runtime: Handle, period: Duration) -> Self {
        Self {
            runtime,
            period,
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// (Re)start ticking for `round`. The first tick fires one full period
    /// from now.
    pub fn start(&mut self, sender: CommandSender, round: u32) {
        self.stop();

        let period = self.period;
        self.task = Some(self.runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if sender.send(Command::Tick { round }).await.is_err() {
                    tracing::debug!("command queue closed, ticker exiting");
                    break;
                }
            }
        }));
        tracing::debug!(period_ms = period.as_millis() as u64, round, "ticker started");
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

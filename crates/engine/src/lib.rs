//! Engine module - drives a round in real time.
//!
//! The core is synchronous and knows nothing about time. This crate adds the
//! two things a live game needs around it:
//!
//! - [`controller`]: a single-consumer command queue in front of the
//!   [`GameState`](crate::core::GameState), so keyboard input and timer ticks
//!   are applied strictly one at a time
//! - [`ticker`]: a tokio task that enqueues an enemy step every tick interval
//!
//! plus [`config`], which reads the runtime settings from the environment.
//!
//! # Example
//!
//! ```
//! use grid_chase_engine::{Command, Controller, EngineConfig, StepResult};
//! use grid_chase_engine::types::{Direction, GameAction};
//!
//! let mut ctl = Controller::new(&EngineConfig::default());
//! ctl.initialize();
//!
//! ctl.submit(Command::Action(GameAction::Move(Direction::Down))).unwrap();
//! ctl.submit(Command::Tick { round: ctl.state().round_id() }).unwrap();
//!
//! let applied = ctl.process_pending(|step| {
//!     if let StepResult::Outcome(o) = step {
//!         println!("{} ({})", o.message, o.score);
//!     }
//! });
//! assert_eq!(applied, 2);
//! ```

pub mod config;
pub mod controller;
pub mod ticker;

pub use grid_chase_core as core;
pub use grid_chase_types as types;

pub use config::EngineConfig;
pub use controller::{Command, CommandSender, Controller, QueueError, StepResult};
pub use ticker::Ticker;

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical layouts
//! - **Testable**: Rounds can be scripted from hand-written layouts
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 15x15 grid of empty, wall and treasure cells
//! - [`game_state`]: Round state: actors, lives, score, lifecycle
//! - [`placement`]: Rejection-sampled wall and treasure layouts
//! - [`pursuit`]: Enemy axis-priority heuristic
//! - [`rng`]: Seeded random source
//! - [`snapshot`]: Copyable round view for renderers
//!
//! # Game Rules
//!
//! - The player starts top-left with 3 lives; the enemy starts bottom-right
//! - 10 walls and 3 treasures are scattered at random each round
//! - Walls and the board edge block movement
//! - Collecting every treasure wins; sharing a cell with the enemy costs a life
//! - The enemy steps once per tick along the axis with the larger gap (ties: vertical)
//!
//! # Example
//!
//! ```
//! use grid_chase_core::GameState;
//! use grid_chase_types::{Direction, GameAction, RoundStatus};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Start);
//! assert_eq!(game.status(), RoundStatus::Running);
//!
//! game.apply_player_move(Direction::Right);
//! game.advance_enemy();
//!
//! assert!(game.lives() > 0);
//! ```

pub mod board;
pub mod game_state;
pub mod placement;
pub mod pursuit;
pub mod rng;
pub mod snapshot;

pub use grid_chase_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use placement::{place_layout, Layout, LayoutError};
pub use pursuit::{choose_axis, next_enemy_step, Axis};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{BoardGrid, RoundSnapshot};

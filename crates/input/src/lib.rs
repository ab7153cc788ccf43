//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Anything it does
//! not recognise is dropped here, so the game state never sees malformed
//! input.

pub mod map;

pub use grid_chase_types as types;

pub use map::{handle_key_event, should_quit};

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 15 x 15 cells (indexed 0-14 on both axes)
//! - **Player spawn**: (0, 0), top-left
//! - **Enemy spawn**: (14, 14), bottom-right
//!
//! # Round Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NUM_WALLS` | 10 | Walls placed per round |
//! | `NUM_TREASURES` | 3 | Treasures placed per round |
//! | `START_LIVES` | 3 | Lives at round start |
//! | `TICK_MS` | 500 | Enemy step interval |
//!
//! # Examples
//!
//! ```
//! use grid_chase_types::{Direction, GameAction, Position, BOARD_SIZE};
//!
//! let dir = Direction::from_str("LEFT").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(Position::new(3, 3).step(dir), Position::new(2, 3));
//!
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(BOARD_SIZE, 15);
//! ```

/// Board width and height in cells (15 x 15)
pub const BOARD_SIZE: u8 = 15;

/// Walls placed at the start of every round
pub const NUM_WALLS: usize = 10;

/// Treasures placed at the start of every round
pub const NUM_TREASURES: usize = 3;

/// Lives the player starts a round with
pub const START_LIVES: u8 = 3;

/// Enemy step interval in milliseconds
pub const TICK_MS: u32 = 500;

/// Player spawn cell
pub const PLAYER_SPAWN: Position = Position::new(0, 0);

/// Enemy spawn cell (opposite corner)
pub const ENEMY_SPAWN: Position = Position::new(BOARD_SIZE as i8 - 1, BOARD_SIZE as i8 - 1);

/// Message reported when every treasure has been collected
pub const WIN_MESSAGE: &str = "Congratulations! You found all the treasures.";

/// Message reported when the player runs out of lives
pub const LOSE_MESSAGE: &str = "Game over!";


/// A cell coordinate on the board
///
/// `x` grows left to right, `y` grows top to bottom. Signed so that a step off
/// the edge is representable and can be rejected by [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check if the position lies within `[0, BOARD_SIZE)` on both axes
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i8 && self.y >= 0 && self.y < BOARD_SIZE as i8
    }

    /// Position one unit step away in `dir` (may be out of bounds)
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as `(dx, dy)`; exactly one axis is non-zero
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_chase_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// What a board cell holds
///
/// Actors (player, enemy) are not part of the grid; they are tracked as
/// positions on the round state and drawn on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Treasure,
}

/// Lifecycle of a round
///
/// `Idle` → `Running` → `Won` | `Lost`. The terminal states stay put until the
/// round is re-initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    #[default]
    Idle,
    Running,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Idle => "idle",
            RoundStatus::Running => "running",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by the input layer; the periodic enemy step is not an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the player one cell
    Move(Direction),
    /// Start an idle round, or restart a started one (Enter)
    Start,
    /// Re-initialize the round
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_chase_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Terminal result of a round, reported once when it is won or lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub message: &'static str,
    pub won: bool,
    pub score: u32,
}

impl Outcome {
    pub fn won(score: u32) -> Self {
        Self {
            message: WIN_MESSAGE,
            won: true,
            score,
        }
    }

    pub fn lost(score: u32) -> Self {
        Self {
            message: LOSE_MESSAGE,
            won: false,
            score,
        }
    }
}

//! Placement module - random round layouts
//!
//! Walls go down first, then treasures. Each one is drawn uniformly over the
//! whole board and redrawn while it lands on an occupied cell or on one of the
//! spawn cells. With 13 items on 225 cells the expected number of redraws is
//! tiny, so the loop carries no attempt cap.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::RandomSource;
use crate::types::{
    CellKind, Position, BOARD_SIZE, ENEMY_SPAWN, NUM_TREASURES, NUM_WALLS, PLAYER_SPAWN,
    START_LIVES,
};

/// Starting arrangement of a round
///
/// Produced by [`place_layout`] or written by hand for scripted rounds, then
/// loaded with [`GameState::from_layout`](crate::GameState::from_layout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub player: Position,
    pub enemy: Position,
    pub lives: u8,
    pub walls: ArrayVec<Position, NUM_WALLS>,
    pub treasures: ArrayVec<Position, NUM_TREASURES>,
}

impl Layout {
    /// Empty layout with actors on their spawn cells and full lives
    pub fn new() -> Self {
        Self {
            player: PLAYER_SPAWN,
            enemy: ENEMY_SPAWN,
            lives: START_LIVES,
            walls: ArrayVec::new(),
            treasures: ArrayVec::new(),
        }
    }

    pub fn with_player(mut self, pos: Position) -> Self {
        self.player = pos;
        self
    }

    pub fn with_enemy(mut self, pos: Position) -> Self {
        self.enemy = pos;
        self
    }

    pub fn with_lives(mut self, lives: u8) -> Self {
        self.lives = lives;
        self
    }

    /// Add a wall. Panics if more than `NUM_WALLS` are added.
    pub fn with_wall(mut self, pos: Position) -> Self {
        self.walls.push(pos);
        self
    }

    /// Add a treasure. Panics if more than `NUM_TREASURES` are added.
    pub fn with_treasure(mut self, pos: Position) -> Self {
        self.treasures.push(pos);
        self
    }

    /// Check the layout invariants
    pub fn validate(&self) -> Result<(), LayoutError> {
        for pos in [self.player, self.enemy]
            .iter()
            .chain(self.walls.iter())
            .chain(self.treasures.iter())
        {
            if !pos.in_bounds() {
                return Err(LayoutError::OutOfBounds(*pos));
            }
        }

        if self.lives == 0 || self.lives > START_LIVES {
            return Err(LayoutError::InvalidLives(self.lives));
        }
        if self.treasures.is_empty() {
            return Err(LayoutError::NoTreasures);
        }

        if self.player == self.enemy {
            return Err(LayoutError::Overlap(self.enemy));
        }

        let mut board = Board::new();
        for &wall in &self.walls {
            if wall == self.player || wall == self.enemy || !board.is_empty(wall) {
                return Err(LayoutError::Overlap(wall));
            }
            board.set(wall, CellKind::Wall);
        }
        for &treasure in &self.treasures {
            if treasure == self.player || treasure == self.enemy || !board.is_empty(treasure) {
                return Err(LayoutError::Overlap(treasure));
            }
            board.set(treasure, CellKind::Treasure);
        }

        Ok(())
    }

    /// Paint walls and treasures onto `board` (cleared first)
    pub fn write_board(&self, board: &mut Board) {
        board.clear();
        for &wall in &self.walls {
            board.set(wall, CellKind::Wall);
        }
        for &treasure in &self.treasures {
            board.set(treasure, CellKind::Treasure);
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

/// A hand-written layout that breaks a round invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("position ({}, {}) is outside the board", .0.x, .0.y)]
    OutOfBounds(Position),
    #[error("position ({}, {}) is already occupied", .0.x, .0.y)]
    Overlap(Position),
    #[error("lives must be between 1 and 3, got {0}")]
    InvalidLives(u8),
    #[error("a round needs at least one treasure")]
    NoTreasures,
}

/// Generate a fresh layout: `NUM_WALLS` walls, then `NUM_TREASURES` treasures
pub fn place_layout<R: RandomSource>(rng: &mut R) -> Layout {
    let mut layout = Layout::new();
    let mut board = Board::new();

    for _ in 0..NUM_WALLS {
        let pos = draw_free_cell(rng, &board, layout.player, layout.enemy);
        board.set(pos, CellKind::Wall);
        layout.walls.push(pos);
    }

    for _ in 0..NUM_TREASURES {
        let pos = draw_free_cell(rng, &board, layout.player, layout.enemy);
        board.set(pos, CellKind::Treasure);
        layout.treasures.push(pos);
    }

    layout
}

/// Rejection-sample an empty cell that is not a spawn cell
fn draw_free_cell<R: RandomSource>(
    rng: &mut R,
    board: &Board,
    player: Position,
    enemy: Position,
) -> Position {
    loop {
        let x = rng.next_range(BOARD_SIZE as u32) as i8;
        let y = rng.next_range(BOARD_SIZE as u32) as i8;
        let pos = Position::new(x, y);
        if board.is_empty(pos) && pos != player && pos != enemy {
            return pos;
        }
    }
}

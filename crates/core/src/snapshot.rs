use crate::types::{CellKind, Outcome, Position, RoundStatus, BOARD_SIZE, ENEMY_SPAWN, PLAYER_SPAWN};

/// Board grid as seen by renderers (`board[y][x]`)
pub type BoardGrid = [[CellKind; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Read-only copy of a round, handed to the renderer after every step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub board: BoardGrid,
    pub player: Position,
    pub enemy: Position,
    pub lives: u8,
    pub score: u32,
    pub treasures_left: u8,
    pub status: RoundStatus,
    pub outcome: Option<Outcome>,
    pub round_id: u32,
    pub ticks: u32,
    pub seed: u32,
}

impl RoundSnapshot {
    /// Reset to the idle, empty-board state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status == RoundStatus::Running && self.treasures_left > 0
    }

    /// False once the player has run out of lives (drawn in the "dead" colour)
    pub fn player_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn cell(&self, pos: Position) -> Option<CellKind> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.board[pos.y as usize][pos.x as usize])
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            board: [[CellKind::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            player: PLAYER_SPAWN,
            enemy: ENEMY_SPAWN,
            lives: 0,
            score: 0,
            treasures_left: 0,
            status: RoundStatus::Idle,
            outcome: None,
            round_id: 0,
            ticks: 0,
            seed: 0,
        }
    }
}

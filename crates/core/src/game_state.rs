//! Game state module - manages the complete round state
//!
//! This module ties together the board, the actors, the RNG and the placement
//! rules. It handles player moves, enemy pursuit, collisions, treasure pickup
//! and the round lifecycle. Every operation is synchronous and runs to
//! completion; callers serialize them (see the engine's command queue).

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::placement::{place_layout, Layout, LayoutError};
use crate::pursuit::next_enemy_step;
use crate::rng::SimpleRng;
use crate::snapshot::RoundSnapshot;
use crate::types::*;

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player: Position,
    enemy: Position,
    treasures: ArrayVec<Position, NUM_TREASURES>,
    lives: u8,
    score: u32,
    status: RoundStatus,
    /// Set once when the round reaches `Won` or `Lost`.
    outcome: Option<Outcome>,
    rng: SimpleRng,
    /// RNG state the current round's layout was drawn from.
    seed: u32,
    /// Monotonic round id (increments on every initialize).
    round_id: u32,
    /// Enemy advances applied in the current round.
    ticks: u32,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    ///
    /// Nothing is placed until [`GameState::initialize`] runs.
    pub fn new(seed: u32) -> Self {
        let rng = SimpleRng::new(seed);
        let seed = rng.state();

        Self {
            board: Board::new(),
            player: PLAYER_SPAWN,
            enemy: ENEMY_SPAWN,
            treasures: ArrayVec::new(),
            lives: START_LIVES,
            score: 0,
            status: RoundStatus::Idle,
            outcome: None,
            rng,
            seed,
            round_id: 0,
            ticks: 0,
        }
    }

    /// Create a running round from a hand-written layout
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let mut state = Self::new(1);
        state.round_id = 1;
        state.load_layout(layout);
        Ok(state)
    }

    /// Reset the round and draw a fresh layout
    ///
    /// Player back to (0, 0) with full lives and zero score, enemy back to
    /// the opposite corner. Works from any state, including `Won`/`Lost`.
    pub fn initialize(&mut self) {
        self.seed = self.rng.state();
        let layout = place_layout(&mut self.rng);
        self.round_id = self.round_id.wrapping_add(1);
        self.load_layout(&layout);

        tracing::info!(
            round = self.round_id,
            seed = self.seed,
            walls = layout.walls.len(),
            treasures = layout.treasures.len(),
            "round started"
        );
    }

    /// Re-initialize after a finished (or abandoned) round
    pub fn restart(&mut self) {
        tracing::debug!(round = self.round_id, status = self.status.as_str(), "restart requested");
        self.initialize();
    }

    fn load_layout(&mut self, layout: &Layout) {
        layout.write_board(&mut self.board);
        self.player = layout.player;
        self.enemy = layout.enemy;
        self.treasures = layout.treasures.clone();
        self.lives = layout.lives;
        self.score = 0;
        self.ticks = 0;
        self.outcome = None;
        self.status = RoundStatus::Running;
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn enemy(&self) -> Position {
        self.enemy
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn treasures(&self) -> &[Position] {
        &self.treasures
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves and enemy steps only apply to a running round with treasures left
    pub fn is_playable(&self) -> bool {
        self.status == RoundStatus::Running && !self.treasures.is_empty()
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        self.board.write_grid(&mut out.board);
        out.player = self.player;
        out.enemy = self.enemy;
        out.lives = self.lives;
        out.score = self.score;
        out.treasures_left = self.treasures.len() as u8;
        out.status = self.status;
        out.outcome = self.outcome;
        out.round_id = self.round_id;
        out.ticks = self.ticks;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply an input action
    ///
    /// `Start` initializes an idle game and restarts a started one.
    /// Returns the outcome when the action ends the round.
    pub fn apply_action(&mut self, action: GameAction) -> Option<Outcome> {
        match action {
            GameAction::Move(dir) => self.apply_player_move(dir),
            GameAction::Start if self.status == RoundStatus::Idle => {
                self.initialize();
                None
            }
            GameAction::Start | GameAction::Restart => {
                self.restart();
                None
            }
        }
    }

    /// Move the player one cell
    ///
    /// Out-of-bounds and wall targets are silently ignored. Stepping onto a
    /// treasure collects it; collecting the last one wins the round without
    /// moving. Landing on the enemy costs a life.
    pub fn apply_player_move(&mut self, dir: Direction) -> Option<Outcome> {
        if !self.is_playable() {
            return None;
        }

        let target = self.player.step(dir);
        if !self.board.is_walkable(target) {
            tracing::trace!(dir = dir.as_str(), x = target.x, y = target.y, "player move blocked");
            return None;
        }

        if self.board.is_treasure(target) && self.collect_treasure(target) {
            return Some(self.finish(Outcome::won(self.score)));
        }

        self.player = target;
        tracing::trace!(dir = dir.as_str(), x = target.x, y = target.y, "player moved");

        self.resolve_collision()
    }

    /// Advance the enemy one step toward the player
    ///
    /// Walls and the board edge block the step. A treasure cell also blocks
    /// it unless the player is standing there; the enemy then joins the
    /// player and the treasure stays where it is.
    pub fn advance_enemy(&mut self) -> Option<Outcome> {
        if !self.is_playable() {
            return None;
        }

        self.ticks = self.ticks.wrapping_add(1);

        if let Some(target) = next_enemy_step(self.enemy, self.player) {
            match self.board.get(target) {
                Some(CellKind::Empty) => self.enemy = target,
                Some(CellKind::Treasure) if target == self.player => self.enemy = target,
                _ => {
                    tracing::trace!(x = target.x, y = target.y, "enemy step blocked");
                }
            }
        }

        tracing::trace!(tick = self.ticks, x = self.enemy.x, y = self.enemy.y, "enemy advanced");
        self.resolve_collision()
    }

    /// Remove the treasure at `pos`, score it and clear the cell.
    /// Returns true when it was the last one.
    fn collect_treasure(&mut self, pos: Position) -> bool {
        let Some(idx) = self.treasures.iter().position(|&t| t == pos) else {
            return false;
        };

        self.treasures.remove(idx);
        self.board.set(pos, CellKind::Empty);
        self.score += 1;

        tracing::debug!(
            x = pos.x,
            y = pos.y,
            score = self.score,
            left = self.treasures.len(),
            "treasure collected"
        );

        self.treasures.is_empty()
    }

    /// Charge a life if player and enemy share a cell
    fn resolve_collision(&mut self) -> Option<Outcome> {
        if self.player != self.enemy {
            return None;
        }

        self.lives = self.lives.saturating_sub(1);
        tracing::debug!(lives = self.lives, x = self.player.x, y = self.player.y, "caught by enemy");

        if self.lives == 0 {
            return Some(self.finish(Outcome::lost(self.score)));
        }
        None
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.status = if outcome.won {
            RoundStatus::Won
        } else {
            RoundStatus::Lost
        };
        self.outcome = Some(outcome);

        tracing::info!(
            round = self.round_id,
            won = outcome.won,
            score = outcome.score,
            ticks = self.ticks,
            "round finished"
        );
        outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Pursuit module - the enemy's axis-priority heuristic
//!
//! Each tick the enemy closes the larger of the two gaps to the player by one
//! cell. Ties (including a zero gap on both axes) go to the y axis.

use crate::types::Position;

/// Axis the enemy chose to move along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Pick the axis: x only when `|dx| > |dy|`
pub fn choose_axis(enemy: Position, player: Position) -> Axis {
    let dx = (player.x as i16 - enemy.x as i16).abs();
    let dy = (player.y as i16 - enemy.y as i16).abs();
    if dx > dy {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Candidate enemy cell for this tick, before board validation
///
/// Returns `None` when the delta on the chosen axis is zero, which only
/// happens when the enemy already shares the player's cell.
pub fn next_enemy_step(enemy: Position, player: Position) -> Option<Position> {
    match choose_axis(enemy, player) {
        Axis::X => {
            let step = (player.x - enemy.x).signum();
            (step != 0).then(|| Position::new(enemy.x + step, enemy.y))
        }
        Axis::Y => {
            let step = (player.y - enemy.y).signum();
            (step != 0).then(|| Position::new(enemy.x, enemy.y + step))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_larger_x_gap_moves_horizontally() {
        let step = next_enemy_step(Position::new(5, 5), Position::new(8, 5));
        assert_eq!(step, Some(Position::new(6, 5)));

        let step = next_enemy_step(Position::new(5, 5), Position::new(1, 6));
        assert_eq!(step, Some(Position::new(4, 5)));
    }

    #[test]
    fn test_larger_y_gap_moves_vertically() {
        let step = next_enemy_step(Position::new(5, 5), Position::new(5, 2));
        assert_eq!(step, Some(Position::new(5, 4)));

        let step = next_enemy_step(Position::new(5, 5), Position::new(6, 9));
        assert_eq!(step, Some(Position::new(5, 6)));
    }

    #[test]
    fn test_tie_prefers_y_axis() {
        assert_eq!(choose_axis(Position::new(0, 0), Position::new(3, 3)), Axis::Y);
        let step = next_enemy_step(Position::new(4, 4), Position::new(1, 1));
        assert_eq!(step, Some(Position::new(4, 3)));
    }

    #[test]
    fn test_same_cell_is_no_movement() {
        assert_eq!(next_enemy_step(Position::new(7, 7), Position::new(7, 7)), None);
    }

    #[test]
    fn test_step_always_reduces_distance() {
        for ex in 0..15 {
            for ey in 0..15 {
                let enemy = Position::new(ex, ey);
                let player = Position::new(7, 3);
                let before = (player.x - enemy.x).abs() + (player.y - enemy.y).abs();
                match next_enemy_step(enemy, player) {
                    Some(next) => {
                        let after = (player.x - next.x).abs() + (player.y - next.y).abs();
                        assert_eq!(after, before - 1);
                        assert!(next.in_bounds());
                    }
                    None => assert_eq!(enemy, player),
                }
            }
        }
    }
}

//! Board module - manages the game grid
//!
//! The board is a 15x15 grid where each cell is empty, a wall or a treasure.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..14 (left to right), y ranges 0..14 (top to bottom)

use crate::types::{CellKind, Position, BOARD_SIZE};

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// The game board - 15 x 15 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [CellKind; CELL_COUNT],
}

impl Board {
    /// Create a new board with every cell empty
    pub fn new() -> Self {
        Self {
            cells: [CellKind::Empty; CELL_COUNT],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        Some((pos.y as usize) * (BOARD_SIZE as usize) + (pos.x as usize))
    }

    /// Get width (and height) of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: CellKind) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is in bounds and empty
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(CellKind::Empty))
    }

    /// Check if position is in bounds and holds a wall
    pub fn is_wall(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(CellKind::Wall))
    }

    /// Check if position is in bounds and holds a treasure
    pub fn is_treasure(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(CellKind::Treasure))
    }

    /// Check if an actor may stand on the position (in bounds, not a wall)
    pub fn is_walkable(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(CellKind::Empty | CellKind::Treasure))
    }

    /// Count cells of the given kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(CellKind::Empty);
    }

    /// Write the board into a fixed-size grid (row-major, `grid[y][x]`)
    pub fn write_grid(&self, out: &mut [[CellKind; BOARD_SIZE as usize]; BOARD_SIZE as usize]) {
        let size = BOARD_SIZE as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * size;
            row.copy_from_slice(&self.cells[start..start + size]);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(CellKind::Empty), CELL_COUNT);
        assert_eq!(board.size(), 15);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(Position::new(-1, 0)), None);
        assert_eq!(board.get(Position::new(0, 15)), None);
        assert_eq!(board.get(Position::new(14, 14)), Some(CellKind::Empty));
    }

    #[test]
    fn test_set_and_query() {
        let mut board = Board::new();
        assert!(board.set(Position::new(3, 4), CellKind::Wall));
        assert!(board.set(Position::new(5, 6), CellKind::Treasure));
        assert!(!board.set(Position::new(15, 0), CellKind::Wall));

        assert!(board.is_wall(Position::new(3, 4)));
        assert!(!board.is_walkable(Position::new(3, 4)));
        assert!(board.is_treasure(Position::new(5, 6)));
        assert!(board.is_walkable(Position::new(5, 6)));
        assert!(board.is_empty(Position::new(0, 0)));
        assert!(!board.is_walkable(Position::new(-1, 0)));
    }

    #[test]
    fn test_write_grid_is_row_major() {
        let mut board = Board::new();
        board.set(Position::new(2, 7), CellKind::Wall);

        let mut grid = [[CellKind::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        board.write_grid(&mut grid);
        assert_eq!(grid[7][2], CellKind::Wall);
        assert_eq!(grid[2][7], CellKind::Empty);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.set(Position::new(1, 1), CellKind::Wall);
        board.clear();
        assert_eq!(board.count(CellKind::Wall), 0);
    }
}

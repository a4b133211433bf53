//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is empty (`0`) or holds a tile whose
//! value is a power of two.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, CELL_COUNT, GRID_SIZE};

/// Coordinates of every empty cell, in row-major order
pub type EmptyCells = ArrayVec<(usize, usize), CELL_COUNT>;

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Values are taken as-is; use [`Board::is_well_formed`] to check them.
    pub fn from_rows(rows: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut cells = [0; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * GRID_SIZE..(r + 1) * GRID_SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Copy out the grid as rows (top row first)
    pub fn to_rows(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(self.row(r));
        }
        rows
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow one row (left to right)
    ///
    /// Panics if `r` is out of bounds.
    #[inline]
    pub fn row(&self, r: usize) -> &[Cell] {
        &self.cells[r * GRID_SIZE..(r + 1) * GRID_SIZE]
    }

    /// Mutably borrow one row (left to right)
    ///
    /// Panics if `r` is out of bounds.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [Cell] {
        &mut self.cells[r * GRID_SIZE..(r + 1) * GRID_SIZE]
    }

    /// Overwrite one row; false if `r` is out of bounds
    pub fn set_row(&mut self, r: usize, values: [Cell; GRID_SIZE]) -> bool {
        if r >= GRID_SIZE {
            return false;
        }
        self.row_mut(r).copy_from_slice(&values);
        true
    }

    /// Check if position is in bounds and empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(0))
    }

    /// Coordinates of all empty cells in row-major order
    pub fn empty_cells(&self) -> EmptyCells {
        let mut out = ArrayVec::new();
        for (idx, &cell) in self.cells.iter().enumerate() {
            if cell == 0 {
                out.push((idx / GRID_SIZE, idx % GRID_SIZE));
            }
        }
        out
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 0).count()
    }

    /// Number of occupied cells
    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn highest_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check whether any cell holds exactly `value`
    pub fn contains(&self, value: Cell) -> bool {
        self.cells.contains(&value)
    }

    /// Every cell is empty or a power of two >= 2
    pub fn is_well_formed(&self) -> bool {
        self.cells
            .iter()
            .all(|&c| c == 0 || (c >= 2 && c.is_power_of_two()))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{}", "-".repeat(GRID_SIZE * 7 - 1))?;
            }
            for (c, &cell) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                if cell == 0 {
                    write!(f, "{:^6}", ".")?;
                } else {
                    write!(f, "{:^6}", cell)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 3), Some(3));
        assert_eq!(Board::index(1, 0), Some(4));
        assert_eq!(Board::index(3, 3), Some(15));
        assert_eq!(Board::index(4, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, 2);
        board.set(2, 1, 8);

        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.get(2, 1), Some(8));

        assert_eq!(board.cells[0], 2);
        assert_eq!(board.cells[2 * 4 + 1], 8);
    }

    #[test]
    fn test_board_from_rows_roundtrip() {
        let rows = [[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 2048]];
        let board = Board::from_rows(rows);
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.row(3), &[32, 0, 0, 2048]);
    }

    #[test]
    fn test_set_row() {
        let mut board = Board::new();
        assert!(board.set_row(2, [2, 4, 8, 16]));
        assert_eq!(board.row(2), &[2, 4, 8, 16]);
        assert_eq!(board.get(2, 3), Some(16));
        assert!(!board.set_row(4, [2; 4]));
        assert_eq!(board.count_tiles(), 4);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 0], [0, 2, 2, 2]]);
        let empty = board.empty_cells();
        assert_eq!(empty.as_slice(), &[(1, 1), (2, 3), (3, 0)]);
        assert_eq!(board.count_empty(), 3);
        assert_eq!(board.count_tiles(), 13);
    }

    #[test]
    fn test_well_formed() {
        assert!(Board::new().is_well_formed());
        assert!(Board::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]).is_well_formed());
        assert!(!Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_well_formed());
        assert!(!Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_well_formed());
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
        let text = board.to_string();
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("2048"));
        assert!(text.lines().next().is_some_and(|l| l.contains('.')));
    }
}

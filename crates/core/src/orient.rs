//! Orientation normalizer - maps every direction onto a left slide
//!
//! The row reducer only slides toward column 0. Before a move the board is
//! turned so the requested direction points left, and afterwards the inverse
//! transform puts it back:
//!
//! | Direction | Before | After |
//! |-----------|--------|-------|
//! | Left  | identity | identity |
//! | Right | reverse  | reverse  |
//! | Up    | rotate x3 | rotate x1 |
//! | Down  | rotate x1 | rotate x3 |
//!
//! `rotate` is a quarter turn clockwise (`out[c][N-1-r] = in[r][c]`), so a
//! clockwise turn brings the bottom edge to the left and three turns bring the
//! top edge there.

use crate::board::Board;
use crate::types::{Direction, GRID_SIZE};

/// Quarter turn clockwise: `out[c][N-1-r] = in[r][c]`
pub fn rotate(board: &Board) -> Board {
    let mut out = Board::new();
    for r in 0..GRID_SIZE {
        for (c, &cell) in board.row(r).iter().enumerate() {
            out.row_mut(c)[GRID_SIZE - 1 - r] = cell;
        }
    }
    out
}

/// Mirror every row left-right
pub fn reverse(board: &Board) -> Board {
    let mut out = *board;
    for r in 0..GRID_SIZE {
        out.row_mut(r).reverse();
    }
    out
}

/// A board transform: some clockwise quarter turns, or a mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    Mirror,
    Rotate(u8),
}

impl Transform {
    /// Transform that makes `direction` slide toward column 0
    pub fn normalizing(direction: Direction) -> Self {
        match direction {
            Direction::Left => Transform::Identity,
            Direction::Right => Transform::Mirror,
            Direction::Up => Transform::Rotate(3),
            Direction::Down => Transform::Rotate(1),
        }
    }

    /// Transform that undoes [`Transform::normalizing`] for `direction`
    pub fn restoring(direction: Direction) -> Self {
        Self::normalizing(direction).inverse()
    }

    /// The transform that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Transform::Identity => Transform::Identity,
            Transform::Mirror => Transform::Mirror,
            Transform::Rotate(n) => Transform::Rotate((4 - n % 4) % 4),
        }
    }

    /// Apply this transform to a board
    pub fn apply(self, board: &Board) -> Board {
        match self {
            Transform::Identity => *board,
            Transform::Mirror => reverse(board),
            Transform::Rotate(n) => {
                let mut out = *board;
                for _ in 0..n % 4 {
                    out = rotate(&out);
                }
                out
            }
        }
    }
}

/// Turn `board` so that `direction` becomes a left slide
pub fn normalize(board: &Board, direction: Direction) -> Board {
    Transform::normalizing(direction).apply(board)
}

/// Undo [`normalize`] for the same direction
pub fn denormalize(board: &Board, direction: Direction) -> Board {
    Transform::restoring(direction).apply(board)
}

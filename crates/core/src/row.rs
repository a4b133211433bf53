//! Row reducer - slides and merges a single row toward index 0
//!
//! Every direction is normalized to a left slide before it reaches this module,
//! so the reducer only knows one orientation. It works on slices of any
//! length; the board hands it rows of `GRID_SIZE` cells.
//!
//! A reduction is `compress`, `merge`, `compress`:
//!
//! ```text
//! [2, 0, 2, 4] -> compress -> [2, 2, 4, 0]
//!              -> merge    -> [4, 0, 4, 0]   (+4)
//!              -> compress -> [4, 4, 0, 0]
//! ```

use crate::types::{Cell, CELL_COUNT};

/// Outcome of reducing one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowReduction {
    /// Sum of the tiles created by merges
    pub score: u32,
    /// Number of merges performed
    pub merges: u32,
    /// The row differs element-wise from its input
    pub changed: bool,
}

/// Slide non-zero cells to the front, preserving order, and zero-fill the rest
pub fn compress(row: &mut [Cell]) {
    let mut write = 0;
    for read in 0..row.len() {
        if row[read] != 0 {
            row[write] = row[read];
            write += 1;
        }
    }
    for cell in &mut row[write..] {
        *cell = 0;
    }
}

/// Single left-to-right sweep merging equal neighbours
///
/// The right cell of a merged pair becomes 0, so the doubled tile is never
/// compared again in the same sweep: `[2, 2, 2, 2]` becomes `[4, 0, 4, 0]`.
/// Returns `(score, merges)`.
pub fn merge(row: &mut [Cell]) -> (u32, u32) {
    let mut score = 0u32;
    let mut merges = 0u32;
    for i in 1..row.len() {
        if row[i - 1] != 0 && row[i - 1] == row[i] {
            row[i - 1] = row[i - 1].saturating_mul(2);
            row[i] = 0;
            score = score.saturating_add(row[i - 1]);
            merges += 1;
        }
    }
    (score, merges)
}

/// Full reduction of one row in place
pub fn reduce_row(row: &mut [Cell]) -> RowReduction {
    // Rows never exceed the cell count; keep the copy on the stack.
    let mut before: [Cell; CELL_COUNT] = [0; CELL_COUNT];
    let len = row.len();
    debug_assert!(len <= before.len());
    before[..len].copy_from_slice(row);

    compress(row);
    let (score, merges) = merge(row);
    compress(row);

    RowReduction {
        score,
        merges,
        changed: before[..len] != *row,
    }
}

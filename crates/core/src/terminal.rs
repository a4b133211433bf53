//! Terminal evaluator - win and no-moves-left checks

use crate::board::Board;
use crate::types::{GRID_SIZE, WIN_TILE};

/// True if some horizontally or vertically adjacent pair holds equal tiles
pub fn has_adjacent_pair(board: &Board) -> bool {
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let Some(cell) = board.get(r, c).filter(|&v| v != 0) else {
                continue;
            };
            if board.get(r, c + 1) == Some(cell) || board.get(r + 1, c) == Some(cell) {
                return true;
            }
        }
    }
    false
}

/// True if any move could still change the board
///
/// On a full board only an adjacent equal pair can satisfy this.
pub fn can_move(board: &Board) -> bool {
    board.count_empty() > 0 || has_adjacent_pair(board)
}

/// True if the winning tile is on the board
pub fn has_win_tile(board: &Board) -> bool {
    board.contains(WIN_TILE)
}

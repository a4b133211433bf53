//! Spawner - places a new tile on a uniformly chosen empty cell

use crate::board::Board;
use crate::rng::RandomSource;
use crate::types::{
    Cell, SpawnedTile, SPAWN_HIGH_ODDS, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE, SPAWN_ODDS_DENOMINATOR,
};

/// Pick the value of a new tile: 2 nine times out of ten, otherwise 4
pub fn spawn_value<R: RandomSource + ?Sized>(rng: &mut R) -> Cell {
    if rng.next_range(SPAWN_ODDS_DENOMINATOR) < SPAWN_HIGH_ODDS {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

/// Place a random tile on a random empty cell.
///
/// Draws the cell first, then the value. A full board is left untouched and
/// no randomness is consumed.
pub fn add_random_tile<R: RandomSource + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let pick = rng.next_range(empty.len() as u32) as usize;
    let (row, col) = empty[pick];
    let value = spawn_value(rng);
    board.set(row, col, value);

    log::trace!("spawned {} at ({}, {})", value, row, col);
    Some(SpawnedTile { row, col, value })
}

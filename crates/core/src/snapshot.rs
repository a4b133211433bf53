use crate::types::{Cell, GRID_SIZE};

/// FNV-1a 64-bit over the grid cells, row-major, little-endian bytes.
pub fn board_hash(grid: &[[Cell; GRID_SIZE]; GRID_SIZE]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in grid.iter().flatten().flat_map(|c| c.to_le_bytes()) {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub board_hash: u64,
    pub score: u32,
    pub won: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub moves: u32,
    pub highest_tile: Cell,
}

impl GameSnapshot {
    /// Replace the grid and keep `board_hash` in sync
    pub fn set_grid(&mut self, grid: [[Cell; GRID_SIZE]; GRID_SIZE]) {
        self.grid = grid;
        self.board_hash = board_hash(&self.grid);
    }

    pub fn clear(&mut self) {
        self.set_grid([[0; GRID_SIZE]; GRID_SIZE]);
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.episode_id = 0;
        self.moves = 0;
        self.highest_tile = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            board_hash: 0,
            score: 0,
            won: false,
            game_over: false,
            episode_id: 0,
            moves: 0,
            highest_tile: 0,
        };
        s.clear();
        s
    }
}

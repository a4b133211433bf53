//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, adapter protocol, benchmarks).
//!
//! # Grid Dimensions
//!
//! The playfield is a square grid:
//!
//! - **Size**: 4x4 cells (rows and columns indexed 0-3)
//! - **Storage**: row-major, `row * GRID_SIZE + col`
//! - **Empty cell**: value `0`
//!
//! # Tile Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_TILE` | 2048 | Reaching this tile sets the (sticky) won flag |
//! | `SPAWN_LOW_VALUE` | 2 | Tile placed 9 times out of 10 |
//! | `SPAWN_HIGH_VALUE` | 4 | Tile placed 1 time out of 10 |
//! | `STARTING_TILES` | 2 | Tiles placed by a new game |
//!
//! # Examples
//!
//! ```
//! use tile_2048_types::{Direction, GRID_SIZE, WIN_TILE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! // Unknown names are rejected rather than guessed
//! assert_eq!(Direction::from_str("sideways"), None);
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Grid side length in cells (4 rows x 4 columns)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: Cell = 2048;

/// Value of a regular spawned tile
pub const SPAWN_LOW_VALUE: Cell = 2;

/// Value of a rare spawned tile
pub const SPAWN_HIGH_VALUE: Cell = 4;

/// Out of `SPAWN_ODDS_DENOMINATOR` spawns, this many place `SPAWN_HIGH_VALUE`
pub const SPAWN_HIGH_ODDS: u32 = 1;

/// Denominator for the spawn value odds (1 in 10 spawns is a 4)
pub const SPAWN_ODDS_DENOMINATOR: u32 = 10;

/// Number of tiles placed when a game starts
pub const STARTING_TILES: usize = 2;

/// A cell on the game grid
///
/// - `0`: Empty cell
/// - `2, 4, 8, ...`: Tile with that value (always a power of two)
pub type Cell = u32;

/// Direction of a move
///
/// Every tile slides as far as it can toward the named edge, merging with an
/// equal neighbour at most once per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in protocol order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("D"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Direction pointing the other way.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Core-side event emitted after an accepted move.
///
/// Rejected moves (nothing slid or merged) do not produce an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub direction: Direction,
    /// Sum of the tiles created by merges in this move.
    pub score_delta: u32,
    /// Number of merges performed.
    pub merges: u32,
    /// Tile added after the slide (`None` only if the board had no room).
    pub spawned: Option<SpawnedTile>,
}

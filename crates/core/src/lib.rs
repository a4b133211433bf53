//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and move
//! resolution. It has **no dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same random source produces identical games
//! - **Testable**: Unit tests for every rule, scripted randomness for spawns
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Stack-only boards and zero-allocation moves
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with empty-cell queries
//! - [`row`]: compress/merge/compress reduction of a single row
//! - [`orient`]: rotate/reverse transforms mapping every direction to a left slide
//! - [`spawn`]: random tile placement (2 at 90%, 4 at 10%)
//! - [`terminal`]: win tile and no-moves-left checks
//! - [`rng`]: injected random sources (seeded LCG, scripted)
//! - [`game_state`]: complete game state and move orchestration
//! - [`snapshot`]: plain copyable view for observers
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours merge once
//! - A move that changes nothing is ignored (no spawn, no score)
//! - Each accepted move spawns one tile and adds the merged values to the score
//! - Reaching 2048 sets a sticky won flag; play continues
//! - A full board with no equal neighbours ends the game
//!
//! # Example
//!
//! ```
//! use tile_2048_core::GameState;
//! use tile_2048_types::Direction;
//!
//! // Create a game (two starting tiles)
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().count_tiles(), 2);
//!
//! // Apply moves; rejected moves return false and change nothing
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.apply_move(dir);
//! }
//!
//! assert!(game.board().is_well_formed());
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod orient;
pub mod rng;
pub mod row;
pub mod snapshot;
pub mod spawn;
pub mod terminal;

pub use tile_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, EmptyCells};
pub use game_state::{shift, GameState, Shift};
pub use orient::{denormalize, normalize, reverse, rotate, Transform};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use row::{compress, merge, reduce_row, RowReduction};
pub use snapshot::{board_hash, GameSnapshot};
pub use spawn::{add_random_tile, spawn_value};
pub use terminal::{can_move, has_adjacent_pair, has_win_tile};

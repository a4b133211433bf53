//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, orientation
//! normalizer, row reducer, spawner and terminal evaluator. It owns the
//! score, the won/game-over flags and the game lifecycle.
//!
//! A move runs to completion in one call:
//!
//! 1. ignored if the game is over
//! 2. board turned so the direction becomes a left slide
//! 3. every row reduced; nothing changed means the move is rejected and no
//!    state is touched
//! 4. board turned back, one tile spawned, score added
//! 5. win flag set if the winning tile exists (sticky)
//! 6. game over set if no move can change the board any more

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::orient::{denormalize, normalize};
use crate::rng::{RandomSource, SimpleRng};
use crate::row::reduce_row;
use crate::snapshot::GameSnapshot;
use crate::spawn::add_random_tile;
use crate::terminal::{can_move, has_win_tile};
use crate::types::*;

/// Result of sliding a board without spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub board: Board,
    pub score: u32,
    pub merges: u32,
    pub changed: bool,
}

/// Slide and merge every tile toward `direction` (no random insert)
///
/// ```
/// use tile_2048_core::{shift, Board};
/// use tile_2048_core::types::Direction;
///
/// let board = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
/// let left = shift(&board, Direction::Left);
/// assert_eq!(left.board.row(0), &[4, 4, 0, 0]);
/// assert_eq!(left.score, 8);
///
/// let right = shift(&board, Direction::Right);
/// assert_eq!(right.board.row(0), &[0, 0, 4, 4]);
/// ```
pub fn shift(board: &Board, direction: Direction) -> Shift {
    let mut work = normalize(board, direction);
    let mut score = 0u32;
    let mut merges = 0u32;
    let mut changed = false;

    for r in 0..GRID_SIZE {
        let reduced = reduce_row(work.row_mut(r));
        score = score.saturating_add(reduced.score);
        merges += reduced.merges;
        changed |= reduced.changed;
    }

    if !changed {
        return Shift {
            board: *board,
            score: 0,
            merges: 0,
            changed: false,
        };
    }

    Shift {
        board: denormalize(&work, direction),
        score,
        merges,
        changed,
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    rng: R,
    score: u32,
    won: bool,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Accepted moves in the current episode.
    moves: u32,
    /// Last accepted move (consumed by observers).
    last_event: Option<MoveEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing spawns from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            rng,
            score: 0,
            won: false,
            game_over: false,
            episode_id: 0,
            moves: 0,
            last_event: None,
        };
        state.reset();
        state
    }

    /// Continue from an existing position with a zero score
    ///
    /// Flags are evaluated immediately, so a stuck board starts out game over.
    /// Cells are not validated; see [`Board::is_well_formed`].
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            won: has_win_tile(&board),
            game_over: !can_move(&board),
            board,
            rng,
            score: 0,
            episode_id: 0,
            moves: 0,
            last_event: None,
        }
    }

    /// Start a new game: empty board, zero score, cleared flags, two tiles
    ///
    /// The random source keeps its position, so restarts stay reproducible.
    pub fn init_game(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.reset();
        log::info!("new game (episode {})", self.episode_id);
    }

    fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.moves = 0;
        self.last_event = None;
        for _ in 0..STARTING_TILES {
            add_random_tile(&mut self.board, &mut self.rng);
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Game is still accepting moves
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the grid as rows (top row first)
    pub fn grid(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        self.board.to_rows()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Take the event recorded by the last accepted move
    pub fn take_last_event(&mut self) -> Option<MoveEvent> {
        self.last_event.take()
    }

    /// Directions that would change the board, in [`Direction::ALL`] order
    pub fn legal_moves(&self) -> ArrayVec<Direction, 4> {
        if self.game_over {
            return ArrayVec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&dir| shift(&self.board, dir).changed)
            .collect()
    }

    /// Attempt a move.
    ///
    /// Returns true if the board changed. A rejected move (game over, or
    /// nothing can slide or merge that way) leaves the state untouched.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            log::debug!("move {} ignored: game over", direction.as_str());
            return false;
        }

        let shifted = shift(&self.board, direction);
        if !shifted.changed {
            log::debug!("move {} rejected: board unchanged", direction.as_str());
            return false;
        }

        let mut board = shifted.board;
        let spawned = add_random_tile(&mut board, &mut self.rng);

        self.board = board;
        self.score = self.score.saturating_add(shifted.score);
        self.moves = self.moves.wrapping_add(1);
        self.last_event = Some(MoveEvent {
            direction,
            score_delta: shifted.score,
            merges: shifted.merges,
            spawned,
        });

        if !self.won && has_win_tile(&self.board) {
            self.won = true;
            log::info!("reached {} after {} moves", WIN_TILE, self.moves);
        }

        if !can_move(&self.board) {
            self.game_over = true;
            log::info!(
                "game over: score {} after {} moves, highest tile {}",
                self.score,
                self.moves,
                self.board.highest_tile()
            );
        }

        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.set_grid(self.board.to_rows());
        out.score = self.score;
        out.won = self.won;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.highest_tile = self.board.highest_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

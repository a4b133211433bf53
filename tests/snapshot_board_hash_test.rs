use tile_2048::core::{Board, GameSnapshot, GameState, ScriptedRng};
use tile_2048::types::{Direction, GRID_SIZE};

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_grid(grid: &[[u32; GRID_SIZE]; GRID_SIZE]) -> u64 {
    fnv1a64_bytes(grid.iter().flatten().flat_map(|c| c.to_le_bytes()))
}

#[test]
fn snapshot_into_sets_board_hash() {
    let mut gs = GameState::new(1);

    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_grid(&snap.grid));

    for dir in Direction::ALL {
        gs.apply_move(dir);
        gs.snapshot_into(&mut snap);
        assert_eq!(snap.board_hash, fnv1a64_grid(&snap.grid));
    }
}

#[test]
fn snapshot_reuse_overwrites_previous_state() {
    let a = GameState::new(5);
    let b = GameState::new(6);

    let mut snap = GameSnapshot::default();
    a.snapshot_into(&mut snap);
    b.snapshot_into(&mut snap);
    assert_eq!(snap, b.snapshot());
}

#[test]
fn rejected_move_keeps_hash() {
    let board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut gs = GameState::from_board(board, ScriptedRng::new(vec![0, 9]));
    let before = gs.snapshot().board_hash;

    assert!(!gs.apply_move(Direction::Left));
    assert_eq!(gs.snapshot().board_hash, before);

    assert!(gs.apply_move(Direction::Right));
    assert_ne!(gs.snapshot().board_hash, before);
}

#[test]
fn score_does_not_change_board_hash() {
    let mut a = GameSnapshot::default();
    let mut b = GameSnapshot::default();
    a.score = 10;
    b.score = 9000;
    assert_eq!(a.board_hash, b.board_hash);
}

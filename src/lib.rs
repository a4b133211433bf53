//! 2048 rule engine (workspace facade crate).
//!
//! This package exposes `tile_2048::{core,adapter,types}` as one public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tile_2048_adapter as adapter;
pub use tile_2048_core as core;
pub use tile_2048_types as types;

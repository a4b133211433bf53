//! Adapter module - line-delimited JSON control of a game session
//!
//! This module lets an external program (a UI, a bot, a test harness) drive a
//! game through any byte stream. The binary wires it to stdin/stdout.
//!
//! # Protocol Overview
//!
//! One JSON object per line in each direction:
//!
//! 1. **Command**: client sends an action (`up`, `down`, `left`, `right`, `restart`)
//! 2. **Observation**: engine answers with the full state and the move result
//! 3. **Snapshot**: client may ask for an observation without moving
//! 4. **Error**: malformed lines, unknown actions and unknown message types
//!
//! A move that cannot change the board is not an error; the observation
//! reports it with `"moved": false`.
//!
//! # Environment Variables
//!
//! - `TILE2048_SEED`: RNG seed (default: 1)
//! - `TILE2048_PRETTY`: echo replies as pretty JSON in the debug log (the wire stays one line per message)
//! - `TILE2048_LOG_BOARD`: log the grid after every move
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Engine: {"type":"snapshot","seq":1}
//! Engine -> Client: {"type":"observation","seq":1,"ts":1700000000000,"playable":true,...}
//! Client -> Engine: {"type":"command","seq":2,"action":"left"}
//! Engine -> Client: {"type":"observation","seq":2,...,"last_event":{"action":"left","moved":true,...}}
//! Client -> Engine: {"type":"command","seq":3,"action":"sideways"}
//! Engine -> Client: {"type":"error","seq":3,"ts":1700000000001,"code":"invalid_command","message":"unknown action: sideways"}
//! ```
//!
//! - See [`protocol`] for message structure definitions
//! - See [`session`] for the read/apply/reply loop

pub mod config;
pub mod protocol;
pub mod session;

pub use tile_2048_core as core;
pub use tile_2048_types as types;

// Re-export protocol types for convenience
pub use config::SessionConfig;
pub use protocol::*;
pub use session::{Reply, Session};

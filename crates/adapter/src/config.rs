//! Session configuration
//!
//! Defaults can be overridden through environment variables:
//!
//! - `TILE2048_SEED`: RNG seed (default: 1)
//! - `TILE2048_PRETTY`: "1" or "true" to log replies as pretty JSON at debug level
//! - `TILE2048_LOG_BOARD`: "1" or "true" to log the grid after every move

use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub pretty: bool,
    pub log_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            pretty: false,
            log_board: false,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (environment, test fixtures)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("TILE2048_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let pretty = lookup("TILE2048_PRETTY")
            .map(|v| is_truthy(&v))
            .unwrap_or(defaults.pretty);

        let log_board = lookup("TILE2048_LOG_BOARD")
            .map(|v| is_truthy(&v))
            .unwrap_or(defaults.log_board);

        Self {
            seed,
            pretty,
            log_board,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

//! Construction-time settings for positions and the key table.
//!
//! Defaults are fixed so hashes are reproducible across runs. `from_env`
//! lets tools override them without recompiling.

use log::warn;

use crate::game_state::chess_rules::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
use crate::search::zobrist::DEFAULT_ZOBRIST_SEED;

pub const HISTORY_CAPACITY_ENV: &str = "PLUM_HISTORY_CAPACITY";
pub const ZOBRIST_SEED_ENV: &str = "PLUM_ZOBRIST_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionConfig {
    /// Maximum number of undo frames (game length plus search depth), at most
    /// `MAX_HISTORY_CAPACITY`.
    pub history_capacity: usize,
    /// Seed for the process-wide Zobrist table. Only the first initialization wins.
    pub zobrist_seed: u64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
        }
    }
}

impl PositionConfig {
    /// Defaults overridden by `PLUM_HISTORY_CAPACITY` and `PLUM_ZOBRIST_SEED`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(HISTORY_CAPACITY_ENV) {
            match parse_capacity(&value) {
                Some(capacity) => config.history_capacity = capacity,
                None => warn!("ignoring {HISTORY_CAPACITY_ENV}={value:?}: expected a positive integer"),
            }
        }

        if let Ok(value) = std::env::var(ZOBRIST_SEED_ENV) {
            match parse_seed(&value) {
                Some(seed) => config.zobrist_seed = seed,
                None => warn!("ignoring {ZOBRIST_SEED_ENV}={value:?}: expected decimal or 0x-prefixed hex"),
            }
        }

        config
    }
}

fn parse_capacity(value: &str) -> Option<usize> {
    let capacity = value.trim().parse::<usize>().ok().filter(|&c| c > 0)?;
    if capacity > MAX_HISTORY_CAPACITY {
        warn!("clamping {HISTORY_CAPACITY_ENV}={capacity} to {MAX_HISTORY_CAPACITY}");
        return Some(MAX_HISTORY_CAPACITY);
    }
    Some(capacity)
}

fn parse_seed(value: &str) -> Option<u64> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16).ok(),
        None => value.replace('_', "").parse::<u64>().ok(),
    }
}

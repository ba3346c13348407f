//! Game Rules Configuration
//!
//! The pool range, pick count and win threshold are fixed for the lifetime
//! of a game but tunable per game, so hosts can deserialize them from a
//! request instead of relying on compiled-in literals.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Tunable rules for a selection game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Numbers available for picking: the pool is `1..=pool_size` (default: 10)
    pub pool_size: u8,
    /// How many numbers the player must pick before drawing (default: 5)
    pub max_selection: u8,
    /// Minimum match count reported as a win (default: 3)
    pub match_threshold: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { pool_size: 10, max_selection: 5, match_threshold: 3 }
    }
}

impl GameConfig {
    /// Check internal consistency. A draw must be able to produce
    /// `max_selection` unique pool members.
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(GameError::InvalidConfig("pool_size must be at least 1".to_string()));
        }
        if self.max_selection == 0 {
            return Err(GameError::InvalidConfig("max_selection must be at least 1".to_string()));
        }
        if self.max_selection > self.pool_size {
            return Err(GameError::InvalidConfig(format!(
                "max_selection {} exceeds pool_size {}",
                self.max_selection, self.pool_size
            )));
        }
        if self.match_threshold > self.max_selection {
            return Err(GameError::InvalidConfig(format!(
                "match_threshold {} exceeds max_selection {}",
                self.match_threshold, self.max_selection
            )));
        }
        Ok(())
    }

    /// The full selectable range.
    pub fn pool(&self) -> std::ops::RangeInclusive<u8> {
        1..=self.pool_size
    }

    /// Whether `number` is a pool member.
    pub fn contains(&self, number: u8) -> bool {
        number >= 1 && number <= self.pool_size
    }
}

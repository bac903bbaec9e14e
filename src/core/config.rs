//! Rule configuration.
//!
//! `GameConfig` holds the numeric limits of the game. The defaults are the
//! standard rules; builder methods exist so tests and variants can tighten or
//! relax individual limits without touching the engine.

use serde::{Deserialize, Serialize};

/// Numeric limits of a game. Carried by every world.
///
/// ## Usage
///
/// ```
/// use shephy::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.field_capacity, 7);
/// assert_eq!(config.hand_capacity, 5);
///
/// let small = GameConfig::default().with_field_capacity(4);
/// assert_eq!(small.field_capacity, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum sheep cards in the field.
    pub field_capacity: usize,

    /// Maximum event cards in hand.
    pub hand_capacity: usize,

    /// Sheep cards printed per rank (the rank-1 pile starts one short
    /// because that card begins in the field).
    pub sheep_per_rank: usize,

    /// Factor applied to the enemy counter on every deck remake.
    pub enemy_growth: u32,

    /// Enemy counter value at which the game is lost.
    pub enemy_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_capacity: 7,
            hand_capacity: 5,
            sheep_per_rank: 7,
            enemy_growth: 10,
            enemy_limit: 1000,
        }
    }
}

impl GameConfig {
    /// Set the field capacity.
    #[must_use]
    pub fn with_field_capacity(mut self, capacity: usize) -> Self {
        self.field_capacity = capacity;
        self
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    /// Set the number of sheep cards per rank.
    #[must_use]
    pub fn with_sheep_per_rank(mut self, count: usize) -> Self {
        self.sheep_per_rank = count;
        self
    }

    /// Set the enemy growth factor and losing threshold.
    #[must_use]
    pub fn with_enemy(mut self, growth: u32, limit: u32) -> Self {
        self.enemy_growth = growth;
        self.enemy_limit = limit;
        self
    }
}

//! Terminal-state detection.
//!
//! The basic rules stop offering moves exactly when [`terminal_result`]
//! returns `Some`, so a node with no moves always has a verdict.

use serde::{Deserialize, Serialize};

use crate::core::{Rank, World};

/// Why a game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// The enemy counter reached its limit.
    EnemyFlock,
    /// No sheep left in the field.
    NoSheep,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Lose(LossReason),
}

impl GameResult {
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, GameResult::Win)
    }

    /// Message for the player.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            GameResult::Win => "You win!",
            GameResult::Lose(LossReason::EnemyFlock) => {
                "Your rival has gathered a thousand sheep. You lose."
            }
            GameResult::Lose(LossReason::NoSheep) => "You have lost all of your sheep. You lose.",
        }
    }
}

/// Outcome of `world` if the game is over, `None` otherwise.
///
/// Checked in order: a 1000 sheep in the field wins, then the enemy limit
/// loses, then an empty field loses.
#[must_use]
pub fn terminal_result(world: &World) -> Option<GameResult> {
    if world.field.iter().any(|card| card.rank() == Some(Rank::MAX)) {
        return Some(GameResult::Win);
    }
    if world.enemy_sheep_count >= world.config.enemy_limit {
        return Some(GameResult::Lose(LossReason::EnemyFlock));
    }
    if world.field.is_empty() {
        return Some(GameResult::Lose(LossReason::NoSheep));
    }
    None
}

/// Judge a finished game.
///
/// Panics if the game is not over; only call it on a node with no moves.
#[must_use]
pub fn judge_game(world: &World) -> GameResult {
    match terminal_result(world) {
        Some(result) => {
            tracing::debug!(?result, "game over");
            result
        }
        None => panic!(
            "judge_game called on a running game (field {}, enemy {})",
            world.field.len(),
            world.enemy_sheep_count
        ),
    }
}

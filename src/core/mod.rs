//! Core game types: ranks, cards, world, RNG, configuration, errors.
//!
//! Everything here is independent of how moves are generated. The world and
//! its mutation primitives are the only way regions change.

pub mod card;
pub mod config;
pub mod error;
pub mod rank;
pub mod rng;
pub mod world;

pub use card::{Card, CardId, CardKind, EventCard};
pub use config::GameConfig;
pub use error::{Result, ShephyError};
pub use rank::{composite_ranks, drop_rank, raise_rank, Rank};
pub use rng::{GameRng, GameRngState};
pub use world::{Region, World};

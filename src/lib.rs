//! # shephy
//!
//! Rule engine for Shephy, a solitaire card game about growing a flock of
//! sheep to a thousand before a rival flock does.
//!
//! ## Design
//!
//! - **Lazy game tree**: every decision point is a [`GameTree`] whose moves
//!   compute their successor node on first use and cache it.
//!
//! - **Persistent worlds**: regions are `im` vectors, so each move clones the
//!   world in O(1) and earlier nodes stay valid.
//!
//! - **Card state machine**: a card being resolved is described by a
//!   [`Resolution`]; the card's handler maps a world and that state to the
//!   next moves.
//!
//! ## Modules
//!
//! - `core`: ranks, cards, the world and its primitives, RNG, configuration
//! - `rules`: basic rules, the game tree, the judge, random playouts
//! - `effects`: event card handlers

pub mod core;
pub mod effects;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    composite_ranks, drop_rank, raise_rank, Card, CardId, CardKind, EventCard, GameConfig,
    GameRng, GameRngState, Rank, Region, Result, ShephyError, World,
};

pub use crate::effects::{Resolution, Selection};

pub use crate::rules::{
    judge_game, list_possible_moves, make_game_tree, make_initial_world, random_playout,
    CardTarget, Deferred, GameResult, GameTree, LossReason, Move, MoveList,
};

//! Error types.
//!
//! Only recoverable conditions live here: bad input from outside the engine
//! and invariant reports. Contract violations inside the engine (an index past
//! the end of a region, judging a game that is still running) panic instead.

use thiserror::Error;

use super::card::CardId;
use super::rank::Rank;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShephyError {
    #[error("{0} is not a sheep rank (expected one of 1, 3, 10, 30, 100, 300, 1000)")]
    NotARank(u32),

    #[error("Unknown event card: {0:?}")]
    UnknownCard(String),

    #[error("Rank {rank} holds {found} cards across stock, field and exile, expected {expected}")]
    SheepNotConserved { rank: Rank, expected: usize, found: usize },

    #[error("Card {0} appears in more than one region")]
    DuplicateCard(CardId),

    #[error("Field holds {found} cards, capacity is {capacity}")]
    FieldOverflow { found: usize, capacity: usize },

    #[error("Hand holds {found} cards, capacity is {capacity}")]
    HandOverflow { found: usize, capacity: usize },

    #[error("World holds {found} event cards, expected {expected}")]
    EventsNotConserved { expected: usize, found: usize },

    #[error("Card {card} of the wrong kind in {region}")]
    MisplacedCard { card: CardId, region: String },
}

pub type Result<T> = std::result::Result<T, ShephyError>;

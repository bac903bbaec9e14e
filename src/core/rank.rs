//! The sheep rank ladder: 1, 3, 10, 30, 100, 300, 1000.
//!
//! The ladder alternates between ×3 and ×10/3 steps, so it is neither
//! geometric nor decimal. Stepping uses the divisibility-by-3 case split
//! rather than a lookup table:
//!
//! - down: `r / 3` if `r % 3 == 0`, else `r * 3 / 10`
//! - up: `r * 10 / 3` if `r % 3 == 0`, else `r * 3`
//!
//! ```
//! use shephy::core::{composite_ranks, Rank};
//!
//! assert_eq!(Rank::THIRTY.lower(), Some(Rank::TEN));
//! assert_eq!(Rank::THIRTY.higher(), Some(Rank::HUNDRED));
//! assert_eq!(composite_ranks([Rank::THREE, Rank::THREE, Rank::TEN]), Some(Rank::TEN));
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Result, ShephyError};

/// A rank on the sheep ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rank(u32);

impl Rank {
    pub const ONE: Rank = Rank(1);
    pub const THREE: Rank = Rank(3);
    pub const TEN: Rank = Rank(10);
    pub const THIRTY: Rank = Rank(30);
    pub const HUNDRED: Rank = Rank(100);
    pub const THREE_HUNDRED: Rank = Rank(300);
    pub const THOUSAND: Rank = Rank(1000);

    /// All ranks, lowest first.
    pub const LADDER: [Rank; 7] = [
        Rank::ONE,
        Rank::THREE,
        Rank::TEN,
        Rank::THIRTY,
        Rank::HUNDRED,
        Rank::THREE_HUNDRED,
        Rank::THOUSAND,
    ];

    /// Lowest rank.
    pub const MIN: Rank = Rank::ONE;

    /// Highest rank. Holding one of these in the field wins the game.
    pub const MAX: Rank = Rank::THOUSAND;

    /// Numeric value of the rank.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// One step down the ladder. `None` at rank 1.
    #[must_use]
    pub fn lower(self) -> Option<Rank> {
        if self == Rank::MIN {
            return None;
        }
        if self.0 % 3 == 0 {
            Some(Rank(self.0 / 3))
        } else {
            Some(Rank(self.0 * 3 / 10))
        }
    }

    /// One step up the ladder. `None` at rank 1000.
    #[must_use]
    pub fn higher(self) -> Option<Rank> {
        if self == Rank::MAX {
            return None;
        }
        if self.0 % 3 == 0 {
            Some(Rank(self.0 * 10 / 3))
        } else {
            Some(Rank(self.0 * 3))
        }
    }
}

impl TryFrom<u32> for Rank {
    type Error = ShephyError;

    fn try_from(value: u32) -> Result<Self> {
        Rank::LADDER
            .iter()
            .copied()
            .find(|rank| rank.0 == value)
            .ok_or(ShephyError::NotARank(value))
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Next lower rank, `None` at rank 1.
#[must_use]
pub fn drop_rank(rank: Rank) -> Option<Rank> {
    rank.lower()
}

/// Next higher rank, `None` at rank 1000.
#[must_use]
pub fn raise_rank(rank: Rank) -> Option<Rank> {
    rank.higher()
}

/// Combine several ranks into one: the largest ladder rank not above their sum.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn composite_ranks(ranks: impl IntoIterator<Item = Rank>) -> Option<Rank> {
    let sum: u32 = ranks.into_iter().map(Rank::value).sum();
    Rank::LADDER.iter().rev().copied().find(|rank| rank.0 <= sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_walks_the_ladder() {
        let mut rank = Rank::MAX;
        let mut seen = vec![rank];
        while let Some(next) = rank.lower() {
            seen.push(next);
            rank = next;
        }
        seen.reverse();

        assert_eq!(seen, Rank::LADDER.to_vec());
    }

    #[test]
    fn test_round_trip() {
        for rank in Rank::LADDER {
            if let Some(lower) = drop_rank(rank) {
                assert_eq!(raise_rank(lower), Some(rank));
            }
            if let Some(higher) = raise_rank(rank) {
                assert_eq!(drop_rank(higher), Some(rank));
            }
        }
    }

    #[test]
    fn test_ends_of_ladder() {
        assert_eq!(drop_rank(Rank::ONE), None);
        assert_eq!(raise_rank(Rank::THOUSAND), None);
    }

    #[test]
    fn test_composite_floors_to_ladder() {
        let r = |v: u32| Rank::try_from(v).unwrap();

        assert_eq!(composite_ranks([r(3), r(3), r(3)]), Some(Rank::THREE));
        assert_eq!(composite_ranks([r(3), r(3), r(10)]), Some(Rank::TEN));
        assert_eq!(composite_ranks([r(300), r(300), r(300), r(100)]), Some(Rank::THOUSAND));
        assert_eq!(composite_ranks([r(1)]), Some(Rank::ONE));
        assert_eq!(composite_ranks([r(1), r(1), r(1)]), Some(Rank::THREE));
        assert_eq!(composite_ranks([r(1000), r(1000)]), Some(Rank::THOUSAND));
        assert_eq!(composite_ranks(Vec::<Rank>::new()), None);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Rank::try_from(30u32), Ok(Rank::THIRTY));
        assert_eq!(Rank::try_from(2u32), Err(ShephyError::NotARank(2)));
        assert_eq!(Rank::try_from(0u32), Err(ShephyError::NotARank(0)));
    }

    #[test]
    fn test_rank_serde_rejects_off_ladder() {
        let json = serde_json::to_string(&Rank::HUNDRED).unwrap();
        assert_eq!(json, "100");

        let back: Rank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rank::HUNDRED);

        assert!(serde_json::from_str::<Rank>("42").is_err());
    }
}

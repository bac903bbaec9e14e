//! The world: every region of the game plus the enemy counter.
//!
//! ## Regions
//!
//! - Sheep stock (one pile per rank)
//! - Field
//! - Hand
//! - Deck
//! - Discard pile
//! - Exile
//!
//! A pile is an `im::Vector`. The first element is the bottom of the pile,
//! the last element is the top. Persistent vectors make cloning a world
//! O(1) per region, so every move can clone its world before mutating it
//! and earlier snapshots stay valid.
//!
//! ## Mutation primitives
//!
//! The primitives never fail on exhausted resources: gaining from an empty
//! stock, gaining into a full field and drawing from an empty deck or into a
//! full hand are no-ops. An index past the end of a region is a contract
//! violation and panics.

use im::{OrdMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, CardKind, EventCard};
use super::config::GameConfig;
use super::error::{Result, ShephyError};
use super::rank::Rank;
use super::rng::GameRng;

/// A named card region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    SheepStock(Rank),
    Field,
    Hand,
    Deck,
    DiscardPile,
    Exile,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::SheepStock(rank) => write!(f, "sheepStock{rank}"),
            Region::Field => f.write_str("field"),
            Region::Hand => f.write_str("hand"),
            Region::Deck => f.write_str("deck"),
            Region::DiscardPile => f.write_str("discardPile"),
            Region::Exile => f.write_str("exile"),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Supply pile per rank.
    pub sheep_stock: OrdMap<Rank, Vector<Card>>,

    /// Sheep cards in play.
    pub field: Vector<Card>,

    /// The rival's flock. Multiplied on every deck remake.
    pub enemy_sheep_count: u32,

    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub discard_pile: Vector<Card>,

    /// Cards removed from the game.
    pub exile: Vector<Card>,

    pub config: GameConfig,

    /// Source of every shuffle in this world's future.
    pub rng: GameRng,
}

impl World {
    /// Create the starting world.
    ///
    /// Every stock pile is full except rank 1, whose top card starts in the
    /// field. The deck holds the 22 event cards, shuffled with `rng`.
    #[must_use]
    pub fn new(config: GameConfig, mut rng: GameRng) -> Self {
        let mut next_id = 0u32;
        let mut alloc = || {
            let id = CardId::new(next_id);
            next_id += 1;
            id
        };

        let mut sheep_stock = OrdMap::new();
        for rank in Rank::LADDER {
            let pile: Vector<Card> = (0..config.sheep_per_rank)
                .map(|_| Card::sheep(alloc(), rank))
                .collect();
            sheep_stock.insert(rank, pile);
        }

        let mut field = Vector::new();
        if let Some(pile) = sheep_stock.get_mut(&Rank::MIN) {
            if let Some(first) = pile.pop_back() {
                field.push_back(first);
            }
        }

        let mut deck: Vec<Card> = EventCard::STARTING_DECK
            .iter()
            .map(|&event| Card::event(alloc(), event))
            .collect();
        rng.shuffle(&mut deck);

        Self {
            sheep_stock,
            field,
            enemy_sheep_count: 1,
            deck: deck.into_iter().collect(),
            hand: Vector::new(),
            discard_pile: Vector::new(),
            exile: Vector::new(),
            config,
            rng,
        }
    }

    /// Create a standard starting world from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameConfig::default(), GameRng::new(seed))
    }

    // === Regions ===

    /// Stock pile for a rank.
    #[must_use]
    pub fn stock(&self, rank: Rank) -> &Vector<Card> {
        &self.sheep_stock[&rank]
    }

    /// Borrow a region.
    #[must_use]
    pub fn region(&self, region: Region) -> &Vector<Card> {
        match region {
            Region::SheepStock(rank) => self.stock(rank),
            Region::Field => &self.field,
            Region::Hand => &self.hand,
            Region::Deck => &self.deck,
            Region::DiscardPile => &self.discard_pile,
            Region::Exile => &self.exile,
        }
    }

    /// Mutably borrow a region.
    pub fn region_mut(&mut self, region: Region) -> &mut Vector<Card> {
        match region {
            Region::SheepStock(rank) => self.sheep_stock.entry(rank).or_insert_with(Vector::new),
            Region::Field => &mut self.field,
            Region::Hand => &mut self.hand,
            Region::Deck => &mut self.deck,
            Region::DiscardPile => &mut self.discard_pile,
            Region::Exile => &mut self.exile,
        }
    }

    /// Remove the card at `index` from `region`.
    ///
    /// Panics if `index` is out of range.
    fn take(&mut self, region: Region, index: usize) -> Card {
        let pile = self.region_mut(region);
        assert!(
            index < pile.len(),
            "{region} index {index} out of range ({} cards)",
            pile.len()
        );
        pile.remove(index)
    }

    // === Queries ===

    /// Free slots in the field.
    #[must_use]
    pub fn field_room(&self) -> usize {
        self.config.field_capacity.saturating_sub(self.field.len())
    }

    /// Highest rank in the field, `None` if the field is empty.
    #[must_use]
    pub fn highest_field_rank(&self) -> Option<Rank> {
        self.field.iter().filter_map(Card::rank).max()
    }

    /// Rank of the field card at `index`.
    ///
    /// Panics if `index` is out of range or the card is not a sheep.
    #[must_use]
    pub fn field_rank(&self, index: usize) -> Rank {
        match self.field.get(index).map(|card| card.kind) {
            Some(CardKind::Sheep(rank)) => rank,
            Some(_) => panic!("field card {index} is not a sheep"),
            None => panic!("field index {index} out of range ({} cards)", self.field.len()),
        }
    }

    /// True iff the hand has room and the deck is not empty.
    #[must_use]
    pub fn should_draw(&self) -> bool {
        self.hand.len() < self.config.hand_capacity && !self.deck.is_empty()
    }

    /// The deck as the player sees it: one face-down card per deck card.
    #[must_use]
    pub fn concealed_deck(&self) -> Vec<Card> {
        vec![Card::face_down(); self.deck.len()]
    }

    // === Mutation primitives ===

    /// Move the top card of the `rank` stock pile into the field.
    ///
    /// No-op if the pile is empty or the field is full.
    pub fn gain(&mut self, rank: Rank) -> Option<CardId> {
        if self.field_room() == 0 {
            tracing::debug!(%rank, "gain skipped: field is full");
            return None;
        }
        let Some(card) = self.sheep_stock.get_mut(&rank).and_then(Vector::pop_back) else {
            tracing::debug!(%rank, "gain skipped: stock is empty");
            return None;
        };
        self.field.push_back(card);
        Some(card.id)
    }

    /// Return the field card at `index` to the top of its stock pile.
    ///
    /// Panics if `index` is out of range or the card is not a sheep.
    pub fn release(&mut self, index: usize) -> Card {
        let rank = self.field_rank(index);
        let card = self.take(Region::Field, index);
        self.region_mut(Region::SheepStock(rank)).push_back(card);
        card
    }

    /// Move the hand card at `index` to the discard pile.
    pub fn discard(&mut self, index: usize) -> Card {
        let card = self.take(Region::Hand, index);
        self.discard_pile.push_back(card);
        card
    }

    /// Remove the card at `index` in `region` from the game.
    pub fn exile(&mut self, region: Region, index: usize) -> Card {
        let card = self.take(region, index);
        self.exile.push_back(card);
        card
    }

    /// Move the top deck card into the hand.
    ///
    /// No-op if the deck is empty or the hand is full.
    pub fn draw(&mut self) -> Option<CardId> {
        if self.hand.len() >= self.config.hand_capacity {
            return None;
        }
        let card = self.deck.pop_back()?;
        self.hand.push_back(card);
        Some(card.id)
    }

    /// Draw until the hand is full or the deck is empty. Returns the number
    /// of cards drawn.
    pub fn refill_hand(&mut self) -> usize {
        let mut drawn = 0;
        while self.should_draw() {
            self.draw();
            drawn += 1;
        }
        drawn
    }

    /// Move the card at `index` in the deck into the hand, ignoring the hand
    /// limit.
    pub fn take_from_deck(&mut self, index: usize) -> Card {
        let card = self.take(Region::Deck, index);
        self.hand.push_back(card);
        card
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self) {
        let mut cards: Vec<Card> = self.deck.iter().copied().collect();
        self.rng.shuffle(&mut cards);
        self.deck = cards.into_iter().collect();
    }

    /// Put the discard pile under the deck and shuffle everything.
    pub fn remake_deck(&mut self) {
        let discarded = std::mem::take(&mut self.discard_pile);
        tracing::debug!(
            returned = discarded.len(),
            deck = self.deck.len(),
            "remaking deck"
        );
        self.deck.append(discarded);
        self.shuffle_deck();
    }

    // === Invariants ===

    /// Verify conservation, exclusivity and capacity.
    ///
    /// Only meaningful for worlds descended from [`World::new`].
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        let regions = Rank::LADDER
            .iter()
            .map(|&rank| Region::SheepStock(rank))
            .chain([
                Region::Field,
                Region::Hand,
                Region::Deck,
                Region::DiscardPile,
                Region::Exile,
            ]);
        for region in regions {
            for card in self.region(region) {
                if !seen.insert(card.id) {
                    return Err(ShephyError::DuplicateCard(card.id));
                }
                let misplaced = match region {
                    Region::SheepStock(rank) => card.rank() != Some(rank),
                    Region::Field => !card.is_sheep(),
                    _ => matches!(card.kind, CardKind::FaceDown),
                };
                if misplaced {
                    return Err(ShephyError::MisplacedCard {
                        card: card.id,
                        region: region.to_string(),
                    });
                }
            }
        }

        for rank in Rank::LADDER {
            let in_play = |pile: &Vector<Card>| pile.iter().filter(|c| c.rank() == Some(rank)).count();
            let found = self.stock(rank).len() + in_play(&self.field) + in_play(&self.exile);
            if found != self.config.sheep_per_rank {
                return Err(ShephyError::SheepNotConserved {
                    rank,
                    expected: self.config.sheep_per_rank,
                    found,
                });
            }
        }

        if self.field.len() > self.config.field_capacity {
            return Err(ShephyError::FieldOverflow {
                found: self.field.len(),
                capacity: self.config.field_capacity,
            });
        }
        if self.hand.len() > self.config.hand_capacity {
            return Err(ShephyError::HandOverflow {
                found: self.hand.len(),
                capacity: self.config.hand_capacity,
            });
        }

        let events = [&self.deck, &self.hand, &self.discard_pile, &self.exile]
            .into_iter()
            .flat_map(|pile| pile.iter())
            .filter(|card| card.as_event().is_some())
            .count();
        if events != EventCard::STARTING_DECK.len() {
            return Err(ShephyError::EventsNotConserved {
                expected: EventCard::STARTING_DECK.len(),
                found: events,
            });
        }

        Ok(())
    }
}

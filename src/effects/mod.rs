//! Event card effects.
//!
//! Playing a card creates a [`Resolution`]; the card's handler turns a world
//! plus that state into the next moves. Handlers with several phases return
//! moves whose successors carry an updated state back into the same handler,
//! and the final move of an effect returns `None` to hand control back to the
//! basic rules.
//!
//! ## Families
//!
//! - `flock`: effects that gain sheep (Be Fruitful, Fill the Earth, Flourish, Multiply)
//! - `cull`: effects that release sheep (Crowding, Falling Rock, Lightning,
//!   Meteor, Plague, Shephion, Slump, Storm, Wolves)
//! - `merge`: multi-select effects (Dominion, Golden Hooves)
//! - `hand`: effects on hand and deck (All-purpose Sheep, Inspiration,
//!   Planning Sheep, Sheep Dog)

mod cull;
mod flock;
mod hand;
mod merge;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, EventCard, Rank, Region, World};
use crate::rules::{Move, MoveList};

/// Field indices picked so far, kept sorted.
pub type Selection = SmallVec<[usize; 7]>;

/// Progress of the card currently being resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// A card without an effect was played.
    Inert,
    /// The card has just been played.
    Fresh(EventCard),
    /// A field rank has been picked.
    RankChosen(EventCard, Rank),
    /// Field cards picked so far.
    Selecting(EventCard, Selection),
    /// Repetitions left, including the next one.
    Countdown(EventCard, usize),
    /// Field size when the card was played.
    Halving(EventCard, usize),
    /// The deck has been searched; only the shuffle remains.
    Searched(EventCard),
}

impl Resolution {
    /// State for playing `card` from hand.
    #[must_use]
    pub fn played(card: &Card) -> Self {
        match card.as_event() {
            Some(event) => Resolution::Fresh(event),
            None => Resolution::Inert,
        }
    }

    /// The card whose handler runs next.
    #[must_use]
    pub fn card(&self) -> Option<EventCard> {
        match *self {
            Resolution::Inert => None,
            Resolution::Fresh(card)
            | Resolution::RankChosen(card, _)
            | Resolution::Selecting(card, _)
            | Resolution::Countdown(card, _)
            | Resolution::Halving(card, _)
            | Resolution::Searched(card) => Some(card),
        }
    }
}

/// Moves for continuing `state` in `world`.
#[must_use]
pub fn resolve(world: &Rc<World>, state: &Resolution) -> MoveList {
    match state.card() {
        Some(card) => {
            tracing::debug!(%card, ?state, "resolving");
            card.resolve(world, state)
        }
        None => nothing(world, "Nothing happens"),
    }
}

impl EventCard {
    /// This card's handler.
    #[must_use]
    pub fn resolve(self, world: &Rc<World>, state: &Resolution) -> MoveList {
        match self {
            EventCard::AllPurposeSheep => hand::all_purpose_sheep(world),
            EventCard::BeFruitful => flock::be_fruitful(world, state),
            EventCard::Crowding => cull::crowding(world, state),
            EventCard::Dominion => merge::dominion(world, state),
            EventCard::FallingRock => cull::falling_rock(world),
            EventCard::FillTheEarth => flock::fill_the_earth(world, state),
            EventCard::Flourish => flock::flourish(world, state),
            EventCard::GoldenHooves => merge::golden_hooves(world, state),
            EventCard::Inspiration => hand::inspiration(world, state),
            EventCard::Lightning => cull::lightning(world),
            EventCard::Meteor => cull::meteor(world, state),
            EventCard::Multiply => flock::multiply(world),
            EventCard::Plague => cull::plague(world),
            EventCard::PlanningSheep => hand::planning_sheep(world),
            EventCard::SheepDog => hand::sheep_dog(world),
            EventCard::Shephion => cull::shephion(world),
            EventCard::Slump => cull::slump(world, state),
            EventCard::Storm => cull::storm(world, state),
            EventCard::Wolves => cull::wolves(world),
        }
    }
}

/// One automated move that changes nothing and ends the resolution.
pub(crate) fn nothing(world: &Rc<World>, description: &str) -> MoveList {
    MoveList::automated(vec![Move::stay(description, world, None)])
}

/// Build at most one move per card of `region`, each tied to its card.
pub(crate) fn each_card(
    world: &World,
    region: Region,
    mut make: impl FnMut(Card, usize) -> Option<Move>,
) -> Vec<Move> {
    world
        .region(region)
        .iter()
        .enumerate()
        .filter_map(|(index, &card)| make(card, index).map(|mv| mv.on(region, index)))
        .collect()
}

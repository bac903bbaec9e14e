//! Basic rules: what happens when no card is mid-resolution.
//!
//! In priority order:
//! 1. A finished game offers nothing.
//! 2. Empty hand and empty deck: remake the deck, refill the hand, and the
//!    enemy flock grows.
//! 3. Room in hand and cards in the deck: refill the hand.
//! 4. Otherwise: play one of the hand cards.

use std::rc::Rc;

use super::judge::terminal_result;
use super::tree::{Move, MoveList};
use crate::core::{Region, World};
use crate::effects::{each_card, Resolution};

pub(crate) fn basic_moves(world: &Rc<World>) -> MoveList {
    if terminal_result(world).is_some() {
        return MoveList::default();
    }

    if world.hand.is_empty() && world.deck.is_empty() {
        return MoveList::automated(vec![Move::apply(
            "Remake the deck and refill your hand",
            world,
            |w| {
                w.remake_deck();
                w.refill_hand();
                w.enemy_sheep_count = w.enemy_sheep_count.saturating_mul(w.config.enemy_growth);
                tracing::debug!(enemy = w.enemy_sheep_count, "enemy flock grows");
                None
            },
        )]);
    }

    if world.should_draw() {
        let missing = world.config.hand_capacity - world.hand.len();
        let description = if missing == 1 { "Draw a card" } else { "Draw cards" };
        return MoveList::automated(vec![Move::apply(description, world, |w| {
            w.refill_hand();
            None
        })]);
    }

    MoveList::described(
        "Choose a card in your hand to play",
        each_card(world, Region::Hand, |card, index| {
            Some(Move::apply(format!("Play {card}"), world, move |w| {
                w.discard(index);
                Some(Resolution::played(&card))
            }))
        }),
    )
}

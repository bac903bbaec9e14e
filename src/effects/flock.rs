//! Effects that bring sheep into the field.

use std::rc::Rc;

use super::{each_card, nothing, Resolution};
use crate::core::{EventCard, Rank, Region, World};
use crate::rules::{Move, MoveList};

/// Be Fruitful: pick a field card, then gain one card of its rank.
pub(super) fn be_fruitful(world: &Rc<World>, state: &Resolution) -> MoveList {
    if let Resolution::RankChosen(_, rank) = *state {
        return MoveList::automated(vec![Move::apply(
            format!("Gain a {rank} sheep card"),
            world,
            move |w| {
                w.gain(rank);
                None
            },
        )]);
    }

    if world.field_room() == 0 {
        return nothing(world, "Nothing happens");
    }
    MoveList::described(
        "Choose a sheep card in the field to copy",
        each_card(world, Region::Field, |card, _| {
            let rank = card.rank()?;
            Some(Move::stay(
                format!("Copy the {rank} sheep card"),
                world,
                Some(Resolution::RankChosen(EventCard::BeFruitful, rank)),
            ))
        }),
    )
}

/// Fill the Earth: gain 1s one at a time until the player cancels.
pub(super) fn fill_the_earth(world: &Rc<World>, state: &Resolution) -> MoveList {
    let ones = world.stock(Rank::ONE).len();
    let mut list = MoveList::default();

    if world.field_room() > 0 && ones > 0 {
        list.description = Some("Gain a 1 sheep card, or".to_string());
        let again = state.clone();
        list.push(
            Move::apply("Gain a 1 sheep card", world, move |w| {
                w.gain(Rank::ONE);
                Some(again)
            })
            .on(Region::SheepStock(Rank::ONE), ones - 1),
        );
    } else {
        list.description = Some(if world.field_room() == 0 {
            format!(
                "No room in the field ({} cards at most)",
                world.config.field_capacity
            )
        } else {
            "No 1 sheep cards left".to_string()
        });
        list.automated = true;
    }

    list.push(Move::stay("Cancel", world, None));
    list
}

/// Flourish: pick a field card, then gain up to three cards one rank lower.
pub(super) fn flourish(world: &Rc<World>, state: &Resolution) -> MoveList {
    if let Resolution::RankChosen(_, rank) = *state {
        let Some(lower) = rank.lower() else {
            return nothing(world, "You gain nothing");
        };
        let count = world.field_room().min(3);
        let description = if count == 1 {
            format!("Gain a {lower} sheep card")
        } else {
            format!("Gain {count} {lower} sheep cards")
        };
        return MoveList::automated(vec![Move::apply(description, world, move |w| {
            for _ in 0..count {
                w.gain(lower);
            }
            None
        })]);
    }

    if world.field_room() == 0 {
        return nothing(world, "Nothing happens");
    }
    MoveList::described(
        "Choose a sheep card in the field",
        each_card(world, Region::Field, |card, _| {
            let rank = card.rank()?;
            Some(Move::stay(
                format!("Choose the {rank} sheep card"),
                world,
                Some(Resolution::RankChosen(EventCard::Flourish, rank)),
            ))
        }),
    )
}

/// Multiply: gain a 3 if there is room and one is left.
pub(super) fn multiply(world: &Rc<World>) -> MoveList {
    if world.field_room() == 0 || world.stock(Rank::THREE).is_empty() {
        return nothing(world, "Nothing happens");
    }
    MoveList::automated(vec![Move::apply("Gain a 3 sheep card", world, |w| {
        w.gain(Rank::THREE);
        None
    })])
}

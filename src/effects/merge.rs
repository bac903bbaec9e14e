//! Effects that pick several field cards before acting on them together.

use std::rc::Rc;

use super::{each_card, Resolution, Selection};
use crate::core::{composite_ranks, EventCard, Region, World};
use crate::rules::{Move, MoveList};

fn chosen(state: &Resolution) -> Selection {
    match state {
        Resolution::Selecting(_, selection) => selection.clone(),
        _ => Selection::new(),
    }
}

/// `selection` with `index` added, still sorted.
fn adding(selection: &Selection, index: usize) -> Selection {
    let mut next = selection.clone();
    if let Err(at) = next.binary_search(&index) {
        next.insert(at, index);
    }
    next
}

/// Release the selected field cards, highest index first so earlier
/// indices stay valid.
fn release_selected(world: &mut World, selection: &Selection) {
    for &index in selection.iter().rev() {
        world.release(index);
    }
}

/// One "choose" move per selectable field card.
fn choice_moves(
    world: &Rc<World>,
    card: EventCard,
    selection: &Selection,
    selectable: impl Fn(usize) -> bool,
) -> Vec<Move> {
    each_card(world, Region::Field, |c, index| {
        let rank = c.rank()?;
        if selection.contains(&index) || !selectable(index) {
            return None;
        }
        Some(Move::stay(
            format!("Choose the {rank} sheep card"),
            world,
            Some(Resolution::Selecting(card, adding(selection, index))),
        ))
    })
}

/// Dominion: combine any number of field cards into the largest rank whose
/// value does not exceed their sum.
pub(super) fn dominion(world: &Rc<World>, state: &Resolution) -> MoveList {
    let selection = chosen(state);
    let mut list = MoveList::new(choice_moves(world, EventCard::Dominion, &selection, |_| true));

    if !selection.is_empty() {
        let picked = selection.clone();
        list.push(Move::apply("Combine the chosen sheep cards", world, move |w| {
            let ranks: Vec<_> = picked.iter().map(|&i| w.field_rank(i)).collect();
            release_selected(w, &picked);
            if let Some(rank) = composite_ranks(ranks) {
                w.gain(rank);
            }
            None
        }));
    }

    if selection.len() == world.field.len() {
        list.automated = true;
    } else if selection.is_empty() {
        list.description = Some("Choose sheep cards in the field to combine".to_string());
    } else {
        list.description = Some("Choose sheep cards in the field to combine, or".to_string());
    }
    list
}

/// Golden Hooves: raise any number of cards ranked below the highest field
/// rank by one step each.
pub(super) fn golden_hooves(world: &Rc<World>, state: &Resolution) -> MoveList {
    let selection = chosen(state);
    let highest = world.highest_field_rank();
    let below_highest = |index: usize| Some(world.field_rank(index)) < highest;

    let moves = choice_moves(world, EventCard::GoldenHooves, &selection, below_highest);
    let any_selectable = !moves.is_empty();
    let mut list = MoveList::new(moves);

    if selection.is_empty() {
        list.push(Move::stay("Cancel", world, None));
    } else {
        let picked = selection.clone();
        list.push(Move::apply("Raise the chosen sheep cards", world, move |w| {
            let ranks: Vec<_> = picked.iter().map(|&i| w.field_rank(i)).collect();
            release_selected(w, &picked);
            for rank in ranks.into_iter().filter_map(|r| r.higher()) {
                w.gain(rank);
            }
            None
        }));
    }

    if any_selectable {
        list.description = Some("Choose sheep cards in the field to raise, or".to_string());
    } else {
        list.automated = true;
    }
    list
}

//! Effects that send sheep back to the stock.

use std::rc::Rc;

use super::{each_card, nothing, Resolution};
use crate::core::{EventCard, Rank, Region, World};
use crate::rules::{Move, MoveList};

const RELEASE_PROMPT: &str = "Choose a sheep card in the field to release";

fn release_label(rank: Rank) -> String {
    format!("Release the {rank} sheep card")
}

/// One release move per field card, each continuing with whatever `next`
/// says about the world left behind.
fn release_any(
    world: &Rc<World>,
    next: impl Fn(&World) -> Option<Resolution> + Clone + 'static,
) -> MoveList {
    MoveList::described(
        RELEASE_PROMPT,
        each_card(world, Region::Field, |card, index| {
            let rank = card.rank()?;
            let next = next.clone();
            Some(Move::apply(release_label(rank), world, move |w| {
                w.release(index);
                next(w)
            }))
        }),
    )
}

/// Release moves for the highest-ranked field cards only.
fn release_highest(world: &Rc<World>) -> MoveList {
    let highest = world.highest_field_rank();
    MoveList::described(
        RELEASE_PROMPT,
        each_card(world, Region::Field, |card, index| {
            let rank = card.rank().filter(|&r| Some(r) == highest)?;
            Some(Move::apply(release_label(rank), world, move |w| {
                w.release(index);
                None
            }))
        }),
    )
}

/// Crowding: release cards until only two remain.
pub(super) fn crowding(world: &Rc<World>, state: &Resolution) -> MoveList {
    if world.field.len() <= 2 {
        return nothing(world, "Too few sheep, nothing happens");
    }
    let again = state.clone();
    release_any(world, move |w| (w.field.len() > 2).then(|| again.clone()))
}

/// Falling Rock: release one card.
pub(super) fn falling_rock(world: &Rc<World>) -> MoveList {
    release_any(world, |_| None)
}

/// Lightning: release one of the highest-ranked cards.
pub(super) fn lightning(world: &Rc<World>) -> MoveList {
    release_highest(world)
}

/// Meteor: remove the played card from the game, then release up to three
/// cards one at a time.
pub(super) fn meteor(world: &Rc<World>, state: &Resolution) -> MoveList {
    let (rest, first) = match *state {
        Resolution::Countdown(_, rest) => (rest, false),
        _ => (3, true),
    };
    let count = rest.min(world.field.len());
    MoveList::described(
        RELEASE_PROMPT,
        each_card(world, Region::Field, |card, index| {
            let rank = card.rank()?;
            Some(Move::apply(release_label(rank), world, move |w| {
                if first {
                    if let Some(top) = w.discard_pile.len().checked_sub(1) {
                        w.exile(Region::DiscardPile, top);
                    }
                }
                w.release(index);
                (count > 1).then_some(Resolution::Countdown(EventCard::Meteor, count - 1))
            }))
        }),
    )
}

/// Plague: release every card of the chosen card's rank.
pub(super) fn plague(world: &Rc<World>) -> MoveList {
    MoveList::described(
        "Choose a sheep card in the field to release all of its rank",
        each_card(world, Region::Field, |card, _| {
            let rank = card.rank()?;
            Some(Move::apply(
                format!("Release every {rank} sheep card"),
                world,
                move |w| {
                    for index in (0..w.field.len()).rev() {
                        if w.field_rank(index) == rank {
                            w.release(index);
                        }
                    }
                    None
                },
            ))
        }),
    )
}

/// Shephion: release the whole field.
pub(super) fn shephion(world: &Rc<World>) -> MoveList {
    MoveList::automated(vec![Move::apply("Release every sheep card", world, |w| {
        while !w.field.is_empty() {
            w.release(0);
        }
        None
    })])
}

/// Slump: release cards until half of the field as it was when the card
/// was played (rounded up) remains.
pub(super) fn slump(world: &Rc<World>, state: &Resolution) -> MoveList {
    if world.field.len() <= 1 {
        return nothing(world, "Only one sheep, nothing happens");
    }
    let initial = match *state {
        Resolution::Halving(_, initial) => initial,
        _ => world.field.len(),
    };
    let keep = (initial + 1) / 2;
    release_any(world, move |w| {
        (w.field.len() > keep).then_some(Resolution::Halving(EventCard::Slump, initial))
    })
}

/// Storm: release up to two cards one at a time.
pub(super) fn storm(world: &Rc<World>, state: &Resolution) -> MoveList {
    let rest = match *state {
        Resolution::Countdown(_, rest) => rest,
        _ => 2,
    };
    let count = rest.min(world.field.len());
    release_any(world, move |_| {
        (count > 1).then_some(Resolution::Countdown(EventCard::Storm, count - 1))
    })
}

/// Wolves: lower one of the highest-ranked cards a step. At rank 1 this is
/// Lightning.
pub(super) fn wolves(world: &Rc<World>) -> MoveList {
    let highest = world.highest_field_rank();
    if highest == Some(Rank::ONE) {
        return lightning(world);
    }
    MoveList::described(
        "Choose a sheep card in the field to lower its rank",
        each_card(world, Region::Field, |card, index| {
            let rank = card.rank().filter(|&r| Some(r) == highest)?;
            Some(Move::apply(
                format!("Lower the rank of the {rank} sheep card"),
                world,
                move |w| {
                    w.release(index);
                    if let Some(lower) = rank.lower() {
                        w.gain(lower);
                    }
                    None
                },
            ))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;
    use crate::rules::{make_game_tree, GameTree};

    fn world_with(ranks: &[Rank]) -> Rc<World> {
        let mut world = World::seeded(2);
        for &rank in ranks {
            world.gain(rank);
        }
        Rc::new(world)
    }

    fn ranks(tree: &GameTree) -> Vec<u32> {
        tree.world.field.iter().filter_map(Card::rank).map(Rank::value).collect()
    }

    #[test]
    fn test_crowding_stops_at_two() {
        let world = world_with(&[Rank::THREE, Rank::TEN, Rank::THIRTY]);
        let tree = make_game_tree(world, Some(Resolution::Fresh(EventCard::Crowding)));
        assert_eq!(tree.moves.len(), 4);

        let after_one = tree.moves[0].force();
        assert_eq!(after_one.world.field.len(), 3);
        assert_eq!(after_one.moves.len(), 3);
        assert_eq!(after_one.description.as_deref(), Some(RELEASE_PROMPT));

        let after_two = after_one.moves[0].force();
        assert_eq!(ranks(after_two), vec![10, 30]);
        assert_eq!(after_two.moves[0].description, "Draw cards");
    }

    #[test]
    fn test_crowding_with_two_sheep() {
        let world = world_with(&[Rank::THREE]);
        let list = crowding(&world, &Resolution::Fresh(EventCard::Crowding));

        assert!(list.automated);
        assert_eq!(list.moves[0].description, "Too few sheep, nothing happens");
    }

    #[test]
    fn test_lightning_targets_highest_only() {
        let world = world_with(&[Rank::HUNDRED, Rank::TEN, Rank::HUNDRED]);
        let list = lightning(&world);

        let targets: Vec<_> = list.moves.iter().filter_map(|m| m.card_index()).collect();
        assert_eq!(targets, vec![1, 3]);

        let done = list.moves[1].force();
        assert_eq!(ranks(done), vec![1, 100, 10]);
    }

    #[test]
    fn test_meteor_exiles_itself_once() {
        let mut world = World::seeded(3);
        world.gain(Rank::THREE);
        world.gain(Rank::TEN);
        world.gain(Rank::THIRTY);
        world.draw();
        world.discard(0);
        let meteor = world.discard_pile[0];

        let tree = make_game_tree(world, Some(Resolution::Fresh(EventCard::Meteor)));
        let first = tree.moves[0].force();
        assert_eq!(first.world.exile.len(), 1);
        assert_eq!(first.world.exile[0], meteor);
        assert!(first.world.discard_pile.is_empty());

        let second = first.moves[0].force();
        let third = second.moves[0].force();
        assert_eq!(third.world.exile.len(), 1);
        assert_eq!(ranks(third), vec![30]);
        assert_eq!(third.moves[0].description, "Draw cards");
    }

    #[test]
    fn test_meteor_caps_at_field_size() {
        let world = world_with(&[Rank::THREE]);
        let tree = make_game_tree(world, Some(Resolution::Fresh(EventCard::Meteor)));

        let second = tree.moves[0].force();
        assert_eq!(second.world.field.len(), 1);
        let last = second.moves[0].force();
        assert!(last.world.field.is_empty());
        assert!(last.is_terminal());
    }

    #[test]
    fn test_plague_releases_whole_rank() {
        let world = world_with(&[Rank::TEN, Rank::THREE, Rank::TEN]);
        let list = plague(&world);
        assert_eq!(list.len(), 4);

        let done = list.moves[1].force();
        assert_eq!(ranks(done), vec![1, 3]);
        assert_eq!(done.world.stock(Rank::TEN).len(), 7);
    }

    #[test]
    fn test_shephion_clears_field() {
        let world = world_with(&[Rank::TEN, Rank::THREE]);
        let list = shephion(&world);

        assert!(list.automated);
        let done = list.moves[0].force();
        assert!(done.world.field.is_empty());
        assert!(done.is_terminal());
    }

    #[test]
    fn test_slump_keeps_half_rounded_up() {
        let world = world_with(&[Rank::THREE, Rank::THREE, Rank::TEN, Rank::TEN]);
        let tree = make_game_tree(world, Some(Resolution::Fresh(EventCard::Slump)));
        assert_eq!(tree.moves.len(), 5);

        let one = tree.moves[0].force();
        assert_eq!(one.world.field.len(), 4);
        let two = one.moves[0].force();
        assert_eq!(two.world.field.len(), 3);
        assert_eq!(two.moves[0].description, "Draw cards");
    }

    #[test]
    fn test_slump_single_sheep() {
        let world = world_with(&[]);
        let list = slump(&world, &Resolution::Fresh(EventCard::Slump));

        assert!(list.automated);
        assert_eq!(list.moves[0].description, "Only one sheep, nothing happens");
    }

    #[test]
    fn test_storm_releases_two() {
        let world = world_with(&[Rank::THREE, Rank::TEN]);
        let tree = make_game_tree(world, Some(Resolution::Fresh(EventCard::Storm)));

        let one = tree.moves[2].force();
        assert_eq!(ranks(one), vec![1, 3]);
        let two = one.moves[0].force();
        assert_eq!(ranks(two), vec![3]);
        assert_eq!(two.moves[0].description, "Draw cards");
    }

    #[test]
    fn test_wolves_lowers_highest() {
        let world = world_with(&[Rank::THIRTY, Rank::THREE]);
        let list = wolves(&world);

        assert_eq!(list.len(), 1);
        assert_eq!(list.moves[0].card_index(), Some(1));
        assert_eq!(list.moves[0].description, "Lower the rank of the 30 sheep card");

        let done = list.moves[0].force();
        assert_eq!(ranks(done), vec![1, 3, 10]);
    }

    #[test]
    fn test_wolves_at_rank_one_is_lightning() {
        let world = world_with(&[Rank::ONE]);
        let list = wolves(&world);

        assert_eq!(list.len(), 2);
        assert_eq!(list.moves[0].description, "Release the 1 sheep card");
        let done = list.moves[0].force();
        assert_eq!(ranks(done), vec![1]);
    }
}

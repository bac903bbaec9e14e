//! Effects on the hand and the deck.

use std::rc::Rc;

use super::{each_card, nothing, Resolution};
use crate::core::{EventCard, Region, World};
use crate::rules::{Move, MoveList};

/// All-purpose Sheep: resolve a copy of another card in hand. The copied
/// card stays where it is.
pub(super) fn all_purpose_sheep(world: &Rc<World>) -> MoveList {
    if world.hand.is_empty() {
        return nothing(world, "No cards in your hand, nothing happens");
    }
    MoveList::described(
        "Choose a card in your hand to copy",
        each_card(world, Region::Hand, |card, _| {
            Some(Move::stay(format!("Copy {card}"), world, Some(Resolution::played(&card))))
        }),
    )
}

/// Inspiration: take any card from the deck into the hand, then shuffle.
pub(super) fn inspiration(world: &Rc<World>, state: &Resolution) -> MoveList {
    if world.deck.is_empty() {
        return nothing(world, "The deck is empty, nothing happens");
    }

    if let Resolution::Searched(_) = state {
        return MoveList::automated(vec![Move::apply("Shuffle the deck", world, |w| {
            w.shuffle_deck();
            None
        })]);
    }

    MoveList::described(
        "Choose a card in the deck",
        each_card(world, Region::Deck, |card, index| {
            Some(Move::apply(format!("Put {card} into your hand"), world, move |w| {
                w.take_from_deck(index);
                Some(Resolution::Searched(EventCard::Inspiration))
            }))
        }),
    )
}

/// Planning Sheep: remove a card in hand from the game.
pub(super) fn planning_sheep(world: &Rc<World>) -> MoveList {
    if world.hand.is_empty() {
        return nothing(world, "No cards in your hand, nothing happens");
    }
    MoveList::described(
        "Choose a card in your hand to remove from the game",
        each_card(world, Region::Hand, |card, index| {
            Some(Move::apply(format!("Remove {card} from the game"), world, move |w| {
                w.exile(Region::Hand, index);
                None
            }))
        }),
    )
}

/// Sheep Dog: discard a card in hand.
pub(super) fn sheep_dog(world: &Rc<World>) -> MoveList {
    if world.hand.is_empty() {
        return nothing(world, "No cards in your hand, nothing happens");
    }
    MoveList::described(
        "Choose a card in your hand to discard",
        each_card(world, Region::Hand, |card, index| {
            Some(Move::apply(format!("Discard {card}"), world, move |w| {
                w.discard(index);
                None
            }))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::make_game_tree;

    fn dealt(seed: u64, cards: usize) -> World {
        let mut world = World::seeded(seed);
        for _ in 0..cards {
            world.draw();
        }
        world
    }

    #[test]
    fn test_all_purpose_sheep_copies_in_place() {
        let world = Rc::new(dealt(5, 4));
        let list = all_purpose_sheep(&world);
        assert_eq!(list.len(), 4);

        let copied = world.hand[2];
        assert_eq!(list.moves[2].description, format!("Copy {copied}"));
        assert_eq!(list.moves[2].card_region(), Some(Region::Hand));

        let next = list.moves[2].force();
        assert!(Rc::ptr_eq(&next.world, &world));
        let expected = crate::rules::list_possible_moves(&world, Some(&Resolution::played(&copied)));
        assert_eq!(next.moves.len(), expected.len());
        assert_eq!(next.automated, expected.automated);
    }

    #[test]
    fn test_all_purpose_sheep_empty_hand() {
        let world = Rc::new(World::seeded(5));
        let list = all_purpose_sheep(&world);

        assert!(list.automated);
        assert_eq!(list.moves[0].description, "No cards in your hand, nothing happens");
    }

    #[test]
    fn test_inspiration_takes_then_shuffles() {
        let world = dealt(6, 4);
        let wanted = world.deck[7];
        let tree = make_game_tree(world, Some(Resolution::Fresh(EventCard::Inspiration)));

        assert_eq!(tree.moves.len(), 18);
        assert_eq!(tree.prompt(), "Choose a card in the deck");
        let take = tree.move_on(Region::Deck, 7).unwrap();
        assert_eq!(take.description, format!("Put {wanted} into your hand"));

        let searched = take.force();
        assert!(searched.world.hand.contains(&wanted));
        assert_eq!(searched.world.deck.len(), 17);
        assert!(searched.automated);
        assert_eq!(searched.moves[0].description, "Shuffle the deck");

        let shuffled = searched.moves[0].force();
        assert_eq!(shuffled.world.deck.len(), 17);
        assert!(!shuffled.world.deck.contains(&wanted));
        assert_eq!(shuffled.world.hand.len(), 5);
    }

    #[test]
    fn test_inspiration_empty_deck() {
        let mut world = World::seeded(6);
        while world.draw().is_some() {
            world.discard(0);
        }
        let list = inspiration(&Rc::new(world), &Resolution::Fresh(EventCard::Inspiration));

        assert!(list.automated);
        assert_eq!(list.moves[0].description, "The deck is empty, nothing happens");
    }

    #[test]
    fn test_planning_sheep_exiles() {
        let world = Rc::new(dealt(7, 3));
        let removed = world.hand[0];
        let list = planning_sheep(&world);

        assert_eq!(list.moves[0].description, format!("Remove {removed} from the game"));
        let next = list.moves[0].force();
        assert_eq!(next.world.exile.len(), 1);
        assert_eq!(next.world.exile[0], removed);
        assert_eq!(next.world.hand.len(), 2);
    }

    #[test]
    fn test_sheep_dog_discards() {
        let world = Rc::new(dealt(8, 3));
        let dropped = world.hand[1];
        let list = sheep_dog(&world);

        let next = list.moves[1].force();
        assert_eq!(next.world.discard_pile.last(), Some(&dropped));
        assert_eq!(next.world.hand.len(), 2);
        assert!(next.world.exile.is_empty());
    }
}

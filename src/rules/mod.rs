//! Move generation and the lazily expanded game tree.
//!
//! [`make_game_tree`] is the entry point: it pairs a world with the moves
//! [`list_possible_moves`] finds for it. Without a resolution state the basic
//! rules apply; with one, the handler of the card being resolved decides.
//!
//! ```
//! use shephy::core::World;
//! use shephy::rules::make_game_tree;
//!
//! let tree = make_game_tree(World::seeded(7), None);
//! assert_eq!(tree.moves.len(), 1);
//! assert!(tree.automated);
//!
//! let drawn = tree.moves[0].force();
//! assert_eq!(drawn.world.hand.len(), 5);
//! assert_eq!(drawn.world.deck.len(), 17);
//! ```

mod basic;
pub mod deferred;
pub mod judge;
pub mod playout;
pub mod tree;

pub use deferred::Deferred;
pub use judge::{judge_game, terminal_result, GameResult, LossReason};
pub use playout::random_playout;
pub use tree::{CardTarget, GameTree, Move, MoveList};

use std::rc::Rc;

use crate::core::{GameConfig, GameRng, World};
use crate::effects::{self, Resolution};

/// A fresh standard game with an entropy-seeded deck.
#[must_use]
pub fn make_initial_world() -> World {
    World::new(GameConfig::default(), GameRng::from_entropy())
}

/// Build the decision point for `world`, continuing `state` if a card is
/// mid-resolution.
pub fn make_game_tree(world: impl Into<Rc<World>>, state: Option<Resolution>) -> GameTree {
    let world = world.into();
    let moves = list_possible_moves(&world, state.as_ref());
    GameTree::new(world, moves)
}

/// All legal moves from `world`.
#[must_use]
pub fn list_possible_moves(world: &Rc<World>, state: Option<&Resolution>) -> MoveList {
    match state {
        None => basic::basic_moves(world),
        Some(state) => effects::resolve(world, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventCard, Rank, Region};

    fn emptied_world(seed: u64) -> World {
        let mut world = World::seeded(seed);
        while world.draw().is_some() {
            world.discard(0);
        }
        world
    }

    #[test]
    fn test_initial_world_draws() {
        let tree = make_game_tree(World::seeded(1), None);

        assert_eq!(tree.moves.len(), 1);
        assert!(tree.automated);
        assert_eq!(tree.moves[0].description, "Draw cards");

        let next = tree.moves[0].force();
        assert_eq!(next.world.hand.len(), 5);
        assert_eq!(next.world.deck.len(), 17);
        assert_eq!(tree.world.hand.len(), 0);
    }

    #[test]
    fn test_draw_single_card_label() {
        let mut world = World::seeded(1);
        for _ in 0..4 {
            world.draw();
        }
        let tree = make_game_tree(world, None);

        assert_eq!(tree.moves[0].description, "Draw a card");
    }

    #[test]
    fn test_remake_when_exhausted() {
        let world = emptied_world(2);
        assert_eq!(world.discard_pile.len(), 22);

        let tree = make_game_tree(world, None);
        assert_eq!(tree.moves.len(), 1);
        assert!(tree.automated);

        let next = &tree.moves[0].force().world;
        assert_eq!(next.enemy_sheep_count, 10);
        assert_eq!(next.deck.len(), 17);
        assert_eq!(next.hand.len(), 5);
        assert!(next.discard_pile.is_empty());
    }

    #[test]
    fn test_terminal_worlds_have_no_moves() {
        let mut won = World::seeded(3);
        won.gain(Rank::THOUSAND);
        let tree = make_game_tree(won, None);
        assert!(tree.is_terminal());
        assert_eq!(tree.verdict(), Some(GameResult::Win));

        let mut overrun = World::seeded(3);
        overrun.enemy_sheep_count = 1000;
        let tree = make_game_tree(overrun, None);
        assert!(tree.is_terminal());
        assert_eq!(tree.verdict(), Some(GameResult::Lose(LossReason::EnemyFlock)));

        let mut empty = World::seeded(3);
        empty.release(0);
        let tree = make_game_tree(empty, None);
        assert!(tree.is_terminal());
        assert_eq!(tree.verdict(), Some(GameResult::Lose(LossReason::NoSheep)));
        assert_eq!(tree.prompt(), "You have lost all of your sheep. You lose.");
    }

    #[test]
    fn test_play_card_moves() {
        let mut world = World::seeded(4);
        world.refill_hand();
        let hand = world.hand.clone();
        let tree = make_game_tree(world, None);

        assert!(!tree.automated);
        assert_eq!(tree.prompt(), "Choose a card in your hand to play");
        assert_eq!(tree.moves.len(), 5);
        for (i, mv) in tree.moves.iter().enumerate() {
            assert_eq!(mv.card_region(), Some(Region::Hand));
            assert_eq!(mv.card_index(), Some(i));
            assert_eq!(mv.description, format!("Play {}", hand[i]));
        }

        let next = tree.moves[2].force();
        assert_eq!(next.world.hand.len(), 4);
        assert_eq!(next.world.discard_pile.last(), Some(&hand[2]));
    }

    #[test]
    fn test_forcing_is_memoized() {
        let tree = make_game_tree(World::seeded(5), None);
        let mv = &tree.moves[0];

        assert!(!mv.is_forced());
        let first: *const GameTree = mv.force();
        let second: *const GameTree = mv.force();
        assert!(mv.is_forced());
        assert_eq!(first, second);

        let copy = mv.clone();
        assert!(Rc::ptr_eq(&copy.force().world, &mv.force().world));
    }

    #[test]
    fn test_past_snapshots_stay_valid() {
        let tree = make_game_tree(World::seeded(6), None);
        let before = World::clone(&tree.world);

        let next = tree.moves[0].force().clone();
        let after = next.follow_automated();

        assert_eq!(*tree.world, before);
        assert!(!Rc::ptr_eq(&tree.world, &after.world));
    }

    #[test]
    fn test_resolution_dispatches_to_card() {
        let mut world = World::seeded(7);
        world.refill_hand();
        let world = Rc::new(world);

        let list = list_possible_moves(&world, Some(&Resolution::Fresh(EventCard::Shephion)));
        assert!(list.automated);
        assert_eq!(list.len(), 1);
        assert_eq!(list.moves[0].description, "Release every sheep card");
    }

    #[test]
    fn test_make_initial_world() {
        let world = make_initial_world();
        assert_eq!(world.check_invariants(), Ok(()));
        assert_eq!(world.deck.len(), 22);
    }
}

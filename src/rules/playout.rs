//! Uniformly random playouts through the game tree.

use super::tree::GameTree;
use crate::core::GameRng;

/// Play random moves from `root` for at most `max_steps` moves, calling
/// `visit` on every node reached (the root included). Returns the last node.
///
/// Stops early at a terminal node.
pub fn random_playout(
    root: &GameTree,
    rng: &mut GameRng,
    max_steps: usize,
    mut visit: impl FnMut(&GameTree),
) -> GameTree {
    let mut tree = root.clone();
    visit(&tree);
    for _ in 0..max_steps {
        let Some(index) = rng.choose_index(tree.moves.len()) else {
            break;
        };
        let next = tree.moves[index].force().clone();
        tree = next;
        visit(&tree);
    }
    tree
}

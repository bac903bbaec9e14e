//! Moves and game-tree nodes.
//!
//! A [`GameTree`] pairs a world with the moves available from it. Each
//! [`Move`] holds a deferred successor node, so the tree below a node is
//! only built when a move is forced, one level at a time.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::deferred::Deferred;
use super::judge::{terminal_result, GameResult};
use crate::core::{Region, World};
use crate::effects::Resolution;

/// The card a move corresponds to, when the move means "click this card".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTarget {
    pub region: Region,
    pub index: usize,
}

/// One selectable action with its lazily computed successor.
#[derive(Clone)]
pub struct Move {
    /// Human-readable label.
    pub description: String,

    /// Set when the move is tied to a specific card.
    pub target: Option<CardTarget>,

    successor: Deferred<GameTree>,
}

impl Move {
    /// Create a move whose successor is computed by `successor`.
    pub fn new(description: impl Into<String>, successor: impl FnOnce() -> GameTree + 'static) -> Self {
        Self {
            description: description.into(),
            target: None,
            successor: Deferred::new(successor),
        }
    }

    /// A move that keeps `world` unchanged and continues with `next`.
    pub fn stay(description: impl Into<String>, world: &Rc<World>, next: Option<Resolution>) -> Self {
        let world = Rc::clone(world);
        Self::new(description, move || super::make_game_tree(world, next))
    }

    /// A move that clones `world`, mutates the copy with `apply`, and
    /// continues with the resolution state `apply` returns.
    pub fn apply(
        description: impl Into<String>,
        world: &Rc<World>,
        apply: impl FnOnce(&mut World) -> Option<Resolution> + 'static,
    ) -> Self {
        let world = Rc::clone(world);
        Self::new(description, move || {
            let mut next = World::clone(&world);
            let state = apply(&mut next);
            super::make_game_tree(next, state)
        })
    }

    /// Tie this move to the card at `index` in `region`.
    #[must_use]
    pub fn on(mut self, region: Region, index: usize) -> Self {
        self.target = Some(CardTarget { region, index });
        self
    }

    #[must_use]
    pub fn card_region(&self) -> Option<Region> {
        self.target.map(|t| t.region)
    }

    #[must_use]
    pub fn card_index(&self) -> Option<usize> {
        self.target.map(|t| t.index)
    }

    /// Compute the successor node. Only the first call does any work.
    pub fn force(&self) -> &GameTree {
        if !self.successor.is_forced() {
            tracing::trace!(description = %self.description, "forcing move");
        }
        self.successor.force()
    }

    /// Whether the successor has been computed.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.successor.is_forced()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("description", &self.description)
            .field("target", &self.target)
            .field("forced", &self.is_forced())
            .finish()
    }
}

/// Moves produced by one move-generator call.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    pub moves: Vec<Move>,

    /// The presentation layer should apply the single move without asking.
    pub automated: bool,

    /// Prompt shown above the moves.
    pub description: Option<String>,
}

impl MoveList {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Self {
        Self {
            moves,
            automated: false,
            description: None,
        }
    }

    /// A forced consequence rather than a choice.
    #[must_use]
    pub fn automated(moves: Vec<Move>) -> Self {
        Self {
            moves,
            automated: true,
            description: None,
        }
    }

    /// A choice with a prompt.
    #[must_use]
    pub fn described(description: impl Into<String>, moves: Vec<Move>) -> Self {
        Self {
            moves,
            automated: false,
            description: Some(description.into()),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// A world and the moves available from it.
///
/// Terminal when `moves` is empty.
#[derive(Clone, Debug)]
pub struct GameTree {
    pub world: Rc<World>,
    pub moves: Vec<Move>,
    pub automated: bool,
    pub description: Option<String>,
}

impl GameTree {
    #[must_use]
    pub fn new(world: Rc<World>, list: MoveList) -> Self {
        Self {
            world,
            moves: list.moves,
            automated: list.automated,
            description: list.description,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.moves.is_empty()
    }

    /// Outcome of a terminal node, `None` while the game goes on.
    #[must_use]
    pub fn verdict(&self) -> Option<GameResult> {
        if self.is_terminal() {
            terminal_result(&self.world)
        } else {
            None
        }
    }

    /// Status text: the prompt, else the lone move's label, else a generic
    /// request. Terminal nodes report the verdict.
    #[must_use]
    pub fn prompt(&self) -> String {
        if let Some(result) = self.verdict() {
            return result.description().to_string();
        }
        if let Some(description) = &self.description {
            return description.clone();
        }
        match self.moves.as_slice() {
            [only] => only.description.clone(),
            _ => "Choose a move".to_string(),
        }
    }

    /// First move with the given label.
    #[must_use]
    pub fn find_move(&self, description: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.description == description)
    }

    /// Move tied to the card at `index` in `region`.
    #[must_use]
    pub fn move_on(&self, region: Region, index: usize) -> Option<&Move> {
        let target = CardTarget { region, index };
        self.moves.iter().find(|m| m.target == Some(target))
    }

    /// Moves not tied to a card (rendered as buttons).
    pub fn generic_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.target.is_none())
    }

    /// Force automated moves until a real choice or the end of the game.
    #[must_use]
    pub fn follow_automated(&self) -> GameTree {
        let mut tree = self.clone();
        while tree.automated {
            let Some(first) = tree.moves.first() else {
                break;
            };
            let next = first.force().clone();
            tree = next;
        }
        tree
    }
}

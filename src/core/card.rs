//! Cards: sheep cards, event cards and their identities.
//!
//! Every card in a world has a unique [`CardId`], so two sheep cards of the
//! same rank stay distinguishable as they travel between stock, field and
//! exile.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ShephyError;
use super::rank::Rank;

/// Unique identity of a card instance within a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Identity shared by every face-down placeholder. Never stored in a region.
    pub const HIDDEN: CardId = CardId(u32::MAX);

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The event cards of the game.
///
/// This is a closed set: every variant has a handler in [`crate::effects`],
/// and the compiler checks that no card is left without one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventCard {
    AllPurposeSheep,
    BeFruitful,
    Crowding,
    Dominion,
    FallingRock,
    FillTheEarth,
    Flourish,
    GoldenHooves,
    Inspiration,
    Lightning,
    Meteor,
    Multiply,
    Plague,
    PlanningSheep,
    SheepDog,
    Shephion,
    Slump,
    Storm,
    Wolves,
}

impl EventCard {
    /// Every distinct event card.
    pub const ALL: [EventCard; 19] = [
        EventCard::AllPurposeSheep,
        EventCard::BeFruitful,
        EventCard::Crowding,
        EventCard::Dominion,
        EventCard::FallingRock,
        EventCard::FillTheEarth,
        EventCard::Flourish,
        EventCard::GoldenHooves,
        EventCard::Inspiration,
        EventCard::Lightning,
        EventCard::Meteor,
        EventCard::Multiply,
        EventCard::Plague,
        EventCard::PlanningSheep,
        EventCard::SheepDog,
        EventCard::Shephion,
        EventCard::Slump,
        EventCard::Storm,
        EventCard::Wolves,
    ];

    /// The 22 cards of the starting deck, before shuffling.
    pub const STARTING_DECK: [EventCard; 22] = [
        EventCard::AllPurposeSheep,
        EventCard::BeFruitful,
        EventCard::BeFruitful,
        EventCard::BeFruitful,
        EventCard::Crowding,
        EventCard::Dominion,
        EventCard::Dominion,
        EventCard::FallingRock,
        EventCard::FillTheEarth,
        EventCard::Flourish,
        EventCard::GoldenHooves,
        EventCard::Inspiration,
        EventCard::Lightning,
        EventCard::Meteor,
        EventCard::Multiply,
        EventCard::Plague,
        EventCard::PlanningSheep,
        EventCard::SheepDog,
        EventCard::Shephion,
        EventCard::Slump,
        EventCard::Storm,
        EventCard::Wolves,
    ];

    /// Printed card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventCard::AllPurposeSheep => "All-purpose Sheep",
            EventCard::BeFruitful => "Be Fruitful",
            EventCard::Crowding => "Crowding",
            EventCard::Dominion => "Dominion",
            EventCard::FallingRock => "Falling Rock",
            EventCard::FillTheEarth => "Fill the Earth",
            EventCard::Flourish => "Flourish",
            EventCard::GoldenHooves => "Golden Hooves",
            EventCard::Inspiration => "Inspiration",
            EventCard::Lightning => "Lightning",
            EventCard::Meteor => "Meteor",
            EventCard::Multiply => "Multiply",
            EventCard::Plague => "Plague",
            EventCard::PlanningSheep => "Planning Sheep",
            EventCard::SheepDog => "Sheep Dog",
            EventCard::Shephion => "Shephion",
            EventCard::Slump => "Slump",
            EventCard::Storm => "Storm",
            EventCard::Wolves => "Wolves",
        }
    }

    /// Rule text, for help overlays.
    #[must_use]
    pub const fn rule_text(self) -> &'static str {
        match self {
            EventCard::AllPurposeSheep => {
                "Choose a card in your hand. Play this card as a copy of the chosen card."
            }
            EventCard::BeFruitful => "Duplicate one of your sheep cards.",
            EventCard::Crowding => "Release all but two of your sheep cards.",
            EventCard::Dominion => {
                "Choose any number of sheep cards in the field. Add their values and \
                 replace them with one sheep card of equal or lesser value."
            }
            EventCard::FallingRock => "Release one sheep card.",
            EventCard::FillTheEarth => "Place as many 1 sheep cards in the field as you like.",
            EventCard::Flourish => {
                "Choose one of your sheep cards and gain three sheep cards one rank lower."
            }
            EventCard::GoldenHooves => {
                "Raise the rank of any of your sheep cards except the highest-ranked one(s)."
            }
            EventCard::Inspiration => {
                "Look through the deck, put one event card into your hand, then shuffle the deck."
            }
            EventCard::Lightning => "Release your highest-ranked sheep card.",
            EventCard::Meteor => "Release three sheep cards, then remove this card from the game.",
            EventCard::Multiply => "Place one 3 sheep card in the field.",
            EventCard::Plague => "Release all sheep cards of one rank.",
            EventCard::PlanningSheep => "Remove one event card in your hand from the game.",
            EventCard::SheepDog => "Discard one event card from your hand.",
            EventCard::Shephion => "Release all of your sheep cards.",
            EventCard::Slump => "Release half of your sheep cards (rounded down).",
            EventCard::Storm => "Release two sheep cards.",
            EventCard::Wolves => {
                "Lower the rank of your highest-ranked sheep card by one. \
                 If it is a 1, release it."
            }
        }
    }
}

impl std::fmt::Display for EventCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventCard {
    type Err = ShephyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCard::ALL
            .iter()
            .copied()
            .find(|card| card.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShephyError::UnknownCard(s.to_string()))
    }
}

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Sheep(Rank),
    Event(EventCard),
    /// Placeholder for a card whose face is concealed from the player.
    FaceDown,
}

/// A card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

impl Card {
    /// Create a sheep card.
    #[must_use]
    pub const fn sheep(id: CardId, rank: Rank) -> Self {
        Self {
            id,
            kind: CardKind::Sheep(rank),
        }
    }

    /// Create an event card.
    #[must_use]
    pub const fn event(id: CardId, event: EventCard) -> Self {
        Self {
            id,
            kind: CardKind::Event(event),
        }
    }

    /// A face-down placeholder.
    #[must_use]
    pub const fn face_down() -> Self {
        Self {
            id: CardId::HIDDEN,
            kind: CardKind::FaceDown,
        }
    }

    /// Rank, for sheep cards.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        match self.kind {
            CardKind::Sheep(rank) => Some(rank),
            _ => None,
        }
    }

    /// Event, for event cards.
    #[must_use]
    pub fn as_event(&self) -> Option<EventCard> {
        match self.kind {
            CardKind::Event(event) => Some(event),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_sheep(&self) -> bool {
        matches!(self.kind, CardKind::Sheep(_))
    }

    /// Display name: the rank for sheep, the printed name for events, empty
    /// for face-down cards.
    #[must_use]
    pub fn name(&self) -> String {
        match self.kind {
            CardKind::Sheep(rank) => rank.to_string(),
            CardKind::Event(event) => event.name().to_string(),
            CardKind::FaceDown => String::new(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_deck_uses_every_card() {
        for card in EventCard::ALL {
            assert!(EventCard::STARTING_DECK.contains(&card), "{card} missing from deck");
        }
        let fruitful = EventCard::STARTING_DECK
            .iter()
            .filter(|&&c| c == EventCard::BeFruitful)
            .count();
        let dominion = EventCard::STARTING_DECK
            .iter()
            .filter(|&&c| c == EventCard::Dominion)
            .count();
        assert_eq!(fruitful, 3);
        assert_eq!(dominion, 2);
    }

    #[test]
    fn test_parse_by_name() {
        for card in EventCard::ALL {
            assert_eq!(card.name().parse::<EventCard>(), Ok(card));
        }
        assert_eq!("sheep dog".parse::<EventCard>(), Ok(EventCard::SheepDog));
        assert_eq!(
            "Lost Sheep".parse::<EventCard>(),
            Err(ShephyError::UnknownCard("Lost Sheep".to_string()))
        );
    }

    #[test]
    fn test_card_accessors() {
        let sheep = Card::sheep(CardId::new(1), Rank::THIRTY);
        let event = Card::event(CardId::new(2), EventCard::Storm);
        let hidden = Card::face_down();

        assert_eq!(sheep.rank(), Some(Rank::THIRTY));
        assert_eq!(sheep.as_event(), None);
        assert!(sheep.is_sheep());
        assert_eq!(sheep.name(), "30");

        assert_eq!(event.rank(), None);
        assert_eq!(event.as_event(), Some(EventCard::Storm));
        assert_eq!(event.name(), "Storm");

        assert_eq!(hidden.id, CardId::HIDDEN);
        assert_eq!(hidden.name(), "");
    }

    #[test]
    fn test_rule_text_present() {
        for card in EventCard::ALL {
            assert!(!card.rule_text().is_empty());
        }
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::event(CardId::new(9), EventCard::GoldenHooves);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}

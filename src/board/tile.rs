//! A single revealed board cell.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};
use crate::core::Position;

/// A revealed board cell.
///
/// Tiles are never removed from the board. Collecting or destroying a card
/// only empties the tile, which then stays passable forever.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub card: Option<Card>,
}

impl Tile {
    #[must_use]
    pub fn new(position: Position, card: Option<Card>) -> Self {
        Self { position, card }
    }

    /// The empty tile at the origin.
    #[must_use]
    pub fn central_chamber() -> Self {
        Self::new(Position::ORIGIN, None)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    #[must_use]
    pub fn is_central_chamber(&self) -> bool {
        self.position.is_origin()
    }

    /// Type of the card on this tile, if any.
    #[must_use]
    pub fn card_type(&self) -> Option<CardType> {
        self.card.as_ref().map(Card::card_type)
    }

    /// True if the tile holds a card of type `kind`.
    #[must_use]
    pub fn holds(&self, kind: CardType) -> bool {
        self.card_type() == Some(kind)
    }

    /// Walls and traps block movement; everything else can be entered.
    ///
    /// Queens and Kings have extra, player-dependent rules on top of this;
    /// see [`crate::rules::RulesEngine::can_move`].
    #[must_use]
    pub fn is_passable(&self) -> bool {
        !matches!(self.card_type(), Some(CardType::Wall | CardType::Trap))
    }

    /// Orthogonal neighbours.
    #[must_use]
    pub fn adjacent_positions(&self) -> [Position; 4] {
        self.position.neighbors()
    }

    #[must_use]
    pub fn is_adjacent_to(&self, position: Position) -> bool {
        self.position.is_adjacent_to(position)
    }

    /// Remove and return the card, leaving the tile empty.
    pub fn take_card(&mut self) -> Option<Card> {
        self.card.take()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.card {
            _ if self.is_central_chamber() => f.write_str("Central Chamber"),
            None => write!(f, "Empty tile at {}", self.position),
            Some(card) => write!(f, "{card} at {}", self.position),
        }
    }
}

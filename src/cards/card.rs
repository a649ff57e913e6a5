//! Playing cards and their derived properties.
//!
//! A `Card` is a suit/rank pair. Everything the rules care about - its
//! behaviour type, colour, and damage value - is derived from those two.
//!
//! ## Value Semantics
//!
//! Cards are plain owned values. When a card leaves the board for the
//! player's party or King collection it is moved (or cloned), so board
//! state and player state never share a card.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::ParseError;
use crate::core::Position;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Hearts and diamonds are red, clubs and spades black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// The other suit of the same colour.
    ///
    /// For a starting Queen this is the suit of the final King.
    #[must_use]
    pub const fn partner(self) -> Suit {
        match self {
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Clubs,
        }
    }

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hearts" | "heart" | "h" | "♥" => Ok(Suit::Hearts),
            "diamonds" | "diamond" | "d" | "♦" => Ok(Suit::Diamonds),
            "clubs" | "club" | "c" | "♣" => Ok(Suit::Clubs),
            "spades" | "spade" | "s" | "♠" => Ok(Suit::Spades),
            _ => Err(ParseError::Suit(s.to_string())),
        }
    }
}

/// Suit colour. Drives the King collection requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank.
///
/// Number ranks carry their face value. Only 5-9 appear with the default
/// rules; which ones exist is decided by the deck, not by this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Ace,
    Jack,
    Queen,
    King,
    Ten,
}

impl Rank {
    /// Default card value for this rank.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rank::Number(n) => n as u32,
            Rank::Ace => 1,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ten => 10,
        }
    }

    /// Behaviour type for this rank.
    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self {
            Rank::Number(_) => CardType::Number,
            Rank::Ace => CardType::Teleporter,
            Rank::Jack => CardType::Trap,
            Rank::Queen => CardType::Collectible,
            Rank::King => CardType::Victory,
            Rank::Ten => CardType::Wall,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{n}"),
            Rank::Ace => f.write_str("ACE"),
            Rank::Jack => f.write_str("JACK"),
            Rank::Queen => f.write_str("QUEEN"),
            Rank::King => f.write_str("KING"),
            Rank::Ten => f.write_str("TEN"),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "ace" | "a" => Ok(Rank::Ace),
            "jack" | "j" => Ok(Rank::Jack),
            "queen" | "q" => Ok(Rank::Queen),
            "king" | "k" => Ok(Rank::King),
            "ten" | "10" => Ok(Rank::Ten),
            other => match other.parse::<u8>() {
                Ok(n) if (2..=9).contains(&n) => Ok(Rank::Number(n)),
                _ => Err(ParseError::Rank(s.to_string())),
            },
        }
    }
}

/// What a card does when it sits on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Ace: teleport hub, deals its value when entered.
    Teleporter,
    /// Jack: impassable, damages orthogonal neighbours.
    Trap,
    /// Queen: joins the party and grants suit immunity.
    Collectible,
    /// King: collected to win, carries a one-shot destroy ability.
    Victory,
    /// Ten: impassable.
    Wall,
    /// 2-9: deals face value when entered.
    Number,
}

/// Identity of a card: its suit and rank.
///
/// Unique within a deck, so it doubles as King identity for the one-shot
/// ability bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardKey {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Key of the King of `suit`.
    #[must_use]
    pub const fn king(suit: Suit) -> Self {
        Self::new(suit, Rank::King)
    }
}

/// A playing card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Damage/score value. Derived from rank unless overridden.
    pub value: u32,
    /// Set once the card has been placed face up on the board.
    pub revealed: bool,
    /// Where the card was placed, if it ever was.
    pub position: Option<Position>,
}

impl Card {
    /// Create a card with the rank's default value.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self::with_value(suit, rank, rank.value())
    }

    /// Create a card with an explicit value.
    #[must_use]
    pub const fn with_value(suit: Suit, rank: Rank, value: u32) -> Self {
        Self {
            suit,
            rank,
            value,
            revealed: false,
            position: None,
        }
    }

    /// Shorthand for a Queen.
    #[must_use]
    pub const fn queen(suit: Suit) -> Self {
        Self::new(suit, Rank::Queen)
    }

    /// Shorthand for a King.
    #[must_use]
    pub const fn king(suit: Suit) -> Self {
        Self::new(suit, Rank::King)
    }

    #[must_use]
    pub const fn key(&self) -> CardKey {
        CardKey::new(self.suit, self.rank)
    }

    #[must_use]
    pub const fn card_type(&self) -> CardType {
        self.rank.card_type()
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Same suit and rank, ignoring placement state.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.key() == other.key()
    }

    /// Ace, Jack, Queen, or King.
    #[must_use]
    pub const fn is_face_card(&self) -> bool {
        matches!(self.rank, Rank::Ace | Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Mark the card as placed face up at `position`.
    pub fn place_at(&mut self, position: Position) {
        self.position = Some(position);
        self.revealed = true;
    }

    /// Compact form used by text renderers, e.g. `7♠`, `A♥`, `10♣`.
    #[must_use]
    pub fn symbol(&self) -> String {
        let rank = match self.rank {
            Rank::Number(n) => n.to_string(),
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            Rank::Ten => "10".to_string(),
        };
        format!("{rank}{}", self.suit.symbol())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_derived_from_rank() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Number(7)).value, 7);
        assert_eq!(Card::new(Suit::Hearts, Rank::Ace).value, 1);
        assert_eq!(Card::new(Suit::Hearts, Rank::Jack).value, 11);
        assert_eq!(Card::new(Suit::Hearts, Rank::Queen).value, 12);
        assert_eq!(Card::new(Suit::Hearts, Rank::King).value, 13);
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).value, 10);
    }

    #[test]
    fn test_value_override() {
        let card = Card::with_value(Suit::Clubs, Rank::Ace, 3);
        assert_eq!(card.value, 3);
        assert_eq!(card.card_type(), CardType::Teleporter);
    }

    #[test]
    fn test_types() {
        assert_eq!(Rank::Number(5).card_type(), CardType::Number);
        assert_eq!(Rank::Ace.card_type(), CardType::Teleporter);
        assert_eq!(Rank::Jack.card_type(), CardType::Trap);
        assert_eq!(Rank::Queen.card_type(), CardType::Collectible);
        assert_eq!(Rank::King.card_type(), CardType::Victory);
        assert_eq!(Rank::Ten.card_type(), CardType::Wall);

        assert!(Card::new(Suit::Clubs, Rank::Ace).is_face_card());
        assert!(Card::new(Suit::Clubs, Rank::Jack).is_face_card());
        assert!(Card::queen(Suit::Hearts).is_face_card());
        assert!(Card::king(Suit::Spades).is_face_card());
        assert!(!Card::new(Suit::Clubs, Rank::Ten).is_face_card());
        assert!(!Card::new(Suit::Diamonds, Rank::Number(7)).is_face_card());
    }

    #[test]
    fn test_colors_and_partners() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);

        for suit in Suit::ALL {
            assert_ne!(suit.partner(), suit);
            assert_eq!(suit.partner().color(), suit.color());
            assert_eq!(suit.partner().partner(), suit);
        }
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut on_board = Card::new(Suit::Spades, Rank::Queen);
        on_board.place_at(Position::new(1, 0));

        let mut collected = on_board.clone();
        collected.position = None;

        assert_eq!(on_board.position, Some(Position::new(1, 0)));
        assert!(on_board.same_identity(&collected));
    }

    #[test]
    fn test_display_and_symbol() {
        assert_eq!(Card::new(Suit::Spades, Rank::Number(7)).to_string(), "7 of spades");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "ACE of hearts");
        assert_eq!(Card::new(Suit::Clubs, Rank::Ten).symbol(), "10♣");
        assert_eq!(Card::queen(Suit::Diamonds).symbol(), "Q♦");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Hearts".parse::<Suit>().unwrap(), Suit::Hearts);
        assert_eq!("♠".parse::<Suit>().unwrap(), Suit::Spades);
        assert!("stars".parse::<Suit>().is_err());

        assert_eq!("q".parse::<Rank>().unwrap(), Rank::Queen);
        assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
        assert_eq!("6".parse::<Rank>().unwrap(), Rank::Number(6));
        assert!("1".parse::<Rank>().is_err());
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Diamonds, Rank::Number(9));
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}

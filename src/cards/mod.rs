//! Cards and the draw pile.
//!
//! ## Key Types
//!
//! - `Card`: Suit/rank value with derived type, colour, and damage value
//! - `CardKey`: Identity of a card, unique within a deck
//! - `Deck`: Ordered pool of undrawn cards

pub mod card;
pub mod deck;

pub use card::{Card, CardKey, CardType, Color, Rank, Suit};
pub use deck::Deck;

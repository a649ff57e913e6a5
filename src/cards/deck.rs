//! The draw pile.
//!
//! Front of the deck is the next card drawn. Running out is a normal game
//! situation: `draw` returns `None` and the caller simply stops revealing.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::card::{Card, CardKey, Rank, Suit};
use crate::core::{GameRng, GameRules};

/// Ordered pool of undrawn cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A deck holding exactly `cards`, first element drawn first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build the full, unshuffled deck for `rules`.
    ///
    /// For every suit: each number rank, Ace, Jack, Queen, King, Ten. The
    /// Queen whose suit matches `excluded_queen` is withheld because it
    /// starts in the player's party. Order is suit-major, rank-minor.
    /// The default rules give 39 cards, or 40 with no Queen withheld.
    #[must_use]
    pub fn create(rules: &GameRules, excluded_queen: Option<Suit>) -> Self {
        let number_ranks = rules.number_ranks();
        let mut cards = VecDeque::with_capacity(Suit::ALL.len() * (number_ranks.len() + 5));

        for suit in Suit::ALL {
            for &n in &number_ranks {
                cards.push_back(Card::new(suit, Rank::Number(n)));
            }
            cards.push_back(Card::new(suit, Rank::Ace));
            cards.push_back(Card::new(suit, Rank::Jack));
            if excluded_queen != Some(suit) {
                cards.push_back(Card::new(suit, Rank::Queen));
            }
            cards.push_back(Card::new(suit, Rank::King));
            cards.push_back(Card::new(suit, Rank::Ten));
        }

        Self { cards }
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the front card, or `None` when exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front();
        if card.is_none() {
            tracing::trace!("deck exhausted");
        }
        card
    }

    /// Draw up to `count` cards, stopping early if the deck runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    /// Pull a specific card out of the deck, wherever it is.
    pub fn remove_card(&mut self, key: CardKey) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.key() == key)?;
        self.cards.remove(index)
    }

    #[must_use]
    pub fn contains(&self, key: CardKey) -> bool {
        self.cards.iter().any(|c| c.key() == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_size() {
        let rules = GameRules::default();
        assert_eq!(Deck::create(&rules, Some(Suit::Hearts)).len(), 39);
        assert_eq!(Deck::create(&rules, None).len(), 40);
    }

    #[test]
    fn test_create_order_is_suit_major() {
        let deck = Deck::create(&GameRules::default(), None);
        let first: Vec<_> = deck.iter().take(10).map(Card::key).collect();

        assert_eq!(first[0], CardKey::new(Suit::Hearts, Rank::Number(5)));
        assert_eq!(first[4], CardKey::new(Suit::Hearts, Rank::Number(9)));
        assert_eq!(first[5], CardKey::new(Suit::Hearts, Rank::Ace));
        assert_eq!(first[9], CardKey::new(Suit::Hearts, Rank::Ten));
        assert_eq!(
            deck.iter().nth(9).map(Card::key),
            Some(CardKey::new(Suit::Hearts, Rank::Ten))
        );
    }

    #[test]
    fn test_excluded_queen_is_withheld() {
        let deck = Deck::create(&GameRules::default(), Some(Suit::Spades));
        assert!(!deck.contains(CardKey::new(Suit::Spades, Rank::Queen)));
        assert!(deck.contains(CardKey::new(Suit::Clubs, Rank::Queen)));
        assert!(deck.contains(CardKey::king(Suit::Spades)));
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::from_cards([
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Clubs, Rank::Ten),
        ]);

        assert_eq!(deck.draw().map(|c| c.key()), Some(CardKey::new(Suit::Hearts, Rank::Ace)));
        assert_eq!(deck.draw().map(|c| c.key()), Some(CardKey::new(Suit::Clubs, Rank::Ten)));
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_many_stops_early() {
        let mut deck = Deck::create(&GameRules::default(), Some(Suit::Hearts));

        let hand = deck.draw_many(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(deck.len(), 34);

        let rest = deck.draw_many(100);
        assert_eq!(rest.len(), 34);
        assert!(deck.is_empty());
        assert!(deck.draw_many(3).is_empty());
    }

    #[test]
    fn test_remove_card() {
        let mut deck = Deck::create(&GameRules::default(), None);
        let removed = deck.remove_card(CardKey::king(Suit::Diamonds));

        assert_eq!(removed.map(|c| c.key()), Some(CardKey::king(Suit::Diamonds)));
        assert_eq!(deck.len(), 39);
        assert!(deck.remove_card(CardKey::king(Suit::Diamonds)).is_none());
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let rules = GameRules::default();
        let original = Deck::create(&rules, Some(Suit::Clubs));
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut GameRng::new(99));

        assert_ne!(shuffled, original);

        let mut a: Vec<_> = original.iter().map(Card::key).collect();
        let mut b: Vec<_> = shuffled.iter().map(Card::key).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}

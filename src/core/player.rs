//! Player session state.
//!
//! ## Party
//!
//! Up to `max_party_size` Queens, starting with the Queen the player chose.
//! Each Queen in the party makes the player immune to her suit. Immunity is
//! always read from the current party, so losing a Queen (to pay for a
//! King) takes effect immediately.
//!
//! ## Kings
//!
//! Collected Kings count towards victory and each carries a one-shot tile
//! destroy ability, tracked by `CardKey`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Position;
use crate::cards::{Card, CardKey, Suit};

/// Queens held by the player.
pub type Party = SmallVec<[Card; 3]>;

/// Kings collected by the player.
pub type KingCollection = SmallVec<[Card; 4]>;

/// The single player of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The Queen chosen at setup. Decides which King must be collected last.
    pub starting_queen: Card,

    /// Queens currently in the party, in collection order.
    pub party: Party,

    /// Kings collected so far, in collection order.
    pub collected_kings: KingCollection,

    /// Current health, never below zero.
    pub health: u32,

    /// Health at the start of the game.
    pub max_health: u32,

    /// Where the player stands.
    pub position: Position,

    /// Kings whose destroy ability has been spent.
    pub used_king_abilities: FxHashSet<CardKey>,
}

impl Player {
    /// Create a player at the origin with `starting_queen` as the only party
    /// member.
    #[must_use]
    pub fn new(starting_queen: Card, starting_health: u32) -> Self {
        let mut party = Party::new();
        party.push(starting_queen.clone());
        Self {
            starting_queen,
            party,
            collected_kings: KingCollection::new(),
            health: starting_health,
            max_health: starting_health,
            position: Position::ORIGIN,
            used_king_abilities: FxHashSet::default(),
        }
    }

    /// Suits the player is currently immune to, in party order.
    #[must_use]
    pub fn immunities(&self) -> SmallVec<[Suit; 3]> {
        self.party.iter().map(|q| q.suit).collect()
    }

    #[must_use]
    pub fn is_immune_to(&self, suit: Suit) -> bool {
        self.party.iter().any(|q| q.suit == suit)
    }

    /// True if a Queen with the same identity is in the party.
    #[must_use]
    pub fn has_queen(&self, queen: &Card) -> bool {
        self.party.iter().any(|q| q.same_identity(queen))
    }

    /// Add a Queen unless the party already holds `max_party_size`.
    pub fn add_queen_to_party(&mut self, queen: Card, max_party_size: usize) -> bool {
        if self.party.len() >= max_party_size {
            return false;
        }
        self.party.push(queen);
        true
    }

    /// Remove the Queen with `queen`'s identity. Returns the removed card.
    pub fn remove_queen_from_party(&mut self, queen: &Card) -> Option<Card> {
        let index = self.party.iter().position(|q| q.same_identity(queen))?;
        Some(self.party.remove(index))
    }

    #[must_use]
    pub fn has_king(&self, king: CardKey) -> bool {
        self.collected_kings.iter().any(|k| k.key() == king)
    }

    pub fn collect_king(&mut self, king: Card) {
        self.collected_kings.push(king);
    }

    #[must_use]
    pub fn has_used_king_ability(&self, king: CardKey) -> bool {
        self.used_king_abilities.contains(&king)
    }

    pub fn use_king_ability(&mut self, king: CardKey) {
        self.used_king_abilities.insert(king);
    }

    /// Collected Kings whose destroy ability is still available.
    pub fn available_kings(&self) -> impl Iterator<Item = &Card> {
        self.collected_kings
            .iter()
            .filter(|k| !self.used_king_abilities.contains(&k.key()))
    }

    /// Apply damage, clamping at zero. Returns the new health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    #[must_use]
    pub fn has_won(&self, total_kings_to_win: usize) -> bool {
        self.collected_kings.len() >= total_kings_to_win
    }

    /// Suit of the King that must be collected last: the other suit of the
    /// starting Queen's colour.
    #[must_use]
    pub fn final_king_suit(&self) -> Suit {
        self.starting_queen.suit.partner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn player() -> Player {
        Player::new(Card::queen(Suit::Hearts), 20)
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert_eq!(p.health, 20);
        assert_eq!(p.max_health, 20);
        assert_eq!(p.position, Position::ORIGIN);
        assert_eq!(p.party.len(), 1);
        assert!(p.collected_kings.is_empty());
        assert!(p.is_immune_to(Suit::Hearts));
        assert!(!p.is_immune_to(Suit::Diamonds));
    }

    #[test]
    fn test_party_limit() {
        let mut p = player();
        assert!(p.add_queen_to_party(Card::queen(Suit::Clubs), 3));
        assert!(p.add_queen_to_party(Card::queen(Suit::Spades), 3));
        assert!(!p.add_queen_to_party(Card::queen(Suit::Diamonds), 3));
        assert_eq!(p.immunities().as_slice(), &[Suit::Hearts, Suit::Clubs, Suit::Spades]);
    }

    #[test]
    fn test_remove_queen_drops_immunity() {
        let mut p = player();
        p.add_queen_to_party(Card::queen(Suit::Clubs), 3);

        let removed = p.remove_queen_from_party(&Card::queen(Suit::Hearts));
        assert_eq!(removed.map(|q| q.suit), Some(Suit::Hearts));
        assert!(!p.is_immune_to(Suit::Hearts));
        assert!(p.remove_queen_from_party(&Card::queen(Suit::Hearts)).is_none());
    }

    #[test]
    fn test_take_damage_clamps() {
        let mut p = player();
        assert_eq!(p.take_damage(7), 13);
        assert!(!p.is_dead());
        assert_eq!(p.take_damage(50), 0);
        assert!(p.is_dead());
    }

    #[test]
    fn test_king_abilities() {
        let mut p = player();
        p.collect_king(Card::king(Suit::Clubs));
        p.collect_king(Card::king(Suit::Spades));

        let club = CardKey::king(Suit::Clubs);
        assert!(p.has_king(club));
        assert!(!p.has_used_king_ability(club));

        p.use_king_ability(club);
        assert!(p.has_used_king_ability(club));

        let available: Vec<_> = p.available_kings().map(|k| k.suit).collect();
        assert_eq!(available, vec![Suit::Spades]);
    }

    #[test]
    fn test_final_king_and_victory() {
        let p = player();
        assert_eq!(p.final_king_suit(), Suit::Diamonds);

        let mut p = Player::new(Card::queen(Suit::Spades), 20);
        assert_eq!(p.final_king_suit(), Suit::Clubs);
        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Spades] {
            p.collect_king(Card::king(suit));
        }
        assert!(!p.has_won(4));
        assert!(p.has_won(3));
        assert!(!p.has_king(CardKey::new(Suit::Spades, Rank::Queen)));
    }

    #[test]
    fn test_serialization() {
        let mut p = player();
        p.use_king_ability(CardKey::king(Suit::Clubs));
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

//! Deck integration tests.
//!
//! These tests verify deck composition for every starting suit and rules
//! variant, and that shuffling is always a permutation.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use queens_garden::cards::{Card, CardKey, Deck, Rank, Suit};
use queens_garden::core::{GameRng, GameRules};

fn keys(deck: &Deck) -> Vec<CardKey> {
    let mut keys: Vec<_> = deck.iter().map(Card::key).collect();
    keys.sort();
    keys
}

// =============================================================================
// Composition
// =============================================================================

/// Every starting suit yields one card per (suit, rank) except its Queen.
#[test]
fn test_completeness_for_every_excluded_queen() {
    let rules = GameRules::default();

    for excluded in Suit::ALL {
        let deck = Deck::create(&rules, Some(excluded));
        assert_eq!(deck.len(), 39, "deck without the {excluded} Queen");

        let unique: FxHashSet<_> = deck.iter().map(Card::key).collect();
        assert_eq!(unique.len(), deck.len(), "no duplicate cards");

        for suit in Suit::ALL {
            for rank in [
                Rank::Number(5),
                Rank::Number(6),
                Rank::Number(7),
                Rank::Number(8),
                Rank::Number(9),
                Rank::Ace,
                Rank::Jack,
                Rank::King,
                Rank::Ten,
            ] {
                assert!(deck.contains(CardKey::new(suit, rank)), "{rank} of {suit}");
            }
            assert_eq!(
                deck.contains(CardKey::new(suit, Rank::Queen)),
                suit != excluded,
                "Queen of {suit}"
            );
        }
    }
}

/// Removed ranks are configurable; the count follows
/// 4 x (numbers + ace + jack + king + ten) + queens.
#[test]
fn test_composition_follows_rules() {
    let rules = GameRules::default().with_removed_ranks([2, 3, 4, 5, 6]);
    let deck = Deck::create(&rules, Some(Suit::Clubs));

    assert_eq!(deck.len(), 4 * (3 + 4) + 3);
    assert!(!deck.iter().any(|c| c.rank == Rank::Number(5)));
    assert!(deck.contains(CardKey::new(Suit::Hearts, Rank::Number(7))));

    let everything = GameRules::default().with_removed_ranks([]);
    assert_eq!(Deck::create(&everything, None).len(), 4 * (8 + 5));
}

#[test]
fn test_fresh_cards_are_unplaced() {
    let deck = Deck::create(&GameRules::default(), Some(Suit::Hearts));
    assert!(deck.iter().all(|c| !c.revealed && c.position.is_none()));
    assert!(deck.iter().all(|c| c.value == c.rank.value()));
}

// =============================================================================
// Shuffling
// =============================================================================

#[test]
fn test_same_seed_same_order() {
    let rules = GameRules::default();
    let mut a = Deck::create(&rules, Some(Suit::Spades));
    let mut b = a.clone();

    a.shuffle(&mut GameRng::new(1234));
    b.shuffle(&mut GameRng::new(1234));
    assert_eq!(a, b);

    let mut c = Deck::create(&rules, Some(Suit::Spades));
    c.shuffle(&mut GameRng::new(4321));
    assert_ne!(a, c);
}

proptest! {
    /// Shuffling never adds, drops, or duplicates a card.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), suit_index in 0usize..4) {
        let excluded = Suit::ALL[suit_index];
        let original = Deck::create(&GameRules::default(), Some(excluded));
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut GameRng::new(seed));

        prop_assert_eq!(shuffled.len(), original.len());
        prop_assert_eq!(keys(&shuffled), keys(&original));
    }

    /// Drawing past the end never panics and yields each card once.
    #[test]
    fn prop_draw_many_exhausts_cleanly(seed in any::<u64>(), batch in 1usize..50) {
        let mut deck = Deck::create(&GameRules::default(), Some(Suit::Hearts));
        deck.shuffle(&mut GameRng::new(seed));

        let mut drawn = Vec::new();
        loop {
            let hand = deck.draw_many(batch);
            if hand.is_empty() {
                break;
            }
            drawn.extend(hand);
        }

        prop_assert_eq!(drawn.len(), 39);
        prop_assert!(deck.draw().is_none());
        let unique: FxHashSet<_> = drawn.iter().map(Card::key).collect();
        prop_assert_eq!(unique.len(), 39);
    }
}

//! Static game rules.
//!
//! `GameRules` is injected into the engine at construction and never changes
//! for the lifetime of a session. `GameRules::default()` is the standard
//! game; embedders can tweak it with the `with_*` builders or load it from
//! any serde format.
//!
//! ```
//! use queens_garden::core::GameRules;
//!
//! let rules = GameRules::default()
//!     .with_starting_health(30)
//!     .with_jack_adjacent_damage(2);
//!
//! assert!(rules.validate().is_ok());
//! assert_eq!(rules.number_ranks(), vec![5, 6, 7, 8, 9]);
//! ```

use serde::{Deserialize, Serialize};

use super::Position;

/// Number ranks a deck could contain before `removed_ranks` is applied.
pub const NUMBER_RANK_RANGE: std::ops::RangeInclusive<u8> = 2..=9;

/// Invalid rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("starting health must be positive")]
    ZeroHealth,

    #[error("max party size must be at least 1")]
    ZeroPartySize,

    #[error("total kings to win must be within 1..=4, got {0}")]
    KingsToWin(usize),

    #[error("removed rank {0} is not a number rank (2-9)")]
    RemovedRank(u8),

    #[error("initial reveal offset {0} points at the central chamber")]
    RevealAtOrigin(Position),
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Player's starting (and maximum) health.
    pub starting_health: u32,

    /// Number ranks left out of the deck.
    pub removed_ranks: Vec<u8>,

    /// Maximum Queens in the party.
    pub max_party_size: usize,

    /// Kings required for victory.
    pub total_kings_to_win: usize,

    /// Damage dealt by each orthogonally adjacent Jack.
    pub jack_adjacent_damage: u32,

    /// Offsets from the origin revealed when the game is set up.
    pub initial_reveal: Vec<Position>,

    /// Reveal unexplored neighbours whenever the player moves.
    pub reveal_adjacent_on_move: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_health: 20,
            removed_ranks: vec![2, 3, 4],
            max_party_size: 3,
            total_kings_to_win: 4,
            jack_adjacent_damage: 4,
            initial_reveal: vec![
                Position::new(0, 1),
                Position::new(0, -1),
                Position::new(1, 0),
                Position::new(-1, 0),
            ],
            reveal_adjacent_on_move: true,
        }
    }
}

impl GameRules {
    /// Check the rules for values the engine cannot play with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        if self.max_party_size == 0 {
            return Err(ConfigError::ZeroPartySize);
        }
        if !(1..=4).contains(&self.total_kings_to_win) {
            return Err(ConfigError::KingsToWin(self.total_kings_to_win));
        }
        if let Some(&rank) = self
            .removed_ranks
            .iter()
            .find(|r| !NUMBER_RANK_RANGE.contains(*r))
        {
            return Err(ConfigError::RemovedRank(rank));
        }
        if let Some(&offset) = self.initial_reveal.iter().find(|p| p.is_origin()) {
            return Err(ConfigError::RevealAtOrigin(offset));
        }
        Ok(())
    }

    /// Number ranks present in a fresh deck, ascending.
    #[must_use]
    pub fn number_ranks(&self) -> Vec<u8> {
        NUMBER_RANK_RANGE
            .filter(|r| !self.removed_ranks.contains(r))
            .collect()
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_removed_ranks(mut self, ranks: impl IntoIterator<Item = u8>) -> Self {
        self.removed_ranks = ranks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_max_party_size(mut self, size: usize) -> Self {
        self.max_party_size = size;
        self
    }

    #[must_use]
    pub fn with_total_kings_to_win(mut self, kings: usize) -> Self {
        self.total_kings_to_win = kings;
        self
    }

    #[must_use]
    pub fn with_jack_adjacent_damage(mut self, damage: u32) -> Self {
        self.jack_adjacent_damage = damage;
        self
    }

    #[must_use]
    pub fn with_initial_reveal(mut self, offsets: impl IntoIterator<Item = Position>) -> Self {
        self.initial_reveal = offsets.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_reveal_adjacent_on_move(mut self, reveal: bool) -> Self {
        self.reveal_adjacent_on_move = reveal;
        self
    }
}

//! Notifications from the engine to its collaborators.
//!
//! A renderer (or any other listener) implements `GameObserver` and is
//! handed to the engine at construction. Callbacks fire after the state
//! change they describe and return nothing: observers cannot influence the
//! turn pipeline.
//!
//! ## Provided Observers
//!
//! - `NullObserver`: ignores everything (the default)
//! - `EventLog`: records every notification as a `GameEvent`

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// What caused a damage notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageSource {
    /// Stepping onto a number card or an Ace.
    Tile,
    /// Landing on an Ace by teleport.
    Teleport,
    /// An orthogonally adjacent Jack.
    Trap,
}

impl std::fmt::Display for DamageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DamageSource::Tile => "Tile",
            DamageSource::Teleport => "Teleport",
            DamageSource::Trap => "Jack trap",
        })
    }
}

/// Listener for engine state changes. All methods default to no-ops.
pub trait GameObserver {
    /// The player took `amount` damage and now has `new_health`.
    fn on_damage(&mut self, amount: u32, new_health: u32, source: DamageSource) {
        let _ = (amount, new_health, source);
    }

    fn on_queen_collected(&mut self, queen: &Card) {
        let _ = queen;
    }

    fn on_king_collected(&mut self, king: &Card) {
        let _ = king;
    }

    /// The session reached a terminal phase.
    fn on_game_over(&mut self, victory: bool) {
        let _ = victory;
    }
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Damage {
        amount: u32,
        new_health: u32,
        source: DamageSource,
    },
    QueenCollected(Card),
    KingCollected(Card),
    GameOver {
        victory: bool,
    },
}

/// Observer that keeps every notification in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Total damage across all recorded `Damage` events.
    #[must_use]
    pub fn total_damage(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                GameEvent::Damage { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_damage(&mut self, amount: u32, new_health: u32, source: DamageSource) {
        self.events.push(GameEvent::Damage {
            amount,
            new_health,
            source,
        });
    }

    fn on_queen_collected(&mut self, queen: &Card) {
        self.events.push(GameEvent::QueenCollected(queen.clone()));
    }

    fn on_king_collected(&mut self, king: &Card) {
        self.events.push(GameEvent::KingCollected(king.clone()));
    }

    fn on_game_over(&mut self, victory: bool) {
        self.events.push(GameEvent::GameOver { victory });
    }
}

//! Action requests and the history record of accepted actions.
//!
//! An `Action` is what a collaborator asks the engine to do. The engine
//! exposes one method per variant; `GameEngine::apply` dispatches an
//! `Action` value to the matching method, which is how recorded history is
//! replayed.

use serde::{Deserialize, Serialize};

use super::{Direction, Position};
use crate::cards::Suit;

/// A request for the engine.
///
/// The three kinds are mutually exclusive: a move (by direction or by
/// target), an explicit teleport, or a King's destroy ability.
///
/// ## Example
///
/// ```
/// use queens_garden::cards::Suit;
/// use queens_garden::core::{Action, Direction, Position};
///
/// let step = Action::Move(Direction::North);
/// let destroy = Action::Destroy { target: Position::new(1, 0), king: Suit::Clubs };
///
/// assert!(step.relocates());
/// assert!(!destroy.relocates());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step one tile in a direction.
    Move(Direction),

    /// Move to a coordinate: an adjacent step, or an Ace teleport.
    MoveTo(Position),

    /// Teleport from the current Ace to an Ace or the central chamber.
    Teleport(Position),

    /// Clear an adjacent tile using the King of `king`.
    Destroy { target: Position, king: Suit },
}

impl Action {
    /// True if the action changes the player's position when accepted.
    #[must_use]
    pub fn relocates(&self) -> bool {
        !matches!(self, Action::Destroy { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(direction) => write!(f, "move {direction}"),
            Action::MoveTo(target) => write!(f, "move to {target}"),
            Action::Teleport(target) => write!(f, "teleport to {target}"),
            Action::Destroy { target, king } => write!(f, "destroy {target} with King of {king}"),
        }
    }
}

/// An accepted action with the turn it completed and its damage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn counter after the action was applied.
    pub turn: u32,

    /// The action taken.
    pub action: Action,

    /// Total damage the action dealt to the player.
    pub damage: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(turn: u32, action: Action, damage: u32) -> Self {
        Self { turn, action, damage }
    }
}

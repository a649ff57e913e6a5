//! What an accepted action did.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::snapshot::GamePhase;
use crate::cards::Card;
use crate::core::{ActionError, Position};
use crate::rules::MoveKind;

/// Effects of one accepted action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Total damage applied: `tile_damage + trap_damage`.
    pub damage: u32,

    /// Damage from the tile entered.
    pub tile_damage: u32,

    /// Damage from adjacent Jacks.
    pub trap_damage: u32,

    /// How the player moved. `None` for a destroy.
    pub kind: Option<MoveKind>,

    /// Tiles revealed by this action, in reveal order.
    pub revealed: SmallVec<[Position; 4]>,

    /// Queen or King collected on arrival.
    pub collected: Option<Card>,

    /// Phase after the action.
    pub phase: GamePhase,
}

impl TurnOutcome {
    /// True if this action ended the game in victory.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.phase == GamePhase::Victory
    }

    #[must_use]
    pub fn is_defeat(&self) -> bool {
        self.phase == GamePhase::Defeat
    }
}

/// Flat action result for collaborators that want the plain
/// `{success, message, damage}` shape instead of a `Result`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
}

impl From<Result<TurnOutcome, ActionError>> for ActionResult {
    fn from(result: Result<TurnOutcome, ActionError>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                message: None,
                damage: outcome.kind.map(|_| outcome.damage),
            },
            Err(err) => Self {
                success: false,
                message: Some(err.to_string()),
                damage: None,
            },
        }
    }
}

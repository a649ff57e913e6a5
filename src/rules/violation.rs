//! Reasons a rule check can fail.
//!
//! The `Display` strings are the player-facing messages a renderer shows
//! for a rejected action.

use serde::{Deserialize, Serialize};

/// A failed rule check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum RuleViolation {
    // === Movement ===
    #[error("Cannot move to the same position")]
    SamePosition,

    #[error("Destination tile does not exist")]
    Unexplored,

    #[error("Can only move to adjacent tiles, or teleport from Ace to Ace/central chamber")]
    NotReachable,

    #[error("Tile is impassable (Queen - party is full)")]
    QueenBlocked,

    #[error("Tile is impassable (King - cannot collect)")]
    KingBlocked,

    #[error("Tile is impassable (wall or Jack)")]
    Impassable,

    // === Collection ===
    #[error("Party is full (max {max} Queens)")]
    PartyFull { max: usize },

    #[error("Queen already in party")]
    QueenInParty,

    #[error("King already collected")]
    KingCollected,

    #[error("Must collect all other Kings before the final King")]
    FinalKingTooEarly,

    #[error("Need Queen of same color but different suit")]
    MissingQueen,

    // === Teleport ===
    #[error("Must be on an Ace to teleport")]
    NotOnAce,

    #[error("Can only teleport to an Ace or central chamber")]
    InvalidTeleportTarget,

    // === King ability ===
    #[error("King not collected")]
    KingNotCollected,

    #[error("King ability already used")]
    AbilityUsed,

    #[error("Tile must be adjacent")]
    NotAdjacent,

    #[error("Cannot destroy central chamber")]
    ChamberIndestructible,

    #[error("Cannot destroy Queens")]
    QueenIndestructible,

    #[error("Cannot destroy Kings")]
    KingIndestructible,

    #[error("Tile does not exist")]
    TileMissing,
}

//! Engine-level error types.
//!
//! Rule failures live in [`crate::rules::RuleViolation`]; this module wraps
//! them into what an engine action can return, plus the parse errors of
//! the string boundary.

use crate::rules::RuleViolation;

/// Why an action request was rejected.
///
/// A rejected action never mutates the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// `initialize` has not been called yet.
    #[error("Game has not been initialized")]
    NotInitialized,

    /// The session reached Victory or Defeat.
    #[error("Game is over")]
    GameOver,

    /// The action is illegal under the current rules.
    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

impl ActionError {
    /// True if the caller may retry a different action on the same session.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ActionError::Rule(_))
    }

    /// True if the session permanently rejects all actions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ActionError::GameOver)
    }

    /// The rule that was violated, if any.
    #[must_use]
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            ActionError::Rule(v) => Some(v),
            _ => None,
        }
    }
}

/// Failure to parse a suit, rank, or direction name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown suit: {0:?}")]
    Suit(String),

    #[error("unknown rank: {0:?}")]
    Rank(String),

    #[error("unknown direction: {0:?}")]
    Direction(String),
}

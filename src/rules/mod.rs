//! Game rules: stateless legality checks and damage calculation.
//!
//! `RulesEngine` never mutates the board or the player. The game engine
//! consults it before every mutation and applies the result itself.

pub mod engine;
pub mod violation;

pub use engine::{MoveKind, RulesEngine};
pub use violation::RuleViolation;

//! Core engine types: positions, players, actions, RNG, configuration, errors.
//!
//! Everything here is independent of the turn pipeline. The `game` module
//! composes these into a session.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{ConfigError, GameRules};
pub use error::{ActionError, ParseError};
pub use player::{KingCollection, Party, Player};
pub use position::{Direction, Position};
pub use rng::GameRng;

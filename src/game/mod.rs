//! Game sessions: the engine, its observers, and what it reports.
//!
//! ## Key Types
//!
//! - `GameEngine`: Owns one session's board, deck, and player and runs the
//!   turn pipeline
//! - `GameObserver`: Capability trait for renderers and other listeners
//! - `GameSnapshot`: Read-only state after an action, renderable as text
//! - `TurnOutcome` / `ActionResult`: What an action did

pub mod engine;
pub mod observer;
pub mod outcome;
pub mod snapshot;

pub use engine::GameEngine;
pub use observer::{DamageSource, EventLog, GameEvent, GameObserver, NullObserver};
pub use outcome::{ActionResult, TurnOutcome};
pub use snapshot::{GamePhase, GameSnapshot};

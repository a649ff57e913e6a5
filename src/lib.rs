//! # queens-garden
//!
//! Rules engine for Queen's Garden, a single-player card game played on an
//! unbounded grid that is revealed one card at a time.
//!
//! ## Game
//!
//! The player starts on the central chamber with a Queen of their choice.
//! Every move reveals the unexplored tiles around the new position from a
//! shuffled deck. Number cards and Aces hurt when stepped on, Jacks hurt
//! from next door, Tens are walls, Aces teleport to each other, Queens join
//! the party and grant immunity to their suit. Collect all four Kings,
//! each paid for with a Queen of the same colour, to win.
//!
//! ## Design Principles
//!
//! 1. **Explicit Sessions**: A `GameEngine` owns its board, deck, and
//!    player. There is no global state; any number of sessions can coexist.
//!
//! 2. **Validate, Then Mutate**: `RulesEngine` is stateless and never
//!    mutates. A rejected action leaves the session untouched.
//!
//! 3. **Configuration Over Convention**: Health, deck composition, damage,
//!    and reveal geometry come from `GameRules`, injected at construction.
//!
//! 4. **Deterministic**: Same seed, same starting suit, same actions, same
//!    game.
//!
//! ## Modules
//!
//! - `core`: Positions, players, actions, RNG, configuration, errors
//! - `cards`: Cards and the deck
//! - `board`: Tiles and the sparse board
//! - `rules`: Legality checks and damage calculation
//! - `game`: The session engine, observers, and snapshots
//!
//! ## Example
//!
//! ```
//! use queens_garden::{Direction, GameEngine, GameRules, Suit};
//!
//! let mut game = GameEngine::with_seed(GameRules::default(), 2024).unwrap();
//! game.initialize(Suit::Diamonds);
//!
//! match game.move_direction(Direction::North) {
//!     Ok(outcome) => println!("took {} damage", outcome.damage),
//!     Err(reason) => println!("rejected: {reason}"),
//! }
//! println!("{}", game.snapshot());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, ConfigError, Direction, GameRng, GameRules, ParseError,
    Player, Position,
};

pub use crate::cards::{Card, CardKey, CardType, Color, Deck, Rank, Suit};

pub use crate::board::{Board, Tile};

pub use crate::rules::{MoveKind, RuleViolation, RulesEngine};

pub use crate::game::{
    ActionResult, DamageSource, EventLog, GameEngine, GameEvent, GameObserver, GamePhase,
    GameSnapshot, NullObserver, TurnOutcome,
};

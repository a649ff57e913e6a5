//! The game session and its turn-resolution pipeline.
//!
//! `GameEngine` owns the board, deck, and player of one session and is
//! their only mutator. Every action is checked by the [`RulesEngine`]
//! before anything changes, so a rejected action leaves the session
//! exactly as it was.
//!
//! ## Turn Pipeline
//!
//! Moves and teleports resolve in a fixed order:
//!
//! 1. Validate
//! 2. Relocate the player and advance the turn
//! 3. Collect a Queen or King on the tile; a winning King ends the game
//!    here, before any damage
//! 4. Tile damage
//! 5. Reveal unexplored neighbours
//! 6. Damage from adjacent Jacks, including ones revealed in step 5
//! 7. Defeat if health reached zero
//!
//! A King's destroy ability only validates, clears the target tile, and
//! advances the turn.
//!
//! ## Example
//!
//! ```
//! use queens_garden::cards::Suit;
//! use queens_garden::core::GameRules;
//! use queens_garden::game::{GameEngine, GamePhase};
//!
//! let mut game = GameEngine::with_seed(GameRules::default(), 42).unwrap();
//! game.initialize(Suit::Hearts);
//!
//! let state = game.snapshot();
//! assert_eq!(state.board.len(), 5);
//! assert_eq!(state.deck_size, 35);
//!
//! for (target, _) in game.valid_moves() {
//!     let mut trial = game.clone();
//!     assert!(trial.move_to(target).is_ok());
//! }
//! assert!(matches!(game.phase(), GamePhase::Playing | GamePhase::Defeat));
//! ```

use im::Vector as ImVector;

use super::observer::{DamageSource, GameObserver, NullObserver};
use super::outcome::TurnOutcome;
use super::snapshot::{GamePhase, GameSnapshot};
use crate::board::Board;
use crate::cards::{Card, CardType, Deck, Suit};
use crate::core::{
    Action, ActionError, ActionRecord, ConfigError, Direction, GameRng, GameRules, Player, Position,
};
use crate::rules::{MoveKind, RuleViolation, RulesEngine};

/// One game session.
///
/// Generic over the observer so notifications are statically dispatched;
/// the engine never depends on a concrete renderer.
#[derive(Clone, Debug)]
pub struct GameEngine<O: GameObserver = NullObserver> {
    rules: RulesEngine,
    rng: GameRng,
    observer: O,
    phase: GamePhase,
    turn: u32,
    board: Board,
    deck: Deck,
    player: Option<Player>,
    history: ImVector<ActionRecord>,
}

impl GameEngine<NullObserver> {
    /// Engine with a seeded RNG and no observer.
    pub fn with_seed(rules: GameRules, seed: u64) -> Result<Self, ConfigError> {
        Self::new(rules, GameRng::new(seed), NullObserver)
    }
}

impl<O: GameObserver> GameEngine<O> {
    /// Create an engine in the `Setup` phase.
    ///
    /// The rules are validated here and fixed for the engine's lifetime.
    pub fn new(rules: GameRules, rng: GameRng, observer: O) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self {
            rules: RulesEngine::new(rules),
            rng,
            observer,
            phase: GamePhase::Setup,
            turn: 0,
            board: Board::new(),
            deck: Deck::new(),
            player: None,
            history: ImVector::new(),
        })
    }

    /// Resume play from an explicit layout.
    ///
    /// The phase is derived from the player: `Defeat` at zero health,
    /// `Victory` with enough Kings, `Playing` otherwise. The turn counter
    /// and history start empty.
    pub fn from_parts(
        rules: GameRules,
        rng: GameRng,
        observer: O,
        board: Board,
        deck: Deck,
        player: Player,
    ) -> Result<Self, ConfigError> {
        let mut engine = Self::new(rules, rng, observer)?;
        engine.phase = if player.is_dead() {
            GamePhase::Defeat
        } else if player.has_won(engine.rules.rules().total_kings_to_win) {
            GamePhase::Victory
        } else {
            GamePhase::Playing
        };
        engine.board = board;
        engine.deck = deck;
        engine.player = Some(player);
        Ok(engine)
    }

    /// Start a new game with the Queen of `suit`.
    ///
    /// Builds and shuffles the deck without that Queen, places the player
    /// on the central chamber, reveals the initial tiles, and applies
    /// damage from any Jack revealed next to the origin. Calling this
    /// again restarts the session, continuing the engine's RNG stream.
    pub fn initialize(&mut self, suit: Suit) -> TurnOutcome {
        let rules = self.rules.rules();

        let mut deck = Deck::create(rules, Some(suit));
        deck.shuffle(&mut self.rng);

        let mut board = Board::new();
        let revealed = board.reveal_offsets(Position::ORIGIN, rules.initial_reveal.iter().copied(), &mut deck);
        let mut player = Player::new(Card::queen(suit), rules.starting_health);

        let trap_damage = apply_trap_damage(&self.rules, &board, &mut player, &mut self.observer);

        self.phase = GamePhase::Playing;
        if player.is_dead() {
            self.phase = GamePhase::Defeat;
            self.observer.on_game_over(false);
        }
        self.board = board;
        self.deck = deck;
        self.player = Some(player);
        self.turn = 0;
        self.history = ImVector::new();

        tracing::info!(
            %suit,
            seed = self.rng.seed(),
            revealed = revealed.len(),
            deck = self.deck.len(),
            "game initialized"
        );

        TurnOutcome {
            damage: trap_damage,
            trap_damage,
            revealed,
            phase: self.phase,
            ..TurnOutcome::default()
        }
    }

    // === Actions ===

    /// Step one tile in `direction`.
    pub fn move_direction(&mut self, direction: Direction) -> Result<TurnOutcome, ActionError> {
        let from = self.playing_player()?.position;
        self.move_inner(from.step(direction), Action::Move(direction))
    }

    /// Move to `target`: an adjacent step, or a teleport when standing on
    /// an Ace and `target` is an Ace or the central chamber.
    pub fn move_to(&mut self, target: Position) -> Result<TurnOutcome, ActionError> {
        self.move_inner(target, Action::MoveTo(target))
    }

    /// Teleport from the Ace the player stands on to another Ace or the
    /// central chamber.
    pub fn teleport(&mut self, target: Position) -> Result<TurnOutcome, ActionError> {
        let player = self.playing_player()?;
        self.rules.can_teleport(player.position, target, &self.board)?;
        Ok(self.resolve_arrival(target, MoveKind::Teleport, Action::Teleport(target)))
    }

    /// Clear the card from an adjacent tile with the King of `king`'s
    /// one-shot ability. The player does not move.
    pub fn destroy_tile(&mut self, target: Position, king: Suit) -> Result<TurnOutcome, ActionError> {
        let player = self.playing_player()?;
        let tile = self.board.get(target).ok_or(RuleViolation::TileMissing)?;
        let king_card = Card::king(king);
        self.rules.can_destroy_tile(&king_card, tile, player)?;

        let destroyed = self.board.clear_card(target);
        if let Some(player) = self.player.as_mut() {
            player.use_king_ability(king_card.key());
        }
        self.turn += 1;
        self.history
            .push_back(ActionRecord::new(self.turn, Action::Destroy { target, king }, 0));

        tracing::debug!(
            turn = self.turn,
            %target,
            %king,
            destroyed = ?destroyed.as_ref().map(Card::symbol),
            "tile destroyed"
        );

        Ok(TurnOutcome {
            phase: self.phase,
            ..TurnOutcome::default()
        })
    }

    /// Dispatch an `Action` to the matching method.
    pub fn apply(&mut self, action: Action) -> Result<TurnOutcome, ActionError> {
        match action {
            Action::Move(direction) => self.move_direction(direction),
            Action::MoveTo(target) => self.move_to(target),
            Action::Teleport(target) => self.teleport(target),
            Action::Destroy { target, king } => self.destroy_tile(target, king),
        }
    }

    fn move_inner(&mut self, target: Position, action: Action) -> Result<TurnOutcome, ActionError> {
        let player = self.playing_player()?;
        let kind = self.rules.can_move(player.position, target, &self.board, player)?;
        Ok(self.resolve_arrival(target, kind, action))
    }

    /// The player, if the session accepts actions.
    fn playing_player(&self) -> Result<&Player, ActionError> {
        match (self.phase, &self.player) {
            (GamePhase::Playing, Some(player)) => Ok(player),
            (GamePhase::Victory | GamePhase::Defeat, _) => Err(ActionError::GameOver),
            _ => Err(ActionError::NotInitialized),
        }
    }

    /// Steps 2-7 of the pipeline for an already validated move.
    fn resolve_arrival(&mut self, to: Position, kind: MoveKind, action: Action) -> TurnOutcome {
        let Self {
            rules,
            observer,
            phase,
            turn,
            board,
            deck,
            player,
            history,
            ..
        } = self;
        let mut outcome = TurnOutcome {
            kind: Some(kind),
            ..TurnOutcome::default()
        };
        let Some(player) = player.as_mut() else {
            return outcome;
        };
        let config = rules.rules();

        player.position = to;
        *turn += 1;

        // Collection before damage.
        let entered = board.get(to).and_then(|t| t.card.clone());
        if let Some(card) = &entered {
            match card.card_type() {
                CardType::Collectible if rules.can_collect_queen(card, player).is_ok() => {
                    board.clear_card(to);
                    player.add_queen_to_party(card.clone(), config.max_party_size);
                    observer.on_queen_collected(card);
                    outcome.collected = Some(card.clone());
                    tracing::debug!(queen = %card, party = player.party.len(), "queen collected");
                }
                CardType::Victory => {
                    if let Ok(required) = rules.can_collect_king(card, player) {
                        player.remove_queen_from_party(&required);
                        player.collect_king(card.clone());
                        board.clear_card(to);
                        observer.on_king_collected(card);
                        outcome.collected = Some(card.clone());
                        tracing::debug!(king = %card, paid = %required, "king collected");
                    }
                }
                _ => {}
            }
        }

        if player.has_won(config.total_kings_to_win) {
            *phase = GamePhase::Victory;
            observer.on_game_over(true);
            history.push_back(ActionRecord::new(*turn, action, 0));
            tracing::info!(turn = *turn, health = player.health, "victory");
            outcome.phase = *phase;
            return outcome;
        }

        // Damage from the card that was on the tile when the player arrived.
        outcome.tile_damage = entered.as_ref().map_or(0, |card| rules.card_damage(card, player));
        if outcome.tile_damage > 0 {
            let health = player.take_damage(outcome.tile_damage);
            let source = match kind {
                MoveKind::Step => DamageSource::Tile,
                MoveKind::Teleport => DamageSource::Teleport,
            };
            observer.on_damage(outcome.tile_damage, health, source);
        }

        if config.reveal_adjacent_on_move {
            outcome.revealed = board.reveal_neighbors(to, deck);
        }

        outcome.trap_damage = apply_trap_damage(rules, board, player, observer);
        outcome.damage = outcome.tile_damage + outcome.trap_damage;

        if player.is_dead() {
            *phase = GamePhase::Defeat;
            observer.on_game_over(false);
            tracing::info!(turn = *turn, "defeat");
        }

        history.push_back(ActionRecord::new(*turn, action, outcome.damage));
        tracing::debug!(
            turn = *turn,
            %to,
            ?kind,
            damage = outcome.damage,
            health = player.health,
            revealed = outcome.revealed.len(),
            "player moved"
        );

        outcome.phase = *phase;
        outcome
    }

    // === Queries ===

    /// Read-only copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            player: self.player.clone(),
            turn: self.turn,
            phase: self.phase,
            game_over: self.phase.is_terminal(),
            victory: self.phase == GamePhase::Victory,
            deck_size: self.deck.len(),
        }
    }

    /// Destinations the player can move to right now. Empty unless playing.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<(Position, MoveKind)> {
        match self.playing_player() {
            Ok(player) => self.rules.valid_moves(&self.board, player),
            Err(_) => Vec::new(),
        }
    }

    /// Tiles the King of `king` could destroy right now. Empty unless
    /// playing.
    #[must_use]
    pub fn destroyable_tiles(&self, king: Suit) -> Vec<Position> {
        match self.playing_player() {
            Ok(player) => self.rules.destroyable_tiles(&Card::king(king), &self.board, player),
            Err(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        self.rules.rules()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Seed of the engine's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Accepted actions since `initialize`, oldest first.
    #[must_use]
    pub fn history(&self) -> &ImVector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

/// Damage from every Jack orthogonally adjacent to the player, in north,
/// south, east, west order. Returns the total.
fn apply_trap_damage<O: GameObserver>(
    rules: &RulesEngine,
    board: &Board,
    player: &mut Player,
    observer: &mut O,
) -> u32 {
    let mut total = 0;
    for tile in board.neighbors(player.position) {
        let Some(jack) = tile.card.as_ref().filter(|c| c.card_type() == CardType::Trap) else {
            continue;
        };
        let damage = rules.calculate_jack_adjacent_damage(jack, player);
        if damage > 0 {
            let health = player.take_damage(damage);
            observer.on_damage(damage, health, DamageSource::Trap);
            total += damage;
        }
    }
    total
}

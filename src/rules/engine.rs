//! Stateless rule validation and damage calculation.
//!
//! `RulesEngine` answers questions about a board and a player without ever
//! mutating them:
//! - Is a move, teleport, or destroy legal (and if not, why)?
//! - Can a Queen or King be collected right now?
//! - How much damage does a tile or an adjacent Jack deal?
//!
//! Every check returns `Result<_, RuleViolation>`. The game engine runs the
//! check first and only mutates state on `Ok`.
//!
//! ## Immunity
//!
//! Damage checks read immunity from the player's *current* party, so a
//! Queen that leaves the party stops protecting the player at once.

use serde::{Deserialize, Serialize};

use super::violation::RuleViolation;
use crate::board::{Board, Tile};
use crate::cards::{Card, CardType};
use crate::core::{GameRules, Player, Position};

/// How a legal move reaches its destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Orthogonally adjacent step.
    Step,
    /// Non-adjacent jump from an Ace to an Ace or the central chamber.
    Teleport,
}

/// Rule checks for one rules configuration.
#[derive(Clone, Debug, Default)]
pub struct RulesEngine {
    rules: GameRules,
}

impl RulesEngine {
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    /// The rules this engine checks against.
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    // === Movement ===

    /// Check a move from `from` to `to`.
    ///
    /// Legal as a `Step` when `to` is orthogonally adjacent and enterable,
    /// or as a `Teleport` when the player stands on an Ace and `to` holds
    /// an Ace or is the central chamber. Teleports skip the passability
    /// checks entirely.
    pub fn can_move(
        &self,
        from: Position,
        to: Position,
        board: &Board,
        player: &Player,
    ) -> Result<MoveKind, RuleViolation> {
        if from == to {
            return Err(RuleViolation::SamePosition);
        }
        let target = board.get(to).ok_or(RuleViolation::Unexplored)?;

        if from.is_adjacent_to(to) {
            self.check_enterable(target, player)?;
            return Ok(MoveKind::Step);
        }

        let on_ace = board.get(from).is_some_and(|t| t.holds(CardType::Teleporter));
        if on_ace && is_teleport_target(target) {
            Ok(MoveKind::Teleport)
        } else {
            Err(RuleViolation::NotReachable)
        }
    }

    /// Check an explicit teleport request.
    ///
    /// Unlike [`can_move`](Self::can_move) this does not fall back to an
    /// adjacent step: the player must stand on an Ace, and the target must
    /// be an Ace or the central chamber, adjacent or not.
    pub fn can_teleport(&self, from: Position, to: Position, board: &Board) -> Result<(), RuleViolation> {
        let on_ace = board.get(from).is_some_and(|t| t.holds(CardType::Teleporter));
        if !on_ace {
            return Err(RuleViolation::NotOnAce);
        }
        if from == to {
            return Err(RuleViolation::SamePosition);
        }
        match board.get(to) {
            Some(target) if is_teleport_target(target) => Ok(()),
            _ => Err(RuleViolation::InvalidTeleportTarget),
        }
    }

    /// Adjacent-step passability, including the player-dependent Queen and
    /// King walls.
    fn check_enterable(&self, target: &Tile, player: &Player) -> Result<(), RuleViolation> {
        if let Some(card) = &target.card {
            match card.card_type() {
                CardType::Collectible => {
                    // Only a full party turns a Queen into a wall.
                    if let Err(RuleViolation::PartyFull { .. }) = self.can_collect_queen(card, player) {
                        return Err(RuleViolation::QueenBlocked);
                    }
                }
                CardType::Victory => {
                    if self.can_collect_king(card, player).is_err() {
                        return Err(RuleViolation::KingBlocked);
                    }
                }
                _ => {}
            }
        }
        if !target.is_passable() {
            return Err(RuleViolation::Impassable);
        }
        Ok(())
    }

    /// Every destination the player could move to right now, sorted by
    /// position.
    #[must_use]
    pub fn valid_moves(&self, board: &Board, player: &Player) -> Vec<(Position, MoveKind)> {
        let from = player.position;
        let on_ace = board.get(from).is_some_and(|t| t.holds(CardType::Teleporter));

        let mut moves: Vec<_> = if on_ace {
            board
                .iter()
                .filter(|t| t.is_adjacent_to(from) || is_teleport_target(t))
                .map(|t| t.position)
                .collect()
        } else {
            board.neighbors(from).map(|t| t.position).collect()
        };
        moves.sort_unstable();

        moves
            .into_iter()
            .filter_map(|to| self.can_move(from, to, board, player).ok().map(|kind| (to, kind)))
            .collect()
    }

    // === Damage ===

    /// Damage for entering `tile`.
    #[must_use]
    pub fn calculate_damage(&self, tile: &Tile, player: &Player) -> u32 {
        tile.card.as_ref().map_or(0, |card| self.card_damage(card, player))
    }

    /// Damage for entering a tile holding `card`.
    ///
    /// Number cards deal their face value and Aces their value. Jacks only
    /// hurt through adjacency; everything else is harmless to enter.
    #[must_use]
    pub fn card_damage(&self, card: &Card, player: &Player) -> u32 {
        if player.is_immune_to(card.suit) {
            return 0;
        }
        match card.card_type() {
            CardType::Number | CardType::Teleporter => card.value,
            _ => 0,
        }
    }

    /// Damage from standing orthogonally next to `jack`.
    #[must_use]
    pub fn calculate_jack_adjacent_damage(&self, jack: &Card, player: &Player) -> u32 {
        if player.is_immune_to(jack.suit) {
            0
        } else {
            self.rules.jack_adjacent_damage
        }
    }

    // === Collection ===

    pub fn can_collect_queen(&self, queen: &Card, player: &Player) -> Result<(), RuleViolation> {
        let max = self.rules.max_party_size;
        if player.party.len() >= max {
            return Err(RuleViolation::PartyFull { max });
        }
        if player.has_queen(queen) {
            return Err(RuleViolation::QueenInParty);
        }
        Ok(())
    }

    /// Check a King collection. On success returns the party Queen that
    /// pays for it: same colour as the King, different suit.
    ///
    /// The final King (the partner suit of the starting Queen) is only
    /// collectible once every other King has been collected.
    pub fn can_collect_king(&self, king: &Card, player: &Player) -> Result<Card, RuleViolation> {
        if player.has_king(king.key()) {
            return Err(RuleViolation::KingCollected);
        }

        let others_needed = self.rules.total_kings_to_win.saturating_sub(1);
        if king.suit == player.final_king_suit() && player.collected_kings.len() < others_needed {
            return Err(RuleViolation::FinalKingTooEarly);
        }

        player
            .party
            .iter()
            .find(|q| q.color() == king.color() && q.suit != king.suit)
            .cloned()
            .ok_or(RuleViolation::MissingQueen)
    }

    // === King ability ===

    /// Check whether `king` may clear `target`.
    pub fn can_destroy_tile(&self, king: &Card, target: &Tile, player: &Player) -> Result<(), RuleViolation> {
        let key = king.key();
        if !player.has_king(key) {
            return Err(RuleViolation::KingNotCollected);
        }
        if player.has_used_king_ability(key) {
            return Err(RuleViolation::AbilityUsed);
        }
        if !target.is_adjacent_to(player.position) {
            return Err(RuleViolation::NotAdjacent);
        }
        if target.is_central_chamber() {
            return Err(RuleViolation::ChamberIndestructible);
        }
        match target.card_type() {
            Some(CardType::Collectible) => Err(RuleViolation::QueenIndestructible),
            Some(CardType::Victory) => Err(RuleViolation::KingIndestructible),
            _ => Ok(()),
        }
    }

    /// Adjacent tiles `king` could clear right now, sorted by position.
    #[must_use]
    pub fn destroyable_tiles(&self, king: &Card, board: &Board, player: &Player) -> Vec<Position> {
        let mut targets: Vec<_> = board
            .neighbors(player.position)
            .filter(|t| self.can_destroy_tile(king, t, player).is_ok())
            .map(|t| t.position)
            .collect();
        targets.sort_unstable();
        targets
    }
}

fn is_teleport_target(tile: &Tile) -> bool {
    tile.is_central_chamber() || tile.holds(CardType::Teleporter)
}

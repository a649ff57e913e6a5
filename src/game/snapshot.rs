//! Read-only views of a session.
//!
//! A `GameSnapshot` is what a renderer consumes after each action. Taking
//! one is cheap: the board is a persistent map, so the clone shares
//! structure with the live session.
//!
//! ## Text Rendering
//!
//! `Display` draws the status header and the explored grid (north at the
//! top) with a two-tile margin of unexplored space:
//!
//! ```text
//! [P]  player      [C]  central chamber   [ ]  empty tile
//! 7♠   card        .    unexplored
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

use crate::board::Board;
use crate::core::{Player, Position};

/// Blank columns/rows drawn around the explored region.
const RENDER_MARGIN: i32 = 2;

/// Session lifecycle.
///
/// `Setup` until `initialize`, then `Playing` until one of the terminal
/// phases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Setup,
    Playing,
    Victory,
    Defeat,
}

impl GamePhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}

/// Externally observable state of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,

    /// `None` before `initialize`.
    pub player: Option<Player>,

    pub turn: u32,
    pub phase: GamePhase,
    pub game_over: bool,
    pub victory: bool,

    /// Cards left to draw.
    pub deck_size: usize,
}

impl GameSnapshot {
    /// Player position, or the origin before setup.
    #[must_use]
    pub fn player_position(&self) -> Position {
        self.player.as_ref().map_or(Position::ORIGIN, |p| p.position)
    }

    fn write_status(&self, out: &mut String, player: &Player) -> fmt::Result {
        writeln!(out, "Turn: {}", self.turn)?;
        writeln!(out, "Health: {}/{}", player.health, player.max_health)?;
        writeln!(out, "Position: {}", player.position)?;
        writeln!(out, "Deck Size: {}", self.deck_size)?;
        writeln!(out)?;

        writeln!(out, "Party:")?;
        for (i, queen) in player.party.iter().enumerate() {
            writeln!(out, "  {}. {queen}", i + 1)?;
        }
        let immunities: Vec<_> = player.immunities().iter().map(|s| s.name()).collect();
        writeln!(out, "Immunities: {}", immunities.join(", "))?;
        writeln!(out)?;

        if !player.collected_kings.is_empty() {
            writeln!(out, "Collected Kings:")?;
            for (i, king) in player.collected_kings.iter().enumerate() {
                writeln!(out, "  {}. {king}", i + 1)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_board(&self, out: &mut String) -> fmt::Result {
        let bounds = self.board.bounds();
        let player = self.player_position();

        writeln!(out, "Board:")?;
        for y in (bounds.min.y - RENDER_MARGIN..=bounds.max.y + RENDER_MARGIN).rev() {
            out.push_str("  ");
            for x in bounds.min.x - RENDER_MARGIN..=bounds.max.x + RENDER_MARGIN {
                let position = Position::new(x, y);
                let cell = match self.board.get(position) {
                    _ if position == player => "[P]".to_string(),
                    Some(tile) if tile.is_central_chamber() => "[C]".to_string(),
                    Some(tile) => tile.card.as_ref().map_or_else(|| "[ ]".to_string(), |c| c.symbol()),
                    None => " . ".to_string(),
                };
                write!(out, "{cell:<3} ")?;
            }
            out.truncate(out.trim_end().len());
            out.push('\n');
        }
        Ok(())
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        writeln!(out, "=== Queen's Garden ===")?;

        let Some(player) = &self.player else {
            writeln!(out, "Game has not been initialized")?;
            return f.write_str(&out);
        };

        self.write_status(&mut out, player)?;
        self.write_board(&mut out)?;

        match self.phase {
            GamePhase::Victory => writeln!(out, "\nVICTORY! You collected all the Kings!")?,
            GamePhase::Defeat => writeln!(out, "\nGAME OVER - You died!")?,
            GamePhase::Setup | GamePhase::Playing => {}
        }
        f.write_str(&out)
    }
}

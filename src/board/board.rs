//! The sparse, unbounded game board.
//!
//! The `Board` maps coordinates to revealed tiles. An absent coordinate is
//! unexplored, which is different from an explored tile with no card.
//!
//! ## Reveal Rules
//!
//! - The central chamber at the origin exists from construction
//! - Tiles are only ever added by revealing, one freshly drawn card each
//! - A coordinate is revealed at most once; tiles are never replaced or removed
//!
//! Backed by `im::HashMap`, so cloning the board for a snapshot is O(1).
//!
//! ```
//! use queens_garden::board::Board;
//! use queens_garden::cards::{Card, Rank, Suit};
//! use queens_garden::core::Position;
//!
//! let mut board = Board::new();
//! assert_eq!(board.len(), 1);
//!
//! let east = Position::new(1, 0);
//! assert!(board.reveal(east, Card::new(Suit::Clubs, Rank::Number(6))));
//! assert!(!board.reveal(east, Card::new(Suit::Hearts, Rank::Ace)));
//! assert_eq!(board.get(east).and_then(|t| t.card.as_ref()).map(|c| c.suit), Some(Suit::Clubs));
//! ```

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::Tile;
use crate::cards::{Card, Deck};
use crate::core::Position;

/// Orthogonal unit offsets in north, south, east, west order.
const NEIGHBOR_OFFSETS: [Position; 4] = [
    Position::new(0, 1),
    Position::new(0, -1),
    Position::new(1, 0),
    Position::new(-1, 0),
];

/// Inclusive bounding box of the explored region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

/// Sparse map of revealed tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Board {
    tiles: ImHashMap<Position, Tile>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board holding only the central chamber.
    #[must_use]
    pub fn new() -> Self {
        let mut tiles = ImHashMap::new();
        tiles.insert(Position::ORIGIN, Tile::central_chamber());
        Self { tiles }
    }

    /// Reveal `card` at an unexplored `position`.
    ///
    /// Returns `false`, leaving the board and the card's destination
    /// untouched, if the coordinate is already explored.
    pub fn reveal(&mut self, position: Position, mut card: Card) -> bool {
        if self.tiles.contains_key(&position) {
            return false;
        }
        card.place_at(position);
        tracing::trace!(%position, %card, "tile revealed");
        self.tiles.insert(position, Tile::new(position, Some(card)));
        true
    }

    /// Reveal every unexplored neighbour of `center`, drawing one card each
    /// in north, south, east, west order.
    ///
    /// Stops quietly when the deck runs out. Returns the newly revealed
    /// positions.
    pub fn reveal_neighbors(&mut self, center: Position, deck: &mut Deck) -> SmallVec<[Position; 4]> {
        self.reveal_offsets(center, NEIGHBOR_OFFSETS, deck)
    }

    /// Reveal `center + offset` for each offset, skipping explored ones.
    pub fn reveal_offsets(
        &mut self,
        center: Position,
        offsets: impl IntoIterator<Item = Position>,
        deck: &mut Deck,
    ) -> SmallVec<[Position; 4]> {
        let mut revealed = SmallVec::new();
        for offset in offsets {
            let target = center.offset(offset.x, offset.y);
            if self.contains(target) {
                continue;
            }
            let Some(card) = deck.draw() else {
                break;
            };
            if self.reveal(target, card) {
                revealed.push(target);
            }
        }
        revealed
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    /// True if `position` has been explored.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Empty the tile at `position`, returning its card.
    pub fn clear_card(&mut self, position: Position) -> Option<Card> {
        self.tiles.get_mut(&position)?.take_card()
    }

    /// Number of explored tiles, including the chamber.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Never true: the chamber is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Unordered iteration over all tiles.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// All tiles ordered by position.
    #[must_use]
    pub fn sorted_tiles(&self) -> Vec<&Tile> {
        let mut tiles: Vec<_> = self.tiles.values().collect();
        tiles.sort_by_key(|t| t.position);
        tiles
    }

    /// Existing tiles orthogonally adjacent to `position`.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = &Tile> {
        position
            .neighbors()
            .into_iter()
            .filter_map(move |p| self.tiles.get(&p))
    }

    /// Bounding box of the explored region.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds {
            min: Position::ORIGIN,
            max: Position::ORIGIN,
        };
        for p in self.tiles.keys() {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        bounds
    }
}

impl From<Vec<Tile>> for Board {
    /// Rebuild a board from serialized tiles. The chamber is always present.
    fn from(tiles: Vec<Tile>) -> Self {
        let mut board = Board::new();
        for tile in tiles {
            if !tile.position.is_origin() {
                board.tiles.insert(tile.position, tile);
            }
        }
        board
    }
}

impl From<Board> for Vec<Tile> {
    fn from(board: Board) -> Self {
        board.sorted_tiles().into_iter().cloned().collect()
    }
}

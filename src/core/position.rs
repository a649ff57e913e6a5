//! Board coordinates and cardinal directions.
//!
//! The board is unbounded in every direction, so positions are signed.
//! `y` grows to the north.
//!
//! ```
//! use queens_garden::core::{Direction, Position};
//!
//! let origin = Position::ORIGIN;
//! assert_eq!(origin.step(Direction::North), Position::new(0, 1));
//! assert!(origin.is_adjacent_to(Position::new(-1, 0)));
//! assert!(!origin.is_adjacent_to(Position::new(1, 1)));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseError;

/// A board coordinate.
///
/// Used directly as the board's map key, so it is `Hash + Eq`. Ordering is
/// row-major (`x` first) and only exists to make listings deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column, growing east.
    pub x: i32,
    /// Row, growing north.
    pub y: i32,
}

impl Position {
    /// The central chamber.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by a delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The neighbouring position in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// The four orthogonal neighbours, in north, south, east, west order.
    #[must_use]
    pub fn neighbors(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Manhattan distance between two positions.
    #[must_use]
    pub const fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True if `other` is exactly one orthogonal step away.
    #[must_use]
    pub const fn is_adjacent_to(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// True for the central chamber coordinate.
    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A cardinal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in reveal order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts full names, initials, and arrow-key style aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" | "up" => Ok(Direction::North),
            "south" | "s" | "down" => Ok(Direction::South),
            "east" | "e" | "right" => Ok(Direction::East),
            "west" | "w" | "left" => Ok(Direction::West),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_neighbors() {
        let p = Position::new(2, -3);
        assert_eq!(p.step(Direction::North), Position::new(2, -2));
        assert_eq!(p.step(Direction::West), Position::new(1, -3));
        assert_eq!(
            p.neighbors(),
            [
                Position::new(2, -2),
                Position::new(2, -4),
                Position::new(3, -3),
                Position::new(1, -3),
            ]
        );
    }

    #[test]
    fn test_adjacency_is_orthogonal_only() {
        let p = Position::ORIGIN;
        assert!(p.is_adjacent_to(Position::new(0, -1)));
        assert!(!p.is_adjacent_to(Position::new(1, 1)));
        assert!(!p.is_adjacent_to(Position::new(2, 0)));
        assert!(!p.is_adjacent_to(p));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!(" s ".parse::<Direction>().unwrap(), Direction::South);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(-1, 4).to_string(), "(-1, 4)");
        assert_eq!(Direction::East.to_string(), "east");
    }
}

//! Grid coordinates

use std::fmt;
use serde::{Serialize, Deserialize};

/// A cell position on the infinite grid.
///
/// Coordinates are the identity of a room: every map, set and graph lookup in
/// the crate is keyed by `Coord`, never by a room instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Horizontal position
    pub x: i64,
    /// Vertical position
    pub y: i64,
}

impl Coord {
    /// The grid origin, where every labyrinth starts
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }

    /// The four 4-connected neighbours, in the order
    /// `(x+1,y), (x-1,y), (x,y+1), (x,y-1)`
    pub fn neighbors(&self) -> [Coord; 4] {
        [
            Coord::new(self.x + 1, self.y),
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x, self.y + 1),
            Coord::new(self.x, self.y - 1),
        ]
    }

    /// Whether `other` is one of the four grid neighbours
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// Manhattan distance from the origin
    pub fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_adjacent() {
        let c = Coord::new(3, -2);
        let neighbors = c.neighbors();
        assert_eq!(neighbors[0], Coord::new(4, -2));
        assert_eq!(neighbors[3], Coord::new(3, -3));
        assert!(neighbors.iter().all(|n| c.is_adjacent(n)));
        assert!(!c.is_adjacent(&c));
        assert!(!c.is_adjacent(&Coord::new(4, -1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(-1, 7).to_string(), "-1,7");
        assert_eq!(Coord::ORIGIN.manhattan(), 0);
        assert_eq!(Coord::from((-3, 4)).manhattan(), 7);
    }
}

//! Rooms of a labyrinth
//!
//! A room is a grid cell together with the exits it opens towards its
//! neighbours. Two rooms at the same coordinate are the same room, whatever
//! exits each instance happened to draw.

mod coord;
mod exits;

use std::fmt;
use std::hash::{Hash, Hasher};

pub use coord::Coord;
pub use exits::{ExitSampler, UniformExits, FullExits, MAX_EXITS};

/// A grid cell acting as a labyrinth node
///
/// - Identity, equality and hashing use the coordinate only
/// - Exits are drawn once at construction and never change
#[derive(Clone)]
pub struct Room {
    coord: Coord,
    exits: Vec<Coord>,
}

impl Room {
    /// Construct a room at `coord`, drawing its exits from `sampler`
    pub fn new<S: ExitSampler + ?Sized>(coord: Coord, sampler: &mut S) -> Self {
        let exits = sampler.sample_exits(coord);
        debug_assert!(!exits.is_empty() && exits.len() <= MAX_EXITS);
        debug_assert!(exits.iter().all(|e| coord.is_adjacent(e)));
        Room { coord, exits }
    }

    /// Construct the origin room
    pub fn origin<S: ExitSampler + ?Sized>(sampler: &mut S) -> Self {
        Room::new(Coord::ORIGIN, sampler)
    }

    /// Position of the room
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Horizontal position
    pub fn x(&self) -> i64 {
        self.coord.x
    }

    /// Vertical position
    pub fn y(&self) -> i64 {
        self.coord.y
    }

    /// Coordinates reachable through this room's exits
    pub fn exits(&self) -> &[Coord] {
        &self.exits
    }

    /// Number of exits
    pub fn degree(&self) -> usize {
        self.exits.len()
    }

    /// Whether one of the exits leads to `coord`
    pub fn has_exit_to(&self, coord: Coord) -> bool {
        self.exits.contains(&coord)
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room at ({},{}) with exits to [", self.coord.x, self.coord.y)?;
        for (i, exit) in self.exits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({},{})", exit.x, exit.y)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coord)
    }
}

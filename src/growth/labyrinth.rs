//! Labyrinth graph keyed by coordinate identity

use crate::room::{Coord, Room};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::HashMap;

/// Directed graph of rooms
///
/// - Nodes are coordinates; each has exactly one canonical [`Room`]
/// - Edges follow exits and may point back into already-visited rooms
/// - Parallel edges collapse into one
#[derive(Clone, Debug)]
pub struct Labyrinth {
    graph: DiGraphMap<Coord, ()>,
    rooms: HashMap<Coord, Room>,
}

impl Labyrinth {
    /// Create a labyrinth holding only `origin`
    pub fn with_origin(origin: Room) -> Self {
        let mut labyrinth = Labyrinth {
            graph: DiGraphMap::new(),
            rooms: HashMap::new(),
        };
        labyrinth.insert_room(origin);
        labyrinth
    }

    /// Whether a room already exists at `coord`
    pub fn contains(&self, coord: Coord) -> bool {
        self.rooms.contains_key(&coord)
    }

    /// Insert `room` if its coordinate is new.
    ///
    /// Returns `false` and drops `room` when the coordinate is taken; the
    /// existing room and its exits stay canonical.
    pub fn insert_room(&mut self, room: Room) -> bool {
        let coord = room.coord();
        if self.rooms.contains_key(&coord) {
            return false;
        }
        self.graph.add_node(coord);
        self.rooms.insert(coord, room);
        true
    }

    /// Add a passage `from -> to`. Both rooms must already exist.
    pub fn connect(&mut self, from: Coord, to: Coord) {
        debug_assert!(self.contains(from) && self.contains(to));
        self.graph.add_edge(from, to, ());
    }

    /// Canonical room at `coord`
    pub fn room(&self, coord: Coord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    /// Number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of distinct passages
    pub fn passage_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether a passage `from -> to` exists
    pub fn has_passage(&self, from: Coord, to: Coord) -> bool {
        self.graph.contains_edge(from, to)
    }

    /// Rooms reachable in one step from `coord`
    pub fn passages_from(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.graph.neighbors_directed(coord, Direction::Outgoing)
    }

    /// Rooms with a passage leading into `coord`
    pub fn entrances_to(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.graph.neighbors_directed(coord, Direction::Incoming)
    }

    /// All rooms, in no particular order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Underlying graph
    pub fn graph(&self) -> &DiGraphMap<Coord, ()> {
        &self.graph
    }
}

//! Exit sampling strategies

use super::Coord;
use rand::Rng;
use rand::seq::SliceRandom;

/// Largest number of exits a room can have (one per grid neighbour)
pub const MAX_EXITS: usize = 4;

/// Source of exit sets for freshly constructed rooms.
///
/// Each call corresponds to exactly one room construction, so a sampler that
/// wraps a random generator consumes draws in room-construction order.
pub trait ExitSampler {
    /// Choose the exits of a room located at `at`.
    ///
    /// Implementations must return distinct grid neighbours of `at`.
    fn sample_exits(&mut self, at: Coord) -> Vec<Coord>;
}

/// Uniform exit degree in `1..=4`, then a uniform subset of that size.
#[derive(Clone, Debug)]
pub struct UniformExits<R> {
    rng: R,
}

impl<R: Rng> UniformExits<R> {
    /// Wrap a random generator
    pub fn new(rng: R) -> Self {
        UniformExits { rng }
    }

    /// Access the underlying generator
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Recover the underlying generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> ExitSampler for UniformExits<R> {
    fn sample_exits(&mut self, at: Coord) -> Vec<Coord> {
        // One draw for the degree, one shuffle for the subset
        let n = self.rng.gen_range(1..=MAX_EXITS);
        let mut candidates = at.neighbors();
        candidates.shuffle(&mut self.rng);
        candidates[..n].to_vec()
    }
}

/// Opens every exit of every room. Deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullExits;

impl ExitSampler for FullExits {
    fn sample_exits(&mut self, at: Coord) -> Vec<Coord> {
        at.neighbors().to_vec()
    }
}

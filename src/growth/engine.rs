//! Breadth-first frontier growth

use super::Labyrinth;
use crate::room::{Coord, ExitSampler, Room};
use serde::{Serialize, Deserialize};

/// Why a trial stopped growing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The frontier ran empty before the iteration cap
    Exhausted,
    /// The iteration cap was reached
    Capped,
}

/// Finished trial
#[derive(Clone, Debug)]
pub struct GrowthOutcome {
    /// Frontier size after each iteration, starting with the origin's `1`
    pub history: Vec<usize>,
    /// Final labyrinth
    pub labyrinth: Labyrinth,
    /// Reason the trial stopped
    pub termination: Termination,
}

/// Grows one labyrinth from the origin, one frontier round per step.
///
/// Every step peeks through the exits of all frontier rooms. A candidate room
/// is constructed for each exit, even when the coordinate is already in the
/// labyrinth, so exit draws happen in the same order as room constructions.
/// New coordinates join the labyrinth and form the next frontier; every
/// candidate, new or not, receives a passage from the room that offered it.
pub struct GrowthEngine<S> {
    sampler: S,
    max_iter: usize,
    labyrinth: Labyrinth,
    frontier: Vec<Coord>,
    history: Vec<usize>,
    iteration: usize,
}

impl<S: ExitSampler> GrowthEngine<S> {
    /// Seed a trial with the origin room
    pub fn new(mut sampler: S, max_iter: usize) -> Self {
        let origin = Room::origin(&mut sampler);
        let labyrinth = Labyrinth::with_origin(origin);
        GrowthEngine {
            sampler,
            max_iter,
            labyrinth,
            frontier: vec![Coord::ORIGIN],
            history: vec![1],
            iteration: 0,
        }
    }

    /// `Some` once the trial can no longer step
    pub fn termination(&self) -> Option<Termination> {
        if self.frontier.is_empty() {
            Some(Termination::Exhausted)
        } else if self.iteration >= self.max_iter {
            Some(Termination::Capped)
        } else {
            None
        }
    }

    /// Whether the trial has stopped
    pub fn is_terminal(&self) -> bool {
        self.termination().is_some()
    }

    /// Run one expansion round.
    ///
    /// Returns the size of the new frontier, or `None` if the trial had
    /// already stopped.
    pub fn step(&mut self) -> Option<usize> {
        if self.is_terminal() {
            return None;
        }

        let frontier = std::mem::take(&mut self.frontier);
        let mut next = Vec::new();

        for from in frontier {
            let exits = match self.labyrinth.room(from) {
                Some(room) => room.exits().to_vec(),
                None => continue,
            };

            // Peek through every exit before touching the labyrinth
            let candidates: Vec<Room> = exits
                .into_iter()
                .map(|exit| Room::new(exit, &mut self.sampler))
                .collect();

            for candidate in candidates {
                let to = candidate.coord();
                if self.labyrinth.insert_room(candidate) {
                    next.push(to);
                }
                self.labyrinth.connect(from, to);
            }
        }

        self.frontier = next;
        self.history.push(self.frontier.len());
        self.iteration += 1;
        Some(self.frontier.len())
    }

    /// Step until the trial stops
    pub fn run(mut self) -> GrowthOutcome {
        while self.step().is_some() {}
        let termination = self.termination().unwrap_or(Termination::Capped);
        GrowthOutcome {
            history: self.history,
            labyrinth: self.labyrinth,
            termination,
        }
    }

    /// Frontier sizes recorded so far
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Rooms waiting to be expanded
    pub fn frontier(&self) -> &[Coord] {
        &self.frontier
    }

    /// Labyrinth grown so far
    pub fn labyrinth(&self) -> &Labyrinth {
        &self.labyrinth
    }

    /// Number of completed rounds
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Iteration cap
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }
}

/// Grow a single labyrinth to termination
pub fn run_trial<S: ExitSampler>(sampler: S, max_iter: usize) -> GrowthOutcome {
    GrowthEngine::new(sampler, max_iter).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{FullExits, UniformExits};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    /// Opens only the exit towards +x, so growth is a straight corridor
    struct EastOnly;

    impl ExitSampler for EastOnly {
        fn sample_exits(&mut self, at: Coord) -> Vec<Coord> {
            vec![Coord::new(at.x + 1, at.y)]
        }
    }

    /// Counts constructions while delegating to `FullExits`
    struct Counting(usize);

    impl ExitSampler for Counting {
        fn sample_exits(&mut self, at: Coord) -> Vec<Coord> {
            self.0 += 1;
            FullExits.sample_exits(at)
        }
    }

    #[test]
    fn test_zero_cap_keeps_origin_only() {
        let outcome = run_trial(FullExits, 0);
        assert_eq!(outcome.history, vec![1]);
        assert_eq!(outcome.labyrinth.room_count(), 1);
        assert!(outcome.labyrinth.contains(Coord::ORIGIN));
        assert_eq!(outcome.termination, Termination::Capped);
    }

    #[test]
    fn test_full_exits_first_round() {
        let outcome = run_trial(FullExits, 1);
        assert_eq!(outcome.history, vec![1, 4]);
        assert_eq!(outcome.labyrinth.room_count(), 5);
        assert_eq!(outcome.labyrinth.passage_count(), 4);
    }

    #[test]
    fn test_full_exits_second_round_shares_rooms() {
        // Diamond of radius 2 has 8 cells; each of the 4 diagonal cells is
        // offered by two frontier rooms but created once.
        let outcome = run_trial(FullExits, 2);
        assert_eq!(outcome.history, vec![1, 4, 8]);
        assert_eq!(outcome.labyrinth.room_count(), 13);

        // Back passages into the origin from all four neighbours
        assert_eq!(outcome.labyrinth.entrances_to(Coord::ORIGIN).count(), 4);
        // Both offering rooms get a passage into a shared diagonal room
        assert_eq!(outcome.labyrinth.entrances_to(Coord::new(1, 1)).count(), 2);
    }

    #[test]
    fn test_existing_rooms_are_resampled_but_not_replaced() {
        let mut engine = GrowthEngine::new(Counting(0), 2);
        engine.step();
        engine.step();
        // origin + 4 in round one + 16 candidates in round two
        assert_eq!(engine.sampler.0, 1 + 4 + 16);
        assert_eq!(engine.labyrinth().room_count(), 13);
    }

    #[test]
    fn test_corridor_hits_cap() {
        let outcome = run_trial(EastOnly, 5);
        assert_eq!(outcome.history, vec![1, 1, 1, 1, 1, 1]);
        assert_eq!(outcome.termination, Termination::Capped);
        assert!(outcome.labyrinth.contains(Coord::new(5, 0)));
    }

    #[test]
    fn test_dead_end_exhausts() {
        // Origin opens east; the east room only opens back to the origin
        struct PingPong;
        impl ExitSampler for PingPong {
            fn sample_exits(&mut self, at: Coord) -> Vec<Coord> {
                if at.x > 0 {
                    vec![Coord::new(at.x - 1, at.y)]
                } else {
                    vec![Coord::new(at.x + 1, at.y)]
                }
            }
        }

        let outcome = run_trial(PingPong, 10);
        assert_eq!(outcome.history, vec![1, 1, 0]);
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.labyrinth.room_count(), 2);
        assert!(outcome.labyrinth.has_passage(Coord::new(1, 0), Coord::ORIGIN));
    }

    #[test]
    fn test_step_after_terminal_is_noop() {
        let mut engine = GrowthEngine::new(FullExits, 1);
        assert_eq!(engine.step(), Some(4));
        assert!(engine.is_terminal());
        assert_eq!(engine.step(), None);
        assert_eq!(engine.history(), &[1, 4]);
        assert_eq!(engine.iteration(), 1);
    }

    #[test]
    fn test_random_growth_invariants() {
        for seed in 0..20 {
            let max_iter = 30;
            let sampler = UniformExits::new(StdRng::seed_from_u64(seed));
            let mut engine = GrowthEngine::new(sampler, max_iter);
            let mut last_count = engine.labyrinth().room_count();

            while engine.step().is_some() {
                let count = engine.labyrinth().room_count();
                assert!(count >= last_count);
                last_count = count;
            }

            let lab = engine.labyrinth();
            let coords: HashSet<Coord> = lab.rooms().map(|r| r.coord()).collect();
            assert_eq!(coords.len(), lab.room_count());
            assert!(engine.history().len() <= max_iter + 1);
            assert_eq!(engine.history()[0], 1);
            // Every room ever discovered was counted exactly once
            assert_eq!(engine.history().iter().sum::<usize>(), lab.room_count());
        }
    }
}

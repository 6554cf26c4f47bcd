//! Labyrinth graph and frontier growth

mod labyrinth;
mod engine;

pub use labyrinth::Labyrinth;
pub use engine::{GrowthEngine, GrowthOutcome, Termination, run_trial};

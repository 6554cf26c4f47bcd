//! End-to-end pipeline: trials, aggregation, fitting

mod simulation;

pub use simulation::{simulate, simulate_with, simulate_with_progress};

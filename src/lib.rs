//! # Labyrinth Growth: frontier statistics of random grid labyrinths
//!
//! A labyrinth starts with a single room at the origin of an infinite grid.
//! Every room opens between one and four exits towards its grid neighbours,
//! and the labyrinth grows breadth-first by peeking through the exits of the
//! rooms discovered in the previous round. This library measures how many
//! new rooms each round discovers, averages that curve over many independent
//! trials and fits a straight line through it.
//!
//! ## Features
//!
//! - **Rooms**: coordinate-identified cells with immutable random exits
//! - **Growth**: frontier expansion over a petgraph-backed labyrinth
//! - **Trials**: seeded, optionally parallel aggregation of per-round counts
//! - **Fitting**: ordinary least-squares trend over the averaged series
//! - **Reporting**: JSON reports and (with `viz`) PNG plots

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Rooms, coordinates and exit sampling
pub mod room;

/// Labyrinth graph and the frontier growth engine
pub mod growth;

/// Trial configuration, series padding and aggregation
pub mod trials;

/// Least-squares trend fitting
pub mod fit;

/// Simulation reports and rendering
pub mod report;

/// End-to-end simulation pipeline
pub mod core;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use room::{Coord, Room, ExitSampler, UniformExits, FullExits};
pub use growth::{Labyrinth, GrowthEngine, GrowthOutcome, Termination, run_trial};
pub use trials::{SimulationConfig, TrialAggregator, TrialSeries, AggregateSeries};
pub use fit::LinearFit;
pub use report::SimulationReport;
pub use crate::core::{simulate, simulate_with};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum LabyrinthError {
    /// Rejected parameters, reported before any trial runs
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// IO error while reading or writing reports and configs
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Plot backend failure
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, LabyrinthError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        room::{Coord, Room, ExitSampler, UniformExits, FullExits},
        growth::{Labyrinth, GrowthEngine, GrowthOutcome, Termination, run_trial},
        trials::{SimulationConfig, TrialAggregator, TrialSeries, AggregateSeries},
        fit::LinearFit,
        report::SimulationReport,
        core::{simulate, simulate_with},
        Result, LabyrinthError,
    };
}

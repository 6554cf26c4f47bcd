//! Trial configuration, fixed-length series and aggregation

mod config;
mod series;
mod aggregator;

pub use config::SimulationConfig;
pub use series::{TrialSeries, SeriesAccumulator, AggregateSeries};
pub use aggregator::{TrialAggregator, AggregateRun, TrialSummary};

//! Multi-trial aggregation

use super::{SimulationConfig, TrialSeries, SeriesAccumulator, AggregateSeries};
use crate::growth::{run_trial, Termination};
use crate::room::{ExitSampler, UniformExits};
use crate::utils::progress::ProgressBar;
use crate::Result;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};

/// Statistics gathered alongside the mean series
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    /// Trials whose frontier emptied before the cap
    pub exhausted: usize,
    /// Mean final room count
    pub mean_rooms: f64,
    /// Mean final passage count
    pub mean_passages: f64,
    /// Largest final room count
    pub max_rooms: usize,
}

/// Result of a multi-trial run
#[derive(Clone, Debug)]
pub struct AggregateRun {
    /// Mean discovery count per iteration
    pub series: AggregateSeries,
    /// Per-run statistics
    pub summary: TrialSummary,
    /// Master seed the per-trial seeds were drawn from
    pub seed: u64,
}

/// What a worker hands back for one trial
struct TrialRecord {
    series: TrialSeries,
    rooms: usize,
    passages: usize,
    termination: Termination,
}

/// Runs independent trials and averages their discovery curves
#[derive(Clone, Debug)]
pub struct TrialAggregator {
    config: SimulationConfig,
    show_progress: bool,
}

impl TrialAggregator {
    /// Create an aggregator; rejects invalid configuration up front
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(TrialAggregator {
            config,
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while trials run
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run with uniformly random exits
    pub fn run(&self) -> Result<AggregateRun> {
        self.run_with(|seed| UniformExits::new(StdRng::seed_from_u64(seed)))
    }

    /// Run with a custom sampler per trial.
    ///
    /// `make_sampler` receives the trial's seed. Seeds are drawn up front
    /// from the master seed and results are folded in trial order, so the
    /// outcome does not depend on `parallel`.
    pub fn run_with<F, S>(&self, make_sampler: F) -> Result<AggregateRun>
    where
        F: Fn(u64) -> S + Sync,
        S: ExitSampler,
    {
        let SimulationConfig { reruns, max_iter, parallel, .. } = self.config;
        let seed = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());

        let mut master = StdRng::seed_from_u64(seed);
        let trial_seeds: Vec<u64> = (0..reruns).map(|_| master.gen()).collect();

        info!(reruns, max_iter, seed, parallel, "Running labyrinth trials");

        let progress = self.show_progress.then(|| ProgressBar::new(reruns));
        let run_one = |(trial, &trial_seed): (usize, &u64)| {
            let outcome = run_trial(make_sampler(trial_seed), max_iter);
            debug!(
                trial,
                rooms = outcome.labyrinth.room_count(),
                iterations = outcome.history.len() - 1,
                termination = ?outcome.termination,
                "Trial finished"
            );
            if let Some(bar) = &progress {
                bar.inc();
            }
            TrialRecord {
                series: TrialSeries::from_history(&outcome.history, max_iter),
                rooms: outcome.labyrinth.room_count(),
                passages: outcome.labyrinth.passage_count(),
                termination: outcome.termination,
            }
        };

        let records: Vec<TrialRecord> = if parallel {
            trial_seeds.par_iter().enumerate().map(run_one).collect()
        } else {
            trial_seeds.iter().enumerate().map(run_one).collect()
        };

        let mut accumulator = SeriesAccumulator::new(max_iter);
        let mut summary = TrialSummary::default();
        for record in &records {
            accumulator.push(&record.series);
            if record.termination == Termination::Exhausted {
                summary.exhausted += 1;
            }
            summary.mean_rooms += record.rooms as f64;
            summary.mean_passages += record.passages as f64;
            summary.max_rooms = summary.max_rooms.max(record.rooms);
        }
        summary.mean_rooms /= reruns as f64;
        summary.mean_passages /= reruns as f64;

        let series = accumulator.finish()?;
        info!(
            exhausted = summary.exhausted,
            mean_rooms = summary.mean_rooms,
            "Trials complete"
        );

        Ok(AggregateRun { series, summary, seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::FullExits;
    use crate::LabyrinthError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_full_exits_single_round() {
        let config = SimulationConfig::new(1, 1).with_seed(0);
        let run = TrialAggregator::new(config).unwrap().run_with(|_| FullExits).unwrap();
        assert_eq!(run.series.as_slice(), &[1.0]);
        assert_eq!(run.summary.mean_rooms, 5.0);
        assert_eq!(run.summary.exhausted, 0);
    }

    #[test]
    fn test_full_exits_diamond_series() {
        // Round k of an all-open grid discovers the 4k cells at distance k
        let config = SimulationConfig::new(3, 4).with_seed(1);
        let run = TrialAggregator::new(config).unwrap().run_with(|_| FullExits).unwrap();
        assert_eq!(run.series.as_slice(), &[1.0, 4.0, 8.0, 12.0]);
        assert_eq!(run.series.trials(), 3);
    }

    #[test]
    fn test_invalid_config_runs_nothing() {
        let calls = AtomicUsize::new(0);
        for config in [SimulationConfig::new(0, 10), SimulationConfig::new(10, 0)] {
            let result = TrialAggregator::new(config).and_then(|agg| {
                agg.run_with(|_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    FullExits
                })
            });
            assert!(matches!(result, Err(LabyrinthError::InvalidConfiguration(_))));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_series_length_and_bounds() {
        let config = SimulationConfig::new(20, 15).with_seed(11);
        let run = TrialAggregator::new(config).unwrap().run().unwrap();
        assert_eq!(run.series.len(), 15);
        assert_eq!(run.series.as_slice()[0], 1.0);
        assert!(run.series.as_slice().iter().all(|&v| v >= 0.0));
        assert!(run.summary.exhausted <= 20);
        assert!(run.summary.mean_rooms >= 1.0);
    }

    #[test]
    fn test_mean_matches_individual_trials() {
        let config = SimulationConfig::new(6, 8).with_seed(2024).with_parallel(false);
        let run = TrialAggregator::new(config).unwrap().run().unwrap();

        // Replay the same per-trial seeds by hand
        let mut master = StdRng::seed_from_u64(2024);
        let mut expected = vec![0.0; 8];
        for _ in 0..6 {
            let trial_seed: u64 = master.gen();
            let outcome = run_trial(UniformExits::new(StdRng::seed_from_u64(trial_seed)), 8);
            let series = TrialSeries::from_history(&outcome.history, 8);
            for (e, &v) in expected.iter_mut().zip(series.as_slice()) {
                *e += v as f64 / 6.0;
            }
        }

        for (got, want) in run.series.as_slice().iter().zip(&expected) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = SimulationConfig::new(32, 25).with_seed(77);
        let seq = TrialAggregator::new(base.clone().with_parallel(false)).unwrap().run().unwrap();
        let par = TrialAggregator::new(base.with_parallel(true)).unwrap().run().unwrap();
        assert_eq!(seq.series, par.series);
        assert_eq!(seq.summary, par.summary);
        assert_eq!(seq.seed, 77);
    }
}

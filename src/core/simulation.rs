//! Configuration in, report out

use crate::report::SimulationReport;
use crate::room::ExitSampler;
use crate::trials::{SimulationConfig, TrialAggregator};
use crate::utils::timing::Timer;
use crate::Result;

/// Run the full pipeline with uniformly random exits.
///
/// Invalid configuration is rejected before any trial runs.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport> {
    run_pipeline(config, false)
}

/// Run the full pipeline with a custom sampler factory.
///
/// `make_sampler` receives each trial's seed.
pub fn simulate_with<F, S>(config: &SimulationConfig, make_sampler: F) -> Result<SimulationReport>
where
    F: Fn(u64) -> S + Sync,
    S: ExitSampler,
{
    let aggregator = TrialAggregator::new(config.clone())?;
    let _timer = Timer::new("Simulation");
    let run = aggregator.run_with(make_sampler)?;
    SimulationReport::from_run(config, run)
}

/// Like [`simulate`], drawing a progress bar on stderr
pub fn simulate_with_progress(config: &SimulationConfig) -> Result<SimulationReport> {
    run_pipeline(config, true)
}

fn run_pipeline(config: &SimulationConfig, progress: bool) -> Result<SimulationReport> {
    let aggregator = TrialAggregator::new(config.clone())?.with_progress(progress);
    let _timer = Timer::new("Simulation");
    let run = aggregator.run()?;
    SimulationReport::from_run(config, run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::FullExits;
    use crate::LabyrinthError;

    #[test]
    fn test_simulate_is_reproducible() {
        let config = SimulationConfig::new(40, 30).with_seed(123);
        let a = simulate(&config).unwrap();
        let b = simulate(&config.clone().with_parallel(false)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.mean_per_iteration.len(), 30);
        assert_eq!(a.mean_per_iteration[0], 1.0);
    }

    #[test]
    fn test_simulate_rejects_bad_config() {
        for config in [SimulationConfig::new(0, 5), SimulationConfig::new(5, 0)] {
            assert!(matches!(
                simulate(&config),
                Err(LabyrinthError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_simulate_with_full_exits() {
        let config = SimulationConfig::new(1, 1);
        let report = simulate_with(&config, |_| FullExits).unwrap();
        assert_eq!(report.mean_per_iteration, vec![1.0]);
        assert_eq!(report.fit.slope, 0.0);
        assert_eq!(report.fit.intercept, 1.0);
        assert_eq!(report.summary.mean_rooms, 5.0);
    }
}

//! Simulation reports
//!
//! A report carries the averaged discovery curve and its fitted trend. It is
//! the only thing renderers see, so plotting never touches the simulation.

#[cfg(feature = "viz")]
pub mod plot;

use crate::fit::LinearFit;
use crate::trials::{AggregateRun, SimulationConfig, TrialSummary};
use crate::utils::{load_json, save_json};
use crate::Result;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::path::Path;

/// Rows printed in the text table, roughly
const TABLE_ROWS: usize = 10;

/// Output of a simulation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Number of trials averaged
    pub reruns: usize,
    /// Iteration cap per trial
    pub max_iter: usize,
    /// Master seed; rerunning with it reproduces the report
    pub seed: u64,
    /// Mean number of newly discovered rooms per iteration
    pub mean_per_iteration: Vec<f64>,
    /// Linear trend of `mean_per_iteration`
    pub fit: LinearFit,
    /// Per-run statistics
    pub summary: TrialSummary,
}

impl SimulationReport {
    /// Fit the aggregate series of `run` and package the result
    pub fn from_run(config: &SimulationConfig, run: AggregateRun) -> Result<Self> {
        let mean_per_iteration = run.series.to_vec();
        let fit = LinearFit::fit(&mean_per_iteration)?;
        Ok(SimulationReport {
            reruns: config.reruns,
            max_iter: config.max_iter,
            seed: run.seed,
            mean_per_iteration,
            fit,
            summary: run.summary,
        })
    }

    /// Fitted values at every iteration
    pub fn fit_line(&self) -> Vec<f64> {
        self.fit.line(self.mean_per_iteration.len())
    }

    /// Legend label of the averaged series
    pub fn series_legend(&self) -> String {
        format!("Average of {} runs", self.reruns)
    }

    /// Legend label of the fitted line
    pub fn fit_legend(&self) -> String {
        self.fit.to_string()
    }

    /// Write the report as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json(self, path)
    }

    /// Read a report written by [`SimulationReport::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_json(path)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} (max_iter = {}, seed = {})",
            self.series_legend(),
            self.max_iter,
            self.seed
        )?;
        writeln!(f, "{:>9}  {:>10}  {:>10}", "iteration", "mean", "fit")?;

        let stride = (self.mean_per_iteration.len() / TABLE_ROWS).max(1);
        let last = self.mean_per_iteration.len().saturating_sub(1);
        for (i, mean) in self.mean_per_iteration.iter().enumerate() {
            if i % stride == 0 || i == last {
                writeln!(f, "{:>9}  {:>10.3}  {:>10.3}", i, mean, self.fit.at(i as f64))?;
            }
        }

        writeln!(f, "Fit: {}", self.fit)?;
        write!(
            f,
            "Rooms per trial: mean {:.1}, max {}; passages per trial: mean {:.1}; exhausted early: {}/{}",
            self.summary.mean_rooms,
            self.summary.max_rooms,
            self.summary.mean_passages,
            self.summary.exhausted,
            self.reruns
        )
    }
}

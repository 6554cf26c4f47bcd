//! Fixed-length per-trial series and their elementwise mean

use crate::{LabyrinthError, Result};
use ndarray::Array1;
use serde::{Serialize, Deserialize};

/// Per-iteration discovery counts of one trial, exactly `max_iter` long
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialSeries(Vec<usize>);

impl TrialSeries {
    /// Truncate `history` to `max_iter` entries and zero-pad the rest
    pub fn from_history(history: &[usize], max_iter: usize) -> Self {
        let mut values = vec![0; max_iter];
        let len = history.len().min(max_iter);
        values[..len].copy_from_slice(&history[..len]);
        TrialSeries(values)
    }

    /// Series values
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Series length
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Running elementwise sum of trial series
#[derive(Clone, Debug)]
pub struct SeriesAccumulator {
    sum: Array1<f64>,
    trials: usize,
}

impl SeriesAccumulator {
    /// Create an accumulator for series of length `max_iter`
    pub fn new(max_iter: usize) -> Self {
        SeriesAccumulator {
            sum: Array1::zeros(max_iter),
            trials: 0,
        }
    }

    /// Fold one trial into the sum
    pub fn push(&mut self, series: &TrialSeries) {
        debug_assert_eq!(series.len(), self.sum.len());
        for (acc, &v) in self.sum.iter_mut().zip(series.as_slice()) {
            *acc += v as f64;
        }
        self.trials += 1;
    }

    /// Trials folded so far
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Divide by the trial count
    pub fn finish(self) -> Result<AggregateSeries> {
        if self.trials == 0 {
            return Err(LabyrinthError::InvalidConfiguration(
                "cannot average zero trials".to_string(),
            ));
        }
        let mean = self.sum / self.trials as f64;
        Ok(AggregateSeries {
            values: mean,
            trials: self.trials,
        })
    }
}

/// Elementwise mean of all trial series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateSeries {
    values: Array1<f64>,
    trials: usize,
}

impl AggregateSeries {
    /// Mean value per iteration
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Mean values as a slice
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice().unwrap_or(&[])
    }

    /// Number of averaged trials
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Series length (`max_iter`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy into a plain vector
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

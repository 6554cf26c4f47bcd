//! Least-squares trend fitting

use crate::{LabyrinthError, Result};
use serde::{Serialize, Deserialize};
use std::fmt;

/// Best-fit line `y = slope * x + intercept`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Change per iteration
    pub slope: f64,
    /// Value at iteration zero
    pub intercept: f64,
}

impl LinearFit {
    /// Fit `values[i]` against `i` by ordinary least squares.
    ///
    /// A single point has no slope; the fit is then flat through it.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(LabyrinthError::InvalidConfiguration(
                "cannot fit a line to an empty series".to_string(),
            ));
        }

        let n = values.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n;

        let (mut sxy, mut sxx) = (0.0, 0.0);
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }

        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        Ok(LinearFit {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Evaluate the line at `x`
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluate the line at `0..len`
    pub fn line(&self, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.at(i as f64)).collect()
    }

    /// Residual sum of squares against `values`
    pub fn residual_sum_of_squares(&self, values: &[f64]) -> f64 {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - self.at(i as f64)).powi(2))
            .sum()
    }
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# = {:.2}×IT + {:.2}", self.slope, self.intercept)
    }
}

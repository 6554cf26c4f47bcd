//! Simulation configuration

use crate::{LabyrinthError, Result};
use serde::{Serialize, Deserialize};

/// Parameters of a multi-trial simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent trials
    #[serde(default = "SimulationConfig::default_reruns")]
    pub reruns: usize,
    /// Hard cap on expansion rounds per trial
    #[serde(default = "SimulationConfig::default_max_iter")]
    pub max_iter: usize,
    /// Master seed; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Run trials on the rayon pool
    #[serde(default = "SimulationConfig::default_parallel")]
    pub parallel: bool,
}

impl SimulationConfig {
    fn default_reruns() -> usize {
        250
    }

    fn default_max_iter() -> usize {
        100
    }

    fn default_parallel() -> bool {
        true
    }

    /// Create config with the given trial count and cap
    pub fn new(reruns: usize, max_iter: usize) -> Self {
        SimulationConfig {
            reruns,
            max_iter,
            ..Self::default()
        }
    }

    /// Fix the master seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel trials
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.reruns == 0 {
            return Err(LabyrinthError::InvalidConfiguration(
                "reruns must be at least 1".to_string(),
            ));
        }

        if self.max_iter == 0 {
            return Err(LabyrinthError::InvalidConfiguration(
                "max_iter must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            reruns: Self::default_reruns(),
            max_iter: Self::default_max_iter(),
            seed: None,
            parallel: Self::default_parallel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reruns, 250);
        assert_eq!(config.max_iter, 100);

        config.reruns = 0;
        assert!(matches!(
            config.validate(),
            Err(LabyrinthError::InvalidConfiguration(_))
        ));

        config.reruns = 1;
        config.max_iter = 0;
        assert!(matches!(
            config.validate(),
            Err(LabyrinthError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"max_iter": 12, "seed": 5}"#).unwrap();
        assert_eq!(config.reruns, 250);
        assert_eq!(config.max_iter, 12);
        assert_eq!(config.seed, Some(5));
        assert!(config.parallel);
    }
}

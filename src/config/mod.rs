//! Configuration for correlation-length sweeps
//!
//! Holds the sweep parameters, their defaults and validation, and YAML file
//! loading. Command-line overrides live in [`Args`].

mod args;

pub use args::Args;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PercolationError, Result};

/// Parameters of a probability sweep
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SweepConfig {
    /// Lattice side length
    #[serde(default = "default_length")]
    pub length: usize,
    /// Number of probability steps; the grid is i / steps for i in 0..=steps
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Independent lattices drawn per probability
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Seed for the random number generator (entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_length() -> usize {
    50
}
fn default_steps() -> usize {
    100
}
fn default_samples() -> usize {
    100
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            length: default_length(),
            steps: default_steps(),
            samples: default_samples(),
            seed: None,
        }
    }
}

impl SweepConfig {
    pub fn new(length: usize, steps: usize, samples: usize) -> Self {
        SweepConfig {
            length,
            steps,
            samples,
            seed: None,
        }
    }

    /// Load configuration from YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SweepConfig = serde_yml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(length) = args.length {
            self.length = length;
        }
        if let Some(steps) = args.steps {
            self.steps = steps;
        }
        if let Some(samples) = args.samples {
            self.samples = samples;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(PercolationError::InvalidConfiguration(
                "Lattice length must be positive".to_string(),
            ));
        }
        if self.steps == 0 {
            return Err(PercolationError::InvalidConfiguration(
                "Number of probability steps must be positive".to_string(),
            ));
        }
        if self.samples == 0 {
            return Err(PercolationError::InvalidConfiguration(
                "Number of samples must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The probability grid i / steps for i in 0..=steps
    pub fn probabilities(&self) -> Vec<f64> {
        (0..=self.steps)
            .map(|i| i as f64 / self.steps as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = SweepConfig::default();
        assert_eq!(config.length, 50);
        assert_eq!(config.steps, 100);
        assert_eq!(config.samples, 100);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = SweepConfig::new(10, 10, 20);
        assert!(config.validate().is_ok());

        config.length = 0;
        assert!(matches!(
            config.validate(),
            Err(PercolationError::InvalidConfiguration(_))
        ));
        config.length = 10;

        config.steps = 0;
        assert!(config.validate().is_err());
        config.steps = 10;

        config.samples = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probability_grid() {
        let config = SweepConfig::new(10, 4, 1);
        assert_eq!(config.probabilities(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SweepConfig = serde_yml::from_str("length: 20\nseed: 7\n").unwrap();
        assert_eq!(config.length, 20);
        assert_eq!(config.steps, 100);
        assert_eq!(config.samples, 100);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_file_io() {
        let mut config = SweepConfig::new(12, 5, 3);
        config.seed = Some(42);

        let temp_file = NamedTempFile::new().unwrap();
        config.to_file(temp_file.path()).unwrap();

        let loaded = SweepConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "length: 0\n").unwrap();
        assert!(matches!(
            SweepConfig::from_file(temp_file.path()),
            Err(PercolationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_command_line_overrides() {
        let args = Args::parse_from(["percolation", "--length", "16", "--seed", "3"]);
        let config = SweepConfig::default().with_overrides(&args);
        assert_eq!(config.length, 16);
        assert_eq!(config.steps, 100);
        assert_eq!(config.seed, Some(3));
        assert!(!args.verbose);

        let args = Args::parse_from(["percolation", "-v", "--results", "xi.csv"]);
        assert!(args.verbose);
        assert_eq!(args.results.as_deref(), Some("xi.csv"));
        assert!(args.output.is_none());
    }
}

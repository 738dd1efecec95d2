//! Configuration of the mock run simulation.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Constants of the mock run simulation.
///
/// The defaults give runs that look plausible on the dashboard; none of them is
/// meant to model real training.
///
/// # Examples
///
/// ```rust
/// use runboard_core::mock::MockConfig;
///
/// let config = MockConfig::default()
///     .finish_probability(1.0)
///     .steps_per_epoch(100)
///     .seed(Some(7));
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct MockConfig {
    /// Probability that a running run at its last step finishes on a tick.
    pub finish_probability: f64,

    /// Number of steps per epoch, used when generating runs.
    pub steps_per_epoch: i64,

    /// Probability that the epoch of a running run increments on a tick.
    pub epoch_probability: f64,

    /// Probability that a generated run belongs to a sweep.
    pub sweep_probability: f64,

    /// Total number of steps assumed for runs without `max_steps`.
    pub default_max_steps: i64,

    /// Upper bound (exclusive) of the step increment per tick.
    pub max_step_increment: i64,

    /// Seed of the random number generator. If `None`, the generator is seeded
    /// from the operating system.
    pub seed: Option<u64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            finish_probability: 0.6,
            steps_per_epoch: 200,
            epoch_probability: 0.3,
            sweep_probability: 0.4,
            default_max_steps: 4000,
            max_step_increment: 120,
            seed: None,
        }
    }
}

impl MockConfig {
    /// Sets the probability of finishing at the last step.
    pub fn finish_probability(mut self, p: f64) -> Self {
        self.finish_probability = p;
        self
    }

    /// Sets the number of steps per epoch.
    pub fn steps_per_epoch(mut self, steps: i64) -> Self {
        self.steps_per_epoch = steps;
        self
    }

    /// Sets the probability of an epoch increment per tick.
    pub fn epoch_probability(mut self, p: f64) -> Self {
        self.epoch_probability = p;
        self
    }

    /// Sets the probability that a generated run belongs to a sweep.
    pub fn sweep_probability(mut self, p: f64) -> Self {
        self.sweep_probability = p;
        self
    }

    /// Sets the total number of steps assumed for runs without `max_steps`.
    pub fn default_max_steps(mut self, steps: i64) -> Self {
        self.default_max_steps = steps;
        self
    }

    /// Sets the upper bound of the step increment per tick.
    pub fn max_step_increment(mut self, steps: i64) -> Self {
        self.max_step_increment = steps;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    // Probabilities outside [0, 1] would make `gen_bool` panic.
    pub(crate) fn clamp_probability(p: f64) -> f64 {
        if p.is_nan() {
            0.0
        } else {
            p.max(0.0).min(1.0)
        }
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_mock_config() -> Result<()> {
        let config = MockConfig::default()
            .finish_probability(0.9)
            .steps_per_epoch(50)
            .seed(Some(3));

        let dir = TempDir::new("mock_config")?;
        let path = dir.path().join("mock_config.yaml");
        config.save(&path)?;
        let config_ = MockConfig::load(&path)?;
        assert_eq!(config, config_);

        Ok(())
    }

    #[test]
    fn test_clamp_probability() {
        assert_eq!(MockConfig::clamp_probability(1.5), 1.0);
        assert_eq!(MockConfig::clamp_probability(-0.1), 0.0);
        assert_eq!(MockConfig::clamp_probability(f64::NAN), 0.0);
        assert_eq!(MockConfig::clamp_probability(0.6), 0.6);
    }
}

use super::{generate_mock_runs, tick_mock_runs, MockConfig, DEFAULT_MOCK_RUNS};
use crate::Run;
use chrono::Utc;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

/// Drives the mock runs of demo mode.
///
/// Owns the random number generator, seeded from [`MockConfig::seed`], and stamps
/// runs with the current time.
pub struct MockSimulator {
    config: MockConfig,
    rng: StdRng,
}

impl MockSimulator {
    /// Constructs a simulator.
    pub fn new(config: MockConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Configuration of the simulation.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Generates `count` new runs.
    pub fn generate(&mut self, count: usize) -> Vec<Run> {
        debug!("Generate {} mock runs", count);
        generate_mock_runs(count, &self.config, &mut self.rng, Utc::now())
    }

    /// Advances `runs` by one tick.
    pub fn tick(&mut self, runs: &[Run]) -> Vec<Run> {
        tick_mock_runs(runs, &self.config, &mut self.rng, Utc::now())
    }

    /// Generates [`DEFAULT_MOCK_RUNS`] runs if `runs` is empty, ticks them otherwise.
    pub fn advance(&mut self, runs: &[Run]) -> Vec<Run> {
        if runs.is_empty() {
            self.generate(DEFAULT_MOCK_RUNS)
        } else {
            self.tick(runs)
        }
    }
}

impl Default for MockSimulator {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

//! Synthesized runs for demo mode.
//!
//! [`generate_mock_runs()`] creates an initial population of runs and
//! [`tick_mock_runs()`] advances it by one simulated time step. Both take the
//! random number generator and the current time as arguments, so that a seeded
//! generator gives reproducible runs. [`MockSimulator`] bundles a generator and a
//! [`MockConfig`] for the dashboard.
//!
//! ```rust
//! use runboard_core::mock::{MockConfig, MockSimulator};
//!
//! let mut simulator = MockSimulator::new(MockConfig::default().seed(Some(42)));
//! let runs = simulator.advance(&[]);
//! assert_eq!(runs.len(), 9);
//!
//! let runs = simulator.advance(&runs);
//! assert_eq!(runs.len(), 9);
//! ```
mod config;
mod generator;
mod simulator;
mod ticker;

pub use config::MockConfig;
pub use generator::{generate_mock_runs, DEFAULT_MOCK_RUNS, STATE_CYCLE};
pub use simulator::MockSimulator;
pub use ticker::tick_mock_runs;

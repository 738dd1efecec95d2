//! Uniform representation of a training run.
mod base;
mod metrics;
mod state;

pub use base::Run;
pub use metrics::Metrics;
pub use state::RunState;

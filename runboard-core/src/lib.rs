#![warn(missing_docs)]
//! Core types of runboard.
//!
//! This crate holds everything that does not talk to the network:
//!
//! * [`Run`], [`RunState`] and [`Metrics`], the uniform representation of a training run.
//! * [`normalize()`], which turns a raw run record of the tracking service into a [`Run`].
//! * [`mock`], which synthesizes runs and advances them in demo mode.
//! * [`Progress`] and [`pick_metric()`], which read well-known metrics out of a run.
//! * [`RunFilter`] and [`Settings`], used by the dashboard.
pub mod error;
pub mod mock;

mod filter;
mod normalize;
mod progress;
mod run;
mod settings;

pub use filter::{RunFilter, StatusFilter};
pub use normalize::normalize;
pub use progress::{
    format_metric, pick_metric, Progress, ProgressTier, ACCURACY_KEYS, EPOCH_KEYS,
    MAX_EPOCH_KEYS, MAX_STEP_KEYS, STEP_KEYS, TRAIN_LOSS_KEYS, VAL_LOSS_KEYS,
};
pub use run::{Metrics, Run, RunState};
pub use settings::{Settings, DEFAULT_PER_PAGE, MIN_POLL_INTERVAL_SECS};

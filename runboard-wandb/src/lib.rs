//! Run fetcher for [Weights & Biases](https://wandb.ai).
//!
//! [`WandbClient`] sends a single GraphQL query for the runs of a project and
//! normalizes the returned records into [`Run`](runboard_core::Run)s. There is no
//! retry and no pagination: one call of [`WandbClient::fetch_runs()`] is one HTTP
//! request for the first `per_page` runs, newest first.
//!
//! ```no_run
//! use anyhow::Result;
//! use runboard_wandb::{FetchRunsConfig, WandbClient};
//!
//! fn main() -> Result<()> {
//!     env_logger::init();
//!
//!     let config = FetchRunsConfig::new("0123456789abcdef", "my-team", "llm-pretraining")
//!         .per_page(20);
//!     let client = WandbClient::new();
//!
//!     for run in client.fetch_runs(&config)? {
//!         println!("{} {}", run.label(), run.state_label());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Errors are reported as [`FetchError`]. Falling back to demo data is left to the
//! caller.
mod client;
mod config;
mod error;
mod query;
mod transport;
pub use client::{WandbClient, DEFAULT_ENDPOINT};
pub use config::FetchRunsConfig;
pub use error::FetchError;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

//! Terminal dashboard of training runs.
//!
//! [`Dashboard`] polls the tracking service through
//! [`WandbClient`](runboard_wandb::WandbClient), or advances synthesized runs in
//! demo mode, and [`render`] turns its state into text.
mod dashboard;
pub mod render;
pub use dashboard::Dashboard;

//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum RunboardError {
    /// The metric key does not exist.
    #[error("Metric key error: {0}")]
    MetricKeyError(String),

    /// The metric value is not of the requested type.
    #[error("Metric value type error: {0}")]
    MetricValueTypeError(String),
}

use thiserror::Error;

/// Errors of [`WandbClient::fetch_runs()`](crate::WandbClient::fetch_runs).
///
/// Every error ends the call; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// API key, entity or project is empty. No request was sent.
    #[error("Missing API credentials/settings")]
    MissingCredentials,

    /// The server answered with a non-success status.
    #[error("W&B API error: {status} {body}")]
    Http {
        /// HTTP status code.
        status: u16,

        /// Raw response body.
        body: String,
    },

    /// The server answered but reported an error in the GraphQL payload.
    #[error("{0}")]
    Api(String),

    /// The request could not be completed.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body is not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

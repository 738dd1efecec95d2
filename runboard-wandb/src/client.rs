use crate::{
    query::{GraphQlRequest, GraphQlResponse, ProjectRunsVariables, PROJECT_RUNS_QUERY},
    FetchError, FetchRunsConfig, ReqwestTransport, Transport,
};
use log::{debug, info};
use runboard_core::{normalize, Run};

/// GraphQL endpoint of the public W&B service.
pub const DEFAULT_ENDPOINT: &str = "https://api.wandb.ai/graphql";

/// Fetches runs from the W&B GraphQL API.
///
/// The client holds no state between calls besides the reusable transport.
pub struct WandbClient<T = ReqwestTransport> {
    transport: T,

    /// URL of the GraphQL endpoint.
    endpoint: String,
}

impl WandbClient<ReqwestTransport> {
    /// Constructs a client for [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for WandbClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> WandbClient<T> {
    /// Constructs a client sending requests through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Sets the GraphQL endpoint, e.g. for a self-hosted server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// URL of the GraphQL endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The transport used by the client.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the first `config.per_page` runs of a project.
    ///
    /// Sends exactly one request. Runs are returned in the order of the response.
    ///
    /// # Errors
    ///
    /// * [`FetchError::MissingCredentials`] if API key, entity or project is empty,
    ///   before any request is sent.
    /// * [`FetchError::Http`] if the server answers with a non-success status.
    /// * [`FetchError::Api`] if the response carries GraphQL errors.
    /// * [`FetchError::Network`] or [`FetchError::Decode`] if the exchange itself fails.
    pub fn fetch_runs(&self, config: &FetchRunsConfig) -> Result<Vec<Run>, FetchError> {
        if !config.has_credentials() {
            return Err(FetchError::MissingCredentials);
        }

        let request = GraphQlRequest {
            query: PROJECT_RUNS_QUERY,
            variables: ProjectRunsVariables {
                entity: &config.entity,
                project: &config.project,
                first: config.per_page,
            },
        };
        debug!(
            "Query runs of {}/{} (first {})",
            config.entity, config.project, config.per_page
        );
        let resp = self
            .transport
            .post_json(&self.endpoint, &config.api_key, &request)?;

        if !resp.is_success() {
            return Err(FetchError::Http {
                status: resp.status,
                body: resp.body,
            });
        }

        let resp: GraphQlResponse =
            serde_json::from_str(&resp.body).map_err(|e| FetchError::Decode(e.to_string()))?;
        if let Some(message) = resp.first_error() {
            return Err(FetchError::Api(message));
        }

        let runs: Vec<Run> = resp.run_nodes().into_iter().map(normalize).collect();
        info!(
            "Fetched {} runs of {}/{}",
            runs.len(),
            config.entity,
            config.project
        );
        Ok(runs)
    }
}

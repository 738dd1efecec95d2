use runboard_core::{Settings, DEFAULT_PER_PAGE};
use serde::{Deserialize, Serialize};

/// Parameters of [`WandbClient::fetch_runs()`](crate::WandbClient::fetch_runs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchRunsConfig {
    /// API key sent as bearer token.
    pub api_key: String,

    /// Entity (user or team) owning the project.
    pub entity: String,

    /// Name of the project.
    pub project: String,

    /// Maximum number of runs returned. Only the first page is fetched.
    pub per_page: usize,
}

impl FetchRunsConfig {
    /// Constructs a configuration requesting [`DEFAULT_PER_PAGE`] runs.
    pub fn new(
        api_key: impl Into<String>,
        entity: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            entity: entity.into(),
            project: project.into(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Sets the maximum number of runs.
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Returns `true` if API key, entity and project are all non-empty.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.entity.is_empty() && !self.project.is_empty()
    }
}

impl From<&Settings> for FetchRunsConfig {
    fn from(settings: &Settings) -> Self {
        Self::new(&settings.api_key, &settings.entity, &settings.project)
            .per_page(settings.runs_per_page())
    }
}

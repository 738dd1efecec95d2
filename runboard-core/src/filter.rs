//! Filtering runs by state and text.
use crate::{Run, RunState};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which states pass a [`RunFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Every run passes.
    All,

    /// Only runs in the given state pass.
    State(RunState),
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    /// `"all"` (any case) selects every run, any other text a single state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::State(RunState::parse(s)))
        }
    }
}

/// Filter applied to the run list of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFilter {
    /// Required state.
    pub status: StatusFilter,

    /// Text searched in name, display name and sweep name, ignoring case.
    pub query: String,
}

impl RunFilter {
    /// Sets the required state.
    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Sets the search text.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns `true` if `run` passes the filter.
    pub fn matches(&self, run: &Run) -> bool {
        self.matches_status(run) && self.matches_query(run)
    }

    /// Returns the runs passing the filter, keeping their order.
    pub fn apply<'a>(&self, runs: &'a [Run]) -> Vec<&'a Run> {
        runs.iter().filter(|run| self.matches(run)).collect()
    }

    fn matches_status(&self, run: &Run) -> bool {
        match &self.status {
            StatusFilter::All => true,
            StatusFilter::State(state) => run.state_label() == state.as_str().to_lowercase(),
        }
    }

    fn matches_query(&self, run: &Run) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        let contains = |s: &str| s.to_lowercase().contains(&query);

        contains(&run.name)
            || run.display_name.as_deref().map_or(false, contains)
            || run.sweep_name.as_deref().map_or(false, contains)
    }
}

#[cfg(test)]
mod tests {
    use super::{RunFilter, StatusFilter};
    use crate::{Run, RunState};

    fn runs() -> Vec<Run> {
        vec![
            Run {
                id: "1".to_string(),
                name: "bert-base".to_string(),
                state: Some(RunState::Running),
                sweep_name: Some("lr-sweep".to_string()),
                ..Run::default()
            },
            Run {
                id: "2".to_string(),
                name: "gpt-small".to_string(),
                display_name: Some("GPT Small Baseline".to_string()),
                state: Some(RunState::Finished),
                ..Run::default()
            },
            Run {
                id: "3".to_string(),
                name: "resnet".to_string(),
                state: Some(RunState::parse("Paused")),
                ..Run::default()
            },
        ]
    }

    fn ids(runs: Vec<&Run>) -> Vec<&str> {
        runs.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_passes_everything() {
        let runs = runs();
        assert_eq!(ids(RunFilter::default().apply(&runs)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_filter_by_status() {
        let runs = runs();
        let filter = RunFilter::default().status("FINISHED".parse().unwrap());
        assert_eq!(ids(filter.apply(&runs)), vec!["2"]);

        let filter = RunFilter::default().status("paused".parse().unwrap());
        assert_eq!(ids(filter.apply(&runs)), vec!["3"]);

        assert_eq!("All".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    }

    #[test]
    fn test_filter_by_query() {
        let runs = runs();
        assert_eq!(ids(RunFilter::default().query("BASELINE").apply(&runs)), vec!["2"]);
        assert_eq!(ids(RunFilter::default().query("sweep").apply(&runs)), vec!["1"]);
        assert!(RunFilter::default().query("vit").apply(&runs).is_empty());

        let filter = RunFilter::default()
            .status(StatusFilter::State(RunState::Running))
            .query("gpt");
        assert!(filter.apply(&runs).is_empty());
    }
}

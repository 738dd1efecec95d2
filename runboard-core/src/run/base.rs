use super::{Metrics, RunState};
use serde::{Deserialize, Serialize};

/// One tracked execution of a training process.
///
/// Runs are values: the mock ticker and the fetcher always build new runs
/// instead of mutating existing ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Opaque identity, unique within a set of runs.
    pub id: String,

    /// Name of the run.
    pub name: String,

    /// Human-friendly label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Reported state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<RunState>,

    /// Name of the sweep the run belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep_name: Option<String>,

    /// Creation time as ISO-8601 text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Time of the last update as ISO-8601 text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Latest metrics.
    #[serde(default)]
    pub metrics: Metrics,
}

impl Run {
    /// Label shown for the run: display name, then name, then id.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ if !self.name.is_empty() => self.name.as_str(),
            _ => self.id.as_str(),
        }
    }

    /// Secondary label: sweep name if any, otherwise the id.
    pub fn subtitle(&self) -> &str {
        match self.sweep_name.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => self.id.as_str(),
        }
    }

    /// Lowercase state label, `"unknown"` when the state is missing.
    pub fn state_label(&self) -> String {
        self.state
            .as_ref()
            .map(|s| s.as_str().to_lowercase())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Returns `true` if the run is in progress.
    pub fn is_running(&self) -> bool {
        self.state == Some(RunState::Running)
    }

    /// Time of the last activity, falling back to the creation time.
    pub fn last_activity(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .or_else(|| self.created_at.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::Run;
    use crate::RunState;

    #[test]
    fn test_labels_fall_back() {
        let mut run = Run {
            id: "abc123".to_string(),
            name: "run-1".to_string(),
            ..Run::default()
        };
        assert_eq!(run.label(), "run-1");
        assert_eq!(run.subtitle(), "abc123");
        assert_eq!(run.state_label(), "unknown");

        run.display_name = Some("Experiment 1".to_string());
        run.sweep_name = Some("sweep-2".to_string());
        run.state = Some(RunState::parse("Running"));
        assert_eq!(run.label(), "Experiment 1");
        assert_eq!(run.subtitle(), "sweep-2");
        assert_eq!(run.state_label(), "running");
        assert!(run.is_running());
    }

    #[test]
    fn test_last_activity() {
        let mut run = Run {
            created_at: Some("2024-05-01T10:00:00Z".to_string()),
            ..Run::default()
        };
        assert_eq!(run.last_activity(), Some("2024-05-01T10:00:00Z"));
        run.updated_at = Some("2024-05-01T11:00:00Z".to_string());
        assert_eq!(run.last_activity(), Some("2024-05-01T11:00:00Z"));
    }
}

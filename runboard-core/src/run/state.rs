use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a run as reported by the tracking service.
///
/// Parsing is case-insensitive. Text that does not name a known state is kept
/// in [`RunState::Unknown`] so that it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunState {
    /// The run is in progress.
    Running,

    /// The run completed.
    Finished,

    /// The run exited with an error.
    Failed,

    /// The run stopped sending heartbeats.
    Crashed,

    /// The run is waiting to be scheduled.
    Queued,

    /// The run was interrupted by the scheduler.
    Preempted,

    /// Any other state, with the raw text as received.
    Unknown(String),
}

impl RunState {
    /// Parses a state label, ignoring ASCII case.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "running" => Self::Running,
            "finished" => Self::Finished,
            "failed" => Self::Failed,
            "crashed" => Self::Crashed,
            "queued" => Self::Queued,
            "preempted" => Self::Preempted,
            _ => Self::Unknown(s.to_string()),
        }
    }

    /// Lowercase label of the state, or the raw text for [`RunState::Unknown`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::Crashed => "crashed",
            Self::Queued => "queued",
            Self::Preempted => "preempted",
            Self::Unknown(raw) => raw.as_str(),
        }
    }

    /// Returns `true` for states no run leaves once entered.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Failed | Self::Crashed)
    }
}

impl From<&str> for RunState {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for RunState {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<RunState> for String {
    fn from(state: RunState) -> Self {
        match state {
            RunState::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use chrono::{DateTime, Local};
use log::{info, warn};
use runboard_core::{mock::MockSimulator, Run, RunFilter, Settings};
use runboard_wandb::{FetchRunsConfig, ReqwestTransport, Transport, WandbClient};

/// State of the dashboard: the current runs and the outcome of the last refresh.
///
/// Runs come from the tracking service when credentials are set and demo mode is
/// off. Otherwise, or when a fetch fails, the mock runs are advanced instead so that
/// the dashboard keeps showing something.
pub struct Dashboard<T = ReqwestTransport> {
    settings: Settings,
    client: WandbClient<T>,
    simulator: MockSimulator,
    runs: Vec<Run>,
    last_updated: Option<DateTime<Local>>,
    error: Option<String>,
}

impl<T: Transport> Dashboard<T> {
    /// Constructs a dashboard without runs.
    pub fn new(settings: Settings, client: WandbClient<T>, simulator: MockSimulator) -> Self {
        Self {
            settings,
            client,
            simulator,
            runs: vec![],
            last_updated: None,
            error: None,
        }
    }

    /// Returns `true` if runs are synthesized rather than fetched.
    pub fn is_demo(&self) -> bool {
        self.settings.demo_mode || !self.settings.has_credentials()
    }

    /// Reloads the runs.
    ///
    /// In demo mode the mock runs are generated on the first call and ticked on
    /// later calls. Otherwise the runs are fetched; on failure the error message is
    /// kept in [`Dashboard::error()`] and the mock runs are advanced.
    pub fn refresh(&mut self) {
        self.error = None;

        if self.is_demo() {
            self.runs = self.simulator.advance(&self.runs);
            self.last_updated = Some(Local::now());
            return;
        }

        match self.client.fetch_runs(&FetchRunsConfig::from(&self.settings)) {
            Ok(runs) => {
                self.runs = runs;
                self.last_updated = Some(Local::now());
            }
            Err(e) => {
                warn!("Failed to fetch runs, showing demo runs: {}", e);
                self.error = Some(e.to_string());
                self.runs = self.simulator.advance(&self.runs);
            }
        }
    }

    /// Replaces the settings. Runs are kept until the next refresh.
    pub fn update_settings(&mut self, settings: Settings) {
        if settings.demo_mode != self.settings.demo_mode {
            info!("Demo mode: {}", settings.demo_mode);
        }
        self.settings = settings;
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current runs.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Current runs passing `filter`.
    pub fn filtered(&self, filter: &RunFilter) -> Vec<&Run> {
        filter.apply(&self.runs)
    }

    /// Time of the last successful refresh.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Message of the error of the last refresh, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

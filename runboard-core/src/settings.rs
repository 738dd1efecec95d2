//! Settings of the dashboard.
//!
//! Settings are a flat set of values persisted as a YAML file, by default
//! `~/.runboard/settings.yaml`.
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    time::Duration,
};

/// Default number of runs requested from the tracking service.
pub const DEFAULT_PER_PAGE: usize = 50;

/// Lower bound of the polling interval in seconds.
pub const MIN_POLL_INTERVAL_SECS: u64 = 5;

/// Settings of the dashboard.
///
/// # Examples
///
/// ```rust
/// use runboard_core::Settings;
///
/// let settings = Settings::default()
///     .api_key("0123456789abcdef")
///     .entity("my-team")
///     .project("llm-pretraining")
///     .demo_mode(false);
///
/// assert!(settings.has_credentials());
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct Settings {
    /// API key of the tracking service.
    pub api_key: String,

    /// Entity (user or team) owning the project.
    pub entity: String,

    /// Project whose runs are shown.
    pub project: String,

    /// Number of runs requested per poll.
    pub per_page: usize,

    /// Polling interval in seconds.
    pub poll_interval: u64,

    /// Shows synthesized runs instead of querying the tracking service.
    pub demo_mode: bool,
}

impl Default for Settings {
    /// Demo mode without credentials, polling every 20 seconds.
    fn default() -> Self {
        Self {
            api_key: String::new(),
            entity: String::new(),
            project: String::new(),
            per_page: DEFAULT_PER_PAGE,
            poll_interval: 20,
            demo_mode: true,
        }
    }
}

impl Settings {
    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the entity.
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = entity.into();
        self
    }

    /// Sets the project.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Sets the number of runs requested per poll.
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the polling interval in seconds.
    pub fn poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval = secs;
        self
    }

    /// Enables or disables demo mode.
    pub fn demo_mode(mut self, demo_mode: bool) -> Self {
        self.demo_mode = demo_mode;
        self
    }

    /// Returns `true` if API key, entity and project are all set.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.entity.is_empty() && !self.project.is_empty()
    }

    /// Polling interval, never shorter than [`MIN_POLL_INTERVAL_SECS`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval.max(MIN_POLL_INTERVAL_SECS))
    }

    /// Number of runs requested per poll, [`DEFAULT_PER_PAGE`] when unset.
    pub fn runs_per_page(&self) -> usize {
        if self.per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            self.per_page
        }
    }

    /// Default location of the settings file, `~/.runboard/settings.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".runboard").join("settings.yaml"))
    }

    /// Loads the settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        let rdr = BufReader::new(file);
        let settings = serde_yaml::from_reader(rdr)
            .with_context(|| format!("Failed to parse settings in {:?}", path))?;
        Ok(settings)
    }

    /// Loads the settings from a YAML file, or returns the defaults if the file
    /// does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!("No settings at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Saves the settings to a YAML file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let mut file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_settings() -> Result<()> {
        let settings = Settings::default()
            .api_key("key")
            .entity("team")
            .project("proj")
            .per_page(20)
            .poll_interval_secs(30)
            .demo_mode(false);

        let dir = TempDir::new("settings")?;
        let path = dir.path().join("nested").join("settings.yaml");
        settings.save(&path)?;
        let settings_ = Settings::load(&path)?;
        assert_eq!(settings, settings_);

        Ok(())
    }

    #[test]
    fn test_load_partial_and_missing() -> Result<()> {
        let dir = TempDir::new("settings")?;
        let path = dir.path().join("settings.yaml");
        assert_eq!(Settings::load_or_default(&path)?, Settings::default());

        std::fs::write(&path, "entity: team\ndemo_mode: false\n")?;
        let settings = Settings::load_or_default(&path)?;
        assert_eq!(settings.entity, "team");
        assert!(!settings.demo_mode);
        assert_eq!(settings.per_page, DEFAULT_PER_PAGE);
        assert!(!settings.has_credentials());

        Ok(())
    }

    #[test]
    fn test_poll_interval_floor() {
        let settings = Settings::default().poll_interval_secs(1);
        assert_eq!(settings.poll_interval(), Duration::from_secs(5));
        let settings = Settings::default().per_page(0);
        assert_eq!(settings.runs_per_page(), DEFAULT_PER_PAGE);
    }
}

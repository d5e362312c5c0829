//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::recording::Duration;

/// Backend origin used when nothing is configured.
/// The original client hardcoded this; here it is only the bottom layer of
/// the merge.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub max_duration: Option<String>,
    pub audio_cue: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            max_duration: Some("60s".to_string()),
            audio_cue: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
            max_duration: other.max_duration.or(self.max_duration),
            audio_cue: other.audio_cue.or(self.audio_cue),
        }
    }

    /// Get the backend base URL, or the default origin if not set
    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get max_duration as parsed Duration, or default if not set/invalid
    pub fn max_duration_or_default(&self) -> Duration {
        self.max_duration
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_max_duration)
    }

    /// Get audio cue setting, or false if not set
    pub fn audio_cue_or_default(&self) -> bool {
        self.audio_cue.unwrap_or(false)
    }
}

//! Configuration types
//!
//! Runtime configuration for the archive client, dictation, toasts and exports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ARCHIVE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "gopher_archive=info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the archive service; `/api/learn` is appended
    #[serde(default = "default_archive_url")]
    pub archive_url: String,
    /// Where exported documents are written (defaults to the user's downloads)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    /// Dictation auto-stops after this many seconds
    #[serde(default = "default_silence_secs")]
    pub dictation_silence_secs: u64,
    /// How long confirmation toasts stay on screen
    #[serde(default = "default_toast_millis")]
    pub toast_millis: u64,
    /// tracing-subscriber filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_archive_url() -> String {
    DEFAULT_ARCHIVE_URL.to_string()
}

fn default_silence_secs() -> u64 {
    3
}

fn default_toast_millis() -> u64 {
    2500
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            archive_url: default_archive_url(),
            export_dir: None,
            dictation_silence_secs: default_silence_secs(),
            toast_millis: default_toast_millis(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Normalize out-of-range values.
    pub fn validate(&mut self) {
        let trimmed = self.archive_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            self.archive_url = default_archive_url();
        } else if trimmed.len() != self.archive_url.len() {
            self.archive_url = trimmed.to_string();
        }

        if self.dictation_silence_secs == 0 {
            self.dictation_silence_secs = default_silence_secs();
        }
        if self.toast_millis == 0 {
            self.toast_millis = default_toast_millis();
        }
        if self.log_filter.trim().is_empty() {
            self.log_filter = default_log_filter();
        }
    }

    pub fn silence_timeout(&self) -> Duration {
        Duration::from_secs(self.dictation_silence_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_millis)
    }
}

//! Settings storage
//!
//! Reads `settings.json` from the data directory. Settings are read-only
//! at runtime; edit the file and restart to change them.

use crate::storage::{get_data_dir, StorageError};
use crate::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppConfig {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

/// Load and validate settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppConfig, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppConfig = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!(path = %path.display(), "Loaded settings from disk");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, AppConfig::default());
    }

    #[test]
    fn test_loaded_settings_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"archive_url": "http://archive.lan:8080/", "dictation_silence_secs": 0, "export_dir": "/tmp/out"}"#,
        )
        .unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.archive_url, "http://archive.lan:8080");
        assert_eq!(settings.dictation_silence_secs, 3);
        assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(StorageError::Json(_))));
    }
}

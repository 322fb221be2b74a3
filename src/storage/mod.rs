//! Local storage
//!
//! Resolves platform directories and loads settings. Conversations are
//! never written to disk.

pub mod settings;

use directories::{ProjectDirs, UserDirs};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
}

/// Platform data directory for the application.
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("org", "GopherArchive", "gopher-archive")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

/// Where exported documents go: the configured directory, else the user's
/// downloads folder, else an `exports` folder in the data directory.
pub fn get_download_dir(configured: Option<&PathBuf>) -> Result<PathBuf, StorageError> {
    if let Some(dir) = configured {
        return Ok(dir.clone());
    }
    if let Some(dir) = UserDirs::new().and_then(|u| u.download_dir().map(|d| d.to_path_buf())) {
        return Ok(dir);
    }
    Ok(get_data_dir()?.join("exports"))
}

//! Archive client
//!
//! Sends learner queries to the archive service and turns replies into
//! assistant messages.

pub mod client;

pub use client::HttpArchiveClient;

use crate::types::Message;
use async_trait::async_trait;
use thiserror::Error;

/// Path of the learning endpoint, relative to the archive base URL.
pub const LEARN_PATH: &str = "/api/learn";

/// Reply content used when the service answers without a usable `response`.
pub const FALLBACK_RESPONSE: &str = "No response from archive.";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive request failed{}: {detail}", status_suffix(.status))]
    RequestFailed {
        /// HTTP status, when the server answered at all
        status: Option<u16>,
        detail: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl ArchiveError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ArchiveError::RequestFailed {
            status: None,
            detail: err.to_string(),
        }
    }
}

/// Anything that can answer a learner's query.
#[async_trait]
pub trait ArchiveClient: Send + Sync {
    async fn ask(&self, query: &str) -> Result<Message, ArchiveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::RequestFailed {
            status: Some(503),
            detail: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "Archive request failed (503): unavailable");

        let err = ArchiveError::transport("connection refused");
        assert_eq!(err.to_string(), "Archive request failed: connection refused");
    }
}

//! Speech-to-text capability
//!
//! A recognizer runs one non-continuous session at a time and reports
//! interim and final transcripts over a channel.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Partial transcript, replaced by later events
    Interim(String),
    /// Final transcript for the session
    Final(String),
    /// The recognizer stopped listening
    End,
    Error(String),
}

#[derive(Debug, Error)]
pub enum DictationError {
    #[error("Speech recognition is not available on this platform")]
    Unavailable,
    #[error("Failed to start speech recognition: {0}")]
    StartFailed(String),
}

pub trait SpeechRecognizer: Send + Sync {
    /// Begin a session with interim results enabled.
    fn start(&self) -> Result<mpsc::UnboundedReceiver<SpeechEvent>, DictationError>;

    /// Stop the current session. Stopping an idle recognizer is a no-op.
    fn stop(&self);
}

#[derive(Clone, Default)]
pub enum SpeechCapability {
    Available(Arc<dyn SpeechRecognizer>),
    #[default]
    Unavailable,
}

impl SpeechCapability {
    /// Use an injected capability, falling back to the platform default.
    pub fn or_detect(injected: Option<Self>) -> Self {
        injected.unwrap_or_else(Self::detect)
    }

    /// Platform default. Desktop webviews expose no speech engine.
    pub fn detect() -> Self {
        tracing::warn!("Speech recognition not supported on this platform, dictation disabled");
        SpeechCapability::Unavailable
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SpeechCapability::Available(_))
    }

    pub fn recognizer(&self) -> Result<&Arc<dyn SpeechRecognizer>, DictationError> {
        match self {
            SpeechCapability::Available(recognizer) => Ok(recognizer),
            SpeechCapability::Unavailable => Err(DictationError::Unavailable),
        }
    }
}

impl std::fmt::Debug for SpeechCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechCapability::Available(_) => write!(f, "Available"),
            SpeechCapability::Unavailable => write!(f, "Unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SilentRecognizer;

    impl SpeechRecognizer for SilentRecognizer {
        fn start(&self) -> Result<mpsc::UnboundedReceiver<SpeechEvent>, DictationError> {
            let (_tx, rx) = mpsc::unbounded_channel();
            Ok(rx)
        }

        fn stop(&self) {}
    }

    #[test]
    fn test_unavailable_has_no_recognizer() {
        let speech = SpeechCapability::Unavailable;
        assert!(!speech.is_available());
        assert!(matches!(speech.recognizer(), Err(DictationError::Unavailable)));
    }

    #[test]
    fn test_injected_recognizer_is_kept() {
        let injected = SpeechCapability::Available(Arc::new(SilentRecognizer));
        let speech = SpeechCapability::or_detect(Some(injected));
        assert!(speech.is_available());
        assert!(speech.recognizer().is_ok());

        assert!(!SpeechCapability::or_detect(None).is_available());
    }
}

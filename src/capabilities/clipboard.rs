//! Clipboard capability

use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write-only text clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard, via `arboard`.
///
/// Holds one handle for the life of the app: on X11 and Wayland the copied
/// text is only served while the handle that set it is alive.
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        let handle = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self {
            handle: Mutex::new(handle),
        }
    }

    pub fn is_available(&self) -> bool {
        self.handle.lock().map(|h| h.is_some()).unwrap_or(false)
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::WriteFailed("clipboard lock poisoned".into()))?;
        let clipboard = handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".into()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        tracing::info!(text_len = text.len(), "Copied to clipboard");
        Ok(())
    }
}

//! Transcript export
//!
//! Turns a conversation snapshot into clipboard text or a downloadable PDF.
//! Both exports are refused until the user has said something: a transcript
//! holding only the welcome message isn't worth saving.

pub mod document;
pub mod pdf;
pub mod text;

pub use document::{layout_document, wrap_text, DocumentLayout, DrawOp, PageGeometry};
pub use pdf::render_pdf;
pub use text::render_plain_text;

use crate::capabilities::{Clipboard, Toast};
use crate::conversation::Snapshot;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const COPIED_TOAST: &str = "Transcript copied to clipboard";
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome<T> {
    Done(T),
    /// Nothing to export yet
    Unavailable,
}

/// Export is only offered once the conversation goes past the greeting.
pub fn export_available(snapshot: &Snapshot) -> bool {
    snapshot.len() > 1
}

/// `gopher-archive-<epoch-millis>.pdf`
pub fn document_file_name(now: DateTime<Utc>) -> String {
    format!("gopher-archive-{}.pdf", now.timestamp_millis())
}

/// Write a rendered document into `dir`, creating it if needed.
pub fn save_document(bytes: &[u8], dir: &Path, now: DateTime<Utc>) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(document_file_name(now));
    fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Saved transcript document");
    Ok(path)
}

/// Runs exports against a snapshot, rendering times in `tz`.
pub struct Exporter<'a, Tz: TimeZone> {
    tz: Tz,
    clipboard: &'a dyn Clipboard,
    toast: &'a dyn Toast,
    toast_duration: Duration,
}

impl<'a, Tz> Exporter<'a, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(tz: Tz, clipboard: &'a dyn Clipboard, toast: &'a dyn Toast) -> Self {
        Self {
            tz,
            clipboard,
            toast,
            toast_duration: TOAST_DURATION,
        }
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Copy the plain-text transcript and confirm with a toast.
    ///
    /// Clipboard failures are logged and otherwise ignored.
    pub fn copy_transcript(&self, snapshot: &Snapshot) -> ExportOutcome<()> {
        if !export_available(snapshot) {
            return ExportOutcome::Unavailable;
        }

        let transcript = render_plain_text(snapshot, &self.tz);
        match self.clipboard.write_text(&transcript) {
            Ok(()) => self.toast.show(COPIED_TOAST, self.toast_duration),
            Err(e) => tracing::warn!("Failed to copy transcript: {}", e),
        }
        ExportOutcome::Done(())
    }

    /// Render the transcript PDF and save it into `dir`.
    pub fn export_document(
        &self,
        snapshot: &Snapshot,
        dir: &Path,
        now: DateTime<Utc>,
    ) -> Result<ExportOutcome<PathBuf>, ExportError> {
        if !export_available(snapshot) {
            return Ok(ExportOutcome::Unavailable);
        }

        let layout = layout_document(snapshot, &self.tz, now, &PageGeometry::default());
        let bytes = render_pdf(&layout)?;
        let path = save_document(&bytes, dir, now)?;
        Ok(ExportOutcome::Done(path))
    }
}

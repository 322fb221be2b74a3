//! Transcript export buttons

use crate::app::AppState;
use crate::capabilities::Toast;
use crate::export::{ExportOutcome, Exporter};
use crate::storage::get_download_dir;
use crate::ui::components::toast::SignalToast;
use chrono::{Local, Utc};
use dioxus::prelude::*;

#[component]
pub fn ExportToolbar() -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session;
    let toast = SignalToast::new(app_state.toast);
    let toast_duration = app_state.config.toast_duration();
    let enabled = session.read().conversation().has_user_interaction();

    let handle_copy = {
        let clipboard = app_state.clipboard.clone();
        move |_| {
            let snapshot = session.read().messages();
            Exporter::new(Local, clipboard.as_ref(), &toast)
                .with_toast_duration(toast_duration)
                .copy_transcript(&snapshot);
        }
    };

    let handle_download = {
        let export_dir = app_state.config.export_dir.clone();
        let clipboard = app_state.clipboard.clone();
        move |_| {
            let snapshot = session.read().messages();
            let dir = match get_download_dir(export_dir.as_ref()) {
                Ok(dir) => dir,
                Err(e) => {
                    tracing::error!("No download directory: {}", e);
                    return;
                }
            };
            let exporter = Exporter::new(Local, clipboard.as_ref(), &toast);
            match exporter.export_document(&snapshot, &dir, Utc::now()) {
                Ok(ExportOutcome::Done(path)) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    toast.show(&format!("Saved {name}"), toast_duration);
                }
                Ok(ExportOutcome::Unavailable) => {}
                Err(e) => tracing::error!("Failed to export transcript: {}", e),
            }
        }
    };

    rsx! {
        div { class: "export-toolbar",
            button {
                class: "toolbar-button",
                title: "Copy conversation",
                disabled: !enabled,
                onclick: handle_copy,
                "Copy"
            }
            button {
                class: "toolbar-button",
                title: "Download as PDF",
                disabled: !enabled,
                onclick: handle_download,
                "PDF"
            }
        }
    }
}

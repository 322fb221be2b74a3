//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::archive::{ArchiveClient, HttpArchiveClient};
use crate::capabilities::{SpeechCapability, SystemClipboard};
use crate::session::ChatSession;
use crate::types::AppConfig;
use crate::ui::chat::ChatView;
use crate::ui::components::toast::{ToastHost, ToastView};
use dioxus::prelude::*;
use std::sync::Arc;

const STYLE: &str = include_str!("ui/style.css");

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub archive: Arc<dyn ArchiveClient>,
    pub speech: SpeechCapability,
    pub clipboard: Arc<SystemClipboard>,
    /// Draft, conversation and submission status; the view re-renders from it
    pub session: Signal<ChatSession>,
    pub toast: Signal<Option<ToastView>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_speech(config, SpeechCapability::detect())
    }

    /// Build the state around a specific speech recognizer.
    pub fn with_speech(config: AppConfig, speech: SpeechCapability) -> Self {
        tracing::info!(
            archive_url = %config.archive_url,
            dictation = speech.is_available(),
            "AppState initialized"
        );

        Self {
            archive: Arc::new(HttpArchiveClient::from_config(&config)),
            speech,
            clipboard: Arc::new(SystemClipboard::new()),
            session: Signal::new(ChatSession::new(config.silence_timeout())),
            toast: Signal::new(None),
            config,
        }
    }
}

/// Build the `AppState` from the launch context and provide it to the tree.
/// Expects an `AppConfig` there; a `SpeechCapability` provided alongside it
/// is used instead of platform detection.
pub fn use_app_state() -> AppState {
    let config = use_context::<AppConfig>();
    let speech = try_use_context::<SpeechCapability>();
    use_context_provider(move || {
        AppState::with_speech(config, SpeechCapability::or_detect(speech))
    })
}

#[component]
pub fn App() -> Element {
    use_app_state();

    rsx! {
        style { {STYLE} }
        div {
            class: "app-shell",
            ChatView {}
            ToastHost {}
        }
    }
}

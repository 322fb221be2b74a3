//! Toast notifications
//!
//! A single toast slot held in a signal. Showing a toast replaces whatever
//! is on screen; timers belonging to a replaced toast do nothing.

use crate::app::AppState;
use crate::capabilities::toast::{Toast, TOAST_FADE};
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
pub struct ToastView {
    pub id: u64,
    pub message: String,
    pub fading: bool,
}

/// [`Toast`] backed by the app's toast signal.
#[derive(Clone, Copy)]
pub struct SignalToast {
    state: Signal<Option<ToastView>>,
}

impl SignalToast {
    pub fn new(state: Signal<Option<ToastView>>) -> Self {
        Self { state }
    }
}

impl Toast for SignalToast {
    fn show(&self, message: &str, duration: Duration) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        let mut state = self.state;
        state.set(Some(ToastView {
            id,
            message: message.to_string(),
            fading: false,
        }));

        spawn(async move {
            tokio::time::sleep(duration.saturating_sub(TOAST_FADE)).await;
            if let Some(view) = state.write().as_mut().filter(|v| v.id == id) {
                view.fading = true;
            }
            tokio::time::sleep(TOAST_FADE.min(duration)).await;
            let current = state.peek().as_ref().map(|v| v.id);
            if current == Some(id) {
                state.set(None);
            }
        });
    }
}

#[component]
pub fn ToastHost() -> Element {
    let app_state = use_context::<AppState>();
    let toast = app_state.toast.read().clone();

    match toast {
        Some(view) => {
            let class = if view.fading { "toast fading" } else { "toast" };
            rsx! {
                div { key: "{view.id}", class: "{class}", "{view.message}" }
            }
        }
        None => rsx! {},
    }
}

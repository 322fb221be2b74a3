//! Transient notifications

use std::time::Duration;

/// How long before dismissal a toast starts fading out.
pub const TOAST_FADE: Duration = Duration::from_millis(300);

/// Shows a short message that dismisses itself after `duration`.
pub trait Toast {
    fn show(&self, message: &str, duration: Duration);
}

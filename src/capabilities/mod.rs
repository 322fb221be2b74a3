//! Platform capabilities
//!
//! Clipboard, speech recognition and toast notifications sit behind small
//! traits so the chat logic can run (and be tested) without a desktop.

pub mod clipboard;
pub mod speech;
pub mod toast;

pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use speech::{DictationError, SpeechCapability, SpeechEvent, SpeechRecognizer};
pub use toast::Toast;

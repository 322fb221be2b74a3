//! Dictation controller
//!
//! Tracks whether a speech session is live and decides what each
//! recognizer event does to the draft. Sessions are numbered so that late
//! events and silence timers from an earlier session are ignored.

use crate::capabilities::SpeechEvent;
use std::fmt;
use std::time::Duration;

pub const SILENCE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictationState {
    Idle,
    Listening,
}

impl fmt::Display for DictationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictationState::Idle => write!(f, "Idle"),
            DictationState::Listening => write!(f, "Listening"),
        }
    }
}

/// What the caller should do with the recognizer after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationCommand {
    /// Start the recognizer and arm a silence timer for `session`.
    Start {
        session: u64,
        silence_timeout: Duration,
    },
    Stop,
    Ignored,
}

/// Effect of a recognizer event on the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationUpdate {
    /// Replace the draft with this transcript, keep listening
    Draft(String),
    /// Session over; `transcript` replaces the draft when present and
    /// input focus goes back to the text field
    Completed { transcript: Option<String> },
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Dictation {
    state: DictationState,
    session: u64,
    silence_timeout: Duration,
}

impl Default for Dictation {
    fn default() -> Self {
        Self::new(SILENCE_TIMEOUT)
    }
}

impl Dictation {
    pub fn new(silence_timeout: Duration) -> Self {
        Self {
            state: DictationState::Idle,
            session: 0,
            silence_timeout,
        }
    }

    pub fn state(&self) -> DictationState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == DictationState::Listening
    }

    pub fn current_session(&self) -> u64 {
        self.session
    }

    /// Flip between listening and idle. `blocked` refuses a start (e.g. while a request is pending).
    pub fn toggle(&mut self, blocked: bool) -> DictationCommand {
        match self.state {
            DictationState::Listening => {
                self.finish();
                DictationCommand::Stop
            }
            DictationState::Idle if blocked => DictationCommand::Ignored,
            DictationState::Idle => {
                self.session += 1;
                self.transition(DictationState::Listening);
                DictationCommand::Start {
                    session: self.session,
                    silence_timeout: self.silence_timeout,
                }
            }
        }
    }

    /// The recognizer could not be started; drop back to idle.
    pub fn abort(&mut self) {
        if self.is_listening() {
            tracing::warn!("Dictation session {} aborted", self.session);
            self.finish();
        }
    }

    pub fn apply(&mut self, session: u64, event: SpeechEvent) -> DictationUpdate {
        if session != self.session || !self.is_listening() {
            tracing::debug!(session, current = self.session, "Ignoring stale speech event");
            return DictationUpdate::Ignored;
        }

        match event {
            SpeechEvent::Interim(text) => DictationUpdate::Draft(text),
            SpeechEvent::Final(text) => {
                self.finish();
                DictationUpdate::Completed {
                    transcript: Some(text),
                }
            }
            SpeechEvent::End => {
                self.finish();
                DictationUpdate::Completed { transcript: None }
            }
            SpeechEvent::Error(err) => {
                tracing::warn!("Speech recognition error: {}", err);
                self.finish();
                DictationUpdate::Completed { transcript: None }
            }
        }
    }

    /// Silence timer for `session` fired. Returns true if the recognizer
    /// should be stopped; a timer outliving its session does nothing.
    pub fn silence_elapsed(&mut self, session: u64) -> bool {
        if session == self.session && self.is_listening() {
            tracing::info!("No speech for {:?}, stopping dictation", self.silence_timeout);
            self.finish();
            true
        } else {
            false
        }
    }

    fn finish(&mut self) {
        self.transition(DictationState::Idle);
    }

    fn transition(&mut self, target: DictationState) {
        if self.state != target {
            tracing::debug!("Dictation state: {} -> {}", self.state, target);
            self.state = target;
        }
    }
}

//! Chat session
//!
//! Owns everything the chat view renders: the draft, the conversation and
//! the submission lifecycle. All mutation happens through `&mut self`, so
//! the view keeps one `ChatSession` in a signal and every change re-renders
//! from it.
//!
//! Submission runs in two halves so the network call can suspend without
//! holding the session: [`ChatSession::submit`] records the user message and
//! hands back the query, [`ChatSession::resolve`] records the outcome.

pub mod dictation;
pub mod input;

pub use dictation::{Dictation, DictationCommand, DictationState, DictationUpdate};
pub use input::{submits_on_enter, InputController};

use crate::archive::{ArchiveClient, ArchiveError};
use crate::capabilities::SpeechEvent;
use crate::conversation::{ConversationStore, Snapshot};
use crate::types::{Message, Role};
use std::fmt;
use std::time::Duration;

/// Shown to the user when the archive can't be reached.
pub const CONNECTION_ERROR: &str = "Unable to connect to archive. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Idle,
    /// A request is in flight; submissions are refused
    Pending,
    /// The last request failed; cleared by the next submission
    Failed,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "Idle"),
            SubmissionStatus::Pending => write!(f, "Pending"),
            SubmissionStatus::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    input: InputController,
    conversation: ConversationStore,
    status: SubmissionStatus,
    dictation: Dictation,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(dictation::SILENCE_TIMEOUT)
    }
}

impl ChatSession {
    pub fn new(silence_timeout: Duration) -> Self {
        Self::with_conversation(ConversationStore::new(), silence_timeout)
    }

    pub fn with_conversation(conversation: ConversationStore, silence_timeout: Duration) -> Self {
        Self {
            input: InputController::default(),
            conversation,
            status: SubmissionStatus::Idle,
            dictation: Dictation::new(silence_timeout),
        }
    }

    pub fn draft(&self) -> &str {
        self.input.draft()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.input.set_draft(text);
    }

    pub fn messages(&self) -> Snapshot {
        self.conversation.all()
    }

    pub fn conversation(&self) -> &ConversationStore {
        &self.conversation
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// User-facing error text, if the last request failed.
    pub fn error(&self) -> Option<&'static str> {
        (self.status == SubmissionStatus::Failed).then_some(CONNECTION_ERROR)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.input.is_blank()
    }

    /// Record the draft as a user message and enter `Pending`.
    ///
    /// Returns the query to send, or `None` when the draft is blank or a
    /// request is already in flight (nothing is recorded in that case).
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            tracing::debug!(status = %self.status, "Submit ignored");
            return None;
        }

        let query = self.input.take();
        self.conversation.append(Message::user(query.clone()));
        self.transition(SubmissionStatus::Pending);
        Some(query)
    }

    /// Record the outcome of the in-flight request.
    pub fn resolve(&mut self, result: Result<Message, ArchiveError>) {
        if !self.is_pending() {
            tracing::warn!(status = %self.status, "Archive reply arrived with no request pending");
        }

        match result {
            Ok(reply) => {
                let reply = if reply.role == Role::Assistant {
                    reply
                } else {
                    tracing::warn!(role = ?reply.role, "Archive reply had the wrong role, recording as assistant");
                    Message {
                        role: Role::Assistant,
                        ..reply
                    }
                };
                self.conversation.append(reply);
                self.transition(SubmissionStatus::Idle);
            }
            Err(e) => {
                tracing::error!("Archive request failed: {}", e);
                self.transition(SubmissionStatus::Failed);
            }
        }
    }

    pub fn dictation_state(&self) -> DictationState {
        self.dictation.state()
    }

    pub fn toggle_dictation(&mut self) -> DictationCommand {
        let blocked = self.is_pending();
        self.dictation.toggle(blocked)
    }

    /// Whether dictation session `session` is still the one listening.
    pub fn is_dictating(&self, session: u64) -> bool {
        self.dictation.is_listening() && self.dictation.current_session() == session
    }

    pub fn abort_dictation(&mut self) {
        self.dictation.abort();
    }

    /// Apply a recognizer event. Returns true when the session completed
    /// and input focus should be restored.
    pub fn apply_speech_event(&mut self, session: u64, event: SpeechEvent) -> bool {
        match self.dictation.apply(session, event) {
            DictationUpdate::Draft(text) => {
                self.input.set_draft(text);
                false
            }
            DictationUpdate::Completed { transcript } => {
                if let Some(text) = transcript {
                    self.input.set_draft(text);
                }
                true
            }
            DictationUpdate::Ignored => false,
        }
    }

    /// See [`Dictation::silence_elapsed`].
    pub fn dictation_silence_elapsed(&mut self, session: u64) -> bool {
        self.dictation.silence_elapsed(session)
    }

    fn transition(&mut self, target: SubmissionStatus) {
        tracing::debug!("Submission state: {} -> {}", self.status, target);
        self.status = target;
    }
}

/// Submit the draft and wait for the archive's answer.
///
/// Returns false if the submission was a no-op.
pub async fn ask_archive(session: &mut ChatSession, client: &dyn ArchiveClient) -> bool {
    let Some(query) = session.submit() else {
        return false;
    };
    let result = client.ask(&query).await;
    session.resolve(result);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_records_user_message_and_pends() {
        let mut session = ChatSession::default();
        session.set_draft("Tell me about Go");
        assert_eq!(session.submit().as_deref(), Some("Tell me about Go"));

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Tell me about Go");
        assert_eq!(session.draft(), "");
        assert!(session.is_pending());
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut session = ChatSession::default();
        session.set_draft("   ");
        assert!(session.submit().is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert_eq!(session.draft(), "   ");
    }

    #[test]
    fn test_pending_blocks_submit() {
        let mut session = ChatSession::default();
        session.set_draft("one");
        session.submit();
        session.set_draft("two");
        assert!(session.submit().is_none());
        assert!(session.submit().is_none());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.draft(), "two");
    }

    #[test]
    fn test_failure_then_recovery() {
        let mut session = ChatSession::default();
        session.set_draft("one");
        session.submit();
        session.resolve(Err(ArchiveError::transport("refused")));
        assert_eq!(session.status(), SubmissionStatus::Failed);
        assert_eq!(session.error(), Some(CONNECTION_ERROR));
        assert_eq!(session.messages().len(), 2);

        session.set_draft("two");
        session.submit();
        assert_eq!(session.error(), None);
        session.resolve(Ok(Message::assistant("answer")));
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert_eq!(session.messages().last().unwrap().content, "answer");
    }

    #[test]
    fn test_dictation_blocked_while_pending() {
        let mut session = ChatSession::default();
        session.set_draft("q");
        session.submit();
        assert_eq!(session.toggle_dictation(), DictationCommand::Ignored);
    }

    #[test]
    fn test_dictation_overwrites_draft() {
        let mut session = ChatSession::default();
        session.set_draft("typed");
        let DictationCommand::Start { session: id, .. } = session.toggle_dictation() else {
            panic!("dictation did not start");
        };
        assert!(!session.apply_speech_event(id, SpeechEvent::Interim("hel".into())));
        assert_eq!(session.draft(), "hel");
        assert!(session.apply_speech_event(id, SpeechEvent::Final("hello".into())));
        assert_eq!(session.draft(), "hello");
        assert_eq!(session.dictation_state(), DictationState::Idle);
    }

    #[test]
    fn test_reply_with_user_role_is_recorded_as_assistant() {
        let mut session = ChatSession::default();
        session.set_draft("q");
        session.submit();
        session.resolve(Ok(Message::user("echoed")));

        let last = session.messages().last().cloned().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "echoed");
        assert_eq!(session.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_is_dictating_tracks_live_session() {
        let mut session = ChatSession::default();
        let DictationCommand::Start { session: first, .. } = session.toggle_dictation() else {
            panic!("dictation did not start");
        };
        assert!(session.is_dictating(first));

        // Manual stop ends the session even though the recognizer may keep sending
        assert_eq!(session.toggle_dictation(), DictationCommand::Stop);
        assert!(!session.is_dictating(first));

        let DictationCommand::Start { session: second, .. } = session.toggle_dictation() else {
            panic!("dictation did not restart");
        };
        assert!(session.is_dictating(second));
        assert!(!session.is_dictating(first));
    }
}

//! End-to-end submission lifecycle against a scripted archive.

use async_trait::async_trait;
use gopher_archive::archive::{ArchiveClient, ArchiveError, FALLBACK_RESPONSE};
use gopher_archive::session::{ask_archive, ChatSession, SubmissionStatus, CONNECTION_ERROR};
use gopher_archive::types::{Message, Role};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned outcomes and records every query it receives.
#[derive(Default)]
struct ScriptedArchive {
    replies: Mutex<VecDeque<Result<String, String>>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedArchive {
    fn new(replies: Vec<Result<&str, &str>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArchiveClient for ScriptedArchive {
    async fn ask(&self, query: &str) -> Result<Message, ArchiveError> {
        self.queries.lock().unwrap().push(query.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(Message::assistant(reply)),
            Some(Err(detail)) => Err(ArchiveError::transport(detail)),
            None => Ok(Message::assistant(FALLBACK_RESPONSE)),
        }
    }
}

fn roles(session: &ChatSession) -> Vec<Role> {
    session.messages().iter().map(|m| m.role).collect()
}

#[tokio::test]
async fn test_successful_exchange() {
    let archive = ScriptedArchive::new(vec![Ok("X")]);
    let mut session = ChatSession::default();
    session.set_draft("What is X?");

    assert!(ask_archive(&mut session, &archive).await);

    assert_eq!(archive.queries(), vec!["What is X?"]);
    assert_eq!(roles(&session), vec![Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(session.messages()[2].content, "X");
    assert_eq!(session.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_blank_draft_sends_nothing() {
    let archive = ScriptedArchive::new(vec![]);
    let mut session = ChatSession::default();
    session.set_draft("  \n ");

    assert!(!ask_archive(&mut session, &archive).await);
    assert!(archive.queries().is_empty());
    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn test_user_message_recorded_before_reply() {
    let mut session = ChatSession::default();
    session.set_draft("Hi");
    let query = session.submit().unwrap();

    // Reply not yet resolved
    assert_eq!(roles(&session), vec![Role::Assistant, Role::User]);

    // Further submits while pending are refused
    session.set_draft("again");
    assert!(session.submit().is_none());
    assert_eq!(session.messages().len(), 2);

    let archive = ScriptedArchive::new(vec![Ok("Hello")]);
    session.resolve(archive.ask(&query).await);
    assert_eq!(archive.queries(), vec!["Hi"]);
    assert_eq!(session.messages().len(), 3);
}

#[tokio::test]
async fn test_failure_appends_nothing_and_next_submit_clears_error() {
    let archive = ScriptedArchive::new(vec![Err("connection refused"), Ok("back online")]);
    let mut session = ChatSession::default();

    session.set_draft("first");
    ask_archive(&mut session, &archive).await;
    assert_eq!(roles(&session), vec![Role::Assistant, Role::User]);
    assert_eq!(session.error(), Some(CONNECTION_ERROR));

    session.set_draft("second");
    ask_archive(&mut session, &archive).await;
    assert_eq!(session.error(), None);
    assert_eq!(
        roles(&session),
        vec![Role::Assistant, Role::User, Role::User, Role::Assistant]
    );
    assert_eq!(session.messages()[3].content, "back online");
}

#[tokio::test]
async fn test_fallback_reply_is_appended() {
    let archive = ScriptedArchive::new(vec![]);
    let mut session = ChatSession::default();
    session.set_draft("anything");
    ask_archive(&mut session, &archive).await;
    assert_eq!(session.messages()[2].content, FALLBACK_RESPONSE);
}

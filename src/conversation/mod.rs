//! Conversation store
//!
//! Append-only, insertion-ordered record of the current chat. Holds the
//! seeded welcome message from construction onwards; nothing is ever
//! removed, reordered or edited.

use crate::types::Message;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable view of the conversation at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot(Arc<[Message]>);

impl Deref for Snapshot {
    type Target = [Message];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct ConversationStore {
    messages: Snapshot,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    /// New store seeded with the welcome message.
    pub fn new() -> Self {
        Self::seeded_with(Message::welcome())
    }

    pub fn seeded_with(welcome: Message) -> Self {
        Self {
            messages: Snapshot(Arc::from(vec![welcome])),
        }
    }

    pub fn append(&mut self, message: Message) {
        tracing::debug!(role = ?message.role, len = message.content.len(), "Appending message");
        let mut next = Vec::with_capacity(self.messages.len() + 1);
        next.extend_from_slice(&self.messages);
        next.push(message);
        self.messages = Snapshot(Arc::from(next));
    }

    /// Snapshot in insertion order. Later appends don't affect it.
    pub fn all(&self) -> Snapshot {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True once anything beyond the welcome message has been recorded.
    pub fn has_user_interaction(&self) -> bool {
        self.messages.len() > 1
    }
}

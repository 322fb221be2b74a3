//! Message types
//!
//! Defines chat message structures and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text of the assistant message every conversation starts with.
pub const WELCOME_MESSAGE: &str = "Welcome to the Gopher Archive! I'm your learning assistant. \
Ask me about any topic and I'll search the archive for explanations, summaries and study notes. \
You can type your question or use the microphone to dictate it, and when you're done you can \
copy the conversation or download it as a PDF.";

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from the user
    User,
    /// Message from the archive assistant
    Assistant,
}

impl Role {
    /// Label used for this role in exported transcripts.
    pub fn transcript_label(&self) -> &'static str {
        match self {
            Role::User => "YOU",
            Role::Assistant => "ARCHIVE",
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Render key, never exported
    pub id: Uuid,
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub content: String,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with the current time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self::at(role, content, Utc::now())
    }

    /// Create a message with an explicit timestamp
    pub fn at(role: Role, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// The seeded assistant greeting.
    pub fn welcome() -> Self {
        Self::assistant(WELCOME_MESSAGE)
    }
}

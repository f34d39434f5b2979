//! Message types for the chat surface.

use serde::{Deserialize, Serialize};

use crate::{Id, Timestamp, new_id, now};

/// Side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One displayed conversational turn.
///
/// Messages are immutable once created; the displayed list is append-only
/// and strictly ordered by creation instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Id,
    pub sender: Sender,
    pub text: String,
    pub timestamp: Timestamp,
}

impl Message {
    /// Create a new user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            sender: Sender::User,
            text: text.into(),
            timestamp: now(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: now(),
        }
    }

    /// Wall-clock form shown next to the message bubble.
    pub fn display_time(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

//! Remembered turn records, distinct from displayed messages.

use kindbite_types::{Timestamp, now};
use serde::{Deserialize, Serialize};

/// Role of a remembered turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryRole {
    User,
    Assistant,
}

/// One remembered conversational turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub role: MemoryRole,
    pub content: String,
    pub timestamp: Timestamp,
}

impl MemoryEntry {
    /// Record a user turn. Callers store the normalized (lowercased) text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MemoryRole::User,
            content: content.into(),
            timestamp: now(),
        }
    }

    /// Record an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MemoryRole::Assistant,
            content: content.into(),
            timestamp: now(),
        }
    }
}

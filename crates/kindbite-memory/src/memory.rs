//! Count-bounded FIFO log of recent turns.

use std::collections::VecDeque;

use tracing::trace;

use crate::entry::MemoryEntry;

/// Default number of turns retained.
pub const DEFAULT_MEMORY_LIMIT: usize = 20;

/// How familiar the current conversation feels, judged by retained turn
/// count: fewer than 3 entries reads as new, more than 5 as returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Familiarity {
    New,
    Engaged,
    Returning,
}

impl Familiarity {
    pub fn is_new(self) -> bool {
        matches!(self, Familiarity::New)
    }

    pub fn is_returning(self) -> bool {
        matches!(self, Familiarity::Returning)
    }
}

/// Append-only log of recent turns, bounded by count.
///
/// When the bound is exceeded the oldest entries are dropped first. There
/// is no time-based expiry and no persistence across sessions.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    entries: VecDeque<MemoryEntry>,
    limit: usize,
}

impl ConversationMemory {
    /// Create a memory with the default bound.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MEMORY_LIMIT)
    }

    /// Create a memory bounded at `limit` entries (minimum 1).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Append one entry, dropping from the front while over the bound.
    pub fn push(&mut self, entry: MemoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
            trace!(limit = self.limit, "dropped oldest memory entry");
        }
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &MemoryEntry> {
        self.entries
            .iter()
            .skip(self.entries.len().saturating_sub(n))
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Familiarity signal derived from the current entry count.
    pub fn familiarity(&self) -> Familiarity {
        match self.entries.len() {
            n if n < 3 => Familiarity::New,
            n if n > 5 => Familiarity::Returning,
            _ => Familiarity::Engaged,
        }
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new()
    }
}

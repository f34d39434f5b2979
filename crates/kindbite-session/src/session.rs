//! The chat session controller.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use kindbite_engine::{ListingStats, normalize, welcome_message};
use kindbite_memory::{ConversationMemory, MemoryEntry};
use kindbite_types::{FoodListing, Message};

use crate::backend::{AssistantBackend, FALLBACK_REPLY, RuleBackend, TurnContext};
use crate::clock::{Clock, SystemClock};
use crate::config::SessionConfig;

/// Lifecycle state of a chat session.
///
/// `Ready` and `Thinking` alternate for the session's lifetime; a closed
/// session stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Ready,
    Thinking,
    Closed,
}

/// One chat surface's conversation state.
///
/// Construct one per surface (modal, tab, view); sessions never share
/// memory or messages. All mutation goes through `&mut self`, so there is
/// no concurrent writer by construction; a second submission while the
/// session is `Thinking` is rejected by the state guard, not queued.
pub struct ChatSession {
    state: SessionState,
    messages: Vec<Message>,
    memory: ConversationMemory,
    listings: Vec<FoodListing>,
    backend: Arc<dyn AssistantBackend>,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
}

impl ChatSession {
    /// Create a session with the local rule backend and the system clock.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::Idle,
            messages: Vec::new(),
            memory: ConversationMemory::with_limit(config.memory_limit),
            listings: Vec::new(),
            backend: Arc::new(RuleBackend),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Swap in a different backend (e.g. a network-backed one).
    pub fn with_backend(mut self, backend: Arc<dyn AssistantBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Swap in a different clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start with an initial listing snapshot.
    pub fn with_listings(mut self, listings: Vec<FoodListing>) -> Self {
        self.listings = listings;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The displayed message list, in creation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The current listing snapshot.
    pub fn listings(&self) -> &[FoodListing] {
        &self.listings
    }

    /// The bounded conversation memory.
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// Replace the visible listing snapshot between turns.
    pub fn update_listings(&mut self, listings: Vec<FoodListing>) {
        if self.state == SessionState::Closed {
            return;
        }
        self.listings = listings;
    }

    /// Open the session, emitting the welcome message.
    ///
    /// Idempotent: a session that already greeted (or is mid-turn) is left
    /// untouched, and a closed session stays closed.
    pub fn open(&mut self) {
        if self.state != SessionState::Idle || !self.messages.is_empty() {
            debug!(state = ?self.state, "open ignored, session already active");
            return;
        }
        let welcome = welcome_message(self.clock.time_of_day());
        self.messages.push(Message::assistant(welcome));
        self.state = SessionState::Ready;
        debug!("session opened");
    }

    /// Submit one user turn and return the assistant's reply message.
    ///
    /// Returns `None` without any state change when the trimmed text is
    /// empty or the session is not `Ready`. Otherwise the user message is
    /// appended immediately, the session thinks for a bounded random
    /// pause, and the backend's reply (or the fallback, if it fails) is
    /// appended and returned.
    pub async fn submit(&mut self, text: &str) -> Option<Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("ignoring empty submission");
            return None;
        }
        if self.state != SessionState::Ready {
            debug!(state = ?self.state, "ignoring submission outside Ready");
            return None;
        }

        self.messages.push(Message::user(trimmed));
        self.state = SessionState::Thinking;

        // Familiarity is judged on the history before this turn lands;
        // the normalized user text is then remembered exactly once.
        let familiarity = self.memory.familiarity();
        let normalized = normalize(trimmed);
        self.memory.push(MemoryEntry::user(normalized.clone()));

        let ctx = TurnContext {
            stats: ListingStats::from_listings(&self.listings),
            time_of_day: self.clock.time_of_day(),
            familiarity,
        };

        if let Some((min, max)) = self.config.thinking_delay {
            let millis = rand::thread_rng()
                .gen_range(min.as_millis() as u64..=max.as_millis() as u64);
            tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
        }

        let backend = Arc::clone(&self.backend);
        let reply = match backend.reply(&normalized, &ctx).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(
                    backend = backend.name(),
                    error = %err,
                    "backend failed, falling back to static reply"
                );
                FALLBACK_REPLY.to_string()
            }
        };

        self.memory.push(MemoryEntry::assistant(reply.clone()));
        let message = Message::assistant(reply);
        self.messages.push(message.clone());
        self.state = SessionState::Ready;
        Some(message)
    }

    /// Close the session. Further operations are no-ops; state is
    /// discarded with the value.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
        debug!("session closed");
    }
}

//! Session configuration.

use std::time::Duration;

use kindbite_memory::DEFAULT_MEMORY_LIMIT;

/// Default bounds of the simulated thinking pause.
pub const DEFAULT_THINKING_DELAY: (Duration, Duration) =
    (Duration::from_millis(1000), Duration::from_millis(2500));

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of remembered turns.
    pub memory_limit: usize,

    /// Inclusive bounds for the simulated thinking pause before a reply.
    /// `None` replies immediately; the pause is UX pacing, not logic, so
    /// tests run with it off.
    pub thinking_delay: Option<(Duration, Duration)>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            memory_limit: DEFAULT_MEMORY_LIMIT,
            thinking_delay: Some(DEFAULT_THINKING_DELAY),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conversation memory bound.
    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = limit;
        self
    }

    /// Set the thinking pause bounds. `max` is clamped up to `min`.
    pub fn with_thinking_delay(mut self, min: Duration, max: Duration) -> Self {
        self.thinking_delay = Some((min, max.max(min)));
        self
    }

    /// Reply immediately, with no simulated pause.
    pub fn without_thinking_delay(mut self) -> Self {
        self.thinking_delay = None;
        self
    }
}

//! Chat session controller for the KindBite assistant.
//!
//! A [`ChatSession`] owns one chat surface's state: the displayed message
//! list, the bounded conversation memory, and the current listing
//! snapshot. It runs the turn loop (guard the input, append the user
//! message, pace with a bounded thinking pause, ask the backend for a
//! reply, append it) and never gets stuck: a failing backend degrades to
//! a static fallback message.
//!
//! Sessions are single-owner (`&mut self`) and never shared; two chat
//! surfaces mean two sessions with independent memories.

mod backend;
mod clock;
mod config;
mod error;
mod session;

pub use backend::{AssistantBackend, FALLBACK_REPLY, RuleBackend, TurnContext};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DEFAULT_THINKING_DELAY, SessionConfig};
pub use error::{Error, Result};
pub use session::{ChatSession, SessionState};

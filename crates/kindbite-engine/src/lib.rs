//! Rule-based intent classification and reply generation for KindBite.
//!
//! This crate is the deterministic core of the assistant: it turns one
//! user turn plus the currently visible food listings into one reply.
//!
//! ```text
//! user text ──► classify ──► IntentAnalysis ─┐
//!                                            ├──► generate ──► reply
//! listings ──► ListingStats ─────────────────┘
//! ```
//!
//! Every function here is pure and total: classification always yields a
//! well-formed analysis (defaulting to a general intent and neutral
//! emotion), and generation always yields a reply, degrading gracefully
//! when the listing collection is empty.

pub mod classify;
pub mod respond;
pub mod rules;
pub mod stats;

pub use classify::{Complexity, EmotionalState, Intent, IntentAnalysis, Urgency, classify, normalize};
pub use respond::{TimeOfDay, generate, welcome_message};
pub use rules::{Rule, first_match};
pub use stats::ListingStats;

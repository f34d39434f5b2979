//! Assistant backend boundary.
//!
//! One trait, two kinds of implementors: the local rule engine (total,
//! infallible) and anything network-backed a host application wires in
//! instead. The session controller treats every backend the same and maps
//! failures to [`FALLBACK_REPLY`], so a flaky remote model can never strand
//! a session mid-turn.

use async_trait::async_trait;
use tracing::debug;

use kindbite_engine::{ListingStats, TimeOfDay, classify, generate};
use kindbite_memory::Familiarity;

use crate::error::Result;

/// Static reply emitted in place of a failing backend's answer.
pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Per-turn context handed to the backend alongside the user's text.
#[derive(Debug, Clone)]
pub struct TurnContext {
    /// Statistics over the currently visible listings.
    pub stats: ListingStats,
    /// Bucket of the local hour at submission time.
    pub time_of_day: TimeOfDay,
    /// How familiar the conversation felt before this turn.
    pub familiarity: Familiarity,
}

/// Produces one assistant reply per user turn.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Generate a reply for the normalized user text.
    async fn reply(&self, text: &str, ctx: &TurnContext) -> Result<String>;

    /// Backend name for logging.
    fn name(&self) -> &'static str {
        "backend"
    }
}

/// The local rule engine: classify the turn, then template a reply from
/// the listing statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBackend;

#[async_trait]
impl AssistantBackend for RuleBackend {
    async fn reply(&self, text: &str, ctx: &TurnContext) -> Result<String> {
        let analysis = classify(text);
        debug!(
            intent = ?analysis.primary_intent,
            emotion = ?analysis.emotional_state,
            "generating rule-based reply"
        );
        Ok(generate(&analysis, &ctx.stats, ctx.time_of_day, ctx.familiarity))
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

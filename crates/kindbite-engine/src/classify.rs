//! Intent and emotion classification.
//!
//! Two independent ordered rule tables run over the normalized text: one
//! resolves the emotional state, one the topical intent. Both are total:
//! unmatched text falls back to [`EmotionalState::Neutral`] and
//! [`Intent::General`]. The emotional state dominates reply selection
//! downstream, which is why it is resolved as its own axis here instead of
//! being folded into the intent table.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::rules::{Rule, first_match};

/// Topical category of a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    FoodSearch,
    Reservation,
    Profile,
    Points,
    Help,
    AppInfo,
    Capabilities,
    Recommendation,
    DataQuery,
    FreeItems,
    Problem,
    General,
}

/// Coarse sentiment of a user turn. Takes precedence over [`Intent`] when
/// selecting a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    Frustrated,
    Urgent,
    SeekingHelp,
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// Structured analysis of a single user turn. Transient, recomputed per
/// turn, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub primary_intent: Intent,
    pub emotional_state: EmotionalState,
    pub complexity: Complexity,
    pub urgency: Urgency,
    pub is_question: bool,
    pub is_exclamation: bool,
    pub word_count: usize,
}

const FRUSTRATED_KEYWORDS: &[&str] = &[
    "frustrated", "angry", "mad", "upset", "annoyed", "irritated", "hate", "sucks", "terrible",
    "awful", "stupid", "dumb", "bad", "worst",
];

const URGENT_KEYWORDS: &[&str] = &[
    "urgent", "asap", "quick", "fast", "immediately", "now", "emergency", "hurry", "desperate",
    "critical",
];

const SEEKING_HELP_KEYWORDS: &[&str] = &[
    "help", "stuck", "confused", "lost", "overwhelmed", "scared", "worried", "nervous", "anxious",
];

const POSITIVE_KEYWORDS: &[&str] = &[
    "thank", "appreciate", "grateful", "cheers", "awesome", "great", "perfect", "excellent",
    "love", "amazing", "happy", "excited", "wonderful",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "bored", "tired", "exhausted", "drained", "sad", "depressed", "lonely", "down", "blue",
];

const CONJUNCTION_KEYWORDS: &[&str] = &[
    "and", "also", "plus", "additionally", "furthermore", "moreover",
];

static EMOTION_RULES: LazyLock<Vec<Rule<EmotionalState>>> = LazyLock::new(|| {
    vec![
        Rule::keywords(EmotionalState::Frustrated, FRUSTRATED_KEYWORDS),
        Rule::keywords(EmotionalState::Urgent, URGENT_KEYWORDS),
        Rule::keywords(EmotionalState::SeekingHelp, SEEKING_HELP_KEYWORDS)
            .with_pattern(r"don't\s*understand"),
        Rule::keywords(EmotionalState::Positive, POSITIVE_KEYWORDS),
        Rule::keywords(EmotionalState::Negative, NEGATIVE_KEYWORDS),
    ]
});

static INTENT_RULES: LazyLock<Vec<Rule<Intent>>> = LazyLock::new(|| {
    vec![
        // Greetings only count when the whole message is one.
        Rule::pattern(
            Intent::Greeting,
            r"^(hi|hello|hey|good\s*(morning|afternoon|evening)|greetings?|what's\s*up|howdy|sup)$",
        ),
        Rule::keywords(
            Intent::FoodSearch,
            &[
                "food", "eat", "hungry", "menu", "restaurant", "breakfast", "lunch", "dinner",
                "meal", "snack", "craving", "starving", "feed",
            ],
        )
        .with_pattern(r"what.*available|looking.*for"),
        Rule::keywords(
            Intent::Reservation,
            &[
                "reserve", "booking", "book", "pickup", "schedule", "order", "claim", "grab",
                "secure",
            ],
        ),
        Rule::keywords(
            Intent::Profile,
            &[
                "profile", "account", "settings", "edit", "update", "pfp", "picture", "avatar",
                "photo", "personal", "modify",
            ],
        )
        .with_pattern(r"my.*info|change.*info"),
        Rule::keywords(
            Intent::Points,
            &["point", "reward", "earn", "credit", "score", "level", "bonus"],
        ),
        Rule::keywords(
            Intent::Help,
            &[
                "help", "how", "what", "guide", "show", "explain", "stuck", "confused",
                "tutorial", "learn", "teach", "instruct",
            ],
        )
        .with_pattern(r"don't\s*understand"),
        Rule::keywords(
            Intent::AppInfo,
            &["app", "kindbite", "platform", "website", "service", "about"],
        )
        .with_pattern(r"what\s*is"),
        Rule::keywords(Intent::Capabilities, &["capabilities", "abilities"]).with_pattern(
            r"what\s*can\s*you\s*do|do\s*you\s*answer|any\s*other\s*questions|who\s*are\s*you|what\s*are\s*you|can\s*you\s*help",
        ),
        Rule::keywords(
            Intent::Recommendation,
            &[
                "best", "recommend", "suggest", "top", "favorite", "popular", "trending",
                "advice", "tip",
            ],
        )
        .with_pattern(r"what.*good|what.*should"),
        Rule::keywords(
            Intent::DataQuery,
            &[
                "count", "total", "number", "statistics", "stats", "data", "info", "amount",
                "quantity",
            ],
        )
        .with_pattern(r"how.*many"),
        Rule::keywords(Intent::FreeItems, &["free", "gratis", "complimentary"])
            .with_pattern(r"no.*cost|zero.*cost|without.*charge"),
        Rule::keywords(
            Intent::Problem,
            &[
                "problem", "issue", "error", "bug", "broken", "failed", "trouble", "stuck",
                "malfunction",
            ],
        )
        .with_pattern(r"not.*working"),
    ]
});

static URGENCY_RULES: LazyLock<Vec<Rule<Urgency>>> = LazyLock::new(|| {
    vec![
        Rule::keywords(Urgency::High, URGENT_KEYWORDS),
        Rule::keywords(Urgency::Medium, &["soon", "eventually", "later", "time", "schedule"])
            .with_pattern(r"when.*can"),
    ]
});

/// Trim and lowercase user text the way the rule tables expect it.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Classify one user turn.
///
/// Total over all input strings; blank input is the caller's problem (the
/// session controller rejects it before classification).
pub fn classify(text: &str) -> IntentAnalysis {
    let msg = normalize(text);
    let word_count = msg.split_whitespace().count();

    let emotional_state = first_match(&EMOTION_RULES, &msg, EmotionalState::Neutral);
    let primary_intent = first_match(&INTENT_RULES, &msg, Intent::General);
    let urgency = first_match(&URGENCY_RULES, &msg, Urgency::Low);

    let is_question = msg.contains('?');
    let is_exclamation = msg.contains('!');
    let complexity = if word_count > 8
        || is_question
        || CONJUNCTION_KEYWORDS.iter().any(|w| msg.contains(w))
    {
        Complexity::Complex
    } else {
        Complexity::Simple
    };

    trace!(?primary_intent, ?emotional_state, word_count, "classified turn");

    IntentAnalysis {
        primary_intent,
        emotional_state,
        complexity,
        urgency,
        is_question,
        is_exclamation,
        word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_only_matches_whole_message() {
        assert_eq!(classify("hi").primary_intent, Intent::Greeting);
        assert_eq!(classify("  Hello  ").primary_intent, Intent::Greeting);
        assert_eq!(classify("good morning").primary_intent, Intent::Greeting);
        // A greeting followed by a real question falls through.
        assert_eq!(
            classify("hello, how do I reserve food?").primary_intent,
            Intent::FoodSearch
        );
    }

    #[test]
    fn test_intent_samples() {
        assert_eq!(classify("what food is available?").primary_intent, Intent::FoodSearch);
        assert_eq!(classify("i want to reserve something").primary_intent, Intent::Reservation);
        assert_eq!(classify("change my profile picture").primary_intent, Intent::Profile);
        assert_eq!(classify("where do i see my reward points").primary_intent, Intent::Points);
        assert_eq!(classify("explain this to me").primary_intent, Intent::Help);
        assert_eq!(classify("tell me more kindbite things").primary_intent, Intent::AppInfo);
        assert_eq!(classify("list your capabilities").primary_intent, Intent::Capabilities);
        assert_eq!(classify("recommend me a dish").primary_intent, Intent::Recommendation);
        assert_eq!(classify("give me the statistics").primary_intent, Intent::DataQuery);
        assert_eq!(classify("anything free today").primary_intent, Intent::FreeItems);
        assert_eq!(classify("there is a bug in my reservations page").primary_intent, Intent::Problem);
        assert_eq!(classify("xyzzy").primary_intent, Intent::General);
    }

    #[test]
    fn test_intent_table_order_breaks_ties() {
        // Matches both food_search ("food") and reservation ("reserve");
        // the earlier table entry wins.
        assert_eq!(classify("reserve food").primary_intent, Intent::FoodSearch);
    }

    #[test]
    fn test_emotion_samples() {
        assert_eq!(classify("this is so frustrating, i hate it").emotional_state, EmotionalState::Frustrated);
        assert_eq!(classify("i need this asap").emotional_state, EmotionalState::Urgent);
        assert_eq!(classify("i'm totally confused").emotional_state, EmotionalState::SeekingHelp);
        assert_eq!(classify("thanks, this is awesome").emotional_state, EmotionalState::Positive);
        assert_eq!(classify("feeling sad and lonely").emotional_state, EmotionalState::Negative);
        assert_eq!(classify("show me the menu").emotional_state, EmotionalState::Neutral);
    }

    #[test]
    fn test_emotion_table_order_breaks_ties() {
        // Matches both frustrated ("angry") and urgent ("now").
        assert_eq!(classify("i'm angry, fix it now").emotional_state, EmotionalState::Frustrated);
    }

    #[test]
    fn test_complexity_rules() {
        assert_eq!(classify("menu").complexity, Complexity::Simple);
        assert_eq!(classify("menu?").complexity, Complexity::Complex);
        assert_eq!(classify("pizza and pasta").complexity, Complexity::Complex);
        assert_eq!(
            classify("one two three four five six seven eight nine").complexity,
            Complexity::Complex
        );
    }

    #[test]
    fn test_urgency_levels() {
        assert_eq!(classify("i need it immediately").urgency, Urgency::High);
        assert_eq!(classify("maybe later this week").urgency, Urgency::Medium);
        assert_eq!(classify("just browsing").urgency, Urgency::Low);
    }

    #[test]
    fn test_question_and_exclamation_flags() {
        let analysis = classify("really?!");
        assert!(analysis.is_question);
        assert!(analysis.is_exclamation);
    }

    #[test]
    fn test_total_over_arbitrary_input() {
        let inputs = [
            "",
            "   ",
            "?",
            "!!!",
            "1234567890",
            "@#$%^&*()",
            "a very long sentence that keeps going and going and going without a clear point",
            "ÅÖÜ ünïcode",
        ];
        for input in inputs {
            let analysis = classify(input);
            // Falls back to well-formed defaults instead of failing.
            assert!(matches!(
                analysis.urgency,
                Urgency::High | Urgency::Medium | Urgency::Low
            ));
        }
    }
}

//! Ordered first-match rule tables.
//!
//! Classification is a cascade of `(patterns, tag)` pairs evaluated in
//! table order; the first matching rule wins, regardless of how many later
//! rules would also match. Keeping the tables data-driven makes the
//! priority order explicit and lets each rule be tested on its own.

use regex::Regex;

/// A single classification rule: a set of patterns mapped to a tag.
///
/// A rule matches when any keyword occurs as a substring of the normalized
/// text, or when the optional pattern matches. Patterns carry the phrase
/// tests substrings cannot express (anchors, gaps).
pub struct Rule<T: Copy> {
    tag: T,
    keywords: &'static [&'static str],
    pattern: Option<Regex>,
}

impl<T: Copy> Rule<T> {
    /// Rule matching on any of the given substrings.
    pub fn keywords(tag: T, keywords: &'static [&'static str]) -> Self {
        Self {
            tag,
            keywords,
            pattern: None,
        }
    }

    /// Rule matching on a regex pattern alone.
    pub fn pattern(tag: T, pattern: &str) -> Self {
        Self::keywords(tag, &[]).with_pattern(pattern)
    }

    /// Add a regex pattern to this rule.
    ///
    /// Panics on an invalid pattern; every pattern in this crate is a
    /// hard-coded literal validated by the table tests below.
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(Regex::new(pattern).expect("hard-coded rule pattern"));
        self
    }

    /// The tag produced when this rule matches.
    pub fn tag(&self) -> T {
        self.tag
    }

    /// Whether this rule matches the normalized text.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
            || self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }
}

/// Evaluate rules in order against the normalized text; first match wins,
/// falling back to `default` when nothing matches.
pub fn first_match<T: Copy>(rules: &[Rule<T>], text: &str, default: T) -> T {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.tag())
        .unwrap_or(default)
}

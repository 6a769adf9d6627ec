//! Scripted support assistant.
//!
//! The chat widget's "AI" is a static lookup: lower-case the message,
//! scan five keyword groups in priority order, reply with the first
//! group's canned response. No conversation memory, no scoring; a
//! message matching two groups gets the higher-priority reply.

use serde::{Deserialize, Serialize};

/// Greeting shown when the chat opens.
pub const GREETING: &str =
    "Hi! I'm the MotoMart assistant. How can I help you with your motorcycle needs today?";

/// Reply when no keyword group matches.
pub const DEFAULT_RESPONSE: &str = "I understand you're interested in that. Our team can provide \
     more detailed information. You can also browse our catalog or check specific sections for \
     more details.";

/// Artificial typing delay before the reply appears, milliseconds.
pub const TYPING_DELAY_MS: u64 = 1_500;

/// The topics the assistant can answer, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Recommendation,
    Price,
    SpareParts,
    Financing,
    Warranty,
}

impl Topic {
    /// All topics, highest match priority first.
    pub const ALL: [Topic; 5] = [
        Topic::Recommendation,
        Topic::Price,
        Topic::SpareParts,
        Topic::Financing,
        Topic::Warranty,
    ];

    /// Keywords whose presence (as a substring) selects this topic.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Recommendation => &["recommend", "suggest", "best"],
            Topic::Price => &["price", "cost", "\u{20b9}"],
            Topic::SpareParts => &["spare", "part", "component"],
            Topic::Financing => &["emi", "loan", "finance"],
            Topic::Warranty => &["warranty", "guarantee", "service"],
        }
    }

    /// Canned reply for this topic.
    pub fn response(&self) -> &'static str {
        match self {
            Topic::Recommendation => {
                "Based on your preferences, I'd recommend checking out our featured bikes. Are \
                 you looking for a specific type like sport bikes, cruisers, or electric bikes?"
            }
            Topic::Price => {
                "Our bikes range from \u{20b9}50,000 for entry-level models to \u{20b9}5,00,000 \
                 for premium motorcycles. What's your budget range?"
            }
            Topic::SpareParts => {
                "We have a comprehensive spare parts section with engine components, silencers, \
                 brakes, and more. Which specific part are you looking for?"
            }
            Topic::Financing => {
                "You can calculate EMI options using our built-in calculator. Most banks offer \
                 financing from 6 months to 5 years."
            }
            Topic::Warranty => {
                "All our bikes come with manufacturer warranty. Check our warranty support \
                 section for detailed information."
            }
        }
    }
}

/// Pick the first topic whose keyword appears in the message.
///
/// Matching is case-insensitive substring containment over the whole
/// message, so "PartS" matches the spare-parts group.
pub fn classify(message: &str) -> Option<Topic> {
    let message = message.to_lowercase();
    Topic::ALL
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|kw| message.contains(kw)))
}

/// The assistant's reply to a message.
pub fn respond(message: &str) -> &'static str {
    match classify(message) {
        Some(topic) => topic.response(),
        None => DEFAULT_RESPONSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_topic_matches_its_keywords() {
        assert_eq!(classify("can you suggest a commuter"), Some(Topic::Recommendation));
        assert_eq!(classify("what does it cost"), Some(Topic::Price));
        assert_eq!(classify("need a brake component"), Some(Topic::SpareParts));
        assert_eq!(classify("bike loan options?"), Some(Topic::Financing));
        assert_eq!(classify("is service included"), Some(Topic::Warranty));
    }

    #[test]
    fn test_rupee_sign_selects_price() {
        assert_eq!(classify("anything under \u{20b9}2,00,000?"), Some(Topic::Price));
    }

    #[test]
    fn test_priority_order() {
        // "best" (recommendation) outranks "price".
        assert_eq!(
            classify("best price on a duke"),
            Some(Topic::Recommendation)
        );
        // "cost" (price) outranks "emi".
        assert_eq!(classify("emi cost per month"), Some(Topic::Price));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("WARRANTY?"), Some(Topic::Warranty));
        assert_eq!(classify("Spare Parts"), Some(Topic::SpareParts));
    }

    #[test]
    fn test_substring_match() {
        // "departure" contains "part".
        assert_eq!(classify("departure time"), Some(Topic::SpareParts));
    }

    #[test]
    fn test_default_response() {
        assert_eq!(classify("hello there"), None);
        assert_eq!(respond("hello there"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_respond_returns_topic_response() {
        assert_eq!(respond("recommend me a bike"), Topic::Recommendation.response());
    }
}

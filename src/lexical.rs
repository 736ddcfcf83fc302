//! Mood classification and keyword extraction
//!
//! Pure text analysis over the day description. Mood detection counts
//! substring containment of fixed indicator lists; keyword extraction
//! tokenizes, strips stop-words, and deduplicates preserving order. The
//! two intentionally use different matching strategies (containment vs
//! whole-token), matching long-observed behavior.

use crate::models::Mood;
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "won", "success", "finished", "completed", "amazing", "love", "fun",
    "excited", "celebrate", "finally", "perfect", "awesome", "best",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "tired",
    "exhausted",
    "failed",
    "boring",
    "stuck",
    "frustrated",
    "annoying",
    "stress",
    "anxiety",
    "sad",
    "terrible",
    "awful",
    "long",
    "hard",
    "difficult",
];

/// Common English function words excluded from keyword extraction.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old",
    "see", "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
    "that", "with", "have", "this", "will", "your", "from", "they", "know", "want", "been",
    "much", "some", "time", "very", "when", "come", "here", "just", "like", "many", "over",
    "such", "take", "than", "them", "well", "were", "what", "then", "there", "these", "those",
    "would", "could", "should", "about", "after", "again", "because", "before", "being", "below",
    "between", "both", "during", "each", "into", "more", "most", "other", "same", "under",
    "until", "while", "where", "which", "whom", "doing", "down", "further", "once",
    "only", "own", "off", "ours", "against", "above", "their", "theirs", "through", "having",
    "does", "itself", "himself", "herself", "myself", "yourself", "ourselves", "themselves",
    "few", "nor", "why", "yours", "hers", "also", "got", "went", "going", "really",
    "still", "even", "made", "make", "back", "today", "yesterday", "tonight", "morning",
    "evening", "afternoon", "something", "anything", "everything", "nothing", "someone",
    "anyone", "everyone", "lot", "lots", "bit", "thing", "things", "around", "though",
    "although", "however", "maybe", "quite", "pretty", "kind", "sort",
];

/// Classify the overall mood of `text`.
///
/// Counts how many positive and negative indicator words appear as
/// substrings of the lower-cased text. Ties (including zero/zero)
/// classify as neutral.
pub fn detect_mood(text: &str) -> Mood {
    let lower = text.to_lowercase();

    let positive_count = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let negative_count = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    if positive_count > negative_count {
        Mood::Positive
    } else if negative_count > positive_count {
        Mood::Negative
    } else {
        Mood::Neutral
    }
}

/// Extract distinct lowercase keywords from `text` in first-occurrence order.
///
/// Non-alphabetic characters act as separators; tokens of length <= 2 and
/// stop-words are dropped. An empty result is a valid outcome.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut keywords = Vec::new();

    for token in cleaned.split_whitespace() {
        if token.len() <= 2 || STOP_WORDS.contains(&token) {
            continue;
        }
        if seen.insert(token) {
            keywords.push(token.to_string());
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mood_positive() {
        assert_eq!(
            detect_mood("Finally finished the big project, pizza to celebrate!"),
            Mood::Positive
        );
    }

    #[test]
    fn test_detect_mood_negative() {
        assert_eq!(
            detect_mood("Long day, tired and frustrated with everything"),
            Mood::Negative
        );
    }

    #[test]
    fn test_detect_mood_neutral_on_no_indicators() {
        assert_eq!(detect_mood("Went to the store and bought milk"), Mood::Neutral);
    }

    #[test]
    fn test_detect_mood_neutral_on_tie() {
        // One positive ("great"), one negative ("tired").
        assert_eq!(detect_mood("Great morning but tired now"), Mood::Neutral);
    }

    #[test]
    fn test_detect_mood_monotonic_in_counts() {
        // Three positive indicators, zero negative.
        assert_eq!(
            detect_mood("good, great, happy"),
            Mood::Positive
        );
    }

    #[test]
    fn test_detect_mood_uses_substring_containment() {
        // "badminton" contains the indicator "bad". Observed behavior,
        // preserved intentionally.
        assert_eq!(detect_mood("played badminton"), Mood::Negative);
    }

    #[test]
    fn test_extract_keywords_order_and_dedup() {
        let keywords =
            extract_keywords("The quick brown fox jumps over the lazy dog, the fox runs");
        assert_eq!(
            keywords,
            vec!["quick", "brown", "fox", "jumps", "lazy", "dog", "runs"]
        );
    }

    #[test]
    fn test_extract_keywords_drops_short_tokens() {
        let keywords = extract_keywords("I am ok at it");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_extract_keywords_strips_punctuation_and_digits() {
        let keywords = extract_keywords("pizza!!! party123 @midnight");
        assert_eq!(keywords, vec!["pizza", "party", "midnight"]);
    }

    #[test]
    fn test_extract_keywords_empty_input_is_valid() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("a an to of 42 !!").is_empty());
    }

    #[test]
    fn test_extract_keywords_no_stop_words() {
        for kw in extract_keywords("because there should never be any stop words here") {
            assert!(!STOP_WORDS.contains(&kw.as_str()), "stop-word leaked: {}", kw);
        }
    }
}

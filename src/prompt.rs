//! Image prompt construction
//!
//! Composes a natural-language prompt for the generative-image providers
//! from the detected mood, extracted keywords, and a few style pools. The
//! prompt is consumed immediately by the provider chain and never stored.

use crate::models::Mood;
use rand::Rng;

const STYLES: &[&str] = &[
    "abstract art",
    "oil painting",
    "digital art",
    "photography",
    "illustration",
    "surrealism",
];

const COMPOSITIONS: &[&str] = &[
    "asymmetrical, subject off-center",
    "centered, symmetrical balance",
    "wide negative space",
    "close-up with shallow depth",
    "layered depth, soft horizon",
];

/// Constraints every prompt ends with, regardless of subject matter.
const CONSTRAINTS: &str = "album cover, artistic, beautiful composition, no text, no letters, square format";

// Keeps the full prompt comfortably under the length cap.
const MAX_SUBJECT_LEN: usize = 100;

fn palette_phrase(mood: Mood) -> &'static str {
    match mood {
        Mood::Positive => "warm sunrise golden hour vibrant",
        Mood::Negative => "moody rain blue twilight melancholic",
        Mood::Neutral => "minimalist urban muted calm",
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Build the image prompt for a description with the given mood and keywords.
///
/// Up to the first three keywords become the subject; when none exist the
/// raw description stands in, truncated. Style and composition are random,
/// the palette phrase is keyed by mood, and the generation constraints are
/// always appended last.
pub fn build_image_prompt(
    mood: Mood,
    keywords: &[String],
    description: &str,
    rng: &mut impl Rng,
) -> String {
    let style = STYLES[rng.gen_range(0..STYLES.len())];
    let composition = COMPOSITIONS[rng.gen_range(0..COMPOSITIONS.len())];

    let subject = if keywords.is_empty() {
        truncate_chars(description.trim(), MAX_SUBJECT_LEN)
    } else {
        keywords
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{}, {}, {}, evoking {}, {}",
        style,
        palette_phrase(mood),
        composition,
        subject,
        CONSTRAINTS
    )
}

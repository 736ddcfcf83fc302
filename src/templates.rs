//! Template-driven album text synthesis
//!
//! Fixed word pools plus template functions that compose extracted keywords
//! and mood into an album title, artist name, track list, and genre. All
//! random selection goes through an injected [`Rng`] so tests can substitute
//! a seeded generator.

use crate::models::Mood;
use rand::Rng;
use std::collections::HashSet;

/// Number of tracks on every generated album.
pub const TRACK_COUNT: usize = 5;

const GENRES: &[&str] = &[
    "Alternative",
    "Indie Rock",
    "Electronic",
    "Dream Pop",
    "Lo-Fi",
    "Synthwave",
    "Post-Rock",
    "Ambient",
    "Shoegaze",
    "Chillwave",
    "Art Pop",
    "Neo-Soul",
    "Trip-Hop",
    "Darkwave",
    "Bedroom Pop",
];

const BAND_PREFIXES: &[&str] = &[
    "The", "Young", "Modern", "Electric", "Digital", "Midnight", "Lost", "Wild", "Silent", "Pale",
    "Dark", "Bright",
];

const BAND_NOUNS: &[&str] = &[
    "Daydream",
    "Satellite",
    "Phantom",
    "Reverie",
    "Mirage",
    "Paradox",
    "Cascade",
    "Vertigo",
    "Aurora",
    "Nova",
    "Coast",
    "Harbor",
    "Weather",
    "Radio",
    "Cinema",
    "Arcade",
];

const BAND_SUFFIXES: &[&str] = &[
    "Collective",
    "Theory",
    "Society",
    "Club",
    "Experience",
    "Movement",
    "Project",
    "Assembly",
    "Orchestra",
    "Ensemble",
];

// Fallback album titles for descriptions that yield no keywords.
const POSITIVE_FALLBACK_TITLES: &[&str] = &[
    "Golden Hours",
    "Radiant Days",
    "Electric Light",
    "Brilliant Waves",
    "Infinite Summer",
];

const NEGATIVE_FALLBACK_TITLES: &[&str] = &[
    "Fading Signals",
    "Hollow Hours",
    "Grey Weather",
    "Static Nights",
    "Empty Rooms",
];

const NEUTRAL_FALLBACK_TITLES: &[&str] = &[
    "Parallel Lines",
    "Analog Dreams",
    "Midnight Chrome",
    "Quiet Stations",
    "Endless Roads",
];

type SingleTemplate = fn(&str) -> String;
type PairTemplate = fn(&str, &str) -> String;

const TITLE_TEMPLATES: &[SingleTemplate] = &[
    |k| k.to_string(),
    |k| format!("The {}", k),
    |k| format!("After {}", k),
    |k| format!("{} Season", k),
    |k| format!("{}, Vol. 1", k),
    |k| format!("Everything Is {}", k),
    |k| format!("{} Forever", k),
    |k| format!("Before the {}", k),
    |k| format!("{} in Motion", k),
    |k| format!("The Last {}", k),
];

const TITLE_PAIR_TEMPLATES: &[PairTemplate] = &[
    |a, b| format!("{} {}", a, b),
    |a, b| format!("{} & {}", a, b),
    |a, b| format!("{} for the {}", a, b),
];

const TRACK_TEMPLATES: &[SingleTemplate] = &[
    |k| k.to_string(),
    |k| format!("The {}", k),
    |k| format!("{} (Reprise)", k),
    |k| format!("Waiting for {}", k),
    |k| format!("{} Blues", k),
    |k| format!("Intro: {}", k),
    |k| format!("{} Again", k),
    |k| format!("Last {}", k),
    |k| format!("{} Song", k),
    |k| format!("Through the {}", k),
    |k| format!("{} at 2 AM", k),
];

// Bounded attempts at avoiding duplicate track titles. Not a hard guarantee.
const DUPLICATE_RETRY_LIMIT: usize = 6;

fn pick<'a>(pool: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// First letter uppercase, remainder lowercase.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn fallback_titles(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Positive => POSITIVE_FALLBACK_TITLES,
        Mood::Negative => NEGATIVE_FALLBACK_TITLES,
        Mood::Neutral => NEUTRAL_FALLBACK_TITLES,
    }
}

/// Generate an album title from `keywords`, or a mood-appropriate fallback
/// when no keywords were extracted.
pub fn generate_title(keywords: &[String], mood: Mood, rng: &mut impl Rng) -> String {
    if keywords.is_empty() {
        return pick(fallback_titles(mood), rng).to_string();
    }

    let pair_eligible = keywords.len() >= 2;
    let template_count = TITLE_TEMPLATES.len()
        + if pair_eligible {
            TITLE_PAIR_TEMPLATES.len()
        } else {
            0
        };
    let template_idx = rng.gen_range(0..template_count);

    let first_idx = rng.gen_range(0..keywords.len());
    let first = capitalize(&keywords[first_idx]);

    if template_idx < TITLE_TEMPLATES.len() {
        TITLE_TEMPLATES[template_idx](&first)
    } else {
        // A second, distinct keyword.
        let offset = 1 + rng.gen_range(0..keywords.len() - 1);
        let second = capitalize(&keywords[(first_idx + offset) % keywords.len()]);
        TITLE_PAIR_TEMPLATES[template_idx - TITLE_TEMPLATES.len()](&first, &second)
    }
}

/// Generate a band name, independent of the input text.
///
/// Weighted branches over prefix/noun/suffix pools. The weights are a
/// tunable, not a contract.
pub fn generate_artist(rng: &mut impl Rng) -> String {
    let r: f64 = rng.gen();
    if r < 0.3 {
        format!("{} {}", pick(BAND_PREFIXES, rng), pick(BAND_NOUNS, rng))
    } else if r < 0.5 {
        pick(BAND_NOUNS, rng).to_string()
    } else if r < 0.7 {
        format!("{} {}", pick(BAND_NOUNS, rng), pick(BAND_SUFFIXES, rng))
    } else if r < 0.85 {
        format!(
            "{} {} {}",
            pick(BAND_PREFIXES, rng),
            pick(BAND_NOUNS, rng),
            pick(BAND_SUFFIXES, rng)
        )
    } else {
        format!("{} & {}", pick(BAND_NOUNS, rng), pick(BAND_NOUNS, rng))
    }
}

fn generic_tracks(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i == 0 {
                "Intro".to_string()
            } else if i + 1 == count {
                "Outro".to_string()
            } else {
                match i {
                    1 => "Interlude".to_string(),
                    2 => "Untitled".to_string(),
                    _ => format!("Track {}", i + 1),
                }
            }
        })
        .collect()
}

fn pick_track_template(used: &HashSet<usize>, rng: &mut impl Rng) -> usize {
    let mut idx = rng.gen_range(0..TRACK_TEMPLATES.len());
    if used.len() < TRACK_TEMPLATES.len() {
        while used.contains(&idx) {
            idx = rng.gen_range(0..TRACK_TEMPLATES.len());
        }
    }
    idx
}

/// Generate exactly `count` track titles.
///
/// Keywords are cycled by index so each gets used before any repeats; each
/// slot prefers a template not yet used on this album. Duplicate titles are
/// avoided on a best-effort basis only.
pub fn generate_tracks(keywords: &[String], count: usize, rng: &mut impl Rng) -> Vec<String> {
    if keywords.is_empty() {
        return generic_tracks(count);
    }

    let mut tracks: Vec<String> = Vec::with_capacity(count);
    let mut used_templates: HashSet<usize> = HashSet::new();

    for slot in 0..count {
        let mut chosen = String::new();
        for attempt in 0..DUPLICATE_RETRY_LIMIT {
            let keyword = capitalize(&keywords[(slot + attempt) % keywords.len()]);
            let template_idx = pick_track_template(&used_templates, rng);
            chosen = TRACK_TEMPLATES[template_idx](&keyword);
            if !tracks.contains(&chosen) {
                used_templates.insert(template_idx);
                break;
            }
        }
        tracks.push(chosen);
    }

    tracks
}

/// Uniform random choice from the fixed genre list.
pub fn pick_genre(rng: &mut impl Rng) -> &'static str {
    pick(GENRES, rng)
}

/// The closed set of genre labels, exposed for validation and tests.
pub fn genres() -> &'static [&'static str] {
    GENRES
}

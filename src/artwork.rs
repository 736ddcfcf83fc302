//! Procedural cover artwork fallback
//!
//! Renders a vector cover from a hash of the description text when every
//! remote provider fails. Everything here is a pure function of the input:
//! the same (text, mood) pair always produces byte-identical output. This
//! module must never draw from the process-wide RNG used for text
//! generation.

use crate::models::Mood;

const CANVAS: f64 = 512.0;

// Three palettes per mood; entry 0 is the base color, 1..4 are accents.
const POSITIVE_PALETTES: [[&str; 4]; 3] = [
    ["#f97316", "#fbbf24", "#fde68a", "#fff7ed"],
    ["#e11d48", "#fb7185", "#fda4af", "#ffe4e6"],
    ["#16a34a", "#4ade80", "#bbf7d0", "#f0fdf4"],
];

const NEGATIVE_PALETTES: [[&str; 4]; 3] = [
    ["#1e3a8a", "#3b82f6", "#93c5fd", "#0f172a"],
    ["#312e81", "#6366f1", "#a5b4fc", "#1e1b4b"],
    ["#334155", "#64748b", "#94a3b8", "#0f172a"],
];

const NEUTRAL_PALETTES: [[&str; 4]; 3] = [
    ["#525252", "#a3a3a3", "#d4d4d4", "#171717"],
    ["#78716c", "#d6d3d1", "#a8a29e", "#292524"],
    ["#0d9488", "#5eead4", "#99f6e4", "#134e4a"],
];

// Index layout for seeded_random: 0 = palette, 1 = shape count, then a
// stride of 8 indices per shape starting at 10.
const SHAPE_INDEX_BASE: u32 = 10;
const SHAPE_INDEX_STRIDE: u32 = 8;

/// Rolling multiply-accumulate hash over the character codes, 32-bit
/// wraparound, magnitude only. Same text, same hash.
pub fn hash_string(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in text.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Pseudo-random value in [0, 1) as a pure function of `(hash, index)`.
///
/// Two rounds of a small linear-congruential step; no hidden state. Every
/// call site passes a distinct index, so values never depend on call order.
pub fn seeded_random(hash: u32, index: u32) -> f64 {
    let seed = (hash as u64).wrapping_add(index as u64);
    let a = seed.wrapping_mul(9301).wrapping_add(49297) % 233280;
    let b = a.wrapping_mul(9301).wrapping_add(49297) % 233280;
    b as f64 / 233280.0
}

fn palettes_for(mood: Mood) -> &'static [[&'static str; 4]; 3] {
    match mood {
        Mood::Positive => &POSITIVE_PALETTES,
        Mood::Negative => &NEGATIVE_PALETTES,
        Mood::Neutral => &NEUTRAL_PALETTES,
    }
}

fn push_shape(svg: &mut String, hash: u32, shape: u32, palette: &[&str; 4]) {
    let base = SHAPE_INDEX_BASE + shape * SHAPE_INDEX_STRIDE;
    let kind = (seeded_random(hash, base) * 4.0) as u32;
    let x = seeded_random(hash, base + 1) * CANVAS;
    let y = seeded_random(hash, base + 2) * CANVAS;
    let size = 20.0 + seeded_random(hash, base + 3) * 140.0;
    let color = palette[1 + (seeded_random(hash, base + 4) * 3.0) as usize];
    let opacity = 0.3 + seeded_random(hash, base + 5) * 0.6;
    let skew = seeded_random(hash, base + 6);

    match kind {
        0 => svg.push_str(&format!(
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" opacity=\"{:.2}\"/>",
            x,
            y,
            size / 2.0,
            color,
            opacity
        )),
        1 => svg.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" opacity=\"{:.2}\"/>",
            x,
            y,
            size,
            size * (0.5 + skew * 0.7),
            color,
            opacity
        )),
        2 => {
            let stroke = 3.0 + seeded_random(hash, base + 7) * 5.0;
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"{:.1}\" opacity=\"{:.2}\"/>",
                x,
                y,
                x + size,
                y + (skew - 0.5) * 2.0 * size,
                color,
                stroke,
                opacity
            ))
        }
        _ => svg.push_str(&format!(
            "<polygon points=\"{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\" fill=\"{}\" opacity=\"{:.2}\"/>",
            x,
            y,
            x + size,
            y + (skew - 0.5) * size,
            x + size / 2.0,
            y - size * 0.9,
            color,
            opacity
        )),
    }
}

fn render_svg(text: &str, mood: Mood) -> String {
    let hash = hash_string(text);
    let palette = &palettes_for(mood)[(seeded_random(hash, 0) * 3.0) as usize];
    let shape_count = 5 + (seeded_random(hash, 1) * 8.0) as u32;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"512\" height=\"512\" viewBox=\"0 0 512 512\">\
         <defs>\
         <linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\
         <stop offset=\"0%\" stop-color=\"{}\"/>\
         <stop offset=\"100%\" stop-color=\"{}\"/>\
         </linearGradient>\
         <filter id=\"grain\">\
         <feTurbulence type=\"fractalNoise\" baseFrequency=\"0.8\" numOctaves=\"2\"/>\
         <feColorMatrix type=\"saturate\" values=\"0\"/>\
         <feComponentTransfer><feFuncA type=\"linear\" slope=\"0.08\"/></feComponentTransfer>\
         </filter>\
         </defs>\
         <rect width=\"512\" height=\"512\" fill=\"url(#bg)\"/>",
        palette[0], palette[1]
    ));

    for shape in 0..shape_count {
        push_shape(&mut svg, hash, shape, palette);
    }

    svg.push_str("<rect width=\"512\" height=\"512\" filter=\"url(#grain)\"/></svg>");
    svg
}

/// Render the deterministic fallback cover as a self-contained SVG data URI.
pub fn render_cover(text: &str, mood: Mood) -> String {
    use base64::Engine as _;
    let svg = render_svg(text, mood);
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}

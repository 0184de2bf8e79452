//! Functional color parsing.

use super::Rgba;
use regex::Regex;
use std::sync::OnceLock;

/// Matches `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer channels and
/// an optional float alpha, whitespace-tolerant.
fn color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})(?:\s*,\s*([\d.]+))?\s*\)$")
            .unwrap()
    })
}

/// Parse a computed-style color value.
///
/// Returns `None` for `transparent`, fully transparent black, out-of-range
/// channels, or any syntax other than functional `rgb()`/`rgba()`. `None`
/// always means "no decision, leave the property unchanged" - never an
/// error.
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim();
    if value.is_empty() || value == "transparent" {
        return None;
    }

    let caps = color_re().captures(value)?;
    let r = channel(&caps[1])?;
    let g = channel(&caps[2])?;
    let b = channel(&caps[3])?;
    let a = match caps.get(4) {
        Some(m) => m.as_str().parse::<f32>().ok()?.clamp(0.0, 1.0),
        None => 1.0,
    };

    // The computed form of `transparent`.
    if r == 0 && g == 0 && b == 0 && a == 0.0 {
        return None;
    }

    Some(Rgba { r, g, b, a })
}

#[inline]
fn channel(digits: &str) -> Option<u8> {
    // 1-3 digits can still exceed 255; such values never appear in
    // computed styles, so they are rejected rather than clamped.
    digits.parse::<u16>().ok().filter(|v| *v <= 255).map(|v| v as u8)
}

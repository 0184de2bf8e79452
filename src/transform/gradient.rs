//! Gradient rewriting via a typed scan of embedded color tokens.
//!
//! Each functional color inside the value is located with its source span,
//! transformed independently, and the output is rebuilt front-to-back from
//! the token list. Geometry - angle, stop offsets, function names - is
//! carried over byte-for-byte.

use super::darken_background;
use crate::classify::BG_BRIGHTNESS;
use crate::color::{Rgba, parse_color};
use regex::Regex;
use smallvec::SmallVec;
use std::ops::Range;
use std::sync::OnceLock;

/// One functional color occurrence inside a larger CSS value.
struct ColorToken {
    span: Range<usize>,
    color: Rgba,
}

/// Unanchored form of the color syntax, for scanning inside values.
fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"rgba?\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}(?:\s*,\s*[\d.]+)?\s*\)")
            .unwrap()
    })
}

/// Scan a value for parseable color tokens. Transparent or out-of-range
/// occurrences simply do not token-ize, which leaves them unchanged.
fn color_tokens(value: &str) -> SmallVec<[ColorToken; 4]> {
    token_re()
        .find_iter(value)
        .filter_map(|m| {
            parse_color(m.as_str()).map(|color| ColorToken { span: m.range(), color })
        })
        .collect()
}

/// Rewrite every light stop of a gradient via the background rule,
/// preserving the original alpha of each stop. `None` when the value is
/// not a gradient or no stop changed.
pub fn darken_gradient(value: &str) -> Option<String> {
    if !value.contains("gradient") {
        return None;
    }

    let mut out = String::with_capacity(value.len());
    let mut cursor = 0;
    let mut changed = false;

    for token in color_tokens(value) {
        let Some(dark) = darken_background(token.color, false) else {
            continue;
        };
        out.push_str(&value[cursor..token.span.start]);
        out.push_str(&dark.css_with_alpha());
        cursor = token.span.end;
        changed = true;
    }

    if !changed {
        return None;
    }
    out.push_str(&value[cursor..]);
    Some(out)
}

/// A gradient counts as dark when the mean brightness of its parseable
/// stops does not exceed the background threshold. Feeds the text-color
/// decision for content sitting on the gradient.
pub fn gradient_is_dark(value: &str) -> bool {
    if !value.contains("gradient") {
        return false;
    }
    let tokens = color_tokens(value);
    if tokens.is_empty() {
        return false;
    }
    let sum: f32 = tokens.iter().map(|t| t.color.brightness()).sum();
    sum / tokens.len() as f32 <= BG_BRIGHTNESS
}

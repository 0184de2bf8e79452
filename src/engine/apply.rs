//! The per-element rewrite pipeline.
//!
//! Rules run in a fixed order, and every write carries `!important` so it
//! survives the page's own cascade. Each rule degrades to "leave
//! unchanged" whenever a value fails to parse. On a dark-theme session
//! only the text-legibility rules apply - backgrounds, borders, and fills
//! are the site's own dark styling.

use super::SiteTheme;
use crate::classify::{BG_BRIGHTNESS, DARK_MIN, ElementCategory, INPUT_OFFSET, categorize};
use crate::color::{Rgba, parse_color};
use crate::dom::{Document, NodeId, props};
use crate::transform::{
    INVERT_FILTER, LIGHT_TEXT, darken_background, darken_border, darken_gradient,
    flatten_side_border, gradient_is_dark, lighten_text, lighten_vector_paint,
};

/// Border for inputs whose background gave no decision.
const INPUT_BORDER: Rgba = Rgba::opaque(136, 136, 136);

/// Rewrite one element in place. Returns the number of style writes.
pub fn apply_dark_mode(doc: &mut Document, id: NodeId, theme: SiteTheme) -> usize {
    let Some(el) = doc.element(id) else {
        return 0;
    };
    let category = categorize(el);
    let light_theme = !theme.is_dark();
    let mut writes = 0;

    match category {
        ElementCategory::Skip => return 0,
        // Inversion is terminal: the filter handles the whole element.
        ElementCategory::Invertible => {
            if light_theme {
                doc.set_important(id, props::FILTER, INVERT_FILTER);
                writes += 1;
            }
            return writes;
        }
        _ => {}
    }

    let is_input = category == ElementCategory::Input;
    let wants_bright = is_input || category == ElementCategory::BrightText;

    // Gradient backgrounds.
    let gradient = doc
        .computed(id, props::BACKGROUND_IMAGE)
        .filter(|v| v.contains("gradient"))
        .map(str::to_owned);
    let has_dark_gradient = gradient.as_deref().is_some_and(gradient_is_dark);
    if light_theme {
        if let Some(rewritten) = gradient.as_deref().and_then(darken_gradient) {
            doc.set_important(id, props::BACKGROUND_IMAGE, &rewritten);
            writes += 1;
        }
    }

    // Background color, with the input fallback when nothing parses.
    let background = doc
        .computed(id, props::BACKGROUND_COLOR)
        .and_then(parse_color);
    if light_theme {
        match background {
            Some(color) => {
                if let Some(dark) = darken_background(color, is_input) {
                    doc.set_important(id, props::BACKGROUND_COLOR, &dark.css());
                    writes += 1;
                }
                if is_input {
                    doc.set_important(id, props::BORDER_COLOR, &INPUT_BORDER.css());
                    writes += 1;
                }
            }
            None if is_input => {
                let fallback = input_fallback_background();
                doc.set_important(id, props::BACKGROUND_COLOR, &fallback.css());
                doc.set_important(id, props::BORDER_COLOR, &INPUT_BORDER.css());
                writes += 2;
            }
            None => {}
        }
    }

    // Dark-background context for the text rules: session-wide theme, the
    // element's own (pre-rewrite) background, or a dark gradient.
    let element_dark = background.is_some_and(|c| c.brightness() <= BG_BRIGHTNESS);
    let on_dark_background = theme.is_dark() || element_dark || has_dark_gradient;

    // Gradient-clipped text cannot be partially darkened without becoming
    // illegible: strip to a solid light fill. A dark site keeps its own
    // light gradient text; only a dark gradient is stripped there.
    if gradient.is_some() && clips_to_text(doc, id) && (light_theme || has_dark_gradient) {
        doc.set_important(id, props::BACKGROUND_IMAGE, "none");
        doc.set_important(id, props::COLOR, &LIGHT_TEXT.css());
        writes += 2;
    }

    // Text.
    match doc.computed(id, props::COLOR).and_then(parse_color) {
        Some(color) => {
            if let Some(light) = lighten_text(color, on_dark_background) {
                doc.set_important(id, props::COLOR, &light.css());
                writes += 1;
            }
        }
        // No parseable color: bright-text elements still get pushed up.
        None if wants_bright && light_theme => {
            doc.set_important(id, props::COLOR, &LIGHT_TEXT.css());
            writes += 1;
        }
        None => {}
    }

    // Borders. Inputs already got theirs above.
    if light_theme && !is_input {
        if let Some(dark) = doc
            .computed(id, props::BORDER_COLOR)
            .and_then(parse_color)
            .and_then(darken_border)
        {
            doc.set_important(id, props::BORDER_COLOR, &dark.css());
            writes += 1;
        }
    }

    // Side-specific borders used as nested-thread indicators.
    if light_theme {
        for property in [props::BORDER_LEFT_COLOR, props::BORDER_RIGHT_COLOR] {
            if let Some(flat) = doc
                .computed(id, property)
                .and_then(parse_color)
                .and_then(flatten_side_border)
            {
                doc.set_important(id, property, &flat.css());
                writes += 1;
            }
        }
    }

    // Vector paints.
    if light_theme && category == ElementCategory::VectorShape {
        for property in [props::FILL, props::STROKE] {
            if let Some(light) = doc
                .computed(id, property)
                .filter(|v| *v != "none")
                .and_then(parse_color)
                .and_then(lighten_vector_paint)
            {
                doc.set_important(id, property, &light.css());
                writes += 1;
            }
        }
    }

    writes
}

/// Inputs with no parseable background get a readable dark fallback just
/// above the band.
fn input_fallback_background() -> Rgba {
    let v = (DARK_MIN + INPUT_OFFSET + 10.0) as u8;
    Rgba::opaque(v, v, v)
}

/// Gradient clipped to glyph shapes ("gradient text").
fn clips_to_text(doc: &Document, id: NodeId) -> bool {
    [props::BACKGROUND_CLIP, props::WEBKIT_BACKGROUND_CLIP]
        .iter()
        .any(|&property| doc.computed(id, property).is_some_and(|v| v == "text"))
}

//! Text lightening.

use crate::classify::{self, KEEP_BLACK, LIGHT_TEXT_TARGET, TEXT_BRIGHTNESS};
use crate::color::Rgba;

/// Fixed output for lightened text.
pub const LIGHT_TEXT: Rgba = Rgba::opaque(
    LIGHT_TEXT_TARGET as u8,
    LIGHT_TEXT_TARGET as u8,
    LIGHT_TEXT_TARGET as u8,
);

/// Decide a replacement text color, or `None` to preserve the original.
///
/// Colorful text always survives - brand and semantic colors mean
/// something. Near-black text survives only on a dark context, where it
/// reads as intentional; on a light page the background behind it is being
/// darkened, so black text gets lifted with everything else below the
/// brightness line.
pub fn lighten_text(color: Rgba, on_dark_background: bool) -> Option<Rgba> {
    if classify::is_colorful(color) {
        return None;
    }

    let brightness = color.brightness();
    if on_dark_background && brightness < KEEP_BLACK {
        return None;
    }
    if brightness < TEXT_BRIGHTNESS {
        return Some(LIGHT_TEXT);
    }
    None
}

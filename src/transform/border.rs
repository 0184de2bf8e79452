//! Border flattening.

use crate::classify::BORDER_BRIGHTNESS;
use crate::color::{Rgba, hsl_to_rgb};

/// Lightness for darkened general borders, in percent.
const BORDER_LIGHTNESS: f32 = 30.0;

/// Saturation cap for darkened general borders, in percent.
const BORDER_SATURATION_CAP: f32 = 15.0;

/// Flat gray for side-specific borders (nested-thread indicators).
const SIDE_BORDER_GRAY: Rgba = Rgba::opaque(60, 60, 60);

/// Desaturate and darken a bright border. `None` at or below the
/// brightness threshold.
pub fn darken_border(color: Rgba) -> Option<Rgba> {
    if color.brightness() <= BORDER_BRIGHTNESS {
        return None;
    }
    let hsl = color.hsl();
    let (r, g, b) = hsl_to_rgb(
        hsl.h,
        (hsl.s * 0.3).min(BORDER_SATURATION_CAP),
        BORDER_LIGHTNESS,
    );
    Some(Rgba { r, g, b, a: color.a })
}

/// Side borders get one flat dark gray when bright, independent of the
/// general border rule.
pub fn flatten_side_border(color: Rgba) -> Option<Rgba> {
    if color.brightness() <= BORDER_BRIGHTNESS {
        return None;
    }
    Some(SIDE_BORDER_GRAY)
}

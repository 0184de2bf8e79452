//! Background darkening into the dark band.

use crate::classify::{self, DARK_MAX, DARK_MIN, INPUT_OFFSET};
use crate::color::{Rgba, hsl_to_rgb};

/// Cap for surviving background saturation, in percent.
const SATURATION_CAP: f32 = 20.0;

/// Fraction of the original saturation that survives.
const SATURATION_FACTOR: f32 = 0.3;

/// Map a light background into the dark band. `None` when the input is
/// already acceptable (brightness at or below the threshold).
///
/// The target lightness is the fixed midpoint of the band - the published
/// formula's brightness-dependent halves cancel, and the collapsed
/// constant is kept so outputs stay compatible. Inputs land
/// `INPUT_OFFSET` above the band so form controls stay distinguishable.
pub fn darken_background(color: Rgba, is_input: bool) -> Option<Rgba> {
    if !classify::is_light_background(color) {
        return None;
    }

    let hsl = color.hsl();

    // Target on the 0-255 brightness scale.
    let mut target = DARK_MIN + (DARK_MAX - DARK_MIN) * 0.5;
    if is_input {
        target += INPUT_OFFSET;
    }

    let saturation = (hsl.s * SATURATION_FACTOR).min(SATURATION_CAP);
    let (r, g, b) = hsl_to_rgb(hsl.h, saturation, target / 2.55);
    Some(Rgba { r, g, b, a: color.a })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{DARK_MAX, DARK_MIN, INPUT_OFFSET};
    use crate::color::rgb_to_hsl;

    #[test]
    fn test_dark_backgrounds_unchanged() {
        // brightness <= 100 is already acceptable.
        assert!(darken_background(Rgba::opaque(50, 50, 50), false).is_none());
        assert!(darken_background(Rgba::opaque(100, 100, 100), false).is_none());
        assert!(darken_background(Rgba::opaque(0, 0, 0), false).is_none());
    }

    #[test]
    fn test_white_lands_near_black_gray() {
        let out = darken_background(Rgba::opaque(255, 255, 255), false).unwrap();
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        assert!((i16::from(out.r) - 18).abs() <= 1, "got {}", out.r);

        let hsl = rgb_to_hsl(out.r, out.g, out.b);
        assert_eq!(hsl.s, 0.0);
        let lightness_255 = hsl.l * 2.55;
        assert!(lightness_255 >= DARK_MIN && lightness_255 <= DARK_MAX);
    }

    #[test]
    fn test_brightness_independent_target() {
        // A pale gray lands on the same gray as pure white.
        let from_white = darken_background(Rgba::opaque(255, 255, 255), false).unwrap();
        let from_pale = darken_background(Rgba::opaque(200, 200, 200), false).unwrap();
        assert_eq!(from_white, from_pale);
    }

    #[test]
    fn test_input_offset_widens_band() {
        let plain = darken_background(Rgba::opaque(255, 255, 255), false).unwrap();
        let input = darken_background(Rgba::opaque(255, 255, 255), true).unwrap();
        assert!(input.r > plain.r);

        let hsl = rgb_to_hsl(input.r, input.g, input.b);
        let lightness_255 = hsl.l * 2.55;
        assert!(lightness_255 <= DARK_MAX + INPUT_OFFSET + 1.0);
    }

    #[test]
    fn test_saturation_compressed() {
        // A saturated light background keeps its hue but loses most of
        // its saturation.
        let input = Rgba::opaque(255, 200, 200);
        let out = darken_background(input, false).unwrap();
        let hsl = rgb_to_hsl(out.r, out.g, out.b);
        assert!(hsl.s <= SATURATION_CAP + 1.0, "saturation {}", hsl.s);
    }

    #[test]
    fn test_alpha_carried_through() {
        let input = Rgba { r: 255, g: 255, b: 255, a: 0.5 };
        assert_eq!(darken_background(input, false).unwrap().a, 0.5);
    }
}

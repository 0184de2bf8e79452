//! Vector fill/stroke lightening.

use crate::classify::{self, VECTOR_BRIGHTNESS};
use crate::color::Rgba;

/// Fixed light gray for redirected vector paints.
const VECTOR_LIGHT: Rgba = Rgba::opaque(224, 224, 224);

/// Redirect a dark, non-colorful vector paint to a fixed light gray -
/// dark line art is invisible against a darkened page.
pub fn lighten_vector_paint(color: Rgba) -> Option<Rgba> {
    if color.brightness() >= VECTOR_BRIGHTNESS {
        return None;
    }
    if classify::is_colorful(color) {
        return None;
    }
    Some(VECTOR_LIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_paint_lightened() {
        let out = lighten_vector_paint(Rgba::opaque(0, 0, 0)).unwrap();
        assert_eq!((out.r, out.g, out.b), (224, 224, 224));
    }

    #[test]
    fn test_bright_paint_unchanged() {
        assert!(lighten_vector_paint(Rgba::opaque(150, 150, 150)).is_none());
        assert!(lighten_vector_paint(Rgba::opaque(255, 255, 255)).is_none());
    }

    #[test]
    fn test_colorful_paint_preserved() {
        assert!(lighten_vector_paint(Rgba::opaque(120, 20, 20)).is_none());
    }
}

//! Color model: functional color parsing, RGB/HSL conversion, brightness.
//!
//! Computed styles only ever hand the engine functional `rgb()` / `rgba()`
//! values, so nothing else is recognized. Anything unparseable is "no
//! color": the caller leaves the property alone.

mod convert;
mod parse;

pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use parse::parse_color;

/// An sRGB color with 8-bit channels and fractional alpha.
///
/// Only ever constructed by [`parse_color`] from computed-style output, or
/// by the transform rules from converted HSL - never from unchecked input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Cylindrical view of an [`Rgba`]: `h` in [0, 360), `s` and `l` in
/// [0, 100]. Derived and ephemeral - never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Perceptual luma `0.299 r + 0.587 g + 0.114 b`, in [0, 255].
    #[inline]
    pub fn brightness(&self) -> f32 {
        brightness(self.r, self.g, self.b)
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Format as a functional `rgb(...)` value, dropping alpha.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Format keeping this color's alpha: `rgba(...)` when translucent.
    pub fn css_with_alpha(&self) -> String {
        if self.a < 1.0 {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        } else {
            self.css()
        }
    }
}

/// Perceptual luma weighting. Always a float in [0, 255].
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    (f32::from(r) * 299.0 + f32::from(g) * 587.0 + f32::from(b) * 114.0) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_extremes() {
        assert_eq!(brightness(0, 0, 0), 0.0);
        assert_eq!(brightness(255, 255, 255), 255.0);
    }

    #[test]
    fn test_brightness_gray_is_channel_value() {
        assert_eq!(brightness(50, 50, 50), 50.0);
        assert_eq!(brightness(128, 128, 128), 128.0);
    }

    #[test]
    fn test_brightness_luma_weights() {
        // Green dominates, blue barely registers.
        assert!(brightness(0, 255, 0) > brightness(255, 0, 0));
        assert!(brightness(255, 0, 0) > brightness(0, 0, 255));
        assert_eq!(brightness(0, 0, 255), 29.07);
    }

    #[test]
    fn test_css_formatting() {
        assert_eq!(Rgba::opaque(18, 18, 18).css(), "rgb(18, 18, 18)");
        let translucent = Rgba { r: 10, g: 20, b: 30, a: 0.5 };
        assert_eq!(translucent.css_with_alpha(), "rgba(10, 20, 30, 0.5)");
        assert_eq!(translucent.css(), "rgb(10, 20, 30)");
    }
}

//! RGB/HSL conversion.

use super::Hsl;

/// Convert 8-bit RGB channels to HSL (`h` in [0, 360), `s`/`l` in
/// [0, 100]).
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsl { h: h * 360.0, s: s * 100.0, l: l * 100.0 }
}

/// Convert HSL (same ranges as [`rgb_to_hsl`]) back to 8-bit RGB,
/// rounding to the nearest integer per channel.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trips(r: u8, g: u8, b: u8) {
        let hsl = rgb_to_hsl(r, g, b);
        let (r2, g2, b2) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        let close = |a: u8, b: u8| (i16::from(a) - i16::from(b)).abs() <= 1;
        assert!(
            close(r, r2) && close(g, g2) && close(b, b2),
            "rgb({r}, {g}, {b}) -> hsl({}, {}, {}) -> rgb({r2}, {g2}, {b2})",
            hsl.h,
            hsl.s,
            hsl.l
        );
    }

    #[test]
    fn test_round_trip_achromatic() {
        for v in [0u8, 1, 17, 50, 127, 128, 200, 254, 255] {
            assert_round_trips(v, v, v);
        }
    }

    #[test]
    fn test_round_trip_primaries_and_secondaries() {
        for (r, g, b) in [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
        ] {
            assert_round_trips(r, g, b);
        }
    }

    #[test]
    fn test_round_trip_sampled_cube() {
        let steps = [0u8, 51, 102, 153, 204, 255];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    assert_round_trips(r, g, b);
                }
            }
        }
    }

    #[test]
    fn test_known_conversions() {
        let white = rgb_to_hsl(255, 255, 255);
        assert_eq!((white.s, white.l), (0.0, 100.0));

        let red = rgb_to_hsl(255, 0, 0);
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 100.0);
        assert_eq!(red.l, 50.0);

        let blue = rgb_to_hsl(0, 0, 255);
        assert_eq!(blue.h, 240.0);
    }

    #[test]
    fn test_hsl_to_rgb_achromatic_rounds() {
        assert_eq!(hsl_to_rgb(123.0, 0.0, 100.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), (128, 128, 128));
    }
}

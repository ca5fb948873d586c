//! HSL color value and the RGB ↔ HSL conversions.
//!
//! Hue, saturation and lightness are all normalized to `[0, 1]`. Hue is
//! circular: `1.0` is the same hue as `0.0`, and every helper that moves the
//! hue wraps it back into `[0, 1)`.
//!
//! # Algorithm
//! The CSS3 HSL model (<https://www.w3.org/TR/css3-color/#hsl-color>):
//! ```text
//! l = (max + min) / 2
//! s = Δ / (max + min)          if l ≤ 0.5
//!   = Δ / (2 − max − min)      otherwise
//! h = sector offset of the max channel + (difference of the others) / Δ, over 6
//! ```
//! Achromatic colors (`max == min`) get `s = 0` and `h = 0`; the hue of a
//! gray cannot be recovered.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rgba::Color;

/// Lightness substituted for `l <= 0` before rebuilding RGB.
const MIN_LIGHTNESS: f32 = 0.001;
/// Lightness substituted for `l >= 1` before rebuilding RGB.
const MAX_LIGHTNESS: f32 = 0.999;

/// A color in hue/saturation/lightness form, plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorHsl {
    /// Hue in `[0, 1)`. 0 is red, roughly 0.33 green, 0.66 blue.
    pub h: f32,
    /// Saturation in `[0, 1]`. 0 is gray.
    pub s: f32,
    /// Lightness in `[0, 1]`. 0 is black, 1 is white.
    pub l: f32,
    /// Alpha, carried through conversions untouched.
    pub a: f32,
}

impl ColorHsl {
    /// Create an opaque HSL color.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Create an HSL color with an explicit alpha.
    pub const fn with_alpha(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Hue rotated half a turn, saturation and lightness flipped.
    pub fn inverted(self) -> Self {
        Self {
            h: wrap_hue(self.h + 0.5),
            s: 1.0 - self.s,
            l: 1.0 - self.l,
            a: self.a,
        }
    }

    /// Hue rotated half a turn.
    pub fn with_inverted_hue(self) -> Self {
        Self {
            h: wrap_hue(self.h + 0.5),
            ..self
        }
    }

    /// Saturation flipped to `1 - s`.
    pub fn with_inverted_saturation(self) -> Self {
        Self {
            s: 1.0 - self.s,
            ..self
        }
    }

    /// Lightness flipped to `1 - l`.
    pub fn with_inverted_lightness(self) -> Self {
        Self {
            l: 1.0 - self.l,
            ..self
        }
    }
}

impl From<Color> for ColorHsl {
    fn from(color: Color) -> Self {
        to_hsl(color)
    }
}

impl From<ColorHsl> for Color {
    fn from(hsl: ColorHsl) -> Self {
        to_rgb(hsl)
    }
}

impl fmt::Display for ColorHsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H: {} S: {} L: {} A: {}", self.h, self.s, self.l, self.a)
    }
}

/// Wrap a hue into `[0, 1)`.
///
/// Unlike a bare `rem_euclid`, the result is never exactly `1.0` (tiny
/// negative inputs round up to it).
pub fn wrap_hue(h: f32) -> f32 {
    let wrapped = h.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert RGBA to HSL. Alpha passes through.
pub fn to_hsl(color: Color) -> ColorHsl {
    let Color { r, g, b, a } = color;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return ColorHsl::with_alpha(0.0, 0.0, l, a);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    // `g - b` just below zero rounds `+ 6.0` up to exactly 6.
    ColorHsl::with_alpha(wrap_hue(h / 6.0), s, l, a)
}

/// Convert HSL to RGBA. Alpha passes through.
///
/// Lightness at or beyond the ends of the range is pulled in to
/// `0.001`/`0.999` before the chromatic path runs, so `m1`/`m2` never
/// degenerate. Achromatic input keeps its exact lightness as the gray level.
pub fn to_rgb(hsl: ColorHsl) -> Color {
    let mut rgb = [hsl.l; 3];

    let l = if hsl.l <= 0.0 {
        MIN_LIGHTNESS
    } else if hsl.l >= 1.0 {
        MAX_LIGHTNESS
    } else {
        hsl.l
    };

    if hsl.s != 0.0 {
        let s = hsl.s;
        let m2 = if l < 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        rgb = [
            extract_channel(m1, m2, hsl.h + 1.0 / 3.0),
            extract_channel(m1, m2, hsl.h),
            extract_channel(m1, m2, hsl.h - 1.0 / 3.0),
        ];
    }

    Color::new(rgb[0], rgb[1], rgb[2], hsl.a)
}

/// One channel of the HSL → RGB piecewise ramp.
fn extract_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = wrap_hue(hue);
    if hue * 6.0 < 1.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue * 2.0 < 1.0 {
        m2
    } else if hue * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    /// Deterministic 9³ grid over the RGB cube, grays included.
    fn sample_colors() -> Vec<Color> {
        let steps = [0.0, 0.1, 0.25, 0.4, 0.5, 0.65, 0.8, 0.95, 1.0];
        let mut out = Vec::new();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    out.push(Color::new(r, g, b, 0.75));
                }
            }
        }
        out
    }

    fn assert_hsl_close(a: ColorHsl, b: ColorHsl, tol: f32) {
        let dh = (a.h - b.h).abs();
        let dh = dh.min(1.0 - dh);
        assert!(dh < tol, "hue {:.6} vs {:.6}", a.h, b.h);
        assert!((a.s - b.s).abs() < tol, "sat {:.6} vs {:.6}", a.s, b.s);
        assert!((a.l - b.l).abs() < tol, "light {:.6} vs {:.6}", a.l, b.l);
        assert_eq!(a.a, b.a);
    }

    #[test]
    fn test_primaries_have_expected_hue() {
        let red = to_hsl(Color::rgb(1.0, 0.0, 0.0));
        let green = to_hsl(Color::rgb(0.0, 1.0, 0.0));
        let blue = to_hsl(Color::rgb(0.0, 0.0, 1.0));
        assert!((red.h - 0.0).abs() < EPSILON);
        assert!((green.h - 1.0 / 3.0).abs() < EPSILON);
        assert!((blue.h - 2.0 / 3.0).abs() < EPSILON);
        for c in [red, green, blue] {
            assert!((c.s - 1.0).abs() < EPSILON);
            assert!((c.l - 0.5).abs() < EPSILON);
        }
    }

    #[test]
    fn test_red_max_with_blue_above_green_wraps_positive() {
        // Magenta-ish red: g < b takes the +6 branch, hue lands near 1.
        let hsl = to_hsl(Color::rgb(1.0, 0.0, 0.2));
        assert!(hsl.h > 0.9 && hsl.h < 1.0, "hue {:.6}", hsl.h);
    }

    #[test]
    fn test_blue_one_ulp_above_green_stays_below_one() {
        let g = 0.5_f32;
        let b = f32::from_bits(g.to_bits() + 1);
        let hsl = to_hsl(Color::rgb(1.0, g, b));
        assert!((0.0..1.0).contains(&hsl.h), "hue {:.9}", hsl.h);
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        for v in [0.0, 0.2, 0.5, 0.73, 1.0] {
            let hsl = to_hsl(Color::gray(v));
            assert_eq!(hsl.s, 0.0);
            assert_eq!(hsl.h, 0.0);
            assert!((hsl.l - v).abs() < EPSILON);
        }
    }

    #[test]
    fn test_rgb_hsl_rgb_roundtrip() {
        for c in sample_colors() {
            let back = to_rgb(to_hsl(c));
            assert!(
                c.max_channel_delta(back) < 1e-4,
                "{c} came back as {back}"
            );
        }
    }

    #[test]
    fn test_hsl_roundtrip_for_chromatic_colors() {
        for c in sample_colors() {
            let hsl = to_hsl(c);
            if hsl.s <= 0.0 {
                continue;
            }
            assert_hsl_close(to_hsl(to_rgb(hsl)), hsl, 1e-4);
        }
    }

    #[test]
    fn test_alpha_passes_through_both_ways() {
        let c = Color::new(0.3, 0.6, 0.9, 0.125);
        assert_eq!(to_hsl(c).a, 0.125);
        assert_eq!(to_rgb(ColorHsl::with_alpha(0.4, 0.5, 0.5, 0.33)).a, 0.33);
    }

    #[test]
    fn test_gray_keeps_exact_lightness_at_extremes() {
        assert_eq!(to_rgb(ColorHsl::new(0.0, 0.0, 1.0)), Color::WHITE);
        assert_eq!(to_rgb(ColorHsl::new(0.0, 0.0, 0.0)), Color::BLACK);
    }

    #[test]
    fn test_chromatic_extremes_use_substituted_lightness() {
        let c = to_rgb(ColorHsl::new(0.0, 1.0, 1.0));
        for v in c.to_rgb_array() {
            assert!(v.is_finite());
            assert!(v > 0.99 && v < 1.001, "channel {v:.6}");
        }
        let c = to_rgb(ColorHsl::new(0.5, 1.0, 0.0));
        for v in c.to_rgb_array() {
            assert!(v.is_finite());
            assert!((0.0..0.01).contains(&v), "channel {v:.6}");
        }
    }

    #[test]
    fn test_wrap_hue_stays_below_one() {
        assert_eq!(wrap_hue(1.0), 0.0);
        assert!((wrap_hue(1.25) - 0.25).abs() < EPSILON);
        assert!((wrap_hue(-0.25) - 0.75).abs() < EPSILON);
        assert!(wrap_hue(-1e-9) < 1.0);
    }

    #[test]
    fn test_inverted_twice_is_identity() {
        let hsl = ColorHsl::with_alpha(0.8, 0.3, 0.6, 0.5);
        assert_hsl_close(hsl.inverted().inverted(), hsl, EPSILON);
        let flipped = hsl.with_inverted_hue();
        assert!((flipped.h - 0.3).abs() < EPSILON);
        assert_eq!(flipped.s, hsl.s);
        assert_eq!(flipped.l, hsl.l);
    }

    #[test]
    fn test_matches_palette_reference() {
        use palette::{FromColor, Hsl, Srgb};

        for c in sample_colors() {
            let ours = to_hsl(c);
            if ours.s <= 0.0 {
                continue;
            }
            let reference: Hsl = Hsl::from_color(Srgb::new(c.r, c.g, c.b));
            let ref_hue = reference.hue.into_positive_degrees() / 360.0;
            let dh = (ours.h - ref_hue).abs();
            assert!(dh.min(1.0 - dh) < 1e-4, "{c}: hue {:.6} vs {:.6}", ours.h, ref_hue);
            assert!((ours.s - reference.saturation).abs() < 1e-4, "{c}: sat");
            assert!((ours.l - reference.lightness).abs() < 1e-4, "{c}: light");
        }
    }

    #[test]
    fn test_display_lists_components() {
        assert_eq!(
            ColorHsl::new(0.5, 0.25, 1.0).to_string(),
            "H: 0.5 S: 0.25 L: 1 A: 1"
        );
    }
}

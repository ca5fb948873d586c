//! Conversions to and from the `palette` crate.
//!
//! Tinct colors carry no encoding; they map onto palette's sRGB types
//! channel for channel, with no transfer function applied.

use palette::{Hsla, Srgba};

use crate::model::{Color, ColorHsl, wrap_hue};

impl From<Srgba<f32>> for Color {
    fn from(c: Srgba<f32>) -> Self {
        let (r, g, b, a) = c.into_components();
        Self::new(r, g, b, a)
    }
}

impl From<Color> for Srgba<f32> {
    fn from(c: Color) -> Self {
        Srgba::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Hsla<palette::encoding::Srgb, f32>> for ColorHsl {
    fn from(c: Hsla<palette::encoding::Srgb, f32>) -> Self {
        let (hue, s, l, a) = c.into_components();
        Self::with_alpha(wrap_hue(hue.into_positive_degrees() / 360.0), s, l, a)
    }
}

impl From<ColorHsl> for Hsla<palette::encoding::Srgb, f32> {
    fn from(c: ColorHsl) -> Self {
        Hsla::new(c.h * 360.0, c.s, c.l, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{to_hsl, to_rgb};
    use palette::FromColor;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_srgba_roundtrip_is_exact() {
        let c = Color::new(0.1, 0.6, 0.9, 0.4);
        let p: Srgba<f32> = c.into();
        assert_eq!(Color::from(p), c);
    }

    #[test]
    fn test_palette_hsl_agrees_with_to_hsl() {
        let c = Color::new(0.8, 0.3, 0.45, 0.7);
        let ours = to_hsl(c);
        let rgba: Srgba = c.into();
        let hsla: Hsla = Hsla::from_color(rgba);
        let theirs = ColorHsl::from(hsla);
        assert!((ours.h - theirs.h).abs() < EPSILON, "{ours} vs {theirs}");
        assert!((ours.s - theirs.s).abs() < EPSILON, "{ours} vs {theirs}");
        assert!((ours.l - theirs.l).abs() < EPSILON, "{ours} vs {theirs}");
        assert_eq!(theirs.a, 0.7);
    }

    #[test]
    fn test_palette_rgb_agrees_with_to_rgb() {
        let hsl = ColorHsl::with_alpha(0.72, 0.55, 0.35, 1.0);
        let ours = to_rgb(hsl);
        let hsla: Hsla = hsl.into();
        let rgba: Srgba = Srgba::from_color(hsla);
        let theirs = Color::from(rgba);
        assert!(ours.max_channel_delta(theirs) < EPSILON, "{ours} vs {theirs}");
    }
}

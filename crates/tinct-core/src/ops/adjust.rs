//! Lightness and saturation adjustments.
//!
//! Every adjustment converts to HSL, moves one component, clamps it to
//! `[0, 1]` and converts back. Absolute variants add a fixed amount:
//! ```text
//! lighten(c, d)           l' = clamp(l + d)
//! darken(c, d)            l' = clamp(l − d)
//! ```
//! Relative variants move a fraction of the remaining distance, which has a
//! stronger effect on values far from the end they move toward:
//! ```text
//! lighten_relative(c, p)  l' = clamp(l + p × (1 − l))
//! darken_relative(c, p)   l' = clamp(l − p × l)
//! ```
//! Saturation follows the same pattern, except that `saturate_relative`
//! scales by the current saturation (`s' = s + p × s`).

use crate::model::{Color, ColorHsl, to_hsl, to_rgb};

/// Round-trip through HSL, letting `f` rewrite the HSL value.
fn map_hsl(color: Color, f: impl FnOnce(ColorHsl) -> ColorHsl) -> Color {
    to_rgb(f(to_hsl(color)))
}

fn with_lightness(color: Color, f: impl FnOnce(f32) -> f32) -> Color {
    map_hsl(color, |hsl| ColorHsl {
        l: f(hsl.l).clamp(0.0, 1.0),
        ..hsl
    })
}

fn with_saturation(color: Color, f: impl FnOnce(f32) -> f32) -> Color {
    map_hsl(color, |hsl| ColorHsl {
        s: f(hsl.s).clamp(0.0, 1.0),
        ..hsl
    })
}

/// Raise lightness by `amount`.
pub fn lighten(color: Color, amount: f32) -> Color {
    with_lightness(color, |l| l + amount)
}

/// Lower lightness by `amount`.
pub fn darken(color: Color, amount: f32) -> Color {
    with_lightness(color, |l| l - amount)
}

/// Raise lightness by `percent` of the distance to white.
pub fn lighten_relative(color: Color, percent: f32) -> Color {
    with_lightness(color, |l| l + percent * (1.0 - l))
}

/// Lower lightness by `percent` of the current lightness.
pub fn darken_relative(color: Color, percent: f32) -> Color {
    with_lightness(color, |l| l - percent * l)
}

/// Raise saturation by `amount`.
pub fn saturate(color: Color, amount: f32) -> Color {
    with_saturation(color, |s| s + amount)
}

/// Lower saturation by `amount`.
pub fn desaturate(color: Color, amount: f32) -> Color {
    with_saturation(color, |s| s - amount)
}

/// Raise saturation by `percent` of the current saturation.
pub fn saturate_relative(color: Color, percent: f32) -> Color {
    with_saturation(color, |s| s + percent * s)
}

/// Lower saturation by `percent` of the current saturation.
pub fn desaturate_relative(color: Color, percent: f32) -> Color {
    with_saturation(color, |s| s - percent * s)
}

/// Drop all saturation, keeping HSL lightness.
pub fn grayscale(color: Color) -> Color {
    map_hsl(color, |hsl| ColorHsl { s: 0.0, ..hsl })
}

//! Hue, saturation and lightness inversion.
//!
//! Hue is an angle, so inverting it rotates half a turn and wraps; saturation
//! and lightness are linear and flip to `1 − x`.
//!
//! A fully saturated color inverts to a gray, and a gray has no hue to
//! remember. Inverting twice therefore only restores colors with
//! `0 < s < 1` (and grays, whose hue is pinned to 0 on the way back).

use crate::model::{Color, ColorHsl, to_hsl, to_rgb};

/// Invert hue, saturation and lightness.
pub fn invert(color: Color) -> Color {
    to_rgb(to_hsl(color).inverted())
}

/// Rotate the hue half a turn.
pub fn invert_hue(color: Color) -> Color {
    to_rgb(to_hsl(color).with_inverted_hue())
}

/// Flip lightness to `1 − l`.
pub fn invert_lightness(color: Color) -> Color {
    to_rgb(to_hsl(color).with_inverted_lightness())
}

/// Flip saturation to `1 − s`.
pub fn invert_saturation(color: Color) -> Color {
    to_rgb(to_hsl(color).with_inverted_saturation())
}

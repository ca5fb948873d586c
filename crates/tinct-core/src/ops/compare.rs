//! Luminosity, hue similarity and contrast selection.
//!
//! Hue similarity uses circular distance on the unit hue wheel:
//! ```text
//! d = wrap(h1 − h2)          // [0, 1)
//! d = d − 1   if d ≥ 0.5     // [−0.5, 0.5)
//! distance = |d|             // [0, 0.5]
//! ```

use crate::model::{Color, to_hsl, wrap_hue};

/// Hue distance (in turns) at or below which two colors count as similar.
pub const SIMILAR_HUE_THRESHOLD: f32 = 0.15;

/// HSL lightness of `color`: 0 for black, 1 for white.
pub fn luminosity(color: Color) -> f32 {
    to_hsl(color).l
}

/// Shortest distance between two hues on the wheel, in `[0, 0.5]`.
fn hue_distance(a: Color, b: Color) -> f32 {
    let mut d = wrap_hue(to_hsl(a).h - to_hsl(b).h);
    if d >= 0.5 {
        d -= 1.0;
    }
    d.abs()
}

/// Whether `other` has a hue close to `color`'s.
pub fn is_similar(color: Color, other: Color) -> bool {
    hue_distance(color, other) <= SIMILAR_HUE_THRESHOLD
}

/// Normalized hue distance: 0 for the same hue, 1 for opposite hues.
pub fn how_similar(color: Color, other: Color) -> f32 {
    hue_distance(color, other) * 2.0
}

/// Pick whichever of `a` and `b` has luminosity farther from `color`'s.
///
/// Ties go to `b`. Useful for choosing a readable text color over a
/// background.
pub fn select_contrasting(color: Color, a: Color, b: Color) -> Color {
    let l = luminosity(color);
    let diff_a = (l - luminosity(a)).abs();
    let diff_b = (l - luminosity(b)).abs();
    if diff_a > diff_b { a } else { b }
}

//! Photoshop-style blend modes.
//!
//! Every mode combines the color channels of `a` (base) and `b` (blend) and
//! keeps `a`'s alpha untouched. This is channel arithmetic, not alpha
//! compositing. Results are not clamped; screen of two values above 1 or
//! multiply of negative inputs may leave `[0, 1]`.
//!
//! ```text
//! multiply    a × b
//! screen      a + b − a × b
//! overlay     2 × a × b            if a ≤ 0.5
//!             a + b − a × b        otherwise
//! difference  |a − b|
//! average     (a + b) / 2
//! negation    1 − |a + b − 1|
//! mix         lerp(a, b, 0.5)
//! ```
//!
//! All of them are commutative except overlay, which switches on the base
//! channel only.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::model::Color;

/// Selects one of the blend functions for [`blend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendStyle {
    /// Darkens: `a × b`.
    Multiply,
    /// Lightens: `a + b − a × b`.
    Screen,
    /// Multiply in the base's shadows, screen in its highlights.
    Overlay,
    /// `|a − b|`.
    Difference,
    /// `(a + b) / 2`.
    Average,
    /// `1 − |a + b − 1|`.
    Negation,
    /// Halfway linear interpolation.
    Mix,
}

impl BlendStyle {
    /// Every blend style, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Difference,
        Self::Average,
        Self::Negation,
        Self::Mix,
    ];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Multiply => "Multiply",
            Self::Screen => "Screen",
            Self::Overlay => "Overlay",
            Self::Difference => "Difference",
            Self::Average => "Average",
            Self::Negation => "Negation",
            Self::Mix => "Mix",
        }
    }
}

impl fmt::Display for BlendStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Blend `b` onto `a` with the chosen style.
pub fn blend(a: Color, b: Color, style: BlendStyle) -> Color {
    match style {
        BlendStyle::Multiply => multiply(a, b),
        BlendStyle::Screen => screen(a, b),
        BlendStyle::Overlay => overlay(a, b),
        BlendStyle::Difference => difference(a, b),
        BlendStyle::Average => average(a, b),
        BlendStyle::Negation => negation(a, b),
        BlendStyle::Mix => mix(a, b),
    }
}

/// Apply `f` to the rgb vectors and keep `a`'s alpha.
fn combine(a: Color, b: Color, f: impl FnOnce(Vec3, Vec3) -> Vec3) -> Color {
    a.with_rgb(f(Vec3::from(a), Vec3::from(b)).to_array())
}

/// `a × b` per channel.
pub fn multiply(a: Color, b: Color) -> Color {
    combine(a, b, |a, b| a * b)
}

/// `a + b − a × b` per channel.
pub fn screen(a: Color, b: Color) -> Color {
    combine(a, b, |a, b| a + b - a * b)
}

/// Multiply where the base channel is dark (`≤ 0.5`), screen where it is
/// light. Not commutative.
pub fn overlay(a: Color, b: Color) -> Color {
    let (base, top) = (a.to_rgb_array(), b.to_rgb_array());
    let mut out = [0.0_f32; 3];
    for c in 0..3 {
        out[c] = if base[c] <= 0.5 {
            2.0 * base[c] * top[c]
        } else {
            base[c] + top[c] - base[c] * top[c]
        };
    }
    a.with_rgb(out)
}

/// `|a − b|` per channel.
pub fn difference(a: Color, b: Color) -> Color {
    combine(a, b, |a, b| (a - b).abs())
}

/// `(a + b) / 2` per channel.
pub fn average(a: Color, b: Color) -> Color {
    combine(a, b, |a, b| (a + b) / 2.0)
}

/// `1 − |a + b − 1|` per channel.
pub fn negation(a: Color, b: Color) -> Color {
    combine(a, b, |a, b| Vec3::ONE - (a + b - Vec3::ONE).abs())
}

/// Halfway between `a` and `b`.
pub fn mix(a: Color, b: Color) -> Color {
    combine(a, b, |a, b| a.lerp(b, 0.5))
}

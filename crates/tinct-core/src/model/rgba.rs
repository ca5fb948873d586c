//! RGBA color value.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// An RGBA color with `f32` channels.
///
/// Channels are nominally in `[0, 1]` but the range is not enforced.
/// Blend operators can legitimately produce values outside of it.
///
/// `#[repr(C)]` and `Pod` so that a `&[Color]` can be handed to anything
/// expecting tightly packed `[f32; 4]` data (see [`Color::as_floats`]).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from all four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque gray where every channel equals `value`.
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value, 1.0)
    }

    /// The color channels without alpha.
    pub const fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// All four channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Replace the color channels, keeping this color's alpha.
    pub const fn with_rgb(self, rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], self.a)
    }

    /// Replace the alpha channel.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Linear interpolation of all four channels.
    ///
    /// `t` is clamped to `[0, 1]`: `t <= 0` yields `self` and `t >= 1`
    /// yields `to` exactly. NaN yields `self`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        if t.is_nan() || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return to;
        }
        Vec4::from(self).lerp(Vec4::from(to), t).into()
    }

    /// View a slice of colors as a flat slice of floats (`r, g, b, a, r, ...`).
    pub fn as_floats(colors: &[Self]) -> &[f32] {
        bytemuck::cast_slice(colors)
    }

    /// Maximum absolute per-channel difference, alpha included.
    pub fn max_channel_delta(self, other: Self) -> f32 {
        (Vec4::from(self) - Vec4::from(other)).abs().max_element()
    }
}

impl From<[f32; 4]> for Color {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color> for Vec4 {
    fn from(c: Color) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Color> for Vec3 {
    fn from(c: Color) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R: {} G: {} B: {} A: {}", self.r, self.g, self.b, self.a)
    }
}

//! Color model: the RGBA value type, its HSL counterpart, and the
//! conversions between them.

pub mod hsl;
pub mod rgba;

pub use hsl::{ColorHsl, to_hsl, to_rgb, wrap_hue};
pub use rgba::Color;

//! Tinct Core: color values and pure color math.
//!
//! This crate holds the RGBA/HSL model, HSL-based adjustments, blend modes
//! and random color generation. Nothing here has state or side effects; the
//! animation engine lives in `tinct-anim`.

pub mod blend;
pub mod interop;
pub mod model;
pub mod ops;
pub mod random;

// Re-exports for convenience.
pub use blend::{BlendStyle, blend};
pub use model::{Color, ColorHsl, to_hsl, to_rgb, wrap_hue};
pub use random::{BandError, ColorRng, HslBand};

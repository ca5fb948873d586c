//! Color operations built on the HSL model: adjustments, inversion and
//! comparison. All are pure: they take colors by value and return new ones.

pub mod adjust;
pub mod compare;
pub mod invert;

pub use adjust::{
    darken, darken_relative, desaturate, desaturate_relative, grayscale, lighten,
    lighten_relative, saturate, saturate_relative,
};
pub use compare::{SIMILAR_HUE_THRESHOLD, how_similar, is_similar, luminosity, select_contrasting};
pub use invert::{invert, invert_hue, invert_lightness, invert_saturation};

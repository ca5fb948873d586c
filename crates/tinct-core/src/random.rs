//! Random color generation.
//!
//! Colors are sampled in HSL: a uniform hue in `[0, 1)` plus saturation and
//! lightness drawn from a band. The bands below are tuned so that
//! bright colors stay vivid without washing out, pastels stay soft, and
//! dark colors stay recognizably tinted.
//!
//! | Variant | Saturation | Lightness |
//! |---|---|---|
//! | bright | 0.6 – 1.0 | 0.45 – 0.6 |
//! | pastel | 0.3 – 0.4 | 0.45 – 0.6 |
//! | dark | 0.8 | 0.1 |
//!
//! The generator is a xorshift64* PRNG. It is small, fast and seedable,
//! which is all color picking needs; it is not suitable for anything
//! security-sensitive.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{Color, ColorHsl, to_rgb};

/// Errors raised when building an [`HslBand`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BandError {
    #[error("{component} range {lo}..={hi} is reversed")]
    Reversed {
        component: &'static str,
        lo: f32,
        hi: f32,
    },
    #[error("{component} range {lo}..={hi} is outside [0, 1]")]
    OutOfRange {
        component: &'static str,
        lo: f32,
        hi: f32,
    },
}

/// Inclusive saturation and lightness ranges to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslBand {
    /// `(min, max)` saturation.
    pub saturation: (f32, f32),
    /// `(min, max)` lightness.
    pub lightness: (f32, f32),
}

impl HslBand {
    /// Vivid, mid-lightness colors.
    pub const BRIGHT: Self = Self {
        saturation: (0.6, 1.0),
        lightness: (0.45, 0.6),
    };
    /// Soft, low-saturation colors.
    pub const PASTEL: Self = Self {
        saturation: (0.3, 0.4),
        lightness: (0.45, 0.6),
    };
    /// Deep, strongly tinted near-blacks.
    pub const DARK: Self = Self {
        saturation: (0.8, 0.8),
        lightness: (0.1, 0.1),
    };

    /// Build a band, checking both ranges are ordered and inside `[0, 1]`.
    pub fn new(saturation: (f32, f32), lightness: (f32, f32)) -> Result<Self, BandError> {
        check_range("saturation", saturation)?;
        check_range("lightness", lightness)?;
        Ok(Self {
            saturation,
            lightness,
        })
    }

    /// A band pinned to a single saturation and lightness.
    pub const fn fixed(saturation: f32, lightness: f32) -> Self {
        Self {
            saturation: (saturation, saturation),
            lightness: (lightness, lightness),
        }
    }
}

fn check_range(component: &'static str, (lo, hi): (f32, f32)) -> Result<(), BandError> {
    if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) {
        return Err(BandError::OutOfRange { component, lo, hi });
    }
    if lo > hi {
        return Err(BandError::Reversed { component, lo, hi });
    }
    Ok(())
}

/// Seedable source of random colors.
#[derive(Debug, Clone)]
pub struct ColorRng {
    state: u64,
}

impl ColorRng {
    /// Create a generator from a seed. A zero seed is remapped, since
    /// xorshift would otherwise emit zeros forever.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Create a generator seeded from the system clock.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_else(|e| {
                tracing::warn!("system clock before UNIX epoch, using fixed seed: {e}");
                0
            });
        Self::new(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in `[min, max)`. For some bounds f32 rounding can
    /// still return `max` itself.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Random hue with saturation and lightness drawn from `band`.
    pub fn hsl_in_band(&mut self, band: &HslBand) -> ColorHsl {
        let h = self.next_f32();
        let s = self.range(band.saturation.0, band.saturation.1);
        let l = self.range(band.lightness.0, band.lightness.1);
        ColorHsl::new(h, s, l)
    }

    /// Random opaque color in `band`.
    pub fn random_in_band(&mut self, band: &HslBand) -> Color {
        to_rgb(self.hsl_in_band(band))
    }

    /// Random vivid color.
    pub fn random_bright_color(&mut self) -> Color {
        self.random_in_band(&HslBand::BRIGHT)
    }

    /// Random pastel color.
    pub fn random_pastel_color(&mut self) -> Color {
        self.random_in_band(&HslBand::PASTEL)
    }

    /// Random dark color.
    pub fn random_dark_color(&mut self) -> Color {
        self.random_in_band(&HslBand::DARK)
    }

    /// Random hue at a fixed saturation and lightness.
    pub fn random_color(&mut self, saturation: f32, lightness: f32) -> Color {
        self.random_in_band(&HslBand::fixed(saturation, lightness))
    }
}

impl Default for ColorRng {
    fn default() -> Self {
        Self::from_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::to_hsl;

    const TOLERANCE: f32 = 1e-4;

    fn assert_in_band(hsl: ColorHsl, band: &HslBand) {
        let (s_lo, s_hi) = band.saturation;
        let (l_lo, l_hi) = band.lightness;
        assert!(
            hsl.s >= s_lo - TOLERANCE && hsl.s <= s_hi + TOLERANCE,
            "saturation {:.6} outside {s_lo}..={s_hi}",
            hsl.s
        );
        assert!(
            hsl.l >= l_lo - TOLERANCE && hsl.l <= l_hi + TOLERANCE,
            "lightness {:.6} outside {l_lo}..={l_hi}",
            hsl.l
        );
    }

    #[test]
    fn test_bright_colors_stay_in_band() {
        let mut rng = ColorRng::new(42);
        for _ in 0..10_000 {
            let c = rng.random_bright_color();
            assert_eq!(c.a, 1.0);
            assert_in_band(to_hsl(c), &HslBand::BRIGHT);
        }
    }

    #[test]
    fn test_pastel_and_dark_colors_stay_in_band() {
        let mut rng = ColorRng::new(7);
        for _ in 0..2_000 {
            assert_in_band(to_hsl(rng.random_pastel_color()), &HslBand::PASTEL);
            assert_in_band(to_hsl(rng.random_dark_color()), &HslBand::DARK);
        }
    }

    #[test]
    fn test_random_color_uses_given_saturation_and_lightness() {
        let mut rng = ColorRng::new(99);
        for _ in 0..500 {
            let hsl = to_hsl(rng.random_color(0.5, 0.3));
            assert!((hsl.s - 0.5).abs() < TOLERANCE);
            assert!((hsl.l - 0.3).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_hue_is_roughly_uniform() {
        let mut rng = ColorRng::new(1234);
        let mut buckets = [0u32; 10];
        let samples = 20_000;
        for _ in 0..samples {
            let h = rng.hsl_in_band(&HslBand::BRIGHT).h;
            assert!((0.0..1.0).contains(&h), "hue {h}");
            buckets[((h * 10.0) as usize).min(9)] += 1;
        }
        let expected = samples / 10;
        for (i, &count) in buckets.iter().enumerate() {
            let deviation = (count as i64 - expected as i64).unsigned_abs();
            assert!(deviation < expected as u64 / 10, "bucket {i}: {count}");
        }
    }

    #[test]
    fn test_range_is_half_open() {
        let mut rng = ColorRng::new(31);
        for _ in 0..10_000 {
            let v = rng.range(0.0, 0.5);
            assert!((0.0..0.5).contains(&v), "{v}");
            let w = rng.range(-1.0, 0.0);
            assert!((-1.0..0.0).contains(&w), "{w}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ColorRng::new(5);
        let mut b = ColorRng::new(5);
        for _ in 0..100 {
            assert_eq!(a.random_bright_color(), b.random_bright_color());
        }
    }

    #[test]
    fn test_zero_seed_still_produces_values() {
        let mut rng = ColorRng::new(0);
        let values: Vec<f32> = (0..8).map(|_| rng.next_f32()).collect();
        assert!(values.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_band_validation() {
        assert!(HslBand::new((0.2, 0.4), (0.5, 0.5)).is_ok());
        assert_eq!(
            HslBand::new((0.6, 0.4), (0.5, 0.5)),
            Err(BandError::Reversed {
                component: "saturation",
                lo: 0.6,
                hi: 0.4
            })
        );
        assert!(matches!(
            HslBand::new((0.2, 0.4), (0.5, 1.5)),
            Err(BandError::OutOfRange {
                component: "lightness",
                ..
            })
        ));
    }

    #[test]
    fn test_band_deserializes_from_json() {
        let band: HslBand =
            serde_json::from_str(r#"{"saturation":[0.6,1.0],"lightness":[0.45,0.6]}"#).unwrap();
        assert_eq!(band, HslBand::BRIGHT);
    }
}

//! Hue-Lightness-Saturation conversions.
//!
//! These follow the classic `colorsys` formulas: all components live in
//! `[0, 1]`, hue wraps around at 1.0, and achromatic colors report hue and
//! saturation of zero.

use crate::hex::Color;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// A color in HLS space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl Hls {
    #[must_use]
    pub const fn new(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self {
            hue,
            lightness,
            saturation,
        }
    }

    /// Quantize back into an opaque 8-bit [`Color`].
    #[must_use]
    pub fn to_color(self) -> Color {
        let (r, g, b) = hls_to_rgb(self.hue, self.lightness, self.saturation);
        Color::from_unit_rgb(r, g, b)
    }
}

impl From<Color> for Hls {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.to_unit_rgb();
        let (hue, lightness, saturation) = rgb_to_hls(r, g, b);
        Self::new(hue, lightness, saturation)
    }
}

/// Convert unit RGB to `(hue, lightness, saturation)`.
#[must_use]
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let lightness = sum / 2.0;
    if range == 0.0 {
        return (0.0, lightness, 0.0);
    }

    let saturation = if lightness <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max - min)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((hue / 6.0).rem_euclid(1.0), lightness, saturation)
}

/// Convert `(hue, lightness, saturation)` back to unit RGB.
#[must_use]
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;
    (
        channel(m1, m2, hue + ONE_THIRD),
        channel(m1, m2, hue),
        channel(m1, m2, hue - ONE_THIRD),
    )
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

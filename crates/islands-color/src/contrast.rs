//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! See <https://www.w3.org/WAI/WCAG21/Understanding/contrast-minimum.html>.
//! Alpha channels are ignored: contrast is measured between the opaque RGB
//! values.

use crate::hex::Color;

/// Minimum contrast for normal text at level AA.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum contrast for large text (and UI glyphs) at level AA.
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of 8-bit sRGB channels, in `[0, 1]`.
#[must_use]
pub fn relative_luminance_rgb(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Relative luminance of a [`Color`].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    relative_luminance_rgb(color.r(), color.g(), color.b())
}

/// Contrast ratio between two colors, from 1.0 (identical) to 21.0.
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

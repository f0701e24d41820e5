//! Property-based tests for the color math.
//!
//! 1. Hex round trip reproduces unit RGB within one 8-bit step, never above.
//! 2. Contrast ratio is symmetric.
//! 3. Contrast ratio of a color with itself is exactly 1.0.
//! 4. Contrast ratio stays within the WCAG range [1, 21].
//! 5. `lighten(_, 0)` is the identity and `lighten(_, 1)` is white.
//! 6. Lightening never lowers luminance.
//! 7. HLS round trip through 8-bit channels moves each channel by at most one.

use islands_color::{
    Color, contrast_ratio, hex_to_rgb, hls_to_rgb, relative_luminance, rgb_to_hex, rgb_to_hls,
};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

fn unit() -> impl Strategy<Value = f64> {
    (0u32..=10_000).prop_map(|v| f64::from(v) / 10_000.0)
}

const ONE_STEP: f64 = 1.0 / 255.0 + 1e-12;

proptest! {
    #[test]
    fn hex_round_trip_is_within_quantization(r in unit(), g in unit(), b in unit()) {
        let hex = rgb_to_hex(r, g, b);
        let (r2, g2, b2) = hex_to_rgb(&hex).unwrap();
        for (before, after) in [(r, r2), (g, g2), (b, b2)] {
            prop_assert!(after <= before + 1e-12);
            prop_assert!(before - after < ONE_STEP);
        }
    }

    #[test]
    fn hex_string_form_is_canonical(color in any_color()) {
        let text = color.to_string();
        prop_assert_eq!(text.len(), 7);
        prop_assert!(text.starts_with('#'));
        prop_assert!(text[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        prop_assert_eq!(Color::parse(&text).unwrap(), color);
    }

    #[test]
    fn contrast_is_symmetric(a in any_color(), b in any_color()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn contrast_with_self_is_one(color in any_color()) {
        prop_assert_eq!(contrast_ratio(color, color), 1.0);
    }

    #[test]
    fn contrast_stays_in_wcag_range(a in any_color(), b in any_color()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio));
    }

    #[test]
    fn lighten_endpoints_hold(color in any_color()) {
        prop_assert_eq!(color.lighten(0.0), color);
        prop_assert_eq!(color.lighten(1.0), Color::WHITE);
    }

    #[test]
    fn lighten_never_darkens(color in any_color(), factor in unit()) {
        prop_assert!(relative_luminance(color.lighten(factor)) >= relative_luminance(color));
    }

    #[test]
    fn hls_round_trip_is_visually_close(color in any_color()) {
        let (r, g, b) = color.to_unit_rgb();
        let (h, l, s) = rgb_to_hls(r, g, b);
        let (r2, g2, b2) = hls_to_rgb(h, l, s);
        let back = Color::from_unit_rgb(r2, g2, b2);
        prop_assert!(color.r().abs_diff(back.r()) <= 1);
        prop_assert!(color.g().abs_diff(back.g()) <= 1);
        prop_assert!(color.b().abs_diff(back.b()) <= 1);
    }
}

#[test]
fn maximum_contrast_is_twenty_one() {
    let black = Color::parse("#000000").unwrap();
    let white = Color::parse("#ffffff").unwrap();
    assert!((contrast_ratio(black, white) - 21.0).abs() < 1e-9);
}

use crate::hex::Color;
use crate::hls::Hls;

impl Color {
    /// Move every channel toward white: `old + (255 - old) * factor`,
    /// truncated.
    ///
    /// `factor` is clamped to `[0, 1]`; 0 returns the color unchanged and 1
    /// returns white. An explicit alpha channel is carried over.
    #[must_use]
    pub fn lighten(self, factor: f64) -> Self {
        let factor = unit(factor);
        let lift = |channel: u8| {
            let old = f64::from(channel);
            (old + (255.0 - old) * factor).trunc() as u8
        };
        self.map_channels(lift)
    }

    /// Move every channel toward black: `old * (1 - factor)`.
    #[must_use]
    pub fn darken(self, factor: f64) -> Self {
        let factor = unit(factor);
        let sink = |channel: u8| (f64::from(channel) * (1.0 - factor)).trunc() as u8;
        self.map_channels(sink)
    }

    /// Shift HLS lightness and saturation by the given deltas, keeping hue.
    ///
    /// Both components are floored at 0.0. Alpha is carried over.
    #[must_use]
    pub fn adjust_hls(self, lightness_delta: f64, saturation_delta: f64) -> Self {
        let hls = Hls::from(self);
        let shifted = Hls::new(
            hls.hue,
            (hls.lightness + lightness_delta).max(0.0),
            (hls.saturation + saturation_delta).max(0.0),
        );
        self.keep_alpha(shifted.to_color())
    }

    /// Retarget HLS lightness and saturation, keeping hue.
    #[must_use]
    pub fn with_hls_lightness(self, lightness: f64, saturation: f64) -> Self {
        let hls = Hls::from(self);
        self.keep_alpha(Hls::new(hls.hue, lightness.max(0.0), saturation.max(0.0)).to_color())
    }

    /// Retarget HLS lightness only, keeping hue and saturation.
    #[must_use]
    pub fn with_lightness(self, lightness: f64) -> Self {
        let hls = Hls::from(self);
        self.with_hls_lightness(lightness, hls.saturation)
    }

    fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        let mapped = Self::rgb(f(self.r()), f(self.g()), f(self.b()));
        self.keep_alpha(mapped)
    }

    fn keep_alpha(self, derived: Self) -> Self {
        match self.alpha() {
            Some(alpha) => derived.with_alpha(alpha),
            None => derived,
        }
    }
}

fn unit(factor: f64) -> f64 {
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_endpoints() {
        let accent = Color::rgb(0xff, 0x61, 0x88);
        assert_eq!(accent.lighten(0.0), accent);
        assert_eq!(accent.lighten(1.0), Color::WHITE);
    }

    #[test]
    fn lighten_moves_halfway_to_white() {
        assert_eq!(Color::rgb(0, 100, 255).lighten(0.5), Color::rgb(127, 177, 255));
    }

    #[test]
    fn lighten_factor_is_clamped() {
        let color = Color::rgb(10, 20, 30);
        assert_eq!(color.lighten(-1.0), color);
        assert_eq!(color.lighten(7.0), Color::WHITE);
    }

    #[test]
    fn darken_endpoints() {
        let color = Color::rgb(0x78, 0xdc, 0xe8);
        assert_eq!(color.darken(0.0), color);
        assert_eq!(color.darken(1.0), Color::BLACK);
    }

    #[test]
    fn adjustments_keep_alpha() {
        let color = Color::rgba(0x40, 0x3e, 0x41, 0x80);
        assert_eq!(color.lighten(1.0), Color::rgba(255, 255, 255, 0x80));
        assert_eq!(color.adjust_hls(0.1, 0.0).alpha(), Some(0x80));
    }

    #[test]
    fn adjust_hls_floors_at_zero() {
        let dark = Color::rgb(0x10, 0x08, 0x08);
        assert_eq!(dark.adjust_hls(-0.5, -0.5), Color::BLACK);
    }

    #[test]
    fn adjust_hls_preserves_hue() {
        let accent = Color::rgb(0xa9, 0xdc, 0x76);
        let before = Hls::from(accent);
        let after = Hls::from(accent.adjust_hls(-0.18, -0.12));
        assert!((before.hue - after.hue).abs() < 0.01);
        assert!((before.lightness - 0.18 - after.lightness).abs() < 0.01);
    }

    #[test]
    fn with_hls_lightness_hits_target() {
        let background = Color::rgb(0x22, 0x1f, 0x22);
        let hls = Hls::from(background.with_hls_lightness(0.98, 0.02));
        assert!((hls.lightness - 0.98).abs() < 0.005);
    }
}

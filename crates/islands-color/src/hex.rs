//! The [`Color`] value type and hex string conversions.
//!
//! Colors are stored as 8-bit channels. The text form is always `#`
//! followed by lowercase hex digits: six for opaque colors, eight when an
//! explicit alpha channel was given. The width of the source string is
//! preserved so that `#00000000` does not collapse into `#000000`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// A 24-bit RGB color with an optional explicit alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: Option<u8>,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black, written as `#00000000`.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create an opaque color (six-digit form).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Create a color with an explicit alpha channel (eight-digit form).
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(a),
        }
    }

    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The explicit alpha channel, if the color carries one.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> Option<u8> {
        self.alpha
    }

    /// Replace (or add) the alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    /// Parse `#rrggbb`, `#rrggbbaa`, or the same without the leading `#`.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorError::format(input, "non-hex character"));
        }
        let channel = |index: usize| -> Result<u8> {
            u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16)
                .map_err(|_| ColorError::format(input, "non-hex character"))
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, channel(3)?)),
            _ => Err(ColorError::format(input, "expected 6 or 8 hex digits")),
        }
    }

    /// Build an opaque color from unit RGB channels.
    ///
    /// Each channel is clamped to `[0, 1]`, scaled to 255 and truncated, so
    /// `0.999` maps to `0xfe`.
    #[must_use]
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(quantize(r), quantize(g), quantize(b))
    }

    /// The RGB channels normalized to `[0, 1]`. Alpha is ignored.
    #[must_use]
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

fn quantize(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).trunc() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if let Some(alpha) = self.alpha {
            write!(f, "{alpha:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

/// Parse a six-digit hex color into unit RGB channels.
///
/// Unlike [`Color::parse`], an alpha suffix is rejected.
pub fn hex_to_rgb(input: &str) -> Result<(f64, f64, f64)> {
    let color = Color::parse(input)?;
    if color.alpha().is_some() {
        return Err(ColorError::format(input, "expected 6 hex digits"));
    }
    Ok(color.to_unit_rgb())
}

/// Format unit RGB channels as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Color::from_unit_rgb(r, g, b).to_string()
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ColorVisitor;

        impl serde::de::Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color string such as \"#ff6188\"")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> std::result::Result<Color, E> {
                Color::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

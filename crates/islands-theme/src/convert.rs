//! Dark → light palette derivation.
//!
//! Every role class gets its own fixed transform in HLS space:
//!
//! - backgrounds are retargeted to a near-white lightness with almost no
//!   saturation, keeping hue;
//! - the text role becomes a fixed dark literal;
//! - accents lose saturation and lightness so they hold up on a light
//!   background;
//! - the dimmed ramp is reversed, so the lightest dimmed color of the dark
//!   palette becomes the darkest of the light one.

use islands_color::Color;

use crate::error::Result;
use crate::palette::{Palette, roles};

/// Parameters of the dark → light derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct LightConversion {
    /// Background roles with their target HLS lightness.
    pub backgrounds: Vec<(String, f64)>,
    pub background_saturation: f64,
    pub text_role: String,
    pub text: Color,
    pub accents: Vec<String>,
    pub accent_lightness_delta: f64,
    pub accent_saturation_delta: f64,
    /// Dimmed roles, ordered lightest to darkest in the dark palette.
    pub dimmed: Vec<String>,
    pub dimmed_base_lightness: f64,
    pub dimmed_lightness_step: f64,
}

impl Default for LightConversion {
    fn default() -> Self {
        Self {
            backgrounds: vec![
                (roles::BACKGROUND.to_string(), 0.98),
                (roles::DARK1.to_string(), 0.96),
                (roles::DARK2.to_string(), 0.94),
            ],
            background_saturation: 0.02,
            text_role: roles::TEXT.to_string(),
            text: Color::rgb(0x2d, 0x2a, 0x2e),
            accents: roles::ACCENTS.iter().map(|role| (*role).to_string()).collect(),
            accent_lightness_delta: -0.18,
            accent_saturation_delta: -0.12,
            dimmed: roles::DIMMED.iter().map(|role| (*role).to_string()).collect(),
            dimmed_base_lightness: 0.20,
            dimmed_lightness_step: 0.12,
        }
    }
}

impl LightConversion {
    /// Derive the light palette. Every configured role must exist in `dark`.
    pub fn convert(&self, dark: &Palette) -> Result<Palette> {
        let mut light = Palette::new();

        for (role, lightness) in &self.backgrounds {
            let color = dark.require(role, "light conversion (background)")?;
            light.insert(
                role.clone(),
                color.with_hls_lightness(*lightness, self.background_saturation),
            );
        }

        light.insert(self.text_role.clone(), self.text);

        for role in &self.accents {
            let color = dark.require(role, "light conversion (accent)")?;
            light.insert(
                role.clone(),
                color.adjust_hls(self.accent_lightness_delta, self.accent_saturation_delta),
            );
        }

        let count = self.dimmed.len();
        for (index, role) in self.dimmed.iter().enumerate() {
            let color = dark.require(role, "light conversion (dimmed)")?;
            light.insert(role.clone(), color.with_lightness(self.dimmed_lightness(count, index)));
        }

        tracing::debug!(roles = light.len(), "derived light palette");
        Ok(light)
    }

    /// Target lightness of the dimmed role at `index` (0-based) of `count`.
    ///
    /// Position `count - index` runs from `count` for the first (lightest)
    /// role down to 1 for the last.
    #[must_use]
    pub fn dimmed_lightness(&self, count: usize, index: usize) -> f64 {
        let position = count.saturating_sub(index);
        self.dimmed_base_lightness + position.saturating_sub(1) as f64 * self.dimmed_lightness_step
    }
}

/// [`LightConversion::convert`] with the default parameters.
pub fn convert_palette_to_light(dark: &Palette) -> Result<Palette> {
    LightConversion::default().convert(dark)
}

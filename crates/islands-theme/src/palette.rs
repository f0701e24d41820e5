//! Named color palettes.
//!
//! A palette file is a flat JSON object of role name → hex color. Keys that
//! start with `_` carry metadata (comments, provenance) and are skipped on
//! load. Entry order is kept so regenerated files diff cleanly.

use indexmap::IndexMap;
use islands_color::Color;
use serde::Serialize;

use crate::error::{Result, ThemeError};

/// Well-known role names of the Monokai Islands palettes.
pub mod roles {
    pub const BACKGROUND: &str = "background";
    pub const DARK1: &str = "dark1";
    pub const DARK2: &str = "dark2";
    pub const TEXT: &str = "text";
    pub const ACCENTS: [&str; 6] = ["accent1", "accent2", "accent3", "accent4", "accent5", "accent6"];
    pub const DIMMED: [&str; 5] = ["dimmed1", "dimmed2", "dimmed3", "dimmed4", "dimmed5"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: IndexMap<String, Color>,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a palette from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(content)?;
        let mut palette = Self::new();
        for (role, value) in raw {
            if role.starts_with('_') {
                continue;
            }
            let text = value
                .as_str()
                .ok_or_else(|| ThemeError::RoleNotAColor { role: role.clone() })?;
            let color = Color::parse(text).map_err(|source| ThemeError::RoleColor {
                role: role.clone(),
                source,
            })?;
            palette.insert(role, color);
        }
        Ok(palette)
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    pub fn insert(&mut self, role: impl Into<String>, color: Color) -> Option<Color> {
        self.colors.insert(role.into(), color)
    }

    #[must_use]
    pub fn get(&self, role: &str) -> Option<Color> {
        self.colors.get(role).copied()
    }

    /// Look up a role, failing with [`ThemeError::MissingRole`].
    pub fn require(&self, role: &str, context: &str) -> Result<Color> {
        self.get(role)
            .ok_or_else(|| ThemeError::missing_role(role, context))
    }

    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.colors.contains_key(role)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(role, color)| (role.as_str(), *color))
    }
}

impl<K: Into<String>> FromIterator<(K, Color)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, Color)>>(iter: I) -> Self {
        let mut palette = Self::new();
        for (role, color) in iter {
            palette.insert(role, color);
        }
        palette
    }
}

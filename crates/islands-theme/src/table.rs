//! The flat `colors` table of a theme document.
//!
//! The table is the palette followed by derived entries: alpha variants of
//! base roles, lightened or darkened base roles, and hand-authored literals.
//! Derived entries reference base palette roles only.

use indexmap::IndexMap;
use islands_color::Color;
use serde::Deserialize;

use crate::error::Result;
use crate::palette::Palette;

/// Role name → color, in output order.
pub type ColorTable = IndexMap<String, Color>;

/// Derived entry name → rule, in declaration order.
pub type DerivedColors = IndexMap<String, DerivedColor>;

/// How a derived color entry is computed.
///
/// In catalog JSON a rule is either a hex string or an object naming its
/// `base` role plus exactly one of `alpha`, `lighten`, `darken`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DerivedColor {
    Literal(Color),
    Alpha { base: String, alpha: u8 },
    Lighten { base: String, lighten: f64 },
    Darken { base: String, darken: f64 },
}

impl DerivedColor {
    #[must_use]
    pub fn alpha(base: impl Into<String>, alpha: u8) -> Self {
        Self::Alpha {
            base: base.into(),
            alpha,
        }
    }

    /// The palette role this rule reads, if any.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Alpha { base, .. } | Self::Lighten { base, .. } | Self::Darken { base, .. } => {
                Some(base)
            }
        }
    }

    fn resolve(&self, name: &str, palette: &Palette) -> Result<Color> {
        let base = |role: &str| palette.require(role, &format!("derived color {name:?}"));
        Ok(match self {
            Self::Literal(color) => *color,
            Self::Alpha { base: role, alpha } => base(role)?.with_alpha(*alpha),
            Self::Lighten { base: role, lighten } => base(role)?.lighten(*lighten),
            Self::Darken { base: role, darken } => base(role)?.darken(*darken),
        })
    }
}

/// Merge the palette with its derived entries.
///
/// Fails with [`crate::ThemeError::MissingRole`] when a rule names a role
/// the palette lacks. A derived name equal to a palette role replaces the
/// palette value in place.
pub fn build_color_table(palette: &Palette, derived: &DerivedColors) -> Result<ColorTable> {
    let mut table: ColorTable = palette
        .iter()
        .map(|(role, color)| (role.to_string(), color))
        .collect();
    for (name, rule) in derived {
        let color = rule.resolve(name, palette)?;
        table.insert(name.clone(), color);
    }
    tracing::debug!(
        base = palette.len(),
        derived = derived.len(),
        "built color table"
    );
    Ok(table)
}

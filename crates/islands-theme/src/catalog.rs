//! Theme catalogs: derived-color rules plus UI bindings.
//!
//! A catalog is plain data handed to [`crate::ThemeDocument::generate`]. The
//! built-in Islands catalog ships inside the crate; alternatives load from
//! JSON with the same shape:
//!
//! ```json
//! {
//!   "derived": { "transparent": "#00000000",
//!                "selectionBackground": { "base": "dimmed5", "alpha": 128 } },
//!   "ui": { "Tree.selectionBackground": "selectionBackground", "Island.arc": 20 }
//! }
//! ```

use serde::Deserialize;

use crate::binding::UiBindings;
use crate::error::Result;
use crate::table::DerivedColors;

const ISLANDS_CATALOG: &str = include_str!("../catalog/islands.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeCatalog {
    #[serde(default)]
    pub derived: DerivedColors,
    #[serde(default)]
    pub ui: UiBindings,
}

impl ThemeCatalog {
    /// The catalog used for the published Monokai Islands themes.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(ISLANDS_CATALOG)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

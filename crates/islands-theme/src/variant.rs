use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

const DEFAULT_AUTHOR: &str = "Bart Smykla";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    pub const ALL: [Self; 2] = [Self::Dark, Self::Light];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// `monokai-<variant>.json`
    #[must_use]
    pub fn palette_file_name(self) -> String {
        format!("monokai-{}.json", self.as_str())
    }

    /// `monokai-islands-<variant>.theme.json`
    #[must_use]
    pub fn theme_file_name(self) -> String {
        format!("monokai-islands-{}.theme.json", self.as_str())
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ThemeError::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}

/// Top-level metadata fields of a theme document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMetadata {
    pub name: String,
    pub dark: bool,
    pub author: String,
    pub editor_scheme: String,
    pub parent_theme: String,
}

impl ThemeMetadata {
    #[must_use]
    pub fn for_variant(variant: ThemeVariant) -> Self {
        let (label, parent) = match variant {
            ThemeVariant::Dark => ("Dark", "Islands Dark"),
            ThemeVariant::Light => ("Light", "Islands Light"),
        };
        Self {
            name: format!("Monokai Islands {label}"),
            dark: variant.is_dark(),
            author: DEFAULT_AUTHOR.to_string(),
            editor_scheme: format!("/editor-schemes/monokai-islands-{variant}.xml"),
            parent_theme: parent.to_string(),
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

//! UI bindings: dot-path keys mapped to color roles or literal values.

use indexmap::IndexMap;
use islands_color::Color;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ThemeError};
use crate::table::ColorTable;

/// Dot path → resolved JSON value, in declaration order.
pub type FlatTable = IndexMap<String, Value>;

const LITERAL_KEY: &str = "literal";

/// The right-hand side of a UI binding.
///
/// Catalog JSON is classified by shape: a string starting with `#` is a
/// literal color, any other string names a color-table role, and numbers,
/// booleans, arrays, and objects pass through unchanged. A string that must
/// not be read as a role is written `{"literal": "..."}`; the wrapper is
/// removed and the inner value passes through.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum BindingValue {
    Role(String),
    Color(Color),
    Literal(Value),
}

impl TryFrom<Value> for BindingValue {
    type Error = ThemeError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) if text.starts_with('#') => Ok(Self::Color(Color::parse(&text)?)),
            Value::String(role) => Ok(Self::Role(role)),
            Value::Object(mut map) if map.len() == 1 && map.contains_key(LITERAL_KEY) => {
                Ok(Self::Literal(map.remove(LITERAL_KEY).unwrap_or(Value::Null)))
            }
            other => Ok(Self::Literal(other)),
        }
    }
}

impl BindingValue {
    #[must_use]
    pub fn role(name: impl Into<String>) -> Self {
        Self::Role(name.into())
    }

    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }
}

/// Ordered UI binding catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct UiBindings {
    entries: IndexMap<String, BindingValue>,
}

impl UiBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `path` to a color-table role.
    #[must_use]
    pub fn role(mut self, path: impl Into<String>, role: impl Into<String>) -> Self {
        self.insert(path, BindingValue::role(role));
        self
    }

    /// Bind `path` to a literal value.
    #[must_use]
    pub fn literal(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(path, BindingValue::literal(value));
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, value: BindingValue) -> Option<BindingValue> {
        self.entries.insert(path.into(), value)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&BindingValue> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindingValue)> {
        self.entries.iter().map(|(path, value)| (path.as_str(), value))
    }
}

/// Check every role reference against the color table and flatten the
/// bindings into JSON values.
///
/// Role references stay role names in the output; the IDE resolves them
/// against the document's `colors` table.
pub fn resolve_bindings(bindings: &UiBindings, colors: &ColorTable) -> Result<FlatTable> {
    let mut flat = FlatTable::with_capacity(bindings.len());
    for (path, binding) in bindings.iter() {
        let value = match binding {
            BindingValue::Role(role) => {
                if !colors.contains_key(role) {
                    return Err(ThemeError::missing_role(
                        role.clone(),
                        format!("UI binding {path:?}"),
                    ));
                }
                Value::String(role.clone())
            }
            BindingValue::Color(color) => Value::String(color.to_string()),
            BindingValue::Literal(value) => value.clone(),
        };
        flat.insert(path.to_string(), value);
    }
    Ok(flat)
}

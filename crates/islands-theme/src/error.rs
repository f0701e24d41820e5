use islands_color::ColorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] ColorError),

    #[error("role {role:?}: {source}")]
    RoleColor { role: String, source: ColorError },

    #[error("role {role:?}: expected a hex color string")]
    RoleNotAColor { role: String },

    #[error("missing role {role:?} required by {context}")]
    MissingRole { role: String, context: String },

    #[error("unknown theme variant: {name}")]
    UnknownVariant { name: String },
}

impl ThemeError {
    #[must_use]
    pub fn missing_role(role: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingRole {
            role: role.into(),
            context: context.into(),
        }
    }
}

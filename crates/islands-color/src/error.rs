use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a `#`-optional string of hex digits of an accepted width.
    #[error("invalid hex color {input:?}: {reason}")]
    Format { input: String, reason: &'static str },
}

impl ColorError {
    #[must_use]
    pub fn format(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Format {
            input: input.into(),
            reason,
        }
    }
}

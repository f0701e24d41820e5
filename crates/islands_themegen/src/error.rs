use std::path::PathBuf;

use islands_theme::ThemeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemegenError>;

/// Exit status for a failed run, whether from contrast violations or a
/// fatal error.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum ThemegenError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: {source}")]
    Theme { path: PathBuf, source: ThemeError },

    #[error(transparent)]
    Generation(#[from] ThemeError),

    #[error("required path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("found {count} contrast issue(s)")]
    ContrastViolations { count: usize },
}

impl ThemegenError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn theme(path: impl Into<PathBuf>, source: ThemeError) -> Self {
        Self::Theme {
            path: path.into(),
            source,
        }
    }
}

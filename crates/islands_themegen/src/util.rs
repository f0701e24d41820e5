use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fastapi_output::RichOutput;
use islands_theme::Palette;
use tracing::Level;

use crate::error::{Result, ThemegenError};

/// Human-facing status lines, silenced by `--quiet`.
#[derive(Debug, Clone)]
pub struct CliOutput {
    inner: RichOutput,
    enabled: bool,
}

impl CliOutput {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            inner: RichOutput::auto(),
            enabled,
        }
    }

    pub fn rule(&self, title: Option<&str>) {
        if self.enabled {
            self.inner.rule(title);
        }
    }

    pub fn success(&self, message: &str) {
        if self.enabled {
            self.inner.success(message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.enabled {
            self.inner.warning(message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.enabled {
            self.inner.error(message);
        }
    }
}

/// Install the stderr log subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve `path` against `root` unless it is already absolute.
#[must_use]
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ThemegenError::io(path, source))
}

/// Read a file, returning `None` when it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ThemegenError::io(path, source)),
    }
}

pub fn read_string(path: &Path) -> Result<String> {
    read_optional(path)?.ok_or_else(|| ThemegenError::MissingPath {
        path: path.to_path_buf(),
    })
}

/// Load a palette file; `None` when the file does not exist.
pub fn load_palette(path: &Path) -> Result<Option<Palette>> {
    let Some(content) = read_optional(path)? else {
        tracing::warn!(path = %path.display(), "palette file not found");
        return Ok(None);
    };
    let palette =
        Palette::from_json_str(&content).map_err(|source| ThemegenError::theme(path, source))?;
    tracing::debug!(path = %path.display(), roles = palette.len(), "loaded palette");
    Ok(Some(palette))
}

/// Write `content`, creating parent directories first.
pub fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|source| ThemegenError::io(path, source))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// File stem used as a report section name.
#[must_use]
pub fn section_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

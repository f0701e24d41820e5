//! WCAG contrast checks over a palette.
//!
//! Requirements whose roles are missing from the palette are skipped, so a
//! palette under construction can be validated before every role exists.
//! Violations are collected rather than returned as errors; the caller
//! decides what a failing report means.

use std::fmt;

use islands_color::{WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT, contrast_ratio};
use serde::Serialize;

use crate::palette::{Palette, roles};

/// A `(foreground, background, minimum ratio)` triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastRequirement {
    pub foreground: String,
    pub background: String,
    pub minimum: f64,
}

impl ContrastRequirement {
    #[must_use]
    pub fn new(foreground: impl Into<String>, background: impl Into<String>, minimum: f64) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            minimum,
        }
    }
}

/// Text at AA normal level, accents at AA large level, and `dimmed3`
/// (comments) at AA normal level.
#[must_use]
pub fn default_requirements() -> Vec<ContrastRequirement> {
    let mut requirements = vec![
        ContrastRequirement::new(roles::TEXT, roles::BACKGROUND, WCAG_AA_NORMAL_TEXT),
        ContrastRequirement::new(roles::TEXT, roles::DARK1, WCAG_AA_NORMAL_TEXT),
    ];
    requirements.extend(
        roles::ACCENTS
            .iter()
            .map(|accent| ContrastRequirement::new(*accent, roles::BACKGROUND, WCAG_AA_LARGE_TEXT)),
    );
    requirements.push(ContrastRequirement::new(
        "dimmed3",
        roles::BACKGROUND,
        WCAG_AA_NORMAL_TEXT,
    ));
    requirements
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub foreground: String,
    pub background: String,
    pub actual: f64,
    pub required: f64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: {:.2}:1 (required: {:?}:1)",
            self.foreground, self.background, self.actual, self.required
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Requirements whose roles were all present.
    pub checked: usize,
    /// Requirements skipped for a missing role.
    pub skipped: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Report lines in the `  ❌ fg on bg: r:1 (required: m:1)` format.
    #[must_use]
    pub fn issue_lines(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|violation| format!("  ❌ {violation}"))
            .collect()
    }
}

/// Check every requirement in order.
#[must_use]
pub fn validate_palette(palette: &Palette, requirements: &[ContrastRequirement]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for requirement in requirements {
        let (Some(fg), Some(bg)) = (
            palette.get(&requirement.foreground),
            palette.get(&requirement.background),
        ) else {
            tracing::debug!(
                foreground = %requirement.foreground,
                background = %requirement.background,
                "skipping contrast check with missing role"
            );
            report.skipped += 1;
            continue;
        };

        report.checked += 1;
        let actual = contrast_ratio(fg, bg);
        if actual < requirement.minimum {
            report.violations.push(Violation {
                foreground: requirement.foreground.clone(),
                background: requirement.background.clone(),
                actual,
                required: requirement.minimum,
            });
        }
    }
    report
}

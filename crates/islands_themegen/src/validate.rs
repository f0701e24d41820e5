use std::path::{Path, PathBuf};

use clap::Args;
use islands_theme::{
    ContrastRequirement, ThemeVariant, ValidationReport, default_requirements, validate_palette,
};
use serde::Serialize;

use crate::cli::GlobalArgs;
use crate::error::{Result, ThemegenError};
use crate::util::{CliOutput, load_palette, section_name};

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Palette file to validate. Without it, the dark palette is checked.
    pub palette: Option<PathBuf>,

    #[arg(long = "palettes-dir", default_value = "palettes")]
    pub palettes_dir: PathBuf,

    /// Print the summary as JSON on stdout instead of report lines.
    #[arg(long)]
    pub json: bool,
}

/// One palette file to check, with its report heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionResult {
    pub name: String,
    pub path: PathBuf,
    /// `None` when the palette file was missing and the section skipped.
    pub report: Option<ValidationReport>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationSummary {
    pub sections: Vec<SectionResult>,
}

impl ValidationSummary {
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.sections
            .iter()
            .filter_map(|section| section.report.as_ref())
            .map(|report| report.violations.len())
            .sum()
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.violation_count() == 0
    }
}

/// The palettes checked when no file is named: the hand-authored dark
/// palette. The derived light palette trades accent contrast for hue and is
/// only checked on request.
#[must_use]
pub fn default_sections(palettes_dir: &Path) -> Vec<Section> {
    let path = palettes_dir.join(ThemeVariant::Dark.palette_file_name());
    vec![Section {
        name: section_name(&path),
        path,
    }]
}

/// Validate each section in order. Missing files are skipped; malformed
/// palettes abort the run.
pub fn validate_sections(
    sections: &[Section],
    requirements: &[ContrastRequirement],
) -> Result<ValidationSummary> {
    let mut summary = ValidationSummary::default();
    for section in sections {
        let report = load_palette(&section.path)?
            .map(|palette| validate_palette(&palette, requirements));
        summary.sections.push(SectionResult {
            name: section.name.clone(),
            path: section.path.clone(),
            report,
        });
    }
    Ok(summary)
}

pub fn print_summary(summary: &ValidationSummary, ui: &CliOutput) {
    for section in &summary.sections {
        let Some(report) = &section.report else {
            ui.warning(&format!("Skipping {}: file not found", section.name));
            continue;
        };
        ui.rule(Some(&section.name));
        if report.passed() {
            ui.success("All contrast ratios meet WCAG AA requirements");
        } else {
            for violation in &report.violations {
                ui.error(&violation.to_string());
            }
        }
    }

    let count = summary.violation_count();
    if count > 0 {
        ui.error(&format!("Found {count} contrast issues"));
    } else {
        ui.success("All palettes pass WCAG AA validation");
    }
}

/// Turn a finished summary into the command result.
pub fn finish(summary: &ValidationSummary) -> Result<()> {
    match summary.violation_count() {
        0 => Ok(()),
        count => Err(ThemegenError::ContrastViolations { count }),
    }
}

pub fn run_validate(global: &GlobalArgs, args: ValidateArgs) -> Result<()> {
    let sections = match &args.palette {
        Some(path) => vec![Section {
            name: section_name(path),
            path: global.path(path),
        }],
        None => default_sections(&global.path(&args.palettes_dir)),
    };

    let summary = validate_sections(&sections, &default_requirements())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, &global.output());
    }
    finish(&summary)
}

use std::path::PathBuf;

use clap::Args;
use islands_theme::{ThemeVariant, default_requirements};

use crate::cli::GlobalArgs;
use crate::convert::convert_file;
use crate::error::Result;
use crate::generate::{GenerateOptions, generate_themes, load_catalog};
use crate::validate::{default_sections, finish, print_summary, validate_sections};

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    #[arg(long = "palettes-dir", default_value = "palettes")]
    pub palettes_dir: PathBuf,

    #[arg(long = "output-dir", default_value = "resources/themes")]
    pub output_dir: PathBuf,

    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long)]
    pub author: Option<String>,

    /// Stop after generating themes.
    #[arg(long = "no-validate")]
    pub no_validate: bool,
}

pub fn run_build(global: &GlobalArgs, args: BuildArgs) -> Result<()> {
    let ui = global.output();
    let palettes_dir = global.path(&args.palettes_dir);

    ui.rule(Some("convert"));
    convert_file(
        &palettes_dir.join(ThemeVariant::Dark.palette_file_name()),
        &palettes_dir.join(ThemeVariant::Light.palette_file_name()),
        &ui,
    )?;

    ui.rule(Some("generate"));
    let catalog_path = args.catalog.as_deref().map(|path| global.path(path));
    let options = GenerateOptions {
        variants: ThemeVariant::ALL.to_vec(),
        palettes_dir: palettes_dir.clone(),
        output_dir: global.path(&args.output_dir),
        catalog: load_catalog(catalog_path.as_deref())?,
        author: args.author,
    };
    let written = generate_themes(&options, &ui)?;
    tracing::info!(themes = written.len(), "generated themes");

    if args.no_validate {
        return Ok(());
    }

    ui.rule(Some("validate"));
    let summary = validate_sections(&default_sections(&palettes_dir), &default_requirements())?;
    print_summary(&summary, &ui);
    finish(&summary)
}

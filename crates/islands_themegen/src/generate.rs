use std::path::{Path, PathBuf};

use clap::Args;
use islands_theme::{ThemeCatalog, ThemeDocument, ThemeMetadata, ThemeVariant};

use crate::cli::GlobalArgs;
use crate::error::{Result, ThemegenError};
use crate::util::{CliOutput, load_palette, read_string, write_string};

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Variant to generate; repeatable. Defaults to every variant.
    #[arg(long = "variant")]
    pub variants: Vec<ThemeVariant>,

    #[arg(long = "palettes-dir", default_value = "palettes")]
    pub palettes_dir: PathBuf,

    #[arg(long = "output-dir", default_value = "resources/themes")]
    pub output_dir: PathBuf,

    /// Catalog JSON replacing the built-in derived colors and UI bindings.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Override the `author` field of generated themes.
    #[arg(long)]
    pub author: Option<String>,
}

/// Resolved inputs of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub variants: Vec<ThemeVariant>,
    pub palettes_dir: PathBuf,
    pub output_dir: PathBuf,
    pub catalog: ThemeCatalog,
    pub author: Option<String>,
}

pub fn load_catalog(path: Option<&Path>) -> Result<ThemeCatalog> {
    match path {
        None => Ok(ThemeCatalog::builtin()?),
        Some(path) => {
            let content = read_string(path)?;
            ThemeCatalog::from_json_str(&content).map_err(|source| ThemegenError::theme(path, source))
        }
    }
}

pub fn run_generate(global: &GlobalArgs, args: GenerateArgs) -> Result<()> {
    let ui = global.output();
    let catalog_path = args.catalog.as_deref().map(|path| global.path(path));
    let options = GenerateOptions {
        variants: args.variants,
        palettes_dir: global.path(&args.palettes_dir),
        output_dir: global.path(&args.output_dir),
        catalog: load_catalog(catalog_path.as_deref())?,
        author: args.author,
    };
    generate_themes(&options, &ui)?;
    Ok(())
}

/// Generate every requested variant, skipping those without a palette.
/// Returns the written theme paths.
pub fn generate_themes(options: &GenerateOptions, ui: &CliOutput) -> Result<Vec<PathBuf>> {
    let variants: &[ThemeVariant] = if options.variants.is_empty() {
        &ThemeVariant::ALL
    } else {
        &options.variants
    };

    let mut written = Vec::with_capacity(variants.len());
    for &variant in variants {
        let palette_path = options.palettes_dir.join(variant.palette_file_name());
        let Some(palette) = load_palette(&palette_path)? else {
            ui.warning(&format!(
                "Skipping {variant}: palette not found at {}",
                palette_path.display()
            ));
            continue;
        };

        let mut metadata = ThemeMetadata::for_variant(variant);
        if let Some(author) = &options.author {
            metadata = metadata.with_author(author.clone());
        }
        let document = ThemeDocument::generate(&palette, metadata, &options.catalog)
            .map_err(|source| ThemegenError::theme(&palette_path, source))?;

        let theme_path = options.output_dir.join(variant.theme_file_name());
        write_string(&theme_path, &document.to_json_pretty()?)?;
        ui.success(&format!("Generated {variant} theme: {}", theme_path.display()));
        written.push(theme_path);
    }
    Ok(written)
}

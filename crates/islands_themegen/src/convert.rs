use std::path::{Path, PathBuf};

use clap::Args;
use islands_theme::{Palette, convert_palette_to_light};

use crate::cli::GlobalArgs;
use crate::error::{Result, ThemegenError};
use crate::util::{CliOutput, load_palette, write_string};

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Dark palette to read.
    #[arg(long, default_value = "palettes/monokai-dark.json")]
    pub input: PathBuf,

    /// Light palette to write.
    #[arg(long, default_value = "palettes/monokai-light.json")]
    pub output: PathBuf,
}

pub fn run_convert(global: &GlobalArgs, args: ConvertArgs) -> Result<()> {
    let ui = global.output();
    convert_file(&global.path(&args.input), &global.path(&args.output), &ui)?;
    Ok(())
}

/// Derive and write the light palette. Returns `None` when `input` is
/// missing, which is reported and skipped.
pub fn convert_file(input: &Path, output: &Path, ui: &CliOutput) -> Result<Option<Palette>> {
    let Some(dark) = load_palette(input)? else {
        ui.warning(&format!(
            "Skipping light palette: dark palette not found at {}",
            input.display()
        ));
        return Ok(None);
    };
    let light = convert_palette_to_light(&dark).map_err(|source| ThemegenError::theme(input, source))?;
    write_string(output, &light.to_json_pretty()?)?;
    ui.success(&format!("Generated light palette: {}", output.display()));
    Ok(Some(light))
}

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::convert::{ConvertArgs, run_convert};
use crate::error::Result;
use crate::generate::{GenerateArgs, run_generate};
use crate::pipeline::{BuildArgs, run_build};
use crate::util::{CliOutput, init_tracing, resolve};
use crate::validate::{ValidateArgs, run_validate};

#[derive(Debug, Parser)]
#[command(
    name = "islands_themegen",
    about = "Palette conversion, theme generation and contrast validation for Monokai Islands",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Directory that relative paths are resolved against.
    #[arg(long = "project-root", global = true, default_value = ".")]
    pub project_root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn path(&self, path: &Path) -> PathBuf {
        resolve(&self.project_root, path)
    }

    #[must_use]
    pub fn output(&self) -> CliOutput {
        CliOutput::new(!self.quiet)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive the light palette from the dark palette.
    Convert(ConvertArgs),

    /// Write theme JSON files from palette files.
    Generate(GenerateArgs),

    /// Check palettes against WCAG contrast requirements.
    Validate(ValidateArgs),

    /// Convert, generate, then validate.
    Build(BuildArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose, cli.global.quiet);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Commands::Convert(args) => run_convert(&global, args),
        Commands::Generate(args) => run_generate(&global, args),
        Commands::Validate(args) => run_validate(&global, args),
        Commands::Build(args) => run_build(&global, args),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use islands_theme::ThemeVariant;
    use tempfile::tempdir;

    use super::{Cli, Commands, GlobalArgs, run};
    use crate::convert::ConvertArgs;
    use crate::error::ThemegenError;
    use crate::generate::GenerateArgs;
    use crate::pipeline::BuildArgs;
    use crate::validate::ValidateArgs;

    const DARK_PALETTE: &str = include_str!("../../../palettes/monokai-dark.json");

    fn global(root: &std::path::Path) -> GlobalArgs {
        GlobalArgs {
            project_root: root.to_path_buf(),
            verbose: 0,
            quiet: true,
        }
    }

    fn seed_dark_palette(root: &std::path::Path) {
        fs::create_dir_all(root.join("palettes")).expect("palettes dir");
        fs::write(root.join("palettes/monokai-dark.json"), DARK_PALETTE).expect("palette");
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "islands_themegen",
            "generate",
            "--variant",
            "light",
            "-vv",
            "--project-root",
            "/tmp/islands",
        ]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.project_root, PathBuf::from("/tmp/islands"));
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.variants, vec![ThemeVariant::Light]);
        assert_eq!(args.output_dir, PathBuf::from("resources/themes"));
    }

    #[test]
    fn rejects_unknown_variant() {
        let result = Cli::try_parse_from(["islands_themegen", "generate", "--variant", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn validate_takes_optional_positional_palette() {
        let cli = Cli::parse_from(["islands_themegen", "validate", "custom.json"]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.palette, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn convert_command_writes_light_palette() {
        let temp = tempdir().expect("tempdir");
        seed_dark_palette(temp.path());
        run(Cli {
            global: global(temp.path()),
            command: Commands::Convert(ConvertArgs {
                input: PathBuf::from("palettes/monokai-dark.json"),
                output: PathBuf::from("palettes/monokai-light.json"),
            }),
        })
        .expect("convert");
        let light = fs::read_to_string(temp.path().join("palettes/monokai-light.json"))
            .expect("light palette");
        assert!(light.contains("\"text\": \"#2d2a2e\""));
    }

    #[test]
    fn generate_command_skips_missing_palettes() {
        let temp = tempdir().expect("tempdir");
        seed_dark_palette(temp.path());
        run(Cli {
            global: global(temp.path()),
            command: Commands::Generate(GenerateArgs {
                variants: Vec::new(),
                palettes_dir: PathBuf::from("palettes"),
                output_dir: PathBuf::from("resources/themes"),
                catalog: None,
                author: None,
            }),
        })
        .expect("generate");
        let themes = temp.path().join("resources/themes");
        assert!(themes.join("monokai-islands-dark.theme.json").is_file());
        assert!(!themes.join("monokai-islands-light.theme.json").exists());
    }

    #[test]
    fn validate_command_reports_violations_through_exit_code() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("flat.json");
        fs::write(&path, r##"{"text": "#221f22", "background": "#221f22"}"##).expect("palette");
        let error = run(Cli {
            global: global(temp.path()),
            command: Commands::Validate(ValidateArgs {
                palette: Some(PathBuf::from("flat.json")),
                palettes_dir: PathBuf::from("palettes"),
                json: false,
            }),
        })
        .expect_err("identical colors must fail");
        assert!(matches!(error, ThemegenError::ContrastViolations { count: 1 }));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn build_command_runs_the_whole_pipeline() {
        let temp = tempdir().expect("tempdir");
        seed_dark_palette(temp.path());
        let result = run(Cli {
            global: global(temp.path()),
            command: Commands::Build(BuildArgs {
                palettes_dir: PathBuf::from("palettes"),
                output_dir: PathBuf::from("resources/themes"),
                catalog: None,
                author: None,
                no_validate: false,
            }),
        });
        assert!(result.is_ok(), "{result:?}");
        let themes = temp.path().join("resources/themes");
        assert!(themes.join("monokai-islands-dark.theme.json").is_file());
        assert!(themes.join("monokai-islands-light.theme.json").is_file());
    }
}

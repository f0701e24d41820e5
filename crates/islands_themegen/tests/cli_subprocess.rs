use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

const DARK_PALETTE: &str = include_str!("../../../palettes/monokai-dark.json");

fn themegen_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_islands_themegen"))
}

fn run_in(root: &Path, args: &[&str]) -> Output {
    Command::new(themegen_bin())
        .arg("--project-root")
        .arg(root)
        .args(args)
        .output()
        .expect("spawn islands_themegen")
}

fn seed_dark_palette(root: &Path) {
    fs::create_dir_all(root.join("palettes")).expect("palettes dir");
    fs::write(root.join("palettes/monokai-dark.json"), DARK_PALETTE).expect("dark palette");
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("json")
}

#[test]
fn build_then_validate_succeeds_on_shipped_palette() {
    let temp = tempdir().expect("tempdir");
    seed_dark_palette(temp.path());

    let build = run_in(temp.path(), &["--quiet", "build"]);
    assert_eq!(
        build.status.code(),
        Some(0),
        "{}",
        String::from_utf8_lossy(&build.stderr)
    );

    let dark = read_json(&temp.path().join("resources/themes/monokai-islands-dark.theme.json"));
    assert_eq!(dark["name"], "Monokai Islands Dark");
    assert_eq!(dark["dark"], true);
    assert_eq!(dark["parentTheme"], "Islands Dark");
    assert_eq!(dark["editorScheme"], "/editor-schemes/monokai-islands-dark.xml");
    assert_eq!(dark["colors"]["background"], "#221f22");
    assert_eq!(dark["ui"]["Tree"]["selectionBackground"], "selectionBackground");

    let light = read_json(&temp.path().join("resources/themes/monokai-islands-light.theme.json"));
    assert_eq!(light["dark"], false);
    assert_eq!(light["colors"]["text"], "#2d2a2e");
    assert_eq!(light["colors"]["background"], "#faf9fa");

    let validate = run_in(temp.path(), &["--quiet", "validate"]);
    assert_eq!(validate.status.code(), Some(0));
}

#[test]
fn derived_light_palette_can_be_validated_explicitly() {
    let temp = tempdir().expect("tempdir");
    seed_dark_palette(temp.path());
    assert!(run_in(temp.path(), &["-q", "convert"]).status.success());

    let output = run_in(temp.path(), &["-q", "validate", "palettes/monokai-light.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("found 3 contrast issue(s)"));
}

#[test]
fn validate_exits_one_on_violation() {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join("flat.json"),
        r##"{"text": "#221f22", "background": "#221f22"}"##,
    )
    .expect("palette");

    let output = run_in(temp.path(), &["--quiet", "validate", "flat.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("found 1 contrast issue(s)"));
}

#[test]
fn validate_json_summary_lists_sections() {
    let temp = tempdir().expect("tempdir");
    seed_dark_palette(temp.path());

    let output = run_in(temp.path(), &["validate", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let summary: Value = serde_json::from_slice(&output.stdout).expect("summary json");
    assert_eq!(summary["sections"][0]["name"], "monokai-dark");
    assert_eq!(summary["sections"][0]["report"]["checked"], 9);
    assert_eq!(summary["sections"].as_array().map(Vec::len), Some(1));
}

#[test]
fn generated_files_are_stable_across_runs() {
    let temp = tempdir().expect("tempdir");
    seed_dark_palette(temp.path());
    let theme = temp.path().join("resources/themes/monokai-islands-dark.theme.json");

    assert!(run_in(temp.path(), &["-q", "generate", "--variant", "dark"]).status.success());
    let first = fs::read_to_string(&theme).expect("first");
    assert!(run_in(temp.path(), &["-q", "generate", "--variant", "dark"]).status.success());
    let second = fs::read_to_string(&theme).expect("second");

    assert_eq!(first, second);
    assert!(first.ends_with("}\n"));
}

#[test]
fn malformed_palette_is_a_fatal_error() {
    let temp = tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("palettes")).expect("dir");
    fs::write(
        temp.path().join("palettes/monokai-dark.json"),
        r##"{"background": "#22"}"##,
    )
    .expect("palette");

    let output = run_in(temp.path(), &["-q", "generate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("background"));
}

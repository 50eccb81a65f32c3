use std::path::{Path, PathBuf};
use std::process::Command;

use ide_themer::color::Color;
use ide_themer::config::{ThemeConfig, DEFAULT_FALLBACKS};
use ide_themer::error::ThemeError;
use ide_themer::pipeline::assemble::{assemble, COLOR_MAP};
use ide_themer::pipeline::detect::{classify, Classification};
use ide_themer::pipeline::parse::parse;
use ide_themer::pipeline::surfaces::derive_surface_colors;
use ide_themer::pipeline::validate::{validate, IssueKind, Slot};
use ide_themer::pipeline::{self, Generation};
use ide_themer::repository::{output_file_name, ThemeRepository, ThemeState, SOURCE_FILE};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn snapshot_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_dir().join(name)).unwrap()
}

/// Lay out a themes directory: one subdirectory per entry, with the
/// palette source written when one is given.
fn themes_dir(themes: &[(&str, Option<&str>)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, source) in themes {
        let theme_dir = dir.path().join(name);
        std::fs::create_dir_all(&theme_dir).unwrap();
        if let Some(text) = source {
            std::fs::write(theme_dir.join(SOURCE_FILE), text).unwrap();
        }
    }
    dir
}

fn run_pipeline(name: &str, source: &str) -> Generation {
    pipeline::run(name, source, &ThemeConfig::default())
}

/// Validate the structural correctness of a serialized theme document.
fn validate_document_structure(output: &str) {
    let json: serde_json::Value = serde_json::from_str(output).unwrap();
    let root = json.as_object().unwrap();
    let keys: Vec<&str> = root.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3, "unexpected top-level keys: {keys:?}");

    let colors = json["workbench.colorCustomizations"].as_object().unwrap();
    assert_eq!(colors.len(), COLOR_MAP.len());

    for (key, value) in colors {
        let value = value.as_str().unwrap();
        if key == "editorUnnecessaryCode.opacity" || key == "widget.shadow" {
            continue;
        }
        assert_eq!(value.len(), 7, "{key}: '{value}' is not #rrggbb");
        assert!(value.starts_with('#'));
        assert!(
            value[1..]
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "{key}: '{value}' is not lowercase hex"
        );
    }

    let rules = json["editor.tokenColorCustomizations"]["textMateRules"]
        .as_array()
        .unwrap();
    assert_eq!(rules.len(), 10);
    for rule in rules {
        assert!(!rule["scope"].as_array().unwrap().is_empty());
        assert!(rule["settings"]["foreground"].as_str().unwrap().starts_with('#'));
    }
}

// ---------------------------------------------------------------------------
// Snapshot tests
// ---------------------------------------------------------------------------

/// Generate or verify a snapshot for a given fixture.
fn snapshot_test(fixture_name: &str) {
    let name = fixture_name.trim_end_matches(".toml");
    let output = run_pipeline(name, &fixture(fixture_name))
        .document
        .to_json()
        .unwrap();
    validate_document_structure(&output);

    let snap_dir = snapshot_dir();
    std::fs::create_dir_all(&snap_dir).unwrap();
    let snap_path = snap_dir.join(format!("{name}.json"));

    if std::env::var("UPDATE_SNAPSHOTS").is_ok() || !snap_path.exists() {
        std::fs::write(&snap_path, &output).unwrap();
        return;
    }

    let expected = std::fs::read_to_string(&snap_path).unwrap();
    assert_eq!(
        output, expected,
        "snapshot mismatch for {fixture_name}. Run with UPDATE_SNAPSHOTS=1 to update."
    );
}

#[test]
fn snapshot_catppuccin_mocha() {
    snapshot_test("catppuccin-mocha.toml");
}

#[test]
fn snapshot_rose_pine_dawn() {
    snapshot_test("rose-pine-dawn.toml");
}

// ---------------------------------------------------------------------------
// Pipeline tests
// ---------------------------------------------------------------------------

#[test]
fn dark_fixture_is_clean_and_dark() {
    let generation = run_pipeline("mocha", &fixture("catppuccin-mocha.toml"));
    assert_eq!(generation.classification, Classification::Dark);
    assert!(generation.issues.is_empty(), "{:?}", generation.issues);
    assert_eq!(generation.palette.cursor, Color::new(0xf5, 0xe0, 0xdc));
    assert_eq!(
        generation.document.color("terminal.ansiBlue"),
        Some(Color::new(0x89, 0xb4, 0xfa))
    );
}

#[test]
fn light_fixture_repairs_sloppy_entries() {
    let generation = run_pipeline("dawn", &fixture("rose-pine-dawn.toml"));
    assert_eq!(generation.classification, Classification::Light);

    // "575279" is accepted without '#'; "#57527" is not.
    assert_eq!(generation.palette.normal[Slot::White], Color::new(0x57, 0x52, 0x79));
    assert_eq!(
        generation.palette.bright[Slot::White],
        DEFAULT_FALLBACKS.bright[Slot::White]
    );

    let kinds: Vec<(&str, IssueKind)> = generation
        .issues
        .iter()
        .map(|i| (i.field.as_str(), i.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("cursor", IssueKind::DerivedFromForeground),
            ("bright.white", IssueKind::Invalid),
        ]
    );
}

#[test]
fn minimal_source_end_to_end() {
    let generation = run_pipeline(
        "minimal",
        "background = \"#282a36\"\nforeground = \"#f8f8f2\"\n",
    );
    assert_eq!(generation.classification, Classification::Dark);

    let names = ["Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White"];
    for (slot, name) in Slot::ALL.into_iter().zip(names) {
        assert_eq!(
            generation.document.color(&format!("terminal.ansi{name}")),
            Some(DEFAULT_FALLBACKS.normal[slot])
        );
        assert_eq!(
            generation.document.color(&format!("terminal.ansiBright{name}")),
            Some(DEFAULT_FALLBACKS.bright[slot])
        );
    }

    let ansi_issues = generation
        .issues
        .iter()
        .filter(|i| i.field.starts_with("normal.") || i.field.starts_with("bright."))
        .count();
    assert_eq!(ansi_issues, 16);
}

#[test]
fn unreadable_contrast_falls_back_to_default_pair() {
    let generation = run_pipeline(
        "washed-out",
        "background = \"#ffffff\"\nforeground = \"#fefefe\"\n",
    );
    assert_eq!(generation.palette.background, DEFAULT_FALLBACKS.background);
    assert_eq!(generation.palette.foreground, DEFAULT_FALLBACKS.foreground);
    // Classification follows the corrected background.
    assert_eq!(generation.classification, Classification::Dark);
    assert_eq!(
        generation.document.color("editor.background"),
        Some(DEFAULT_FALLBACKS.background)
    );
}

#[test]
fn stages_compose_like_the_pipeline() {
    let config = ThemeConfig::default();
    let raw = parse(&fixture("catppuccin-mocha.toml"));
    let palette = validate(&raw, &config).value;
    let classification = classify(palette.background);
    let surfaces = derive_surface_colors(&palette, classification, &config);
    let document = assemble("mocha", &palette, &surfaces);

    let generation = run_pipeline("mocha", &fixture("catppuccin-mocha.toml"));
    assert_eq!(document, generation.document);
}

// ---------------------------------------------------------------------------
// Repository tests
// ---------------------------------------------------------------------------

#[test]
fn batch_isolates_missing_source() {
    let mocha = fixture("catppuccin-mocha.toml");
    let dawn = fixture("rose-pine-dawn.toml");
    let dir = themes_dir(&[
        ("catppuccin", Some(mocha.as_str())),
        ("no-source", None),
        ("rose-pine", Some(dawn.as_str())),
    ]);
    let repo = ThemeRepository::new(dir.path(), ThemeConfig::default());

    let report = repo.generate_all().unwrap();
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.total(), 3);
    assert!(!report.is_success());

    let (name, outcome) = &report.outcomes[1];
    assert_eq!(name, "no-source");
    assert!(matches!(outcome, Err(ThemeError::MissingSourceFile { .. })));

    assert!(dir.path().join("catppuccin").join(output_file_name("catppuccin")).is_file());
    assert!(dir.path().join("rose-pine").join(output_file_name("rose-pine")).is_file());
}

#[test]
fn batch_of_good_themes_succeeds() {
    let mocha = fixture("catppuccin-mocha.toml");
    let dir = themes_dir(&[("a", Some(mocha.as_str())), ("b", Some(mocha.as_str()))]);
    let repo = ThemeRepository::new(dir.path(), ThemeConfig::default());

    let report = repo.generate_all().unwrap();
    assert!(report.is_success());
    assert_eq!(report.succeeded(), 2);
}

#[test]
fn written_document_is_valid() {
    let dir = themes_dir(&[("mocha", Some(fixture("catppuccin-mocha.toml").as_str()))]);
    let repo = ThemeRepository::new(dir.path(), ThemeConfig::default());
    let theme = repo.generate("mocha").unwrap();

    let content = std::fs::read_to_string(&theme.path).unwrap();
    validate_document_structure(&content);
    assert_eq!(theme.color_count, COLOR_MAP.len());
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = themes_dir(&[("dawn", Some(fixture("rose-pine-dawn.toml").as_str()))]);
    let repo = ThemeRepository::new(dir.path(), ThemeConfig::default());

    let first = std::fs::read(repo.generate("dawn").unwrap().path).unwrap();
    let second = std::fs::read(repo.generate("dawn").unwrap().path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn status_tracks_generation() {
    let mocha = fixture("catppuccin-mocha.toml");
    let dir = themes_dir(&[("x", Some(mocha.as_str())), ("y", Some(mocha.as_str()))]);
    let repo = ThemeRepository::new(dir.path(), ThemeConfig::default());

    let pending = repo.status().unwrap();
    assert!(pending.iter().all(|s| s.state == ThemeState::Pending));

    repo.generate("x").unwrap();
    let status = repo.status().unwrap();
    assert_eq!(status[0].state, ThemeState::Generated);
    assert_eq!(status[1].state, ThemeState::Pending);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        any::<[u8; 3]>().prop_map(|[r, g, b]| Color::new(r, g, b))
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(c in arb_color(), style in 0usize..4) {
            let raw = match style {
                0 => c.to_hex(),
                1 => format!("0x{:02X}{:02X}{:02X}", c.r, c.g, c.b),
                2 => format!("{:02x}{:02x}{:02x}", c.r, c.g, c.b),
                _ => format!("'{}'", c.to_hex().to_uppercase()),
            };
            let once = Color::normalize(&raw).unwrap();
            prop_assert_eq!(once, c);
            prop_assert_eq!(Color::normalize(&once.to_hex()), Some(once));
        }

        #[test]
        fn contrast_is_symmetric_and_bounded(a in arb_color(), b in arb_color()) {
            let ab = Color::contrast_ratio(&a, &b);
            prop_assert_eq!(ab, Color::contrast_ratio(&b, &a));
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ab), "ratio {} out of range", ab);
        }

        #[test]
        fn any_source_yields_a_complete_document(source in ".{0,400}") {
            let generation = run_pipeline("fuzz", &source);
            let output = generation.document.to_json().unwrap();
            validate_document_structure(&output);
        }

        #[test]
        fn output_never_has_extreme_low_contrast(bg in arb_color(), fg in arb_color()) {
            let source = format!("background = \"{bg}\"\nforeground = \"{fg}\"\n");
            let generation = run_pipeline("pair", &source);
            let p = &generation.palette;
            prop_assert!(Color::contrast_ratio(&p.background, &p.foreground) >= 2.0);
        }

        #[test]
        fn assembly_is_deterministic(bg in arb_color(), fg in arb_color()) {
            let source = format!("background = \"{bg}\"\nforeground = \"{fg}\"\n");
            let a = run_pipeline("det", &source).document.to_json().unwrap();
            let b = run_pipeline("det", &source).document.to_json().unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

// ---------------------------------------------------------------------------
// CLI integration tests (run the actual binary)
// ---------------------------------------------------------------------------

fn cli(themes: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ide-themer"));
    cmd.arg("--themes-dir").arg(themes).env_remove("IDE_THEMER_THEMES_DIR");
    cmd
}

#[test]
fn cli_generate_stdout_produces_valid_document() {
    let dir = themes_dir(&[("mocha", Some(fixture("catppuccin-mocha.toml").as_str()))]);
    let output = cli(dir.path())
        .args(["generate", "mocha", "--stdout"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success(), "binary exited with error");
    validate_document_structure(&String::from_utf8_lossy(&output.stdout));
    assert!(!dir.path().join("mocha").join(output_file_name("mocha")).exists());
}

#[test]
fn cli_generate_writes_into_theme_dir() {
    let dir = themes_dir(&[("mocha", Some(fixture("catppuccin-mocha.toml").as_str()))]);
    let output = cli(dir.path())
        .args(["generate", "mocha"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert!(dir.path().join("mocha").join(output_file_name("mocha")).is_file());
}

#[test]
fn cli_generate_missing_theme_fails() {
    let dir = themes_dir(&[]);
    let output = cli(dir.path())
        .args(["generate", "ghost"])
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "got: {stderr}");
}

#[test]
fn cli_generate_all_reports_counts() {
    let mocha = fixture("catppuccin-mocha.toml");
    let dir = themes_dir(&[
        ("a", Some(mocha.as_str())),
        ("b", None),
        ("c", Some(mocha.as_str())),
    ]);
    let output = cli(dir.path())
        .arg("generate-all")
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success(), "one theme lacks a source");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generated 2/3 themes"), "got: {stdout}");
}

#[test]
fn cli_status_output() {
    let mocha = fixture("catppuccin-mocha.toml");
    let dir = themes_dir(&[("a", Some(mocha.as_str())), ("b", Some(mocha.as_str()))]);
    ThemeRepository::new(dir.path(), ThemeConfig::default())
        .generate("a")
        .unwrap();

    let output = cli(dir.path())
        .arg("status")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generated  a"), "got: {stdout}");
    assert!(stdout.contains("missing    b"), "got: {stdout}");
    assert!(stdout.contains("1/2 themes complete"));
}

#[test]
fn cli_help_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_ide-themer"))
        .arg("--help")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ide-themer"));
    assert!(stdout.contains("generate-all"));
    assert!(stdout.contains("--themes-dir"));
    assert!(stdout.contains("--min-contrast"));
}

pub mod assemble;
pub mod contrast;
pub mod detect;
pub mod parse;
pub mod surfaces;
pub mod validate;

use crate::config::ThemeConfig;
use crate::theme::ThemeDocument;

use detect::Classification;
use parse::RawPalette;
use surfaces::DerivedSurfaceColors;
use validate::{Palette, ValidationIssue};

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub document: ThemeDocument,
    pub palette: Palette,
    pub classification: Classification,
    pub surfaces: DerivedSurfaceColors,
    pub issues: Vec<ValidationIssue>,
}

/// Validate, classify, derive and assemble. Never fails.
pub fn generate(theme_name: &str, raw: &RawPalette, config: &ThemeConfig) -> Generation {
    let checked = validate::validate(raw, config);
    let palette = checked.value;
    let classification = detect::classify(palette.background);
    let surfaces = surfaces::derive_surface_colors(&palette, classification, config);
    let document = assemble::assemble(theme_name, &palette, &surfaces);

    Generation {
        document,
        palette,
        classification,
        surfaces,
        issues: checked.issues,
    }
}

/// Run the whole pipeline on palette source text.
pub fn run(theme_name: &str, source: &str, config: &ThemeConfig) -> Generation {
    generate(theme_name, &parse::parse(source), config)
}

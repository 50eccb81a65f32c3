use crate::color::Color;
use crate::config::ThemeConfig;
use crate::pipeline::validate::{Checked, IssueKind, Palette, ValidationIssue};

const FIELD: &str = "background/foreground";

/// Check background/foreground readability.
///
/// Below `min_readable_contrast` the pair is only reported. Below
/// `min_acceptable_contrast` both colors are replaced by the fallback pair;
/// the rest of the palette (cursor included) is left untouched.
pub fn enforce_contrast(mut palette: Palette, config: &ThemeConfig) -> Checked<Palette> {
    let ratio = Color::contrast_ratio(&palette.background, &palette.foreground);
    let mut issues = Vec::new();
    if ratio < config.min_readable_contrast {
        issues.push(ValidationIssue::new(
            FIELD,
            IssueKind::LowContrast,
            format!("low contrast ratio ({ratio:.2}) between background and foreground"),
        ));
    }

    if ratio < config.min_acceptable_contrast {
        palette.background = config.fallbacks.background;
        palette.foreground = config.fallbacks.foreground;
        issues.push(ValidationIssue::new(
            FIELD,
            IssueKind::ExtremeLowContrast,
            format!(
                "applied fallback colors {} / {} due to extremely low contrast",
                palette.background, palette.foreground
            ),
        ));
    }

    Checked {
        value: palette,
        issues,
    }
}

use std::fmt;

use crate::color::Color;

/// Perceived brightness above which a background counts as light.
const LIGHT_THRESHOLD: f64 = 0.5;

/// Whether a palette describes a light or a dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Light,
    Dark,
}

impl Classification {
    pub fn is_light(self) -> bool {
        self == Classification::Light
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::Light => "LIGHT",
            Classification::Dark => "DARK",
        })
    }
}

/// Detect whether the background is light or dark.
pub fn classify(background: Color) -> Classification {
    if background.perceived_brightness() > LIGHT_THRESHOLD {
        Classification::Light
    } else {
        Classification::Dark
    }
}

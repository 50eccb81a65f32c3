use palette::Srgb;
use serde::{Serialize, Serializer};

/// Channel fraction at or below which sRGB gamma decoding is linear.
const GAMMA_THRESHOLD: f64 = 0.039_28;
const GAMMA_OFFSET: f64 = 0.055;
const GAMMA_POWER: f64 = 2.4;
const GAMMA_DIVISOR: f64 = 12.92;

const LUMINANCE_R: f64 = 0.2126;
const LUMINANCE_G: f64 = 0.7152;
const LUMINANCE_B: f64 = 0.0722;

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components; always renders as canonical lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalize a loosely written color value into a canonical color.
    ///
    /// Accepts surrounding quotes and whitespace, a `0x` prefix, a missing
    /// `#`, and 3-digit `#rgb` shorthand. Anything that does not reduce to
    /// exactly six hex digits is rejected.
    pub fn normalize(raw: &str) -> Option<Self> {
        let value = raw
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'')
            .trim();
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .or_else(|| value.strip_prefix('#'))
            .unwrap_or(value);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Create from `palette::Srgb<u8>`.
    pub fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    /// WCAG 2.0 relative luminance in `[0, 1]`.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f64 {
        fn linearize(c: f64) -> f64 {
            if c <= GAMMA_THRESHOLD {
                c / GAMMA_DIVISOR
            } else {
                ((c + GAMMA_OFFSET) / (1.0 + GAMMA_OFFSET)).powf(GAMMA_POWER)
            }
        }
        let srgb: Srgb<f64> = self.to_srgb_u8().into_format();
        LUMINANCE_R * linearize(srgb.red)
            + LUMINANCE_G * linearize(srgb.green)
            + LUMINANCE_B * linearize(srgb.blue)
    }

    /// WCAG 2.0 contrast ratio between two colors.
    ///
    /// Returns a value in [1, 21]. Higher means more contrast.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Perceived brightness in `[0, 1]` using the ITU-R BT.601 weights.
    pub fn perceived_brightness(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Scale every channel by `1 - factor` (darken) or `1 + factor` (lighten).
    /// Results are truncated and clamped to `[0, 255]`.
    pub fn adjust(self, toward_dark: bool, factor: f64) -> Color {
        let scale = if toward_dark { 1.0 - factor } else { 1.0 + factor };
        let channel = |c: u8| (f64::from(c) * scale).clamp(0.0, 255.0) as u8;
        let srgb = self.to_srgb_u8();
        Color::from_srgb_u8(Srgb::new(
            channel(srgb.red),
            channel(srgb.green),
            channel(srgb.blue),
        ))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

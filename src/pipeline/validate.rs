use std::fmt;
use std::ops::Index;

use crate::color::Color;
use crate::config::ThemeConfig;
use crate::pipeline::contrast::enforce_contrast;
use crate::pipeline::parse::RawPalette;

/// One of the eight canonical ANSI color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Slot {
    /// Slots in ANSI index order.
    pub const ALL: [Slot; 8] = [
        Slot::Black,
        Slot::Red,
        Slot::Green,
        Slot::Yellow,
        Slot::Blue,
        Slot::Magenta,
        Slot::Cyan,
        Slot::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Black => "black",
            Slot::Red => "red",
            Slot::Green => "green",
            Slot::Yellow => "yellow",
            Slot::Blue => "blue",
            Slot::Magenta => "magenta",
            Slot::Cyan => "cyan",
            Slot::White => "white",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Normal or bright ANSI row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Normal,
    Bright,
}

impl Intensity {
    pub fn name(self) -> &'static str {
        match self {
            Intensity::Normal => "normal",
            Intensity::Bright => "bright",
        }
    }
}

/// Eight ANSI colors indexed by [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiColors([Color; 8]);

impl AnsiColors {
    pub const fn new(colors: [Color; 8]) -> Self {
        Self(colors)
    }

    pub fn get(&self, slot: Slot) -> Color {
        self.0[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, Color)> + '_ {
        Slot::ALL.iter().map(|&slot| (slot, self.get(slot)))
    }
}

impl Index<Slot> for AnsiColors {
    type Output = Color;

    fn index(&self, slot: Slot) -> &Color {
        &self.0[slot.index()]
    }
}

/// A fully populated theme palette. Every slot holds a canonical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub normal: AnsiColors,
    pub bright: AnsiColors,
}

impl Palette {
    pub fn ansi(&self, intensity: Intensity) -> &AnsiColors {
        match intensity {
            Intensity::Normal => &self.normal,
            Intensity::Bright => &self.bright,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The source did not provide the color.
    Missing,
    /// The source value could not be normalized.
    Invalid,
    /// Cursor was absent and copied from the foreground.
    DerivedFromForeground,
    LowContrast,
    /// Background and foreground were replaced by fallbacks.
    ExtremeLowContrast,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueKind::Missing => "missing",
            IssueKind::Invalid => "invalid",
            IssueKind::DerivedFromForeground => "derived",
            IssueKind::LowContrast => "low-contrast",
            IssueKind::ExtremeLowContrast => "extreme-low-contrast",
        };
        f.write_str(label)
    }
}

/// An informational diagnostic. Issues are collected, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A value together with the diagnostics produced while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Checked<T> {
    pub value: T,
    pub issues: Vec<ValidationIssue>,
}

impl<T> Checked<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            issues: Vec::new(),
        }
    }

    pub fn with_issue(value: T, issue: ValidationIssue) -> Self {
        Self {
            value,
            issues: vec![issue],
        }
    }

    /// Move the issues into `sink` and return the bare value.
    pub fn absorb(self, sink: &mut Vec<ValidationIssue>) -> T {
        sink.extend(self.issues);
        self.value
    }
}

/// Resolve one source value against its fallback.
fn resolve(field: &str, raw: Option<&str>, fallback: Color) -> Checked<Color> {
    match raw {
        Some(value) => match Color::normalize(value) {
            Some(color) => Checked::clean(color),
            None => Checked::with_issue(
                fallback,
                ValidationIssue::new(
                    field,
                    IssueKind::Invalid,
                    format!("invalid {field} color '{value}', using fallback {fallback}"),
                ),
            ),
        },
        None => Checked::with_issue(
            fallback,
            ValidationIssue::new(
                field,
                IssueKind::Missing,
                format!("missing {field} color, using fallback {fallback}"),
            ),
        ),
    }
}

fn resolve_cursor(raw: Option<&str>, foreground: Color, fallback: Color) -> Checked<Color> {
    match raw {
        Some(_) => resolve("cursor", raw, fallback),
        None => Checked::with_issue(
            foreground,
            ValidationIssue::new(
                "cursor",
                IssueKind::DerivedFromForeground,
                format!("missing cursor color, derived from foreground {foreground}"),
            ),
        ),
    }
}

fn resolve_ansi(
    raw: &RawPalette,
    intensity: Intensity,
    fallbacks: &AnsiColors,
    issues: &mut Vec<ValidationIssue>,
) -> AnsiColors {
    let section = raw.section(intensity);
    let colors = Slot::ALL.map(|slot| {
        let field = format!("{}.{}", intensity.name(), slot.name());
        resolve(&field, section.get(slot.name()).map(String::as_str), fallbacks[slot])
            .absorb(issues)
    });
    AnsiColors::new(colors)
}

/// Validate a raw palette into a fully populated [`Palette`].
///
/// Every missing or invalid color is replaced by its fallback and reported.
/// Issues appear in a fixed order: background, foreground, cursor, the
/// normal slots, the bright slots, then contrast findings.
pub fn validate(raw: &RawPalette, config: &ThemeConfig) -> Checked<Palette> {
    let fallbacks = &config.fallbacks;
    let mut issues = Vec::new();

    let background =
        resolve("background", raw.background.as_deref(), fallbacks.background).absorb(&mut issues);
    let foreground =
        resolve("foreground", raw.foreground.as_deref(), fallbacks.foreground).absorb(&mut issues);
    let cursor =
        resolve_cursor(raw.cursor.as_deref(), foreground, fallbacks.cursor).absorb(&mut issues);
    let normal = resolve_ansi(raw, Intensity::Normal, &fallbacks.normal, &mut issues);
    let bright = resolve_ansi(raw, Intensity::Bright, &fallbacks.bright, &mut issues);

    let palette = Palette {
        background,
        foreground,
        cursor,
        normal,
        bright,
    };
    let palette = enforce_contrast(palette, config).absorb(&mut issues);

    Checked {
        value: palette,
        issues,
    }
}

use crate::color::Color;
use crate::pipeline::surfaces::Surface;
use crate::pipeline::validate::{AnsiColors, Palette};

/// Below this background/foreground ratio a low-contrast issue is recorded.
pub const DEFAULT_MIN_READABLE_CONTRAST: f64 = 3.0;

/// Below this ratio the background/foreground pair is replaced by fallbacks.
pub const DEFAULT_MIN_ACCEPTABLE_CONTRAST: f64 = 2.0;

/// Palette substituted slot-by-slot for missing or invalid source colors.
pub const DEFAULT_FALLBACKS: Palette = Palette {
    background: Color::new(0x28, 0x2a, 0x36),
    foreground: Color::new(0xf8, 0xf8, 0xf2),
    cursor: Color::new(0xf8, 0xf8, 0xf2),
    normal: AnsiColors::new([
        Color::new(0x21, 0x22, 0x2c),
        Color::new(0xff, 0x55, 0x55),
        Color::new(0x50, 0xfa, 0x7b),
        Color::new(0xf1, 0xfa, 0x8c),
        Color::new(0xbd, 0x93, 0xf9),
        Color::new(0xff, 0x79, 0xc6),
        Color::new(0x8b, 0xe9, 0xfd),
        Color::new(0xf8, 0xf8, 0xf2),
    ]),
    bright: AnsiColors::new([
        Color::new(0x62, 0x72, 0xa4),
        Color::new(0xff, 0x6e, 0x6e),
        Color::new(0x69, 0xff, 0x94),
        Color::new(0xff, 0xff, 0xa5),
        Color::new(0xd6, 0xac, 0xff),
        Color::new(0xff, 0x92, 0xdf),
        Color::new(0xa4, 0xff, 0xff),
        Color::new(0xff, 0xff, 0xff),
    ]),
};

/// Adjustment factor applied to the background for each derived surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSchedule {
    pub side: f64,
    pub panel: f64,
    pub tab: f64,
    pub input: f64,
    pub list: f64,
    pub hover: f64,
    pub border: f64,
}

impl SurfaceSchedule {
    /// Light themes darken the background; borders move the furthest.
    pub const LIGHT: Self = Self {
        side: 0.15,
        panel: 0.2,
        tab: 0.1,
        input: 0.05,
        list: 0.1,
        hover: 0.2,
        border: 0.3,
    };

    /// Dark themes lighten the background in smaller steps.
    pub const DARK: Self = Self {
        side: 0.1,
        panel: 0.15,
        tab: 0.05,
        input: 0.05,
        list: 0.1,
        hover: 0.15,
        border: 0.2,
    };

    pub fn factor(&self, surface: Surface) -> f64 {
        match surface {
            Surface::Side => self.side,
            Surface::Panel => self.panel,
            Surface::Tab => self.tab,
            Surface::Input => self.input,
            Surface::List => self.list,
            Surface::Hover => self.hover,
            Surface::Border => self.border,
        }
    }
}

/// Immutable generation settings, built once and shared by reference
/// across every theme of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub fallbacks: Palette,
    pub min_readable_contrast: f64,
    pub min_acceptable_contrast: f64,
    pub light: SurfaceSchedule,
    pub dark: SurfaceSchedule,
}

impl ThemeConfig {
    /// Override the threshold under which low contrast is reported.
    pub fn with_min_readable_contrast(mut self, ratio: f64) -> Self {
        self.min_readable_contrast = ratio;
        self
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            fallbacks: DEFAULT_FALLBACKS,
            min_readable_contrast: DEFAULT_MIN_READABLE_CONTRAST,
            min_acceptable_contrast: DEFAULT_MIN_ACCEPTABLE_CONTRAST,
            light: SurfaceSchedule::LIGHT,
            dark: SurfaceSchedule::DARK,
        }
    }
}

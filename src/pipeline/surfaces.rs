use crate::color::Color;
use crate::config::ThemeConfig;
use crate::pipeline::detect::Classification;
use crate::pipeline::validate::Palette;

/// A UI region whose background is derived from the palette background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Side,
    Panel,
    Tab,
    Input,
    List,
    Hover,
    Border,
}

impl Surface {
    pub const ALL: [Surface; 7] = [
        Surface::Side,
        Surface::Panel,
        Surface::Tab,
        Surface::Input,
        Surface::List,
        Surface::Hover,
        Surface::Border,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Surface::Side => "side",
            Surface::Panel => "panel",
            Surface::Tab => "tab",
            Surface::Input => "input",
            Surface::List => "list",
            Surface::Hover => "hover",
            Surface::Border => "border",
        }
    }
}

/// Secondary backgrounds derived from the palette background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedSurfaceColors {
    pub side: Color,
    pub panel: Color,
    pub tab: Color,
    pub input: Color,
    pub list: Color,
    pub hover: Color,
    pub border: Color,
}

impl DerivedSurfaceColors {
    pub fn get(&self, surface: Surface) -> Color {
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

/// Derive surface colors by darkening a light background or lightening a
/// dark one, each surface by its own factor.
pub fn derive_surface_colors(
    palette: &Palette,
    classification: Classification,
    config: &ThemeConfig,
) -> DerivedSurfaceColors {
    let (schedule, toward_dark) = match classification {
        Classification::Light => (&config.light, true),
        Classification::Dark => (&config.dark, false),
    };
    let bg = palette.background;
    let at = |surface| bg.adjust(toward_dark, schedule.factor(surface));

    DerivedSurfaceColors {
        side: at(Surface::Side),
        panel: at(Surface::Panel),
        tab: at(Surface::Tab),
        input: at(Surface::Input),
        list: at(Surface::List),
        hover: at(Surface::Hover),
        border: at(Surface::Border),
    }
}

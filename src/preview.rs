use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};

use crate::color::Color;
use crate::pipeline::surfaces::Surface;
use crate::pipeline::validate::{Intensity, Palette};
use crate::pipeline::Generation;

const SLOT_LABELS: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Choose black or white text for readable labels on `c`.
fn label_fg(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

fn swatch(out: &mut impl Write, color: Color, label: &str) -> io::Result<()> {
    queue!(
        out,
        SetBackgroundColor(to_term(color)),
        SetForegroundColor(label_fg(color)),
        Print(label),
        ResetColor,
        Print(" ")
    )
}

fn ansi_row(out: &mut impl Write, palette: &Palette, intensity: Intensity) -> io::Result<()> {
    queue!(out, Print(format!("  {:<8}", intensity.name())))?;
    for ((_, color), label) in palette.ansi(intensity).iter().zip(SLOT_LABELS) {
        swatch(out, color, &format!("{label:^6}"))?;
    }
    queue!(out, Print("\n"))
}

/// Print a colored swatch preview of a generated theme.
pub fn render(out: &mut impl Write, generation: &Generation) -> io::Result<()> {
    let palette = &generation.palette;
    let ratio = Color::contrast_ratio(&palette.background, &palette.foreground);

    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(format!(
            "  {} ({})\n",
            generation.document.name, generation.classification
        )),
        SetAttribute(Attribute::Reset)
    )?;

    queue!(out, Print(format!("  {:<8}", "base")))?;
    queue!(
        out,
        SetBackgroundColor(to_term(palette.background)),
        SetForegroundColor(to_term(palette.foreground)),
        Print(format!(" fg on bg {ratio:.1}:1 ")),
        ResetColor,
        Print(" ")
    )?;
    swatch(out, palette.cursor, " cursor ")?;
    queue!(out, Print("\n"))?;

    ansi_row(out, palette, Intensity::Normal)?;
    ansi_row(out, palette, Intensity::Bright)?;

    queue!(out, Print(format!("  {:<8}", "surface")))?;
    for surface in Surface::ALL {
        swatch(
            out,
            generation.surfaces.get(surface),
            &format!(" {} ", surface.name()),
        )?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

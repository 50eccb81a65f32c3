use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ThemeError;
use crate::pipeline::validate::Intensity;

/// Palette values as written in the source, before any validation.
/// Any field may be absent; ANSI sections keep every key they contain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPalette {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub cursor: Option<String>,
    pub normal: BTreeMap<String, String>,
    pub bright: BTreeMap<String, String>,
}

impl RawPalette {
    pub fn section(&self, intensity: Intensity) -> &BTreeMap<String, String> {
        match intensity {
            Intensity::Normal => &self.normal,
            Intensity::Bright => &self.bright,
        }
    }

    fn section_mut(&mut self, intensity: Intensity) -> &mut BTreeMap<String, String> {
        match intensity {
            Intensity::Normal => &mut self.normal,
            Intensity::Bright => &mut self.bright,
        }
    }
}

struct Patterns {
    background: Regex,
    foreground: Regex,
    cursor: Regex,
    header: Regex,
}

fn scalar_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#"(?m)^[ \t]*{key}[ \t]*=[ \t]*["']([^"'\n]+)["']"#))
        .unwrap_or_else(|e| unreachable!("scalar pattern for {key} is valid: {e}"))
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        background: scalar_pattern("background"),
        foreground: scalar_pattern("foreground"),
        cursor: scalar_pattern("cursor"),
        header: Regex::new(r"^\[\s*colors\.(normal|bright)\s*\]")
            .unwrap_or_else(|e| unreachable!("section header pattern is valid: {e}")),
    })
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].to_string())
}

/// Strip a value down to its literal: quoted values end at the closing
/// quote, so trailing comments are dropped.
fn unquote(value: &str) -> &str {
    let value = value.trim();
    let mut chars = value.chars();
    match chars.next() {
        Some(q @ ('"' | '\'')) => {
            let rest = chars.as_str();
            rest.find(q).map_or(rest, |end| &rest[..end])
        }
        _ => value,
    }
}

/// Extract a raw palette from an Alacritty-style configuration.
///
/// Never fails: unknown keys, missing sections and malformed lines are
/// skipped, leaving the gaps for the validator.
pub fn parse(text: &str) -> RawPalette {
    let p = patterns();
    let mut raw = RawPalette {
        background: capture(&p.background, text),
        foreground: capture(&p.foreground, text),
        cursor: capture(&p.cursor, text),
        ..RawPalette::default()
    };

    let mut section: Option<Intensity> = None;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            section = p.header.captures(trimmed).map(|caps| match &caps[1] {
                "normal" => Intensity::Normal,
                _ => Intensity::Bright,
            });
            continue;
        }
        let Some(intensity) = section else {
            continue;
        };
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(value);
        if key.is_empty() || value.is_empty() || key.starts_with('#') {
            continue;
        }
        raw.section_mut(intensity)
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    raw
}

/// Read and parse a palette source file.
///
/// A read failure is not fatal: it yields an empty palette and the error is
/// handed back for the caller to report.
pub fn load_source(path: &Path) -> (RawPalette, Option<ThemeError>) {
    match std::fs::read_to_string(path) {
        Ok(text) => (parse(&text), None),
        Err(source) => (
            RawPalette::default(),
            Some(ThemeError::ParseFailure {
                path: path.to_path_buf(),
                source,
            }),
        ),
    }
}

use std::path::Path;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::color::Color;
use crate::error::ThemeError;

/// A value in the color customization map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    Color(Color),
    /// Non-color literal such as an opacity or an alpha-hex shadow.
    Literal(&'static str),
}

impl ColorValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            ColorValue::Color(c) => Some(*c),
            ColorValue::Literal(_) => None,
        }
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorValue::Color(c) => c.serialize(serializer),
            ColorValue::Literal(s) => serializer.serialize_str(s),
        }
    }
}

/// A syntax-highlighting rule: every scope is drawn in `foreground`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRule {
    pub scopes: Vec<&'static str>,
    pub foreground: Color,
}

impl Serialize for HighlightRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Settings {
            foreground: Color,
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("scope", &self.scopes)?;
        map.serialize_entry(
            "settings",
            &Settings {
                foreground: self.foreground,
            },
        )?;
        map.end()
    }
}

/// A complete editor color theme.
///
/// `colors` keeps table order, so serialization is byte-for-byte stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDocument {
    pub name: String,
    pub colors: Vec<(&'static str, ColorValue)>,
    pub rules: Vec<HighlightRule>,
}

struct Customizations<'a>(&'a [(&'static str, ColorValue)]);

impl Serialize for Customizations<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, value)| (key, value)))
    }
}

#[derive(Serialize)]
struct TokenColors<'a> {
    #[serde(rename = "textMateRules")]
    rules: &'a [HighlightRule],
}

impl Serialize for ThemeDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("workbench.colorTheme", &self.name)?;
        map.serialize_entry("workbench.colorCustomizations", &Customizations(&self.colors))?;
        map.serialize_entry(
            "editor.tokenColorCustomizations",
            &TokenColors { rules: &self.rules },
        )?;
        map.end()
    }
}

impl ThemeDocument {
    /// Look up a UI element by key.
    pub fn get(&self, key: &str) -> Option<ColorValue> {
        self.colors
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    /// Shorthand for [`get`](Self::get) on color-valued keys.
    pub fn color(&self, key: &str) -> Option<Color> {
        self.get(key).and_then(|v| v.as_color())
    }

    /// Serialize to pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the theme to an arbitrary path.
    pub fn write_to(&self, path: &Path) -> Result<(), ThemeError> {
        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|source| ThemeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

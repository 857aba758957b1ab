//! Theme Model
//!
//! Five named colours plus a light/dark mode. Each mode has one fixed
//! default palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn default_colors(&self) -> ThemeColors {
        match self {
            Self::Light => ThemeColors::light(),
            Self::Dark => ThemeColors::dark(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = InvalidThemeValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(InvalidThemeValue::Mode(other.to_string())),
        }
    }
}

/// Colour slot names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ColorKey {
    pub const ALL: [ColorKey; 5] = [
        ColorKey::Primary,
        ColorKey::Secondary,
        ColorKey::Accent,
        ColorKey::Background,
        ColorKey::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Text => "text",
        }
    }

    /// CSS custom property name, e.g. `--color-primary`
    pub fn css_var(&self) -> String {
        format!("--color-{}", self.as_str())
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = InvalidThemeValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| InvalidThemeValue::Key(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidThemeValue {
    #[error("unknown theme mode: {0}")]
    Mode(String),
    #[error("unknown colour key: {0}")]
    Key(String),
    #[error("invalid colour for {key}: {value}")]
    Color { key: ColorKey, value: String },
}

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Theme colour mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::light()
    }
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            primary: "#FF5A1F".into(),
            secondary: "#3B82F6".into(),
            accent: "#10B981".into(),
            background: "#F9FAFB".into(),
            text: "#1F2937".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: "#FF5A1F".into(),
            secondary: "#60A5FA".into(),
            accent: "#34D399".into(),
            background: "#111827".into(),
            text: "#F9FAFB".into(),
        }
    }

    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Secondary => &self.secondary,
            ColorKey::Accent => &self.accent,
            ColorKey::Background => &self.background,
            ColorKey::Text => &self.text,
        }
    }

    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            ColorKey::Primary => self.primary = value,
            ColorKey::Secondary => self.secondary = value,
            ColorKey::Accent => self.accent = value,
            ColorKey::Background => self.background = value,
            ColorKey::Text => self.text = value,
        }
    }

    /// Every slot must hold a hex colour
    pub fn validate(&self) -> Result<(), InvalidThemeValue> {
        for key in ColorKey::ALL {
            let value = self.get(key);
            if !is_hex_color(value) {
                return Err(InvalidThemeValue::Color {
                    key,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// `(--color-<key>, value)` pairs in slot order
    pub fn css_variables(&self) -> Vec<(String, String)> {
        ColorKey::ALL
            .into_iter()
            .map(|key| (key.css_var(), self.get(key).to_string()))
            .collect()
    }

    /// `:root { ... }` stylesheet
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.css_variables() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

/// Current theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub colors: ThemeColors,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetColorRequest {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetModeRequest {
    pub mode: ThemeMode,
}

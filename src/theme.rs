//! Colour palettes for the ruler
//!
//! Provides YAML-based palettes with compile-time embedded built-ins and
//! user-defined palettes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/pixruler/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::{Deserialize, Serialize};

// Embed theme YAML files at compile time
pub const CLASSIC_YAML: &str = include_str!("../themes/classic.yaml");
pub const NIGHT_YAML: &str = include_str!("../themes/night.yaml");
pub const PAPER_YAML: &str = include_str!("../themes/paper.yaml");

pub const DEFAULT_THEME_ID: &str = "classic";

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "classic", "night")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "classic",
        yaml: CLASSIC_YAML,
    },
    BuiltinTheme {
        id: "night",
        yaml: NIGHT_YAML,
    },
    BuiltinTheme {
        id: "paper",
        yaml: PAPER_YAML,
    },
];

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`
    pub fn lerp(&self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Resolved ruler palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub scale: Color,
    pub first_marker: Color,
    pub second_marker: Color,
    pub background: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_builtin(DEFAULT_THEME_ID).unwrap_or_else(|_| Theme {
            name: "Classic".to_string(),
            scale: Color::BLACK,
            first_marker: Color::rgb(0xD0, 0, 0),
            second_marker: Color::rgb(0, 0x30, 0xC0),
            background: Color::rgb(0xF5, 0xE2, 0x7A),
            gradient_start: Color::rgb(0xFF, 0xF3, 0xA8),
            gradient_end: Color::rgb(0xE0, 0xC4, 0x40),
        })
    }
}

impl Theme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Theme::from_yaml(t.yaml))
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user -> builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_path) = crate::config_paths::theme_file(id) {
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Load a theme, falling back to the default palette on any error
pub fn load_theme_or_default(id: &str) -> Theme {
    load_theme(id).unwrap_or_else(|e| {
        tracing::warn!("{}; using default theme", e);
        Theme::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml);
            assert!(theme.is_ok(), "{} failed: {:?}", builtin.id, theme.err());
        }
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(
            Color::from_hex("10203040").unwrap(),
            Color::rgba(0x10, 0x20, 0x30, 0x40)
        );
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_color_hex_roundtrip_string() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.to_hex(), "#010203");
        assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!(mid.r > 120 && mid.r < 135);
    }

    #[test]
    fn test_unknown_builtin_is_error() {
        assert!(Theme::from_builtin("does-not-exist").is_err());
    }
}

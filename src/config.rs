//! Ruler configuration persistence
//!
//! Stores user preferences in `~/.config/pixruler/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{
    BackgroundType, Point, RulerPosition, RulerSettings, DEFAULT_LENGTH, DEFAULT_MINIMUM_LENGTH,
};
use crate::theme::{load_theme_or_default, DEFAULT_THEME_ID};
use crate::units::{Ppi, Units};
use crate::view::{TilePaths, DEFAULT_FONT_SIZE};

/// Fixed pixels-per-inch, replacing what the monitors report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PpiOverride {
    pub horizontal: f64,
    pub vertical: f64,
}

impl From<PpiOverride> for Ppi {
    fn from(value: PpiOverride) -> Self {
        Ppi::new(value.horizontal, value.vertical)
    }
}

/// Last window position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOrigin {
    pub x: i32,
    pub y: i32,
}

/// Ruler configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Colour theme id (e.g. "classic", "night")
    pub theme: String,
    pub position: RulerPosition,
    pub units: Units,
    pub length: u32,
    pub minimum_length: u32,
    pub always_on_top: bool,
    pub background: BackgroundType,
    pub tiles: TilePaths,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppi_override: Option<PpiOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowOrigin>,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            position: RulerPosition::default(),
            units: Units::default(),
            length: DEFAULT_LENGTH,
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            always_on_top: true,
            background: BackgroundType::default(),
            tiles: TilePaths::default(),
            ppi_override: None,
            font_path: None,
            font_size: DEFAULT_FONT_SIZE,
            window: None,
        }
    }
}

impl RulerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Copy persisted fields and the theme palette into live settings
    pub fn apply_to(&self, settings: &mut RulerSettings) {
        settings.apply_theme(&load_theme_or_default(&self.theme));
        settings.position = self.position;
        settings.units = self.units;
        settings.background_type = self.background;
        settings.always_on_top = self.always_on_top;
        settings.minimum_length = self.minimum_length.max(1);
        settings.set_length(self.length);
    }

    /// Record the live settings (and window origin) for saving
    pub fn capture(&mut self, settings: &RulerSettings, origin: Point) {
        self.position = settings.position;
        self.units = settings.units;
        self.background = settings.background_type;
        self.always_on_top = settings.always_on_top;
        self.minimum_length = settings.minimum_length;
        self.length = settings.length;
        self.window = Some(WindowOrigin {
            x: origin.x,
            y: origin.y,
        });
    }

    /// Build live settings from this config
    pub fn to_settings(&self) -> RulerSettings {
        let mut settings = RulerSettings::default();
        self.apply_to(&mut settings);
        settings
    }
}

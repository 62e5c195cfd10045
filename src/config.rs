use std::path::{Path, PathBuf};

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "STICKER_SKETCHPAD_CONFIG";

/// Largest accepted export scale
pub const MAX_EXPORT_SCALE: f32 = 16.0;

/// A marker thickness preset shown as one button in the palette
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MarkerPresetConfig {
    pub label: String,
    pub thickness: f32,
}

/// A sticker seeded into the catalog at start-up
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StickerConfig {
    pub content: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Everything tweakable about the sketchpad.
///
/// Colors are stored as unmultiplied `[r, g, b, a]` so the file stays readable.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct SketchpadConfig {
    pub title: String,
    pub canvas_size: [f32; 2],
    pub marker_presets: Vec<MarkerPresetConfig>,
    pub stickers: Vec<StickerConfig>,
    pub default_custom_sticker: String,
    pub sticker_size: f32,
    pub ink_color: [u8; 4],
    pub canvas_color: [u8; 4],
    pub export_scale: f32,
    pub export_background: [u8; 4],
    pub export_dir: PathBuf,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            title: "Sticker Sketchpad".to_owned(),
            canvas_size: [256.0, 256.0],
            marker_presets: vec![
                MarkerPresetConfig {
                    label: "Thin".to_owned(),
                    thickness: 2.0,
                },
                MarkerPresetConfig {
                    label: "Thick".to_owned(),
                    thickness: 6.0,
                },
            ],
            stickers: ["💀", "🎃", "👻"]
                .into_iter()
                .map(|content| StickerConfig {
                    content: content.to_owned(),
                    label: None,
                })
                .collect(),
            default_custom_sticker: "🙂".to_owned(),
            sticker_size: 32.0,
            ink_color: [0, 0, 0, 255],
            canvas_color: [250, 250, 250, 255],
            export_scale: 4.0,
            export_background: [255, 255, 255, 255],
            export_dir: PathBuf::from("."),
        }
    }
}

impl SketchpadConfig {
    /// Parse a config from JSON text and validate it
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or the defaults if it is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::debug!("{CONFIG_ENV_VAR} not set, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.canvas_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "canvas_size",
                reason: format!("must be positive, got {width}x{height}"),
            });
        }
        if self.marker_presets.is_empty() {
            return Err(ConfigError::Invalid {
                field: "marker_presets",
                reason: "at least one preset is required".to_owned(),
            });
        }
        if let Some(preset) = self.marker_presets.iter().find(|p| !(p.thickness > 0.0)) {
            return Err(ConfigError::Invalid {
                field: "marker_presets",
                reason: format!("thickness of {:?} must be positive", preset.label),
            });
        }
        if self.default_custom_sticker.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_custom_sticker",
                reason: "must not be blank".to_owned(),
            });
        }
        if !(self.sticker_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "sticker_size",
                reason: format!("must be positive, got {}", self.sticker_size),
            });
        }
        if !(self.export_scale > 0.0 && self.export_scale <= MAX_EXPORT_SCALE) {
            return Err(ConfigError::Invalid {
                field: "export_scale",
                reason: format!(
                    "must be in (0, {MAX_EXPORT_SCALE}], got {}",
                    self.export_scale
                ),
            });
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::from(self.canvas_size)
    }

    pub fn ink_color(&self) -> Color32 {
        to_color(self.ink_color)
    }

    pub fn canvas_color(&self) -> Color32 {
        to_color(self.canvas_color)
    }

    pub fn export_background(&self) -> Color32 {
        to_color(self.export_background)
    }
}

fn to_color([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

//! Scene settings and preferences
//!
//! Loaded from an optional JSON file given on the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Multiplier applied to every circle/ellipse segment count
    pub fn segment_scale(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.35,
            QualityPreset::Medium => 0.6,
            QualityPreset::High => 1.0,
        }
    }

    /// Scale a nominal segment count, never going below a visible minimum
    pub fn segments(&self, nominal: u32) -> u32 {
        ((nominal as f32 * self.segment_scale()).round() as u32).max(8)
    }
}

/// How the shooting star advances between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StarMotion {
    /// Fixed step per drawn frame; speed follows the frame rate
    #[default]
    PerFrame,
    /// Step scaled by elapsed time, tuned to match 60 fps
    TimeScaled,
}

/// How a horizontal drag position becomes the umbrella's world x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UmbrellaMapping {
    /// Undo the viewport stretch and the zoomed projection
    #[default]
    InverseView,
    /// `mouse_x * zoom`, ignoring the viewport
    ZoomScaled,
}

/// Scene settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tessellation quality
    pub quality: QualityPreset,
    /// Present with vsync (the scene never throttles itself)
    pub vsync: bool,
    /// Shooting-star integration mode
    pub star_motion: StarMotion,
    /// Drag-to-umbrella mapping
    pub umbrella_mapping: UmbrellaMapping,
    /// Initial window size as a multiple of the logical 1000x750
    pub window_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::High,
            vsync: true,
            star_motion: StarMotion::PerFrame,
            umbrella_mapping: UmbrellaMapping::InverseView,
            window_scale: 1.0,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings from JSON text; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Initial window size in physical pixels, never degenerate
    pub fn window_size(&self) -> (u32, u32) {
        let scale = if self.window_scale.is_finite() && self.window_scale > 0.0 {
            self.window_scale
        } else {
            1.0
        };
        let w = (crate::consts::WIN_W * scale).round().max(1.0) as u32;
        let h = (crate::consts::WIN_H * scale).round().max(1.0) as u32;
        (w, h)
    }
}

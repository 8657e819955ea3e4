//! Game settings and preferences
//!
//! Read from a JSON file at startup. Anything missing or unreadable falls back
//! to defaults; settings never stop the game from starting.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use crate::sim::DebrisStyle;
use crate::consts::FRAME_RATE;
use crate::sim::SimOptions;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "breakout.json";

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
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

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Debris bursts when bricks break
    pub particles: bool,
    /// Burst look
    pub debris_style: DebrisStyle,
    /// Play the block-letter banners (READY?, LEVEL DONE!, YOU LOSE!)
    pub banners: bool,

    // === Gameplay ===
    /// Bottom row starts falling partway through a level
    pub brick_fall: bool,
    /// Debris RNG seed (random when unset)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Runtime ===
    /// Directory holding `font/` and `wav/`
    pub asset_dir: PathBuf,
    /// Frame pacing target
    pub frame_rate: u32,
    /// Stop after this many frames (unattended runs)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            particles: true,
            debris_style: DebrisStyle::Explosion,
            banners: true,

            brick_fall: true,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            asset_dir: PathBuf::from("assets"),
            frame_rate: FRAME_RATE,
            max_frames: None,
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

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Effective clip volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Seconds per frame for pacing
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Simulation switches
    pub fn sim_options(&self) -> SimOptions {
        SimOptions {
            debris_style: self.debris_style,
            max_particles: self.max_particles(),
            brick_fall: self.brick_fall,
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Load settings from [`DEFAULT_SETTINGS_FILE`]
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_SETTINGS_FILE))
    }
}

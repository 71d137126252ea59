//! Runtime settings
//!
//! Read from a JSON file at startup. Anything missing takes its default, and a
//! missing or broken file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an alternative settings file
pub const SETTINGS_ENV: &str = "BLOB_PLATFORMER_SETTINGS";
const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Surface size for levels with no platforms to measure
    pub default_width: f32,
    pub default_height: f32,
    /// Distance below the surface that counts as a fall
    pub fall_margin: f32,

    // === Loop ===
    pub frame_rate: u32,
    /// Frames the headless runner simulates before stopping
    pub max_frames: u64,

    // === Presentation ===
    pub show_hud: bool,
    /// Pulse the goal rings
    pub goal_pulse: bool,
    /// Reduced motion (disables pulsing)
    pub reduced_motion: bool,

    /// Level file to load instead of the built-in pack
    pub levels_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_SURFACE_WIDTH,
            default_height: DEFAULT_SURFACE_HEIGHT,
            fall_margin: FALL_MARGIN,

            frame_rate: FRAME_RATE,
            max_frames: 60 * 60,

            show_hud: true,
            goal_pulse: true,
            reduced_motion: false,

            levels_path: None,
        }
    }
}

impl Settings {
    /// Effective goal pulse (respects reduced_motion)
    pub fn effective_goal_pulse(&self) -> bool {
        self.goal_pulse && !self.reduced_motion
    }

    /// Load from `$BLOB_PLATFORMER_SETTINGS` or `settings.json`
    pub fn load() -> Self {
        let path =
            std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load from a file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

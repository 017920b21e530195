//! Game settings
//!
//! Loaded from an optional JSON file; anything missing takes its default.

use std::path::Path;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Loop ===
    /// Target interval between ticks (ms)
    pub tick_ms: f32,
    /// Longest dt a single tick will simulate (ms)
    pub max_step_ms: f32,

    // === Player ===
    pub player_spawn: IVec2,
    /// Horizontal speed while a direction is held (units/s)
    pub run_speed: f32,
    /// Upward speed at take-off (units/s)
    pub jump_velocity: f32,

    // === Camera ===
    /// Fraction of the dead-zone overshoot corrected per tick
    pub camera_gain: f32,

    // === Level generation ===
    pub seed: u64,
    /// Platforms above the base one
    pub platform_count: u32,
    pub min_platform_gap: i32,
    pub max_platform_gap: i32,
    /// Probability a generated platform carries a rainbow
    pub rainbow_chance: f64,
    /// Clearance between a platform top and the rainbow above it
    pub rainbow_float_height: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,

            tick_ms: 10.0,
            max_step_ms: 50.0,

            player_spawn: IVec2::new(400, 300),
            run_speed: 300.0,
            jump_velocity: 450.0,

            camera_gain: 0.1,

            seed: 0x5eed,
            platform_count: 40,
            min_platform_gap: 80,
            max_platform_gap: 140,
            rainbow_chance: 0.4,
            rainbow_float_height: 20,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read settings from `path`, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings from {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }
}

//! Simulation tunables as an explicit record
//!
//! Everything that used to be a scattered constant (tile size, speeds,
//! gravity, viewport) lives here and is passed into the loop and resolver
//! at construction. Loadable from a JSON file; missing fields fall back to
//! the defaults below so partial files work.

use serde::{Deserialize, Serialize};

/// All simulation tunables. One instance per session, read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Edge length of one tile in world units
    pub tile_size: f32,
    /// Downward acceleration (world units / s²)
    pub gravity: f32,
    /// Horizontal walk speed (world units / s)
    pub move_speed: f32,
    /// Walk-speed multiplier while the run button is held
    pub run_multiplier: f32,
    /// Upward velocity applied on jump (world units / s, applied as negative y)
    pub jump_impulse: f32,
    /// Viewport extent in world units
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Fixed simulation timestep (seconds)
    pub fixed_dt: f32,
    /// Frame-time clamp: a single real frame never contributes more than this
    pub max_frame_time: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            gravity: 1500.0,
            move_speed: 200.0,
            run_multiplier: 1.6,
            jump_impulse: 550.0,
            viewport_width: 800,
            viewport_height: 600,
            fixed_dt: 1.0 / 60.0,
            max_frame_time: 0.25,
        }
    }
}

impl Config {
    /// Parse from a JSON document; absent fields take their defaults
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    /// Serialize to pretty JSON (for writing a template config file)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Effective horizontal speed for the current run-button state
    pub fn walk_speed(&self, running: bool) -> f32 {
        if running {
            self.move_speed * self.run_multiplier
        } else {
            self.move_speed
        }
    }
}

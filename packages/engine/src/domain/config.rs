//! Simulation configuration
//!
//! One `SimConfig` value is injected into every step and depth computation;
//! nothing reads process-wide globals. Hosts either start from
//! `SimConfig::default()` or load a JSON document whose keys are all optional:
//!
//! ```json
//! { "gravity": 9.81, "bounciness": 0.25, "resolutionScale": 0.01,
//!   "spawn": { "enabled": true, "kind": "rigidbody", "size": { "x": 20, "y": 20 } } }
//! ```

use serde::{Deserialize, Serialize};

use crate::rigid_body::{BodyKind, Vec2, COLOR_WHITE};

pub const DEFAULT_GRAVITY: f32 = 9.81;
/// Fraction of `gravity` added to the vertical velocity on every step
pub const DEFAULT_GRAVITY_STEP_FRACTION: f32 = 1.0 / 30000.0;
pub const DEFAULT_MAX_FALL_SPEED: f32 = 0.2;
pub const DEFAULT_BOUNCINESS: f32 = 0.25;
/// Share of the estimated penetration corrected per step. Large values tunnel.
pub const DEFAULT_RESOLUTION_SCALE: f32 = 0.01;
pub const DEFAULT_SPAWN_SIZE: Vec2 = Vec2::new(20.0, 20.0);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub gravity: f32,
    pub gravity_step_fraction: f32,
    pub max_fall_speed: f32,
    pub bounciness: f32,
    pub resolution_scale: f32,
    pub static_color: u32,
    pub dynamic_color: u32,
    pub spawn: SpawnSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            gravity_step_fraction: DEFAULT_GRAVITY_STEP_FRACTION,
            max_fall_speed: DEFAULT_MAX_FALL_SPEED,
            bounciness: DEFAULT_BOUNCINESS,
            resolution_scale: DEFAULT_RESOLUTION_SCALE,
            static_color: COLOR_WHITE,
            dynamic_color: COLOR_WHITE,
            spawn: SpawnSettings::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid config: {}", e))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Velocity added to a falling body per step
    #[inline]
    pub fn gravity_increment(&self) -> f32 {
        self.gravity * self.gravity_step_fraction
    }

    pub fn color_for(&self, kind: BodyKind) -> u32 {
        match kind {
            BodyKind::Static => self.static_color,
            BodyKind::Dynamic => self.dynamic_color,
        }
    }
}

/// What a pointer press spawns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpawnSettings {
    /// Pointer presses are ignored while false
    pub enabled: bool,
    pub kind: BodyKind,
    pub size: Vec2,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: BodyKind::Dynamic,
            size: DEFAULT_SPAWN_SIZE,
        }
    }
}

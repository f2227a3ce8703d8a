use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;

/// Configuration for the orrery, provided by the host.
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Seed for the per-body phase offsets.
    pub seed: u64,
    /// Exclusive upper bound of phase offsets (default: 7.0).
    pub max_phase: f32,
    /// Multiplier on host frame deltas (default: 1.0).
    pub time_scale: f32,
    pub camera: CameraConfig,
    /// Maximum draw instances in the shared frame buffer (default: 64).
    pub max_draws: usize,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            max_phase: 7.0,
            time_scale: 1.0,
            camera: CameraConfig::default(),
            max_draws: 64,
        }
    }
}

impl OrreryConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Fly-through camera settings. Angles are in degrees except `fov`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Heading in degrees; -90 looks down -Z.
    pub yaw: f32,
    pub pitch: f32,
    /// Movement speed in scene units per second.
    pub speed: f32,
    /// Degrees of rotation per pointer pixel.
    pub sensitivity: f32,
    /// Vertical field of view in radians; also the widest zoom.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 200.0],
            yaw: -90.0,
            pitch: 0.0,
            speed: 100.0,
            sensitivity: 0.1,
            fov: 1.0472,
            near: 0.1,
            far: 50_000.0,
        }
    }
}

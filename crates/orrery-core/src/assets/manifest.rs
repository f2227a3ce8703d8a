use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;

/// Asset manifest describing body textures, the skybox and shader programs.
/// Loaded from a JSON file at runtime; the host does the actual loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Body name → texture path (e.g. "earth" → "textures/earth.jpg").
    #[serde(default)]
    pub textures: HashMap<String, String>,
    #[serde(default)]
    pub skybox: Option<SkyboxDescriptor>,
    /// Shader programs by role.
    #[serde(default)]
    pub shaders: HashMap<String, ShaderDescriptor>,
}

/// The six cube-map faces, in GL cube-map target order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyboxDescriptor {
    pub right: String,
    pub left: String,
    pub top: String,
    pub bottom: String,
    pub front: String,
    pub back: String,
}

impl SkyboxDescriptor {
    /// Face paths as +X, -X, +Y, -Y, +Z, -Z.
    pub fn faces(&self) -> [&str; 6] {
        [
            self.right.as_str(),
            self.left.as_str(),
            self.top.as_str(),
            self.bottom.as_str(),
            self.front.as_str(),
            self.back.as_str(),
        ]
    }
}

/// A vertex/fragment shader pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaderDescriptor {
    pub vertex: String,
    pub fragment: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Body names in a stable (sorted) order.
    pub fn texture_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.textures.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

use std::collections::HashMap;

use crate::api::types::BodyId;
use crate::assets::manifest::AssetManifest;
use crate::bodies::table::OrbitalParameterTable;

/// Texture handles by body, owned by the rendering side.
///
/// Composition never touches this; the frame builder looks handles up by
/// body id after the matrices are produced.
#[derive(Debug, Clone, Default)]
pub struct TextureTable {
    handles: HashMap<BodyId, u32>,
}

impl TextureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign handles in the manifest's sorted name order, starting at 0.
    /// Handle `i` is `manifest.texture_names()[i]`; the sort is case-sensitive.
    /// Names that match no body are skipped with a warning and still use up
    /// their handle, so the host's binding order stays aligned.
    pub fn from_manifest(manifest: &AssetManifest, table: &OrbitalParameterTable) -> Self {
        let mut textures = Self::new();
        for (handle, name) in manifest.texture_names().into_iter().enumerate() {
            match table.find(name) {
                Some(id) => textures.insert(id, handle as u32),
                None => log::warn!("texture for unknown body {name:?} ignored"),
            }
        }
        textures
    }

    pub fn insert(&mut self, id: BodyId, handle: u32) {
        self.handles.insert(id, handle);
    }

    /// Texture handle for a body. Returns None if not found.
    pub fn get(&self, id: BodyId) -> Option<u32> {
        self.handles.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

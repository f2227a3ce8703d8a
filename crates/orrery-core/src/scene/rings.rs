use glam::{Mat4, Vec3};

use crate::api::types::BodyId;
use crate::bodies::hierarchy::BodyHierarchy;
use crate::bodies::table::OrbitalParameterTable;

/// Model-view matrix for one orbit ring draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDraw {
    /// Sequential ring index (0..ring count).
    pub ring: u32,
    /// Body whose orbit this ring traces.
    pub body: BodyId,
    /// Uniform scale applied to the shared ring mesh.
    pub scale: f32,
    pub model_view: Mat4,
}

/// Bodies that get a ring: every body orbiting a root, in traversal order.
///
/// Depends only on the hierarchy, so callers build it once and reuse it.
pub fn ringed_bodies(hierarchy: &BodyHierarchy) -> Vec<BodyId> {
    hierarchy
        .traversal()
        .into_iter()
        .map(|step| step.id)
        .filter(|&id| hierarchy.orbits_root(id))
        .collect()
}

/// One ring per ringed body, centred on the origin.
///
/// The shared ring mesh has the reference body's orbit radius, so each ring
/// is that mesh scaled by `distance / reference_distance`. No animation
/// time is involved: rings show the whole path, not the current position.
pub struct OrbitRingComposer<'a> {
    table: &'a OrbitalParameterTable,
    /// Bodies that get a ring, in emission order.
    ringed: &'a [BodyId],
}

impl<'a> OrbitRingComposer<'a> {
    pub fn new(table: &'a OrbitalParameterTable, ringed: &'a [BodyId]) -> Self {
        Self { table, ringed }
    }

    /// Bodies that get a ring, in emission order.
    pub fn ringed_bodies(&self) -> &[BodyId] {
        self.ringed
    }

    /// Ring transform (model matrix only) for one body.
    pub fn ring_transform(&self, id: BodyId) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.table.orbit_ratio(id)))
    }

    /// Ring draws in emission order. Each iteration owns its matrices, so
    /// rings are independent of one another.
    pub fn compose(&self, view: Mat4) -> Vec<RingDraw> {
        self.ringed
            .iter()
            .enumerate()
            .map(|(ring, &body)| {
                let scale = self.table.orbit_ratio(body);
                let model = Mat4::from_scale(Vec3::splat(scale));
                RingDraw {
                    ring: ring as u32,
                    body,
                    scale,
                    model_view: view * model,
                }
            })
            .collect()
    }
}

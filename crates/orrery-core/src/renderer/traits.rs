//! Renderer trait for host GPU backends.
//!
//! The orrery produces matrices only. A backend owns the meshes, textures
//! and shader programs and turns one [`FrameData`] into draw calls: the
//! skybox first, then each body with its texture, then the orbit rings.

use glam::Mat4;

use crate::api::types::BodyId;
use crate::assets::registry::TextureTable;
use crate::scene::composer::BodyDraw;
use crate::scene::rings::RingDraw;

/// Timing information from a draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTiming {
    /// Time spent submitting draw calls (microseconds)
    pub draw_us: u32,
}

/// Renderer trait for GPU backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct GlRenderer {
///     gl: glow::Context,
///     sphere: MeshHandle,
///     ring: MeshHandle,
/// }
///
/// impl Renderer for GlRenderer {
///     fn backend(&self) -> &'static str { "webgl2" }
///
///     fn draw(&mut self, frame: &FrameData) -> DrawTiming {
///         // Skybox, then bodies, then rings...
///     }
///
///     fn resize(&mut self, width: u32, height: u32) {
///         // Update the viewport...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "webgl2", "opengl", "headless")
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    /// Returns timing information for profiling.
    fn draw(&mut self, frame: &FrameData) -> DrawTiming;

    /// Handle window resize.
    fn resize(&mut self, width: u32, height: u32);
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Perspective projection for the current viewport and zoom.
    pub projection: Mat4,
    /// Camera view matrix (the composition root).
    pub view: Mat4,
    /// View matrix with translation removed.
    pub skybox_view: Mat4,
    /// Body draws in traversal order.
    pub bodies: &'a [BodyDraw],
    /// Ring draws in emission order.
    pub rings: &'a [RingDraw],
    pub textures: &'a TextureTable,
    /// Simulation time the frame was composed at.
    pub elapsed: f32,
}

impl FrameData<'_> {
    /// Texture handle bound to a body draw.
    pub fn texture_for(&self, body: BodyId) -> Option<u32> {
        self.textures.get(body)
    }

    pub fn draw_count(&self) -> usize {
        self.bodies.len() + self.rings.len()
    }
}

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::api::types::DrawKind;

/// Per-draw data written to the shared buffer for the WebGL host.
/// Must match the host protocol: 20 floats = 80 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    /// Column-major model-view matrix.
    pub model_view: [[f32; 4]; 4],
    /// `DrawKind` as a float.
    pub kind: f32,
    /// Body id for bodies, ring index for rings.
    pub index: f32,
    /// Texture handle, or -1 when the body has none.
    pub texture: f32,
    pub _pad: f32,
}

impl DrawInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn body(id: u32, model_view: Mat4, texture: Option<u32>) -> Self {
        Self {
            model_view: model_view.to_cols_array_2d(),
            kind: DrawKind::Body.as_f32(),
            index: id as f32,
            texture: texture.map_or(-1.0, |t| t as f32),
            _pad: 0.0,
        }
    }

    pub fn ring(ring: u32, model_view: Mat4) -> Self {
        Self {
            model_view: model_view.to_cols_array_2d(),
            kind: DrawKind::Ring.as_f32(),
            index: ring as f32,
            texture: -1.0,
            _pad: 0.0,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model_view)
    }
}

/// Draw buffer holding one frame's bodies followed by its rings.
pub struct DrawBuffer {
    pub instances: Vec<DrawInstance>,
    /// Index where ring draws begin. Instances [0..ring_split) are bodies.
    pub ring_split: u32,
}

impl DrawBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            ring_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.ring_split = 0;
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    /// Mark the current end as the start of the ring section.
    pub fn begin_rings(&mut self) {
        self.ring_split = self.instances.len() as u32;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn body_count(&self) -> u32 {
        self.ring_split
    }

    pub fn ring_count(&self) -> u32 {
        self.instance_count() - self.ring_split
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn draw_instance_is_20_floats() {
        assert_eq!(std::mem::size_of::<DrawInstance>(), 80);
        assert_eq!(DrawInstance::FLOATS, 20);
    }

    #[test]
    fn body_instance_layout() {
        let mv = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let inst = DrawInstance::body(4, mv, Some(7));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&inst));
        assert_eq!(&floats[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(floats[16], 0.0);
        assert_eq!(floats[17], 4.0);
        assert_eq!(floats[18], 7.0);
        assert_eq!(inst.matrix(), mv);
    }

    #[test]
    fn untextured_body_and_rings_use_negative_texture() {
        assert_eq!(DrawInstance::body(0, Mat4::IDENTITY, None).texture, -1.0);
        let ring = DrawInstance::ring(3, Mat4::IDENTITY);
        assert_eq!(ring.kind, 1.0);
        assert_eq!(ring.index, 3.0);
        assert_eq!(ring.texture, -1.0);
    }

    #[test]
    fn draw_buffer_split() {
        let mut buf = DrawBuffer::new();
        buf.push(DrawInstance::body(0, Mat4::IDENTITY, None));
        buf.push(DrawInstance::body(1, Mat4::IDENTITY, None));
        buf.begin_rings();
        buf.push(DrawInstance::ring(0, Mat4::IDENTITY));
        assert_eq!(buf.instance_count(), 3);
        assert_eq!(buf.body_count(), 2);
        assert_eq!(buf.ring_count(), 1);
        assert_eq!(buf.as_floats().len(), 60);

        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.ring_split, 0);
    }
}

//! Shared frame buffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Projection: 16 floats, column-major]
//! [Skybox view: 16 floats, column-major]
//! [Draws: max_draws × 20 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.
//!
//! Texture handles in a draw's texture slot index the manifest's `textures`
//! keys sorted by byte order (`AssetManifest::texture_names`). Sorting is
//! case-sensitive, so `"Sun"` gets a lower handle than `"earth"`. The host
//! must bind its textures in that same order. `-1` means untextured.

use crate::api::config::OrreryConfig;
use crate::renderer::instance::{DrawBuffer, DrawInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_DRAWS: usize = 2;
pub const HEADER_DRAW_COUNT: usize = 3;
pub const HEADER_RING_SPLIT: usize = 4;
pub const HEADER_ELAPSED: usize = 5;
pub const HEADER_QUIT_REQUESTED: usize = 6;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per 4×4 matrix.
pub const MATRIX_FLOATS: usize = 16;

/// Floats per draw instance (wire format, never changes).
pub const DRAW_FLOATS: usize = DrawInstance::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum draw instances.
    pub max_draws: usize,

    /// Offset (in floats) of the projection matrix.
    pub projection_offset: usize,
    /// Offset (in floats) of the skybox view matrix.
    pub skybox_view_offset: usize,
    /// Offset (in floats) where draw data begins.
    pub draw_data_offset: usize,
    /// Size of draw data section in floats.
    pub draw_data_floats: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_draws: usize) -> Self {
        let projection_offset = HEADER_FLOATS;
        let skybox_view_offset = projection_offset + MATRIX_FLOATS;
        let draw_data_offset = skybox_view_offset + MATRIX_FLOATS;
        let draw_data_floats = max_draws * DRAW_FLOATS;
        let buffer_total_floats = draw_data_offset + draw_data_floats;

        Self {
            max_draws,
            projection_offset,
            skybox_view_offset,
            draw_data_offset,
            draw_data_floats,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &OrreryConfig) -> Self {
        Self::new(config.max_draws)
    }

    /// Allocate a zeroed buffer with capacities written into the header.
    pub fn allocate(&self) -> Vec<f32> {
        let mut buffer = vec![0.0; self.buffer_total_floats];
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buffer[HEADER_MAX_DRAWS] = self.max_draws as f32;
        buffer
    }

    /// Write one frame into `buffer`. Draws past `max_draws` are dropped
    /// with a warning. Returns the number of draws written.
    pub fn write_frame(&self, buffer: &mut [f32], frame: &FrameRecord<'_>) -> usize {
        assert_eq!(
            buffer.len(),
            self.buffer_total_floats,
            "frame buffer does not match the protocol layout"
        );

        let total = frame.draws.instance_count() as usize;
        let written = total.min(self.max_draws);
        if written < total {
            log::warn!("frame has {total} draws; only {} fit the shared buffer", self.max_draws);
        }

        buffer[HEADER_FRAME_COUNTER] = frame.frame as f32;
        buffer[HEADER_DRAW_COUNT] = written as f32;
        buffer[HEADER_RING_SPLIT] = (frame.draws.ring_split as usize).min(written) as f32;
        buffer[HEADER_ELAPSED] = frame.elapsed;
        buffer[HEADER_QUIT_REQUESTED] = if frame.quit_requested { 1.0 } else { 0.0 };

        buffer[self.projection_offset..self.skybox_view_offset].copy_from_slice(frame.projection);
        buffer[self.skybox_view_offset..self.draw_data_offset].copy_from_slice(frame.skybox_view);

        let floats = &frame.draws.as_floats()[..written * DRAW_FLOATS];
        buffer[self.draw_data_offset..self.draw_data_offset + floats.len()].copy_from_slice(floats);
        written
    }
}

/// Everything the host needs for one frame, borrowed for the write.
pub struct FrameRecord<'a> {
    pub frame: u32,
    pub elapsed: f32,
    pub quit_requested: bool,
    pub projection: &'a [f32; 16],
    pub skybox_view: &'a [f32; 16],
    pub draws: &'a DrawBuffer,
}

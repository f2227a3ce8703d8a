/// Stable identifier of a body: its index in the orbital parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a draw instance represents on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DrawKind {
    /// Shared unit sphere, textured per body.
    Body = 0,
    /// Shared orbit ring mesh.
    Ring = 1,
}

impl DrawKind {
    pub fn as_f32(self) -> f32 {
        self as u32 as f32
    }
}

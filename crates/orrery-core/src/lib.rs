pub mod api;
pub mod core;
pub mod bodies;
pub mod scene;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{CameraConfig, OrreryConfig};
pub use api::error::OrreryError;
pub use api::orrery::{Frame, Orrery};
pub use api::types::{BodyId, DrawKind};
pub use bodies::hierarchy::{BodyHierarchy, TraversalStep};
pub use bodies::table::{BodyParams, OrbitalParameterTable, PhaseOffsets};
pub use crate::core::time::SimClock;
pub use scene::{BodyDraw, BodyFrames, MatrixStack, OrbitRingComposer, RingDraw, SceneComposer};
pub use renderer::camera::{FlyCamera, Movement};
pub use renderer::instance::{DrawBuffer, DrawInstance};
pub use renderer::{DrawTiming, FrameData, Renderer};
pub use input::queue::{InputEvent, InputQueue, KeyState};
pub use assets::manifest::AssetManifest;
pub use assets::registry::TextureTable;
pub use bridge::protocol::{FrameRecord, ProtocolLayout};

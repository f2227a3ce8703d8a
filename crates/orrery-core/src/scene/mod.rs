pub mod composer;
pub mod orbit;
pub mod rings;
pub mod stack;

pub use composer::{BodyDraw, SceneComposer};
pub use orbit::{compose_body, orbital_position, BodyFrames};
pub use rings::{ringed_bodies, OrbitRingComposer, RingDraw};
pub use stack::MatrixStack;

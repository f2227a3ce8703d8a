//! Per-body transform math. Pure functions, no engine state.

use glam::{Mat4, Vec3};

use crate::bodies::table::BodyParams;

/// Orbital angle in radians: `(phase + t) · angular_speed`.
///
/// The phase shifts the starting angle only; bodies sharing a speed keep a
/// fixed relative phase forever.
#[inline]
pub fn orbital_angle(angular_speed: f32, phase: f32, t: f32) -> f32 {
    (phase + t) * angular_speed
}

/// Position on a circular orbit in the horizontal (XZ) plane, relative to the parent.
///
/// At angle 0 the body sits on +Z: `(0, 0, distance)`.
#[inline]
pub fn orbital_position(distance: f32, angular_speed: f32, phase: f32, t: f32) -> Vec3 {
    let angle = orbital_angle(angular_speed, phase, t);
    Vec3::new(angle.sin() * distance, 0.0, angle.cos() * distance)
}

/// Orbital placement for `body` (identity for roots, which stay at the parent origin).
pub fn placement(body: &BodyParams, phase: f32, t: f32) -> Mat4 {
    if body.is_root() {
        Mat4::IDENTITY
    } else {
        Mat4::from_translation(orbital_position(body.orbital_distance, body.angular_speed, phase, t))
    }
}

/// Self-rotation about +Y followed by uniform scale of the unit sphere.
pub fn spin_scale(body: &BodyParams, t: f32) -> Mat4 {
    Mat4::from_rotation_y(t * body.spin_speed) * Mat4::from_scale(Vec3::splat(body.visual_scale))
}

/// Frames produced for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrames {
    /// Parent frame plus orbital placement. Children compose on top of this.
    pub retained: Mat4,
    /// `retained` plus spin and scale. Used only for this body's draw.
    pub own: Mat4,
}

/// Compose one body from its parent's retained frame.
///
/// Same multiplication order as a push-copy / multiply-top stack walk, so
/// both paths produce bit-identical matrices.
pub fn compose_body(parent: Mat4, body: &BodyParams, phase: f32, t: f32) -> BodyFrames {
    let retained = if body.is_root() { parent } else { parent * placement(body, phase, t) };
    let own = retained * spin_scale(body, t);
    BodyFrames { retained, own }
}

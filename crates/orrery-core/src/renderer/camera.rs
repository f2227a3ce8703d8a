use glam::{Mat3, Mat4, Vec3};

use crate::api::config::CameraConfig;

/// Pitch limit in degrees; looking straight up or down flips `look_at`.
pub const PITCH_LIMIT: f32 = 89.0;

/// Narrowest zoom, in degrees.
pub const MIN_ZOOM_DEGREES: f32 = 1.0;

/// Direction of a keyboard movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person fly-through camera for 3D rendering.
/// Yaw/pitch in degrees; zoom is the current vertical field of view.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    /// Current vertical field of view in radians.
    pub zoom: f32,
    /// Widest allowed zoom in radians.
    max_zoom: f32,
    pub near: f32,
    pub far: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl FlyCamera {
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            speed: config.speed,
            sensitivity: config.sensitivity,
            zoom: config.fov,
            max_zoom: config.fov,
            near: config.near,
            far: config.far,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection (OpenGL clip space) for the current zoom.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom, aspect, self.near, self.far)
    }

    /// View matrix with translation removed, for the skybox pass.
    pub fn skybox_view(&self) -> Mat4 {
        Mat4::from_mat3(Mat3::from_mat4(self.view_matrix()))
    }

    /// Move along the view plane. `dt` is the real frame delta in seconds.
    pub fn process_movement(&mut self, direction: Movement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
        }
    }

    /// Turn by a pointer delta in screen pixels (y grows downward).
    pub fn process_pointer(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Zoom by scroll-wheel steps; positive zooms in.
    pub fn process_scroll(&mut self, dy: f32) {
        let degrees = (self.zoom.to_degrees() - dy).clamp(MIN_ZOOM_DEGREES, self.max_zoom.to_degrees());
        self.zoom = degrees.to_radians();
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(cam.right().abs_diff_eq(Vec3::X, 1e-6));
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 200.0));
    }

    #[test]
    fn view_maps_origin_in_front_of_camera() {
        let cam = FlyCamera::default();
        let origin = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -200.0), 1e-3));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.process_pointer(0.0, -10_000.0);
        assert_eq!(cam.pitch, PITCH_LIMIT);
        cam.process_pointer(0.0, 10_000.0);
        assert_eq!(cam.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn movement_scales_with_dt() {
        let mut cam = FlyCamera::default();
        cam.speed = 50.0;
        cam.process_movement(Movement::Forward, 0.5);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 175.0), 1e-3));
        cam.process_movement(Movement::Right, 0.2);
        assert!((cam.position.x - 10.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped_to_configured_fov() {
        let mut cam = FlyCamera::default();
        let widest = cam.zoom;
        cam.process_scroll(-30.0);
        assert!((cam.zoom - widest).abs() < 1e-5);
        cam.process_scroll(500.0);
        assert!((cam.zoom.to_degrees() - MIN_ZOOM_DEGREES).abs() < 1e-4);
    }

    #[test]
    fn skybox_view_drops_translation() {
        let mut cam = FlyCamera::default();
        cam.position = Vec3::new(40.0, -12.0, 900.0);
        cam.process_pointer(35.0, 12.0);
        let sky = cam.skybox_view();
        assert_eq!(sky.w_axis, glam::Vec4::W);
        let rotation = Mat3::from_mat4(cam.view_matrix());
        assert_eq!(Mat3::from_mat4(sky), rotation);
    }
}

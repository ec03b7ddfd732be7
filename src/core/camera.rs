use super::constants::{CAMERA_FAR, CAMERA_FOVY_DEG, CAMERA_NEAR, MAX_ZOOM};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking down -Z from `(0, 0, depth)`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, MAX_ZOOM),
            target: Vec3::new(0.0, 0.0, MAX_ZOOM - 1.0),
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Move along Z keeping the straight-ahead view direction.
    pub fn set_depth(&mut self, depth: f32) {
        self.eye = Vec3::new(0.0, 0.0, depth);
        self.target = Vec3::new(0.0, 0.0, depth - 1.0);
    }

    /// Update the aspect ratio. Zero or non-finite sizes are ignored and
    /// `false` is returned so callers can skip dependent work.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        let aspect = width / height;
        if !aspect.is_finite() {
            return false;
        }
        self.aspect = aspect;
        true
    }
}

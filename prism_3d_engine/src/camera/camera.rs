/// Camera: fly camera driven by the host's input handling.
///
/// Orientation is stored as yaw/pitch in degrees (yaw -90° looks down -Z).
/// The camera produces right-handed view and GL-convention projection
/// matrices and uploads them with the eye position to a shader.

use glam::{Mat4, Vec3};
use crate::resource::uniform_names;
use crate::resource::Shader;

/// Pitch limit, keeps the view from flipping over the pole
pub const MAX_PITCH: f32 = 89.0;
/// Narrowest and widest vertical field of view, in degrees
pub const FOV_RANGE: (f32, f32) = (1.0, 90.0);

/// Direction of a movement step, relative to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    world_up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

impl Camera {
    /// Camera at `position` looking down -Z, 45° vertical FOV, clip 0.1..100
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
            world_up: Vec3::Y,
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(self.world_up).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front()).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.up())
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), aspect, self.near, self.far)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set orientation; pitch is clamped to ±`MAX_PITCH`
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Add mouse-look deltas in degrees
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.set_orientation(self.yaw + yaw_delta, self.pitch + pitch_delta);
    }

    /// Vertical field of view in degrees, clamped to `FOV_RANGE`
    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y.clamp(FOV_RANGE.0, FOV_RANGE.1);
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    /// Move `distance` world units along `direction`
    pub fn step(&mut self, direction: CameraMovement, distance: f32) {
        let offset = match direction {
            CameraMovement::Forward => self.front(),
            CameraMovement::Backward => -self.front(),
            CameraMovement::Right => self.right(),
            CameraMovement::Left => -self.right(),
            CameraMovement::Up => self.world_up,
            CameraMovement::Down => -self.world_up,
        };
        self.position += offset * distance;
    }

    /// Upload `view`, `projection` and `viewPos`; the shader must be current
    pub fn upload(&self, shader: &Shader, aspect: f32) {
        shader.set_mat4(uniform_names::VIEW, &self.view_matrix());
        shader.set_mat4(uniform_names::PROJECTION, &self.projection_matrix(aspect));
        shader.set_vec3(uniform_names::VIEW_POS, self.position);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

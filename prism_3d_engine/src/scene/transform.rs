/// Transform of a scene actor
///
/// Position, non-uniform scale and a single axis-angle rotation. The model
/// matrix is composed as `R * T * S`: scale, then translate, then rotate the
/// translated result about the world origin. Every transform-owning actor uses
/// this same order.

use glam::{Mat4, Vec3};

/// Axes shorter than this are treated as "no rotation"
const MIN_AXIS_LENGTH_SQUARED: f32 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation_axis: Vec3,
    /// Degrees
    pub rotation_angle: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation_axis: Vec3::Y,
            rotation_angle: 0.0,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Default::default() }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, axis: Vec3, angle_degrees: f32) -> Self {
        self.rotation_axis = axis;
        self.rotation_angle = angle_degrees;
        self
    }

    /// Rotation part; identity for a zero-length axis
    pub fn rotation_matrix(&self) -> Mat4 {
        if self.rotation_axis.length_squared() < MIN_AXIS_LENGTH_SQUARED {
            return Mat4::IDENTITY;
        }
        Mat4::from_axis_angle(self.rotation_axis.normalize(), self.rotation_angle.to_radians())
    }

    /// `R * T * S`
    pub fn model_matrix(&self) -> Mat4 {
        self.rotation_matrix()
            * Mat4::from_translation(self.position)
            * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;

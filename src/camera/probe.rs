//! Probe — an independently positioned demonstration frustum.
//!
//! The probe is not the render camera. It carries its own perspective
//! parameters and its own orientation, and exists purely to classify
//! objects against an arbitrary, user-positioned volume (the classic
//! "watch the culling happen from outside" setup). An optional animation
//! spins it about the world Z axis so the classification inputs change
//! every frame.

use std::f32::consts::PI;
use glam::{Mat4, Vec3};
use crate::frustum::FrustumSource;

/// Rotation rate of the spin animation, radians per second
const ROTATION_RATE: f32 = PI / 4.0;
/// World axis the spin animation rotates about
const ROTATION_AXIS: Vec3 = Vec3::Z;

/// A camera-like frustum source with its own orientation matrix.
///
/// Orientation is a rigid rotation matrix whose +X column is the look
/// direction and +Z column the up direction. Look/normal are derived
/// from it rather than stored, so the spin animation only touches the
/// matrix.
#[derive(Debug, Clone)]
pub struct Probe {
    position: Vec3,
    orientation: Mat4,
    near: f32,
    far: f32,
    fov_h_deg: f32,
    aspect: f32,
    rotating: bool,
}

impl Probe {
    /// Create a probe with identity orientation (looking along +X, +Z up).
    pub fn new(position: Vec3, near: f32, far: f32, fov_h_deg: f32, aspect: f32) -> Self {
        Self {
            position,
            orientation: Mat4::IDENTITY,
            near,
            far,
            fov_h_deg,
            aspect,
            rotating: false,
        }
    }

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Orientation matrix (rotation only; translation is `position`).
    pub fn orientation(&self) -> &Mat4 {
        &self.orientation
    }

    /// Set the orientation matrix.
    pub fn set_orientation(&mut self, orientation: Mat4) {
        self.orientation = orientation;
    }

    /// Look direction: the orientation's +X column.
    pub fn look(&self) -> Vec3 {
        self.orientation.transform_vector3(Vec3::X)
    }

    /// Up direction: the orientation's +Z column.
    pub fn normal(&self) -> Vec3 {
        self.orientation.transform_vector3(Vec3::Z)
    }

    // ===== SPIN ANIMATION =====

    /// Whether the spin animation is enabled.
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Enable or disable the spin animation.
    pub fn set_rotating(&mut self, rotating: bool) {
        self.rotating = rotating;
    }

    /// Flip the spin animation on/off (keyboard toggle hook).
    pub fn toggle_rotation(&mut self) {
        self.rotating = !self.rotating;
    }

    /// Advance the spin animation by `dt` seconds.
    ///
    /// While rotating, the orientation turns by `dt * π/4` radians about
    /// the world Z axis (pre-multiplied, so the axis stays fixed in world
    /// space). Does nothing when the animation is disabled.
    pub fn advance(&mut self, dt: f32) {
        if self.rotating {
            let spin = Mat4::from_axis_angle(ROTATION_AXIS, dt * ROTATION_RATE);
            self.orientation = spin * self.orientation;
        }
    }
}

impl FrustumSource for Probe {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn look_direction(&self) -> Vec3 {
        self.look()
    }

    fn normal_direction(&self) -> Vec3 {
        self.normal()
    }

    fn near_distance(&self) -> f32 {
        self.near
    }

    fn far_distance(&self) -> f32 {
        self.far
    }

    fn horizontal_fov_deg(&self) -> f32 {
        self.fov_h_deg
    }

    fn aspect_ratio(&self) -> f32 {
        self.aspect
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;

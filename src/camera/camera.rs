//! Camera — passive parameter container for the live viewer.
//!
//! The camera computes nothing. The caller (game engine, editor) is
//! responsible for driving position and orientation; this type only
//! stores the perspective parameters and hands them to frustum
//! construction through `FrustumSource`.

use glam::Vec3;
use crate::frustum::FrustumSource;

/// Default near clip distance
const DEFAULT_NEAR: f32 = 0.1;
/// Default far clip distance
const DEFAULT_FAR: f32 = 1000.0;
/// Default horizontal field of view in degrees
const DEFAULT_FOV_H_DEG: f32 = 90.0;
/// Default aspect ratio (width / height)
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// The live viewer's perspective parameters.
///
/// A passive data container — owned and driven by the caller, read by
/// the visibility pass once per frame.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    look: Vec3,
    normal: Vec3,
    near: f32,
    far: f32,
    fov_h_deg: f32,
    aspect: f32,
}

impl Camera {
    /// Create a camera at the given position with the given orientation.
    ///
    /// Clip range, FOV, and aspect start at the defaults (0.1..1000,
    /// 90° horizontal, 16:9).
    pub fn new(position: Vec3, look: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            look,
            normal,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            fov_h_deg: DEFAULT_FOV_H_DEG,
            aspect: DEFAULT_ASPECT,
        }
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View direction.
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// Up direction.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Near clip distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Horizontal field of view in degrees.
    pub fn fov_h_deg(&self) -> f32 {
        self.fov_h_deg
    }

    /// Aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    // ===== SETTERS — store, compute nothing =====

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the view direction.
    pub fn set_look(&mut self, look: Vec3) {
        self.look = look;
    }

    /// Set the up direction.
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal;
    }

    /// Point the camera at a world-space target, keeping the up direction.
    pub fn set_look_at(&mut self, target: Vec3) {
        self.look = (target - self.position).normalize();
    }

    /// Set the near/far clip distances.
    pub fn set_clip_range(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    /// Set the horizontal field of view in degrees.
    pub fn set_fov_h_deg(&mut self, fov_h_deg: f32) {
        self.fov_h_deg = fov_h_deg;
    }

    /// Set the aspect ratio (width / height).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::X, Vec3::Z)
    }
}

impl FrustumSource for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn look_direction(&self) -> Vec3 {
        self.look
    }

    fn normal_direction(&self) -> Vec3 {
        self.normal
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
#[path = "camera_tests.rs"]
mod tests;

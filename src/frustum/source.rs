//! FrustumSource — capability trait for anything that can parameterize
//! a frustum.
//!
//! The live camera and the demonstration probe differ only in where
//! their parameters come from; both feed the same construction and
//! classification path through this trait.

use glam::Vec3;
use crate::error::{Error, Result};

/// Minimum squared cross-product length below which two directions are
/// treated as parallel
const PARALLEL_EPSILON: f32 = 1e-8;

/// Supplies the seven parameters of a perspective frustum.
///
/// Implemented by `Camera`, `Probe`, and the plain `FrustumParams`
/// value for synthetic frustums.
pub trait FrustumSource {
    /// World-space apex position (the viewpoint).
    fn position(&self) -> Vec3;

    /// View direction (need not be unit length; normalized at construction).
    fn look_direction(&self) -> Vec3;

    /// Up direction (need not be unit length or exactly perpendicular
    /// to the look direction).
    fn normal_direction(&self) -> Vec3;

    /// Near clip distance.
    fn near_distance(&self) -> f32;

    /// Far clip distance.
    fn far_distance(&self) -> f32;

    /// Horizontal field of view in degrees.
    fn horizontal_fov_deg(&self) -> f32;

    /// Aspect ratio (width / height).
    fn aspect_ratio(&self) -> f32;

    /// Check the frustum preconditions, returning the first violation.
    ///
    /// The unchecked construction path never calls this; it backs
    /// `Frustum::try_from_source` for callers that want a guarded fault.
    fn validate(&self) -> Result<()> {
        let aspect = self.aspect_ratio();
        if aspect <= 0.0 {
            return Err(Error::InvalidAspectRatio(format!("aspect = {}", aspect)));
        }

        let fov_h = self.horizontal_fov_deg();
        if fov_h <= 0.0 || fov_h >= 180.0 {
            return Err(Error::InvalidFieldOfView(format!(
                "fov_h = {} (must be in (0, 180) degrees)",
                fov_h
            )));
        }

        let near = self.near_distance();
        let far = self.far_distance();
        if near <= 0.0 {
            return Err(Error::InvalidClipRange(format!("near = {}", near)));
        }
        if far <= near {
            return Err(Error::InvalidClipRange(format!(
                "far ({}) <= near ({})",
                far, near
            )));
        }

        let look = self.look_direction();
        let normal = self.normal_direction();
        if look.length_squared() == 0.0 {
            return Err(Error::DegenerateDirection("zero look direction".to_string()));
        }
        if normal.length_squared() == 0.0 {
            return Err(Error::DegenerateDirection("zero normal direction".to_string()));
        }
        let cross = look.normalize().cross(normal.normalize());
        if cross.length_squared() < PARALLEL_EPSILON {
            return Err(Error::DegenerateDirection(
                "look and normal directions are parallel".to_string(),
            ));
        }

        Ok(())
    }
}

/// Plain-value frustum parameters.
///
/// Useful for synthetic frustums in tests and tools, and as the common
/// denominator of camera- and probe-sourced parameters.
#[derive(Debug, Clone, Copy)]
pub struct FrustumParams {
    pub position: Vec3,
    pub look: Vec3,
    pub normal: Vec3,
    pub near: f32,
    pub far: f32,
    pub fov_h_deg: f32,
    pub aspect: f32,
}

impl FrustumSource for FrustumParams {
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
#[path = "source_tests.rs"]
mod tests;

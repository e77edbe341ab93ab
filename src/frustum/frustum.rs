//! Frustum — six inward-facing clipping planes for visibility culling.
//!
//! Built geometrically from camera-style parameters (position, look
//! direction, up direction, near/far distances, horizontal FOV, aspect
//! ratio) rather than extracted from a projection matrix, so any
//! parameter source — the live camera or a synthetic probe — can drive
//! construction. A point strictly inside the visible volume is on the
//! positive side of all six planes.

use glam::Vec3;
use crate::error::Result;
use crate::vista_error;
use super::plane::{Plane, PlaneId};
use super::source::FrustumSource;

/// Derive the vertical FOV (degrees) from a horizontal FOV and aspect ratio.
///
/// `fov_v = 2 * atan(tan(fov_h / 2) / aspect)`. For aspect 1.0 the two
/// angles are equal; wider aspect ratios shrink the vertical angle.
pub fn vertical_fov_deg(fov_h_deg: f32, aspect: f32) -> f32 {
    let half_h = (fov_h_deg.to_radians() * 0.5).tan();
    (2.0 * (half_h / aspect).atan()).to_degrees()
}

/// Six frustum planes, ordered Left, Right, Top, Bottom, Near, Far.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Planes in `PlaneId` storage order
    planes: [Plane; 6],
}

impl Frustum {
    /// Build a frustum from perspective parameters.
    ///
    /// `look` is the view direction, `normal` the camera's up direction;
    /// the third axis is their cross product. The four side planes pass
    /// through `position` (the pyramid apex) with inward normals derived
    /// from the view-pyramid edge directions. The near and far planes lie
    /// along `look` at the two clip distances, facing each other.
    ///
    /// # Preconditions (not checked)
    ///
    /// `near > 0`, `far > near`, `aspect > 0`, `fov_h_deg` in (0, 180),
    /// `look` and `normal` non-zero and not parallel. Violations produce
    /// a degenerate frustum with undefined classification results, never
    /// a panic or error. Use [`Frustum::try_from_source`] for a checked
    /// construction path.
    pub fn from_perspective(
        aspect: f32,
        fov_h_deg: f32,
        near: f32,
        far: f32,
        look: Vec3,
        normal: Vec3,
        position: Vec3,
    ) -> Self {
        let look = look.normalize();
        let right = normal.cross(look).normalize();
        // Re-orthogonalized up: exact even when `normal` is only roughly
        // perpendicular to `look`
        let up = look.cross(right);

        let fov_v_deg = vertical_fov_deg(fov_h_deg, aspect);
        let tan_h = (fov_h_deg.to_radians() * 0.5).tan();
        let tan_v = (fov_v_deg.to_radians() * 0.5).tan();

        // Inward normals of the four side planes, from the pyramid edge
        // directions at unit distance along the look axis
        let n_left = up.cross(look - right * tan_h).normalize();
        let n_right = (look + right * tan_h).cross(up).normalize();
        let n_top = right.cross(look + up * tan_v).normalize();
        let n_bottom = (look - up * tan_v).cross(right).normalize();

        let planes = [
            Plane::from_point_normal(position, n_left),
            Plane::from_point_normal(position, n_right),
            Plane::from_point_normal(position, n_top),
            Plane::from_point_normal(position, n_bottom),
            Plane::from_point_normal(position + look * near, look),
            Plane::from_point_normal(position + look * far, -look),
        ];

        Self { planes }
    }

    /// Build a frustum from any parameter source (camera, probe, raw params).
    ///
    /// Unchecked: inherits the preconditions of [`Frustum::from_perspective`].
    pub fn from_source(source: &dyn FrustumSource) -> Self {
        Self::from_perspective(
            source.aspect_ratio(),
            source.horizontal_fov_deg(),
            source.near_distance(),
            source.far_distance(),
            source.look_direction(),
            source.normal_direction(),
            source.position(),
        )
    }

    /// Build a frustum from a parameter source, validating the parameters.
    ///
    /// Returns an error (and logs it) for degenerate inputs instead of the
    /// unchecked path's silent degeneracy.
    pub fn try_from_source(source: &dyn FrustumSource) -> Result<Self> {
        if let Err(e) = source.validate() {
            vista_error!("vista3d::Frustum", "Rejected frustum parameters: {}", e);
            return Err(e);
        }
        Ok(Self::from_source(source))
    }

    /// The plane with the given identity.
    pub fn plane(&self, id: PlaneId) -> &Plane {
        &self.planes[id.index()]
    }

    /// All six planes in `PlaneId` storage order.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Test whether a point lies inside the frustum.
    ///
    /// Inside means on the positive side of all six planes; points exactly
    /// on a plane count as inside.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| p.is_on_positive_side(point))
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

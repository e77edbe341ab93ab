//! Box/frustum classifier — the conservative corner test.
//!
//! For each of the six planes, all eight world-space corners of the
//! object's bounding box are tested. A plane excludes the box only when
//! EVERY corner is on its negative side; the first excluding plane
//! short-circuits to OUTSIDE, otherwise the box is INSIDE.
//!
//! This is deliberately NOT an exact separating-axis test: a box whose
//! corners individually straddle different planes can classify as inside
//! while missing the frustum volume entirely (a false positive). It can
//! never produce a false negative. The imprecision is part of the
//! observable behavior and is preserved as-is.

use glam::{Mat4, Vec3};
use crate::frustum::Frustum;
use super::object::{BoundingBox, SceneObject};

/// Narrow capability interface for anything the classifier can test.
///
/// Decouples classification from the rest of the object model: a type
/// only needs a world position, a display transform, and local bounding
/// half-extents to be cullable.
pub trait Cullable {
    /// World-space position (translation).
    fn world_position(&self) -> Vec3;

    /// Affine display transform (rotation/scale).
    fn display_transform(&self) -> &Mat4;

    /// Local-space bounding half-extents.
    fn half_extents(&self) -> Vec3;
}

impl Cullable for SceneObject {
    fn world_position(&self) -> Vec3 {
        self.position()
    }

    fn display_transform(&self) -> &Mat4 {
        self.transform()
    }

    fn half_extents(&self) -> Vec3 {
        self.bounding_box().half_extents
    }
}

/// Test a transformed box against a frustum.
///
/// Corners are `position + transform * (sign ⊙ half_extents)` for the
/// sign combinations in {-1,+1}³. Pure function: no allocation, no
/// mutation of inputs.
pub fn is_in_frustum(
    transform: &Mat4,
    position: Vec3,
    half_extents: Vec3,
    frustum: &Frustum,
) -> bool {
    let corners = BoundingBox::new(half_extents).world_corners(transform, position);

    for plane in frustum.planes() {
        // The box is excluded by this plane only if every corner is on
        // the negative side
        let outside = corners.iter().all(|c| !plane.is_on_positive_side(*c));
        if outside {
            return false;
        }
    }

    true
}

/// Test a cullable object against a frustum.
pub fn is_object_in_frustum(object: &impl Cullable, frustum: &Frustum) -> bool {
    is_in_frustum(
        object.display_transform(),
        object.world_position(),
        object.half_extents(),
        frustum,
    )
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;

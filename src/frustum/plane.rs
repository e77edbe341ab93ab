//! Plane — an oriented half-space boundary.
//!
//! A plane is a unit normal plus a scalar coefficient. A point P is on
//! the positive (inside) side iff `dot(normal, P) >= coefficient`. The
//! six planes of a `Frustum` all face inward, so "positive side of every
//! plane" means "inside the visible volume".

use glam::Vec3;

/// Identity of a frustum plane.
///
/// Construction and consumption both index planes through this enum
/// rather than bare positions, so the ordering cannot silently drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneId {
    Left,
    Right,
    Top,
    Bottom,
    Near,
    Far,
}

impl PlaneId {
    /// All six plane identities in storage order.
    pub const ALL: [PlaneId; 6] = [
        PlaneId::Left,
        PlaneId::Right,
        PlaneId::Top,
        PlaneId::Bottom,
        PlaneId::Near,
        PlaneId::Far,
    ];

    /// Storage index of this plane within a `Frustum`.
    pub fn index(self) -> usize {
        match self {
            PlaneId::Left => 0,
            PlaneId::Right => 1,
            PlaneId::Top => 2,
            PlaneId::Bottom => 3,
            PlaneId::Near => 4,
            PlaneId::Far => 5,
        }
    }
}

/// An oriented plane: unit normal + coefficient.
///
/// The plane equation is `dot(normal, P) = coefficient`. Points with
/// `dot(normal, P) >= coefficient` are on the positive side.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal, pointing toward the positive side
    pub normal: Vec3,
    /// Plane equation coefficient (signed offset along the normal)
    pub coefficient: f32,
}

impl Plane {
    /// Create a plane from a normal and coefficient.
    ///
    /// The normal is expected to be unit length; no normalization is
    /// performed here.
    pub fn new(normal: Vec3, coefficient: f32) -> Self {
        Self { normal, coefficient }
    }

    /// Create a plane through `point` with the given unit `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            coefficient: normal.dot(point),
        }
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Positive on the normal's side, negative behind, zero on the plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.coefficient
    }

    /// Test whether `point` is on the positive (inside) side.
    ///
    /// Points exactly on the plane count as inside.
    pub fn is_on_positive_side(&self, point: Vec3) -> bool {
        self.normal.dot(point) >= self.coefficient
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;

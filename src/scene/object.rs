//! Tracked object types for the scene system.
//!
//! A SceneObject is the narrow view of a renderable the classifier
//! needs: world position, affine display transform, local bounding
//! half-extents, and the per-frame visibility state written back by the
//! visibility pass. Everything else about a renderable (meshes, skins,
//! physics) lives with the caller.

use bitflags::bitflags;
use glam::{Mat4, Vec3};
use slotmap::new_key_type;

new_key_type! {
    /// Stable key for a SceneObject within a Scene.
    ///
    /// Keys remain valid even after other objects are removed.
    pub struct SceneObjectKey;
}

// ===== BOUNDING BOX =====

/// Axis-aligned bounding box in the object's local frame.
///
/// Stored as non-negative half-extents about the local origin and
/// transformed to world space corner-by-corner at classification time.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Half-extents (lx, ly, lz), each >= 0
    pub half_extents: Vec3,
}

impl BoundingBox {
    /// Create a bounding box from half-extents.
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// Create a bounding box from full side lengths.
    pub fn from_lengths(lengths: Vec3) -> Self {
        Self {
            half_extents: lengths * 0.5,
        }
    }

    /// The eight world-space corners of this box.
    ///
    /// Each corner is `position + transform * (sign ⊙ half_extents)` for
    /// the sign combinations in {-1,+1}³. The transform carries rotation
    /// and scale; translation comes in separately as `position`.
    pub fn world_corners(&self, transform: &Mat4, position: Vec3) -> [Vec3; 8] {
        let mut corners = [Vec3::ZERO; 8];
        let mut i = 0;
        for sx in [-1.0f32, 1.0] {
            for sy in [-1.0f32, 1.0] {
                for sz in [-1.0f32, 1.0] {
                    let local = Vec3::new(sx, sy, sz) * self.half_extents;
                    corners[i] = transform.transform_vector3(local) + position;
                    i += 1;
                }
            }
        }
        corners
    }
}

// ===== VISIBILITY STATE =====

bitflags! {
    /// Per-object visibility state, rewritten by every visibility pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VisibilityFlags: u32 {
        /// Inside the camera frustum: the object should be drawn
        const VISIBLE  = 1 << 0;
        /// Inside the probe frustum: drives shading selection only
        const IN_PROBE = 1 << 1;
    }
}

/// Two-state material selection driven by the probe classification.
///
/// Purely a visual indicator — it never affects whether the object is
/// drawn, only how it is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeShading {
    /// Object is inside the probe frustum
    InsideProbe,
    /// Object is outside the probe frustum
    OutsideProbe,
}

// ===== SCENE OBJECT =====

/// A tracked object: transform, bounds, and visibility state.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Human-readable label for reports and logs
    label: String,
    /// World-space position
    position: Vec3,
    /// Affine display transform (rotation/scale; translation is `position`)
    transform: Mat4,
    /// Local-space bounding box
    bounding_box: BoundingBox,
    /// Visibility state written by the visibility pass
    flags: VisibilityFlags,
}

impl SceneObject {
    /// Create an object at `position` with the given bounds.
    ///
    /// The display transform starts as identity and the object starts
    /// visible with outside-probe shading.
    pub fn new(label: impl Into<String>, position: Vec3, bounding_box: BoundingBox) -> Self {
        Self {
            label: label.into(),
            position,
            transform: Mat4::IDENTITY,
            bounding_box,
            flags: VisibilityFlags::VISIBLE,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Affine display transform.
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Set the affine display transform.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Local-space bounding box.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Set the local-space bounding box.
    pub fn set_bounding_box(&mut self, bounding_box: BoundingBox) {
        self.bounding_box = bounding_box;
    }

    /// Current visibility flags.
    pub fn flags(&self) -> VisibilityFlags {
        self.flags
    }

    /// Whether the object is inside the camera frustum (draw/skip flag).
    pub fn is_visible(&self) -> bool {
        self.flags.contains(VisibilityFlags::VISIBLE)
    }

    /// Set the draw/skip flag.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(VisibilityFlags::VISIBLE, visible);
    }

    /// Whether the object is inside the probe frustum.
    pub fn is_in_probe(&self) -> bool {
        self.flags.contains(VisibilityFlags::IN_PROBE)
    }

    /// Set the probe-containment flag.
    pub fn set_in_probe(&mut self, in_probe: bool) {
        self.flags.set(VisibilityFlags::IN_PROBE, in_probe);
    }

    /// Material selection derived from the probe classification.
    pub fn probe_shading(&self) -> ProbeShading {
        if self.is_in_probe() {
            ProbeShading::InsideProbe
        } else {
            ProbeShading::OutsideProbe
        }
    }
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;

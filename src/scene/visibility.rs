//! Per-frame visibility orchestration.
//!
//! Once per frame, both frustums are rebuilt from their sources and
//! every tracked object is classified twice: against the camera frustum
//! (drives the draw/skip flag) and against the probe frustum (drives the
//! shading selection). The two queries are independent; nothing is
//! cached across frames.

use crate::frustum::{Frustum, FrustumSource};
use crate::vista_debug;
use super::culler::{is_object_in_frustum, Cullable};
use super::scene::Scene;

/// Counts from one visibility pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityReport {
    /// Objects classified
    pub total: usize,
    /// Objects inside the camera frustum
    pub visible: usize,
    /// Objects inside the probe frustum
    pub in_probe: usize,
}

/// Is this object visible to the actual viewer?
///
/// Builds a frustum from the camera source and classifies the object
/// against it.
pub fn is_visible(object: &impl Cullable, camera: &dyn FrustumSource) -> bool {
    let frustum = Frustum::from_source(camera);
    is_object_in_frustum(object, &frustum)
}

/// Is this object inside the probe frustum?
///
/// Identical machinery to [`is_visible`], fed by the independently
/// positioned probe instead of the live camera.
pub fn is_visible_to_frustum(object: &impl Cullable, probe: &dyn FrustumSource) -> bool {
    let frustum = Frustum::from_source(probe);
    is_object_in_frustum(object, &frustum)
}

/// Per-frame classification pass over a scene.
#[derive(Debug, Default)]
pub struct VisibilityPass;

impl VisibilityPass {
    pub fn new() -> Self {
        Self
    }

    /// Classify every object against the camera and probe frustums.
    ///
    /// Rebuilds both frustums from their sources, then writes each
    /// object's VISIBLE and IN_PROBE flags. Runs to completion; O(objects
    /// × 6 planes × 8 corners).
    pub fn run(
        &self,
        scene: &mut Scene,
        camera: &dyn FrustumSource,
        probe: &dyn FrustumSource,
    ) -> VisibilityReport {
        let camera_frustum = Frustum::from_source(camera);
        let probe_frustum = Frustum::from_source(probe);

        let mut report = VisibilityReport {
            total: 0,
            visible: 0,
            in_probe: 0,
        };

        for (_key, object) in scene.objects_mut() {
            let visible = is_object_in_frustum(&*object, &camera_frustum);
            let in_probe = is_object_in_frustum(&*object, &probe_frustum);

            object.set_visible(visible);
            object.set_in_probe(in_probe);

            report.total += 1;
            if visible {
                report.visible += 1;
            }
            if in_probe {
                report.in_probe += 1;
            }
        }

        vista_debug!(
            "vista3d::VisibilityPass",
            "{}/{} visible, {}/{} in probe",
            report.visible,
            report.total,
            report.in_probe,
            report.total
        );

        report
    }
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;

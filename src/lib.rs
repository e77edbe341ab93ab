/*!
# Vista 3D Culling

View-frustum culling and visibility classification for 3D scenes.

This crate answers one question: given a camera (or an arbitrary synthetic
frustum) and a set of objects with axis-aligned local bounding boxes, which
objects lie inside the frustum's six clipping planes? It renders nothing and
owns no GPU state — the caller (a game engine, an editor, a visualization
tool) supplies transforms, bounding boxes, and camera parameters, and reads
back per-object visibility flags.

## Architecture

- **Frustum**: six oriented planes built geometrically from a position,
  a look direction, an up direction, near/far distances, a horizontal FOV,
  and an aspect ratio
- **FrustumSource**: capability trait supplying those parameters, implemented
  by `Camera` (the live viewer) and `Probe` (an independently positioned
  demonstration frustum)
- **Scene**: slotmap-keyed collection of tracked objects
- **VisibilityPass**: per-frame orchestration classifying every object
  against both frustums

The box/frustum classifier is a conservative corner test: a box is rejected
only when all eight of its world-space corners fall on the negative side of
the same plane. It can produce false positives near the frustum edges, never
false negatives.
*/

// Internal modules
mod error;
pub mod log;
pub mod frustum;
pub mod camera;
pub mod scene;

// Main vista3d namespace module
pub mod vista3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger};
        // Note: vista_* macros are NOT re-exported here - they live at the crate root
    }

    // Frustum sub-module
    pub mod frustum {
        pub use crate::frustum::*;
    }

    // Camera sub-module (camera + probe frustum sources)
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module (objects, classifier, visibility pass)
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;

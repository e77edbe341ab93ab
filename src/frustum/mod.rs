//! Frustum module — planes, frustum construction, and parameter sources.
//!
//! A `Frustum` is six inward-facing planes built geometrically from a
//! position, a look direction, an up direction, near/far distances, a
//! horizontal FOV, and an aspect ratio. Anything that can supply those
//! parameters implements `FrustumSource`.

mod plane;
mod frustum;
mod source;

pub use plane::{Plane, PlaneId};
pub use frustum::{Frustum, vertical_fov_deg};
pub use source::{FrustumSource, FrustumParams};

//! Scene module
//!
//! Provides tracked objects, scene membership, the box/frustum
//! classifier, and the per-frame visibility pass.

mod object;
mod scene;
mod culler;
mod visibility;

pub use object::{
    BoundingBox, ProbeShading, SceneObject, SceneObjectKey, VisibilityFlags,
};
pub use scene::Scene;
pub use culler::{Cullable, is_in_frustum, is_object_in_frustum};
pub use visibility::{
    VisibilityPass, VisibilityReport, is_visible, is_visible_to_frustum,
};

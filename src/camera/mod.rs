//! Camera module — the two frustum parameter sources.
//!
//! `Camera` is the live viewer; `Probe` is an independently positioned
//! and oriented demonstration frustum. Both are passive containers owned
//! and driven by the caller; the engine only reads them through the
//! `FrustumSource` trait.

mod camera;
mod probe;

pub use camera::Camera;
pub use probe::Probe;

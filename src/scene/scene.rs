//! Scene — the collection of tracked objects.
//!
//! Uses a SlotMap for O(1) insert/remove with stable keys. The scene
//! owns the objects and their visibility state; frustums and cameras
//! stay with the caller.

use slotmap::SlotMap;
use crate::vista_trace;
use super::object::{SceneObject, SceneObjectKey};

/// A collection of objects tracked for visibility classification.
///
/// Objects are managed via stable keys: a key stays valid until its own
/// object is removed, regardless of other insertions and removals.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<SceneObjectKey, SceneObject>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Add an object, returning its stable key.
    pub fn add_object(&mut self, object: SceneObject) -> SceneObjectKey {
        vista_trace!("vista3d::Scene", "Tracking object '{}'", object.label());
        self.objects.insert(object)
    }

    /// Remove an object. Returns it if the key was live.
    pub fn remove_object(&mut self, key: SceneObjectKey) -> Option<SceneObject> {
        let removed = self.objects.remove(key);
        if let Some(object) = &removed {
            vista_trace!("vista3d::Scene", "Untracking object '{}'", object.label());
        }
        removed
    }

    /// Borrow an object by key.
    pub fn object(&self, key: SceneObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Mutably borrow an object by key.
    pub fn object_mut(&mut self, key: SceneObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Iterate over (key, object) pairs.
    pub fn objects(&self) -> impl Iterator<Item = (SceneObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    /// Iterate mutably over (key, object) pairs.
    pub fn objects_mut(&mut self) -> impl Iterator<Item = (SceneObjectKey, &mut SceneObject)> {
        self.objects.iter_mut()
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Labels of the objects currently flagged visible.
    ///
    /// Reflects the flags written by the last visibility pass; the
    /// on-demand "list visible objects" report.
    pub fn visible_labels(&self) -> Vec<&str> {
        self.objects
            .values()
            .filter(|o| o.is_visible())
            .map(|o| o.label())
            .collect()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;

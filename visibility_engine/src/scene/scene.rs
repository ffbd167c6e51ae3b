/// Scene: in-memory object registry.
///
/// Uses a SlotMap for stable keys. Implements the scene and physics
/// collaborators: tag enumeration and collider raycasts. Hosts with their
/// own scene graph implement the traits directly instead.

use glam::Vec3;
use slotmap::SlotMap;
use crate::error::Result;
use crate::engine_bail;
use crate::geometry::{AABB, Ray};
use super::collaborators::{PhysicsQuery, SceneQuery};
use super::scene_object::{SceneObject, SceneObjectDesc, SceneObjectKey};

/// Collection of static scene objects organised as a forest.
pub struct Scene {
    objects: SlotMap<SceneObjectKey, SceneObject>,
    /// Root objects in insertion order
    roots: Vec<SceneObjectKey>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Add a root object.
    pub fn add_object(&mut self, desc: SceneObjectDesc) -> SceneObjectKey {
        let key = self.objects.insert(SceneObject::from_desc(desc, None));
        self.roots.push(key);
        key
    }

    /// Add an object under `parent`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidObject` if `parent` is not in the scene.
    pub fn add_child(&mut self, parent: SceneObjectKey, desc: SceneObjectDesc) -> Result<SceneObjectKey> {
        if !self.objects.contains_key(parent) {
            engine_bail!("visibility::Scene", InvalidObject,
                "Parent {:?} not found while adding '{}'", parent, desc.name);
        }

        let key = self.objects.insert(SceneObject::from_desc(desc, Some(parent)));
        if let Some(parent_object) = self.objects.get_mut(parent) {
            parent_object.push_child(key);
        }
        Ok(key)
    }

    pub fn object(&self, key: SceneObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn roots(&self) -> &[SceneObjectKey] {
        &self.roots
    }

    /// Depth-first collection of tagged descendants of `parent`.
    fn collect_tagged_children(&self, parent: SceneObjectKey, tag: &str, out: &mut Vec<SceneObjectKey>) {
        let Some(object) = self.objects.get(parent) else {
            return;
        };
        for &child in object.children() {
            if self.objects.get(child).is_some_and(|c| c.has_tag(tag)) {
                out.push(child);
            }
            self.collect_tagged_children(child, tag, out);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneQuery for Scene {
    /// Tagged roots in insertion order, each followed by its tagged
    /// descendants. Untagged roots are not searched.
    fn objects_with_tag(&self, tag: &str) -> Vec<SceneObjectKey> {
        let mut result = Vec::new();
        for &root in &self.roots {
            if self.objects.get(root).is_some_and(|o| o.has_tag(tag)) {
                result.push(root);
                self.collect_tagged_children(root, tag, &mut result);
            }
        }
        result
    }

    fn position(&self, key: SceneObjectKey) -> Option<Vec3> {
        self.objects.get(key).map(SceneObject::position)
    }

    fn render_bounds(&self, key: SceneObjectKey) -> Option<AABB> {
        self.objects.get(key).and_then(|o| o.render_bounds().copied())
    }
}

impl PhysicsQuery for Scene {
    fn collider_bounds(&self, key: SceneObjectKey) -> Option<AABB> {
        self.objects.get(key).and_then(|o| o.collider().copied())
    }

    fn raycast_first_hit(&self, origin: Vec3, direction: Vec3) -> Option<SceneObjectKey> {
        let ray = Ray::new(origin, direction);
        self.objects
            .iter()
            .filter_map(|(key, object)| {
                let collider = object.collider()?;
                ray.intersect_aabb(collider).map(|t| (key, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;

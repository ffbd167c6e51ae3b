/// Scene object types.
///
/// A SceneObject is the engine's view of a renderable static entity: a
/// name, a tag, a position, optional render bounds and an optional collider.
/// The engine never changes it.

use glam::Vec3;
use slotmap::new_key_type;
use crate::geometry::AABB;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneObject.
    ///
    /// The BVH and the visible sets hold keys, never the objects themselves.
    pub struct SceneObjectKey;
}

// ===== DESCRIPTOR =====

/// Everything needed to add an object to a `Scene`.
#[derive(Debug, Clone)]
pub struct SceneObjectDesc {
    pub name: String,
    pub tag: String,
    /// World position
    pub position: Vec3,
    /// World-space bounds of the render geometry
    pub render_bounds: Option<AABB>,
    /// World-space bounds of the physical collider; `None` = rays pass through
    pub collider: Option<AABB>,
}

impl SceneObjectDesc {
    /// Object whose render bounds and collider are the same box.
    pub fn solid(name: &str, tag: &str, bounds: AABB) -> Self {
        Self {
            name: name.to_string(),
            tag: tag.to_string(),
            position: bounds.center(),
            render_bounds: Some(bounds),
            collider: Some(bounds),
        }
    }
}

// ===== SCENE OBJECT =====

#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    tag: String,
    position: Vec3,
    render_bounds: Option<AABB>,
    collider: Option<AABB>,
    parent: Option<SceneObjectKey>,
    children: Vec<SceneObjectKey>,
}

impl SceneObject {
    pub(crate) fn from_desc(desc: SceneObjectDesc, parent: Option<SceneObjectKey>) -> Self {
        Self {
            name: desc.name,
            tag: desc.tag,
            position: desc.position,
            render_bounds: desc.render_bounds,
            collider: desc.collider,
            parent,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn render_bounds(&self) -> Option<&AABB> {
        self.render_bounds.as_ref()
    }

    pub fn collider(&self) -> Option<&AABB> {
        self.collider.as_ref()
    }

    pub fn parent(&self) -> Option<SceneObjectKey> {
        self.parent
    }

    pub fn children(&self) -> &[SceneObjectKey] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: SceneObjectKey) {
        self.children.push(child);
    }
}

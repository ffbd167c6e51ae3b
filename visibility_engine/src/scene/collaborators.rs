/// Collaborator traits: the services the visibility core calls into.
///
/// The host implements these over its own scene graph, physics backend
/// and renderer. `Scene` and `RenderState` provide in-memory implementations.
///
/// Calls are blocking and happen on the frame thread; no `Send`/`Sync`
/// bound is required.

use glam::Vec3;
use crate::geometry::AABB;
use super::scene_object::SceneObjectKey;

/// Scene enumeration, used once when the hierarchy is built.
pub trait SceneQuery {
    /// All objects carrying `tag`, including tagged descendants.
    fn objects_with_tag(&self, tag: &str) -> Vec<SceneObjectKey>;

    /// World position of an object (`None` for a stale key).
    fn position(&self, key: SceneObjectKey) -> Option<Vec3>;

    /// World-space bounds of the object's render geometry.
    fn render_bounds(&self, key: SceneObjectKey) -> Option<AABB>;
}

/// Physical scene queries, used every frame by the ray test.
pub trait PhysicsQuery {
    /// World-space bounds of the object's collider, if it has one.
    fn collider_bounds(&self, key: SceneObjectKey) -> Option<AABB>;

    /// First collider hit by the ray from `origin` along `direction`.
    ///
    /// `direction` need not be normalized. The ray is unbounded.
    fn raycast_first_hit(&self, origin: Vec3, direction: Vec3) -> Option<SceneObjectKey>;
}

/// Render-enable toggle, called once per tracked object every frame.
pub trait RenderSink {
    fn set_visible(&mut self, key: SceneObjectKey, visible: bool);
}

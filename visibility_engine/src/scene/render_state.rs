/// Per-object render flags, the default render sink.
///
/// Kept apart from `Scene` so the physics view (read) and the renderer
/// state (written) can be borrowed at the same time during a frame.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use super::collaborators::RenderSink;
use super::scene_object::SceneObjectKey;

bitflags! {
    /// Per-object render state bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        /// Draw submission enabled
        const RENDER_ENABLED = 1 << 0;
    }
}

impl Default for ObjectFlags {
    /// Objects render until the culler says otherwise.
    fn default() -> Self {
        ObjectFlags::RENDER_ENABLED
    }
}

/// Render flags keyed by object.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    flags: FxHashMap<SceneObjectKey, ObjectFlags>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags of an object; defaults for objects never written.
    pub fn flags(&self, key: SceneObjectKey) -> ObjectFlags {
        self.flags.get(&key).copied().unwrap_or_default()
    }

    pub fn is_render_enabled(&self, key: SceneObjectKey) -> bool {
        self.flags(key).contains(ObjectFlags::RENDER_ENABLED)
    }

    /// Number of objects currently disabled.
    pub fn disabled_count(&self) -> usize {
        self.flags
            .values()
            .filter(|f| !f.contains(ObjectFlags::RENDER_ENABLED))
            .count()
    }
}

impl RenderSink for RenderState {
    fn set_visible(&mut self, key: SceneObjectKey, visible: bool) {
        self.flags
            .entry(key)
            .or_default()
            .set(ObjectFlags::RENDER_ENABLED, visible);
    }
}

#[cfg(test)]
#[path = "render_state_tests.rs"]
mod tests;

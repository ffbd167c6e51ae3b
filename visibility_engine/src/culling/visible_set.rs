/// Per-frame culling results.
///
/// Ephemeral: built fresh every frame, nothing carries over.

use rustc_hash::FxHashSet;
use crate::scene::SceneObjectKey;

/// Outcome of the visibility test for one object.
///
/// The render sink only sees `Visible` vs. not visible; the distinction
/// between the two failure cases is kept for statistics and callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectVisibility {
    /// A ray reached the object first
    Visible,
    /// The object's box lies entirely outside the frustum; no ray was cast
    OutsideFrustum,
    /// Every ray hit something else, or nothing
    Occluded,
}

impl ObjectVisibility {
    pub fn is_visible(self) -> bool {
        self == ObjectVisibility::Visible
    }
}

/// Objects confirmed visible this frame, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct VisibleSet {
    order: Vec<SceneObjectKey>,
    members: FxHashSet<SceneObjectKey>,
}

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the key was already present.
    pub fn insert(&mut self, key: SceneObjectKey) -> bool {
        if self.members.insert(key) {
            self.order.push(key);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, key: SceneObjectKey) -> bool {
        self.members.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SceneObjectKey> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[SceneObjectKey] {
        &self.order
    }
}

/// Counters for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Internal nodes whose volume was tested against the frustum
    pub nodes_visited: usize,
    /// Internal nodes rejected by the frustum (subtrees skipped)
    pub nodes_pruned: usize,
    /// Leaves whose object went through the visibility test
    pub leaves_tested: usize,
    pub objects_outside_frustum: usize,
    pub objects_occluded: usize,
    pub rays_cast: usize,
    /// The frame had no active camera
    pub camera_missing: bool,
}

/// Result of one frame of culling.
#[derive(Debug, Clone)]
pub struct VisibilityReport {
    visible: VisibleSet,
    stats: CullStats,
}

impl VisibilityReport {
    pub(crate) fn new(visible: VisibleSet, stats: CullStats) -> Self {
        Self { visible, stats }
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, key: SceneObjectKey) -> bool {
        self.visible.contains(key)
    }

    pub fn stats(&self) -> &CullStats {
        &self.stats
    }
}

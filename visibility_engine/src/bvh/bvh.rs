/// BoundingVolumeHierarchy: static median-split BVH over the occluder set.
///
/// Built once, top-down:
/// - 0 or 1 objects → leaf holding that object and its bounds
/// - otherwise split on the axis where object *positions* spread the most
///   (ties: X, then Y, then Z), sort along it, cut at `count / 2`, recurse
///
/// Node volumes are unions of the member objects' bounds, so every internal
/// node encloses both children. Nodes are stored depth-first in a flat
/// array; the root is always index 0. There is no insert, remove or refit:
/// objects that move require a rebuild.

use glam::Vec3;
use rustc_hash::FxHashSet;
use crate::geometry::{AABB, Axis};
use crate::scene::{SceneObjectKey, SceneQuery};
use crate::{engine_info, engine_warn};
use super::bvh_node::{BvhItem, BvhNode};

/// Index of the root node in the flat node array.
const ROOT: usize = 0;

/// Immutable bounding volume hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingVolumeHierarchy {
    /// Flat array of all nodes, depth-first pre-order
    nodes: Vec<BvhNode>,
    /// Every object in the hierarchy, in build input order
    objects: Vec<SceneObjectKey>,
}

impl BoundingVolumeHierarchy {
    /// Build the hierarchy over `items`.
    ///
    /// An empty input yields a single empty leaf with placeholder bounds.
    /// A key listed more than once keeps only its first item.
    pub fn build(items: Vec<BvhItem>) -> Self {
        let mut items = Self::dedup_keys(items);
        let objects: Vec<SceneObjectKey> = items.iter().map(|item| item.key).collect();
        let bounds = Self::combined_bounds(&items);

        let mut nodes = Vec::with_capacity((2 * items.len()).max(1));
        Self::build_recursive(&mut nodes, &mut items, bounds);

        let bvh = Self { nodes, objects };
        if bvh.objects.is_empty() {
            engine_warn!("visibility::Bvh", "No occluders: hierarchy is a single empty leaf");
        } else {
            engine_info!("visibility::Bvh",
                "Built hierarchy: {} objects, {} nodes, depth {}",
                bvh.objects.len(), bvh.nodes.len(), bvh.depth());
        }
        bvh
    }

    /// Enumerate `tag` in `scene` and build over the result.
    ///
    /// Objects without render bounds get a unit box at their position.
    /// Keys the scene cannot resolve are skipped.
    pub fn from_scene(scene: &dyn SceneQuery, tag: &str) -> Self {
        let keys = scene.objects_with_tag(tag);
        let mut items = Vec::with_capacity(keys.len());

        for key in keys {
            let Some(position) = scene.position(key) else {
                engine_warn!("visibility::Bvh", "Skipping stale object key {:?}", key);
                continue;
            };
            let bounds = scene
                .render_bounds(key)
                .unwrap_or_else(|| AABB::unit_at(position));
            items.push(BvhItem { key, position, bounds });
        }

        Self::build(items)
    }

    /// Drop repeated keys, keeping the first occurrence.
    fn dedup_keys(items: Vec<BvhItem>) -> Vec<BvhItem> {
        let mut seen = FxHashSet::default();
        items
            .into_iter()
            .filter(|item| {
                let first = seen.insert(item.key);
                if !first {
                    engine_warn!("visibility::Bvh", "Ignoring duplicate object key {:?}", item.key);
                }
                first
            })
            .collect()
    }

    /// Union of the items' bounds, or the placeholder box when empty.
    fn combined_bounds(items: &[BvhItem]) -> AABB {
        AABB::combined(items.iter().map(|item| &item.bounds))
    }

    /// Axis along which item positions spread the most.
    fn split_axis(items: &[BvhItem]) -> Axis {
        let (min, max) = items.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(min, max), item| (min.min(item.position), max.max(item.position)),
        );
        Axis::widest(max - min)
    }

    /// Build the subtree for `items` and return its node index.
    fn build_recursive(nodes: &mut Vec<BvhNode>, items: &mut [BvhItem], bounds: AABB) -> usize {
        let node_index = nodes.len();

        if items.len() <= 1 {
            let item = items.first();
            nodes.push(BvhNode::Leaf {
                object: item.map(|i| i.key),
                position: item.map_or(Vec3::ZERO, |i| i.position),
                bounds,
            });
            return node_index;
        }

        let axis = Self::split_axis(items);
        let component = axis.index();
        items.sort_by(|a, b| a.position[component].total_cmp(&b.position[component]));

        // Reserve the slot; children are filled in below
        nodes.push(BvhNode::Internal { bounds, split_axis: axis, left: 0, right: 0 });

        let midpoint = items.len() / 2;
        let (left_items, right_items) = items.split_at_mut(midpoint);
        let left_bounds = Self::combined_bounds(left_items);
        let right_bounds = Self::combined_bounds(right_items);
        debug_assert!(bounds.contains(&left_bounds) && bounds.contains(&right_bounds));

        let left = Self::build_recursive(nodes, left_items, left_bounds);
        let right = Self::build_recursive(nodes, right_items, right_bounds);

        nodes[node_index] = BvhNode::Internal { bounds, split_axis: axis, left, right };
        node_index
    }

    // ===== ACCESSORS =====

    pub fn root(&self) -> &BvhNode {
        &self.nodes[ROOT]
    }

    pub fn root_index(&self) -> usize {
        ROOT
    }

    pub fn node(&self, index: usize) -> Option<&BvhNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every object in the hierarchy (the root's full object list).
    pub fn objects(&self) -> &[SceneObjectKey] {
        &self.objects
    }

    /// True when built from an empty set.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of levels (a single leaf has depth 1).
    pub fn depth(&self) -> usize {
        self.depth_from(ROOT)
    }

    fn depth_from(&self, index: usize) -> usize {
        match self.nodes[index].children() {
            Some((left, right)) => 1 + self.depth_from(left).max(self.depth_from(right)),
            None => 1,
        }
    }

    /// Objects of all leaves below `index`, left to right.
    pub fn leaf_objects_under(&self, index: usize) -> Vec<SceneObjectKey> {
        let mut out = Vec::new();
        self.collect_leaf_objects(index, &mut out);
        out
    }

    fn collect_leaf_objects(&self, index: usize, out: &mut Vec<SceneObjectKey>) {
        match self.nodes.get(index) {
            Some(BvhNode::Leaf { object: Some(key), .. }) => out.push(*key),
            Some(BvhNode::Internal { left, right, .. }) => {
                self.collect_leaf_objects(*left, out);
                self.collect_leaf_objects(*right, out);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "bvh_tests.rs"]
mod tests;

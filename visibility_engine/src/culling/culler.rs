/// OcclusionCuller: per-frame visibility over a static BVH.
///
/// Depth-first, pre-order walk of the hierarchy:
/// - internal node: test its volume against the frustum; outside → skip
///   both subtrees, inside or straddling → visit both children
/// - leaf: frustum-test the object's collider box, then cast rays from the
///   camera to 15 sample points inside it; the object is visible as soon
///   as one ray hits it first
///
/// Afterwards every tracked object is pushed to the render sink with
/// `visible = (object is in the visible set)`, so objects pruned by the
/// frustum and objects that failed the ray test are both turned off.

use glam::Vec3;
use crate::bvh::{BoundingVolumeHierarchy, BvhNode};
use crate::camera::{Camera, CameraSource};
use crate::error::{Error, Result};
use crate::geometry::AABB;
use crate::scene::{PhysicsQuery, RenderSink, SceneObjectKey, SceneQuery};
use crate::{engine_debug, engine_trace, engine_warn};
use super::config::{CullingConfig, MissingCameraPolicy};
use super::sample_points::sample_points;
use super::visible_set::{CullStats, ObjectVisibility, VisibilityReport, VisibleSet};

/// Occlusion culler owning the immutable hierarchy.
pub struct OcclusionCuller {
    bvh: BoundingVolumeHierarchy,
    config: CullingConfig,
}

impl OcclusionCuller {
    /// Wrap an already built hierarchy.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `config` fails validation.
    pub fn new(bvh: BoundingVolumeHierarchy, config: CullingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { bvh, config })
    }

    /// Enumerate the configured occluder tag in `scene` and build the hierarchy.
    ///
    /// Runs once, at startup.
    pub fn from_scene(scene: &dyn SceneQuery, config: CullingConfig) -> Result<Self> {
        config.validate()?;
        let bvh = BoundingVolumeHierarchy::from_scene(scene, &config.occluder_tag);
        Ok(Self { bvh, config })
    }

    pub fn bvh(&self) -> &BoundingVolumeHierarchy {
        &self.bvh
    }

    pub fn config(&self) -> &CullingConfig {
        &self.config
    }

    /// Objects whose visibility is pushed to the sink every frame.
    pub fn tracked_objects(&self) -> &[SceneObjectKey] {
        self.bvh.objects()
    }

    // ===== PER-FRAME ENTRY POINTS =====

    /// Resolve the active camera, then run `cull_frame`.
    pub fn update(
        &self,
        cameras: &dyn CameraSource,
        physics: &dyn PhysicsQuery,
        sink: &mut dyn RenderSink,
    ) -> VisibilityReport {
        match cameras.current_camera() {
            Ok(camera) => self.cull_frame(Some(&camera), physics, sink),
            Err(Error::MissingCamera) => self.cull_frame(None, physics, sink),
            Err(other) => {
                engine_warn!("visibility::OcclusionCuller", "Camera unavailable: {}", other);
                self.cull_frame(None, physics, sink)
            }
        }
    }

    /// Traverse, then push `set_visible` for every tracked object.
    ///
    /// Without a camera nothing is traversed and the missing-camera policy
    /// decides what the sink receives.
    pub fn cull_frame(
        &self,
        camera: Option<&Camera>,
        physics: &dyn PhysicsQuery,
        sink: &mut dyn RenderSink,
    ) -> VisibilityReport {
        let (visible, stats) = match camera {
            Some(camera) => self.collect_visible(camera, physics),
            None => self.missing_camera_result(),
        };

        for &key in self.bvh.objects() {
            sink.set_visible(key, visible.contains(key));
        }

        engine_trace!("visibility::OcclusionCuller",
            "Frame: {}/{} visible, {} nodes pruned, {} rays",
            visible.len(), self.bvh.objects().len(), stats.nodes_pruned, stats.rays_cast);

        VisibilityReport::new(visible, stats)
    }

    /// Pure traversal: the visible set and counters for one camera.
    pub fn collect_visible(&self, camera: &Camera, physics: &dyn PhysicsQuery) -> (VisibleSet, CullStats) {
        let mut visible = VisibleSet::new();
        let mut stats = CullStats::default();
        self.visit(self.bvh.root_index(), camera, physics, &mut visible, &mut stats);
        (visible, stats)
    }

    fn missing_camera_result(&self) -> (VisibleSet, CullStats) {
        engine_warn!("visibility::OcclusionCuller",
            "No active camera, applying {:?}", self.config.missing_camera_policy);

        let mut visible = VisibleSet::new();
        if self.config.missing_camera_policy == MissingCameraPolicy::ShowAll {
            for &key in self.bvh.objects() {
                visible.insert(key);
            }
        }
        let stats = CullStats { camera_missing: true, ..CullStats::default() };
        (visible, stats)
    }

    // ===== TRAVERSAL =====

    fn visit(
        &self,
        index: usize,
        camera: &Camera,
        physics: &dyn PhysicsQuery,
        visible: &mut VisibleSet,
        stats: &mut CullStats,
    ) {
        let Some(node) = self.bvh.node(index) else {
            return;
        };

        match *node {
            // Empty hierarchy
            BvhNode::Leaf { object: None, .. } => {}
            BvhNode::Leaf { object: Some(key), position, .. } => {
                stats.leaves_tested += 1;
                if self.classify_object(key, position, camera, physics, stats).is_visible() {
                    visible.insert(key);
                }
            }
            BvhNode::Internal { ref bounds, left, right, .. } => {
                stats.nodes_visited += 1;
                if !camera.frustum().intersects_aabb(bounds) {
                    stats.nodes_pruned += 1;
                    return;
                }
                self.visit(left, camera, physics, visible, stats);
                self.visit(right, camera, physics, visible, stats);
            }
        }
    }

    /// Visibility test for a single object.
    ///
    /// `position` centers the fallback box when the object has no collider.
    pub fn test_object(
        &self,
        key: SceneObjectKey,
        position: Vec3,
        camera: &Camera,
        physics: &dyn PhysicsQuery,
    ) -> ObjectVisibility {
        self.classify_object(key, position, camera, physics, &mut CullStats::default())
    }

    /// `test_object`, accumulating rays and outcomes into `stats`.
    pub(crate) fn classify_object(
        &self,
        key: SceneObjectKey,
        position: Vec3,
        camera: &Camera,
        physics: &dyn PhysicsQuery,
        stats: &mut CullStats,
    ) -> ObjectVisibility {
        let bounds = physics.collider_bounds(key).unwrap_or_else(|| {
            engine_debug!("visibility::OcclusionCuller",
                "{:?} has no collider, using fallback box", key);
            AABB::from_center_size(position, self.config.fallback_box_size)
        });

        if !camera.frustum().intersects_aabb(&bounds) {
            stats.objects_outside_frustum += 1;
            return ObjectVisibility::OutsideFrustum;
        }

        let origin = camera.position();
        for point in sample_points(&bounds, self.config.sample_inset) {
            stats.rays_cast += 1;
            if physics.raycast_first_hit(origin, point - origin) == Some(key) {
                return ObjectVisibility::Visible;
            }
        }

        stats.objects_occluded += 1;
        ObjectVisibility::Occluded
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;

/// Tests for OcclusionCuller
///
/// Uses scripted physics and a recording sink so every ray and every
/// render toggle can be inspected.

use super::*;
use crate::bvh::BvhItem;
use crate::culling::SAMPLE_POINT_COUNT;
use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use std::cell::{Cell, RefCell};

// ============================================================================
// Helper Functions
// ============================================================================

type Responder = Box<dyn Fn(usize, Vec3) -> Option<SceneObjectKey>>;

/// Physics mock: colliders from a map, raycasts answered by a closure
/// receiving (ray number, ray target point).
struct ScriptedPhysics {
    colliders: FxHashMap<SceneObjectKey, AABB>,
    responder: Responder,
    targets: RefCell<Vec<Vec3>>,
    rays: Cell<usize>,
}

impl ScriptedPhysics {
    fn new(responder: impl Fn(usize, Vec3) -> Option<SceneObjectKey> + 'static) -> Self {
        Self {
            colliders: FxHashMap::default(),
            responder: Box::new(responder),
            targets: RefCell::new(Vec::new()),
            rays: Cell::new(0),
        }
    }

    fn with_collider(mut self, key: SceneObjectKey, bounds: AABB) -> Self {
        self.colliders.insert(key, bounds);
        self
    }
}

impl PhysicsQuery for ScriptedPhysics {
    fn collider_bounds(&self, key: SceneObjectKey) -> Option<AABB> {
        self.colliders.get(&key).copied()
    }

    fn raycast_first_hit(&self, origin: Vec3, direction: Vec3) -> Option<SceneObjectKey> {
        let n = self.rays.get();
        self.rays.set(n + 1);
        let target = origin + direction;
        self.targets.borrow_mut().push(target);
        (self.responder)(n, target)
    }
}

#[derive(Default)]
struct RecordingSink {
    calls: Vec<(SceneObjectKey, bool)>,
}

impl RenderSink for RecordingSink {
    fn set_visible(&mut self, key: SceneObjectKey, visible: bool) {
        self.calls.push((key, visible));
    }
}

fn make_keys(count: usize) -> Vec<SceneObjectKey> {
    let mut map: SlotMap<SceneObjectKey, ()> = SlotMap::with_key();
    (0..count).map(|_| map.insert(())).collect()
}

/// Camera at z = 10 looking at the origin, 90° FOV.
fn test_camera() -> Camera {
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    Camera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, projection)
}

fn culler_for(items: Vec<BvhItem>) -> OcclusionCuller {
    OcclusionCuller::new(BoundingVolumeHierarchy::build(items), CullingConfig::default()).unwrap()
}

fn encloses(bounds: &AABB, point: Vec3) -> bool {
    bounds.contains(&AABB::new(point, point))
}

fn unit_item(key: SceneObjectKey, center: Vec3) -> BvhItem {
    BvhItem { key, position: center, bounds: AABB::unit_at(center) }
}

// ============================================================================
// Ray test
// ============================================================================

#[test]
fn test_ray_test_short_circuits_on_first_hit() {
    let key = make_keys(1)[0];
    let culler = culler_for(vec![unit_item(key, Vec3::ZERO)]);
    let physics = ScriptedPhysics::new(move |_, _| Some(key))
        .with_collider(key, AABB::unit_at(Vec3::ZERO));
    let mut stats = CullStats::default();

    let outcome = culler.classify_object(key, Vec3::ZERO, &test_camera(), &physics, &mut stats);

    assert_eq!(outcome, ObjectVisibility::Visible);
    assert_eq!(physics.rays.get(), 1);
    assert_eq!(stats.rays_cast, 1);
    // First ray targets the box center
    assert_eq!(physics.targets.borrow()[0], Vec3::ZERO);
}

#[test]
fn test_ray_test_succeeds_on_later_sample() {
    let key = make_keys(1)[0];
    let culler = culler_for(vec![unit_item(key, Vec3::ZERO)]);
    let physics = ScriptedPhysics::new(move |n, _| if n == 8 { Some(key) } else { None })
        .with_collider(key, AABB::unit_at(Vec3::ZERO));
    let mut stats = CullStats::default();

    let outcome = culler.classify_object(key, Vec3::ZERO, &test_camera(), &physics, &mut stats);

    assert_eq!(outcome, ObjectVisibility::Visible);
    assert_eq!(physics.rays.get(), 9);
}

#[test]
fn test_ray_test_all_rays_blocked_is_occluded() {
    let keys = make_keys(2);
    let (target, blocker) = (keys[0], keys[1]);
    let culler = culler_for(vec![unit_item(target, Vec3::ZERO)]);
    let physics = ScriptedPhysics::new(move |_, _| Some(blocker))
        .with_collider(target, AABB::unit_at(Vec3::ZERO));
    let mut stats = CullStats::default();

    let outcome = culler.classify_object(target, Vec3::ZERO, &test_camera(), &physics, &mut stats);

    assert_eq!(outcome, ObjectVisibility::Occluded);
    assert_eq!(physics.rays.get(), SAMPLE_POINT_COUNT);
    assert_eq!(stats.objects_occluded, 1);
}

#[test]
fn test_ray_test_nothing_hit_is_occluded() {
    let key = make_keys(1)[0];
    let culler = culler_for(vec![unit_item(key, Vec3::ZERO)]);
    let physics = ScriptedPhysics::new(|_, _| None)
        .with_collider(key, AABB::unit_at(Vec3::ZERO));

    let outcome = culler.test_object(key, Vec3::ZERO, &test_camera(), &physics);
    assert_eq!(outcome, ObjectVisibility::Occluded);
    assert_eq!(physics.rays.get(), SAMPLE_POINT_COUNT);
}

#[test]
fn test_object_reports_outside_frustum() {
    let key = make_keys(1)[0];
    let behind = Vec3::new(0.0, 0.0, 30.0);
    let culler = culler_for(vec![unit_item(key, behind)]);
    let physics = ScriptedPhysics::new(move |_, _| Some(key))
        .with_collider(key, AABB::unit_at(behind));

    let outcome = culler.test_object(key, behind, &test_camera(), &physics);

    assert_eq!(outcome, ObjectVisibility::OutsideFrustum);
    assert!(!outcome.is_visible());
    assert_eq!(physics.rays.get(), 0);
}

#[test]
fn test_object_outside_frustum_casts_no_rays() {
    let key = make_keys(1)[0];
    let behind = Vec3::new(0.0, 0.0, 30.0);
    let culler = culler_for(vec![unit_item(key, behind)]);
    let physics = ScriptedPhysics::new(move |_, _| Some(key))
        .with_collider(key, AABB::unit_at(behind));

    let (visible, stats) = culler.collect_visible(&test_camera(), &physics);

    assert!(visible.is_empty());
    assert_eq!(physics.rays.get(), 0);
    assert_eq!(stats.objects_outside_frustum, 1);
}

#[test]
fn test_missing_collider_uses_fallback_box() {
    let key = make_keys(1)[0];
    let position = Vec3::new(1.0, 0.0, 0.0);
    let config = CullingConfig { fallback_box_size: Vec3::splat(2.0), ..CullingConfig::default() };
    let culler = OcclusionCuller::new(
        BoundingVolumeHierarchy::build(vec![unit_item(key, position)]),
        config,
    ).unwrap();
    let physics = ScriptedPhysics::new(|_, _| None);
    let mut stats = CullStats::default();

    culler.classify_object(key, position, &test_camera(), &physics, &mut stats);

    let fallback = AABB::from_center_size(position, Vec3::splat(2.0));
    let targets = physics.targets.borrow();
    assert_eq!(targets.len(), SAMPLE_POINT_COUNT);
    assert!(targets.iter().all(|&t| encloses(&fallback, t)));
    // Corners reach close to the 2x2x2 box, beyond a unit box
    assert!(targets.iter().any(|t| (t.x - position.x).abs() > 0.9));
}

#[test]
fn test_rays_start_at_camera_position() {
    let key = make_keys(1)[0];
    let culler = culler_for(vec![unit_item(key, Vec3::ZERO)]);

    struct OriginCheck {
        key: SceneObjectKey,
        origins: RefCell<Vec<Vec3>>,
    }
    impl PhysicsQuery for OriginCheck {
        fn collider_bounds(&self, _key: SceneObjectKey) -> Option<AABB> {
            Some(AABB::unit_at(Vec3::ZERO))
        }
        fn raycast_first_hit(&self, origin: Vec3, _direction: Vec3) -> Option<SceneObjectKey> {
            self.origins.borrow_mut().push(origin);
            None
        }
    }

    let physics = OriginCheck { key, origins: RefCell::new(Vec::new()) };
    let mut stats = CullStats::default();
    culler.classify_object(physics.key, Vec3::ZERO, &test_camera(), &physics, &mut stats);

    assert!(physics.origins.borrow().iter().all(|&o| o == Vec3::new(0.0, 0.0, 10.0)));
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_pruned_subtree_gets_no_rays_and_no_visibility() {
    let keys = make_keys(4);
    let front = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
    let behind = [Vec3::new(0.0, 0.0, 50.0), Vec3::new(2.0, 0.0, 50.0)];
    let items = vec![
        unit_item(keys[0], front[0]),
        unit_item(keys[1], front[1]),
        unit_item(keys[2], behind[0]),
        unit_item(keys[3], behind[1]),
    ];
    let culler = culler_for(items);

    // Physics would report every object as hit, if ever asked about it
    let lookup: Vec<(SceneObjectKey, AABB)> = keys
        .iter()
        .zip(front.iter().chain(behind.iter()))
        .map(|(&k, &c)| (k, AABB::unit_at(c)))
        .collect();
    let mut physics = ScriptedPhysics::new(move |_, target| {
        lookup.iter().find(|(_, b)| encloses(b, target)).map(|(k, _)| *k)
    });
    for (&key, &center) in keys.iter().zip(front.iter().chain(behind.iter())) {
        physics = physics.with_collider(key, AABB::unit_at(center));
    }

    let (visible, stats) = culler.collect_visible(&test_camera(), &physics);

    assert_eq!(visible.as_slice(), &[keys[0], keys[1]]);
    assert_eq!(stats.nodes_pruned, 1);
    assert_eq!(stats.leaves_tested, 2);
    assert!(physics.targets.borrow().iter().all(|t| t.z < 10.0));
}

#[test]
fn test_whole_tree_outside_frustum_prunes_at_root() {
    let keys = make_keys(3);
    let items = keys
        .iter()
        .enumerate()
        .map(|(i, &k)| unit_item(k, Vec3::new(i as f32 * 3.0, 0.0, 40.0)))
        .collect();
    let culler = culler_for(items);
    let physics = ScriptedPhysics::new(|_, _| None);

    let (visible, stats) = culler.collect_visible(&test_camera(), &physics);

    assert!(visible.is_empty());
    assert_eq!(stats.nodes_visited, 1);
    assert_eq!(stats.nodes_pruned, 1);
    assert_eq!(stats.leaves_tested, 0);
    assert_eq!(physics.rays.get(), 0);
}

#[test]
fn test_empty_hierarchy_is_a_no_op() {
    let culler = culler_for(Vec::new());
    let physics = ScriptedPhysics::new(|_, _| None);
    let mut sink = RecordingSink::default();

    let report = culler.cull_frame(Some(&test_camera()), &physics, &mut sink);

    assert_eq!(report.visible_count(), 0);
    assert!(sink.calls.is_empty());
    assert_eq!(physics.rays.get(), 0);
    assert_eq!(*report.stats(), CullStats::default());
}

// ============================================================================
// Frame application
// ============================================================================

#[test]
fn test_cull_frame_sets_every_tracked_object() {
    let keys = make_keys(3);
    let items = vec![
        unit_item(keys[0], Vec3::ZERO),
        unit_item(keys[1], Vec3::new(0.0, 0.0, 40.0)),
        unit_item(keys[2], Vec3::new(3.0, 0.0, 0.0)),
    ];
    let culler = culler_for(items);
    let visible_key = keys[0];
    let physics = ScriptedPhysics::new(move |_, _| Some(visible_key))
        .with_collider(keys[0], AABB::unit_at(Vec3::ZERO))
        .with_collider(keys[1], AABB::unit_at(Vec3::new(0.0, 0.0, 40.0)))
        .with_collider(keys[2], AABB::unit_at(Vec3::new(3.0, 0.0, 0.0)));
    let mut sink = RecordingSink::default();

    let report = culler.cull_frame(Some(&test_camera()), &physics, &mut sink);

    assert_eq!(sink.calls, vec![(keys[0], true), (keys[1], false), (keys[2], false)]);
    assert!(report.is_visible(keys[0]));
    assert!(!report.is_visible(keys[1]));
    assert!(!report.is_visible(keys[2]));
}

#[test]
fn test_missing_camera_hides_everything() {
    let keys = make_keys(2);
    let culler = culler_for(vec![unit_item(keys[0], Vec3::ZERO), unit_item(keys[1], Vec3::X * 3.0)]);
    let physics = ScriptedPhysics::new(|_, _| None);
    let mut sink = RecordingSink::default();

    let cameras: Option<Camera> = None;
    let report = culler.update(&cameras, &physics, &mut sink);

    assert!(report.visible().is_empty());
    assert!(report.stats().camera_missing);
    assert_eq!(sink.calls, vec![(keys[0], false), (keys[1], false)]);
    assert_eq!(physics.rays.get(), 0);
}

#[test]
fn test_missing_camera_show_all_policy() {
    let keys = make_keys(2);
    let config = CullingConfig {
        missing_camera_policy: MissingCameraPolicy::ShowAll,
        ..CullingConfig::default()
    };
    let bvh = BoundingVolumeHierarchy::build(vec![
        unit_item(keys[0], Vec3::ZERO),
        unit_item(keys[1], Vec3::X * 3.0),
    ]);
    let culler = OcclusionCuller::new(bvh, config).unwrap();
    let physics = ScriptedPhysics::new(|_, _| None);
    let mut sink = RecordingSink::default();

    let report = culler.cull_frame(None, &physics, &mut sink);

    assert_eq!(report.visible_count(), 2);
    assert_eq!(sink.calls, vec![(keys[0], true), (keys[1], true)]);
}

#[test]
fn test_update_with_camera_matches_cull_frame() {
    let key = make_keys(1)[0];
    let culler = culler_for(vec![unit_item(key, Vec3::ZERO)]);
    let physics = ScriptedPhysics::new(move |_, _| Some(key))
        .with_collider(key, AABB::unit_at(Vec3::ZERO));
    let mut sink = RecordingSink::default();

    let report = culler.update(&test_camera(), &physics, &mut sink);

    assert!(report.is_visible(key));
    assert!(!report.stats().camera_missing);
    assert_eq!(sink.calls, vec![(key, true)]);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_invalid_config_is_rejected() {
    let bad_inset = CullingConfig { sample_inset: -0.1, ..CullingConfig::default() };
    assert!(matches!(
        OcclusionCuller::new(BoundingVolumeHierarchy::build(Vec::new()), bad_inset),
        Err(Error::InvalidConfig(_))
    ));

    let bad_box = CullingConfig { fallback_box_size: Vec3::new(1.0, 0.0, 1.0), ..CullingConfig::default() };
    assert!(bad_box.validate().is_err());

    let nan_inset = CullingConfig { sample_inset: f32::NAN, ..CullingConfig::default() };
    assert!(nan_inset.validate().is_err());
}

#[test]
fn test_default_config() {
    let config = CullingConfig::default();
    assert_eq!(config.occluder_tag, "StaticOcclude");
    assert_eq!(config.sample_inset, 0.001);
    assert_eq!(config.fallback_box_size, Vec3::ONE);
    assert_eq!(config.missing_camera_policy, MissingCameraPolicy::HideAll);
    assert!(config.validate().is_ok());
}

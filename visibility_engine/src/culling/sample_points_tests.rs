use glam::Vec3;
use super::*;

const INSET: f32 = 0.001;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-5
}

#[test]
fn test_first_point_is_center() {
    let bounds = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
    let points = sample_points(&bounds, INSET);
    assert_eq!(points[0], Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_axis_points_stop_short_of_faces() {
    let bounds = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
    let points = sample_points(&bounds, INSET);

    assert!(close(points[1], Vec3::new(2.0 - INSET, 2.0, 3.0)));
    assert!(close(points[2], Vec3::new(INSET, 2.0, 3.0)));
    assert!(close(points[3], Vec3::new(1.0, 4.0 - INSET, 3.0)));
    assert!(close(points[4], Vec3::new(1.0, INSET, 3.0)));
    assert!(close(points[5], Vec3::new(1.0, 2.0, 6.0 - INSET)));
    assert!(close(points[6], Vec3::new(1.0, 2.0, INSET)));
}

#[test]
fn test_corners_are_inset_on_every_axis() {
    let bounds = AABB::unit_at(Vec3::ZERO);
    let points = sample_points(&bounds, INSET);
    let edge = 0.5 - INSET;

    assert!(close(points[7], Vec3::new(-edge, edge, -edge)));
    assert!(close(points[8], Vec3::new(edge, edge, -edge)));
    assert!(close(points[9], Vec3::new(-edge, -edge, -edge)));
    assert!(close(points[10], Vec3::new(edge, -edge, -edge)));
    assert!(close(points[11], Vec3::new(-edge, edge, edge)));
    assert!(close(points[12], Vec3::new(edge, edge, edge)));
    assert!(close(points[13], Vec3::new(-edge, -edge, edge)));
    assert!(close(points[14], Vec3::new(edge, -edge, edge)));
}

#[test]
fn test_all_points_strictly_inside_box() {
    let bounds = AABB::new(Vec3::new(-3.0, 1.0, 10.0), Vec3::new(5.0, 2.5, 11.0));
    for point in sample_points(&bounds, INSET) {
        assert!(point.cmpgt(bounds.min).all() && point.cmplt(bounds.max).all(),
            "{:?} should be inside {:?}", point, bounds);
    }
}

#[test]
fn test_point_count() {
    assert_eq!(sample_points(&AABB::placeholder(), INSET).len(), SAMPLE_POINT_COUNT);
    assert_eq!(SAMPLE_POINT_COUNT, 15);
}

/// Ray targets for the per-object visibility test.

use glam::Vec3;
use crate::geometry::AABB;

/// Number of points produced by `sample_points`.
pub const SAMPLE_POINT_COUNT: usize = 15;

/// Fixed set of ray targets inside `bounds`.
///
/// Order: center; center pushed toward +X, -X, +Y, -Y, +Z, -Z up to
/// `inset` short of each face; the four min-Z corners (top-left,
/// top-right, bottom-left, bottom-right); the four max-Z corners in the
/// same order. Corners are pulled `inset` toward the interior on every axis.
pub fn sample_points(bounds: &AABB, inset: f32) -> [Vec3; SAMPLE_POINT_COUNT] {
    let center = bounds.center();
    let reach = bounds.extents() - Vec3::splat(inset);
    let lo = bounds.min + Vec3::splat(inset);
    let hi = bounds.max - Vec3::splat(inset);

    [
        center,
        center + Vec3::new(reach.x, 0.0, 0.0),
        center - Vec3::new(reach.x, 0.0, 0.0),
        center + Vec3::new(0.0, reach.y, 0.0),
        center - Vec3::new(0.0, reach.y, 0.0),
        center + Vec3::new(0.0, 0.0, reach.z),
        center - Vec3::new(0.0, 0.0, reach.z),
        // Front
        Vec3::new(lo.x, hi.y, lo.z),
        Vec3::new(hi.x, hi.y, lo.z),
        Vec3::new(lo.x, lo.y, lo.z),
        Vec3::new(hi.x, lo.y, lo.z),
        // Back
        Vec3::new(lo.x, hi.y, hi.z),
        Vec3::new(hi.x, hi.y, hi.z),
        Vec3::new(lo.x, lo.y, hi.z),
        Vec3::new(hi.x, lo.y, hi.z),
    ]
}

#[cfg(test)]
#[path = "sample_points_tests.rs"]
mod tests;

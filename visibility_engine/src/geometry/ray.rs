/// Ray / AABB intersection (slab method).
///
/// Used by the in-memory scene to answer first-hit raycasts.

use glam::Vec3;
use super::aabb::AABB;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Not required to be normalized. Hit distances are in units of this vector.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Entry parameter of the ray into `aabb`, if any.
    ///
    /// Returns `None` when the box is missed, lies behind the origin, or
    /// contains the origin (a ray never hits the collider it starts in).
    /// A zero direction never hits.
    pub fn intersect_aabb(&self, aabb: &AABB) -> Option<f32> {
        if self.direction == Vec3::ZERO {
            return None;
        }

        // Division by a zero component yields +/-inf, which the min/max below
        // resolve correctly as long as the origin is not on the slab boundary.
        let inv_dir = self.direction.recip();
        let t1 = (aabb.min - self.origin) * inv_dir;
        let t2 = (aabb.max - self.origin) * inv_dir;

        let t_enter = t1.min(t2).max_element();
        let t_exit = t1.max(t2).min_element();

        if t_enter.is_nan() || t_exit.is_nan() {
            return None;
        }
        if t_exit >= t_enter && t_enter >= 0.0 {
            Some(t_enter)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;

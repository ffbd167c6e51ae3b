/// Frustum: six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes

use glam::{Mat4, Vec3, Vec4};
use crate::geometry::AABB;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Build a frustum from explicit planes. Planes are normalized.
    pub fn from_planes(planes: [Vec4; 6]) -> Self {
        let mut frustum = Self { planes };
        frustum.normalize();
        frustum
    }

    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann: each plane is the fourth row plus or minus one of
    /// the first three. The near plane uses the -1..1 depth convention,
    /// which only widens the frustum for 0..1 depth projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let (x, y, z, w) = (vp.row(0), vp.row(1), vp.row(2), vp.row(3));
        let mut planes = [Vec4::ZERO; 6];
        planes[PLANE_LEFT] = w + x;
        planes[PLANE_RIGHT] = w - x;
        planes[PLANE_BOTTOM] = w + y;
        planes[PLANE_TOP] = w - y;
        planes[PLANE_NEAR] = w + z;
        planes[PLANE_FAR] = w - z;
        Self::from_planes(planes)
    }

    fn normalize(&mut self) {
        for plane in &mut self.planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }
    }

    /// Signed distance of a point to one plane (positive = inside).
    pub fn signed_distance(&self, plane: usize, point: Vec3) -> f32 {
        let p = self.planes[plane];
        p.truncate().dot(point) + p.w
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// "Positive vertex" test: for each plane, take the AABB corner most
    /// in the direction of the plane normal. If that corner is outside,
    /// the whole AABB is outside that plane.
    ///
    /// Conservative: may return false positives near frustum corners,
    /// never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        (0..self.planes.len()).all(|plane| {
            let normal = self.planes[plane].truncate();
            let p_vertex = Vec3::select(normal.cmpge(Vec3::ZERO), aabb.max, aabb.min);
            self.signed_distance(plane, p_vertex) >= 0.0
        })
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

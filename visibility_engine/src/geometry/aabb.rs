/// Axis-aligned bounding boxes and principal axes.
///
/// Every bounding volume in the engine is a world-space AABB: object
/// bounds, collider bounds and BVH node volumes.

use glam::Vec3;

// ===== AABB =====

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Create a box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from its center and full size.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    /// 1x1x1 box centered at `center`.
    pub fn unit_at(center: Vec3) -> Self {
        Self::from_center_size(center, Vec3::ONE)
    }

    /// Unit box at the origin, standing in for "no bounds".
    pub fn placeholder() -> Self {
        Self::unit_at(Vec3::ZERO)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half size along each axis.
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Union of all boxes, or `None` for an empty iterator.
    pub fn union_all<'a, I>(boxes: I) -> Option<AABB>
    where
        I: IntoIterator<Item = &'a AABB>,
    {
        boxes.into_iter().fold(None, |acc: Option<AABB>, b| match acc {
            Some(a) => Some(a.union(b)),
            None => Some(*b),
        })
    }

    /// Union of all boxes, falling back to `placeholder()` when empty.
    pub fn combined<'a, I>(boxes: I) -> AABB
    where
        I: IntoIterator<Item = &'a AABB>,
    {
        Self::union_all(boxes).unwrap_or_else(Self::placeholder)
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }
}

// ===== AXIS =====

/// Principal axis, used as the BVH split axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index into a `Vec3`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis with the largest spread. Ties go to X, then Y, then Z.
    pub fn widest(spread: Vec3) -> Axis {
        if spread.x >= spread.y && spread.x >= spread.z {
            Axis::X
        } else if spread.y >= spread.x && spread.y >= spread.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;

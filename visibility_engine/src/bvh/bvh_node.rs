/// BVH node and build-input types.

use glam::Vec3;
use crate::geometry::{AABB, Axis};
use crate::scene::SceneObjectKey;

/// One object as captured at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BvhItem {
    pub key: SceneObjectKey,
    /// World position, drives the split
    pub position: Vec3,
    /// World bounds, drives the node volumes
    pub bounds: AABB,
}

/// A node in the hierarchy's flat node array.
///
/// Children are indices into the same array. The tree is strict binary:
/// internal nodes always have two children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BvhNode {
    /// One object (or none, for a hierarchy built from an empty set).
    Leaf {
        object: Option<SceneObjectKey>,
        /// Position captured at build time, centers the fallback box
        position: Vec3,
        bounds: AABB,
    },
    /// Combined volume of both subtrees.
    Internal {
        bounds: AABB,
        split_axis: Axis,
        left: usize,
        right: usize,
    },
}

impl BvhNode {
    pub fn bounds(&self) -> &AABB {
        match self {
            BvhNode::Leaf { bounds, .. } | BvhNode::Internal { bounds, .. } => bounds,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }

    /// `(left, right)` for internal nodes.
    pub fn children(&self) -> Option<(usize, usize)> {
        match *self {
            BvhNode::Internal { left, right, .. } => Some((left, right)),
            BvhNode::Leaf { .. } => None,
        }
    }

    /// The leaf's object, if any.
    pub fn object(&self) -> Option<SceneObjectKey> {
        match *self {
            BvhNode::Leaf { object, .. } => object,
            BvhNode::Internal { .. } => None,
        }
    }
}

//! Bounding volume hierarchy over the static occluder set.

mod bvh_node;
mod bvh;

pub use bvh_node::{BvhItem, BvhNode};
pub use bvh::BoundingVolumeHierarchy;

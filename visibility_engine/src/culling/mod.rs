//! Culling module
//!
//! Frustum pruning over the BVH and the multi-point ray test that
//! confirms an object is actually seen.

mod config;
mod sample_points;
mod visible_set;
mod culler;

pub use config::{CullingConfig, MissingCameraPolicy};
pub use sample_points::{sample_points, SAMPLE_POINT_COUNT};
pub use visible_set::{CullStats, ObjectVisibility, VisibilityReport, VisibleSet};
pub use culler::OcclusionCuller;

//! Geometry module: bounding boxes, split axes and rays.

mod aabb;
mod ray;

pub use aabb::{AABB, Axis};
pub use ray::Ray;

//! Camera module: camera snapshot and frustum.
//!
//! Passive data containers. The engine does NOT store or manage
//! cameras; the host passes a snapshot in every frame.

mod camera;
mod frustum;

pub use camera::{Camera, CameraSource};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};

/// Camera: per-frame snapshot of the viewer.
///
/// The host owns and drives its cameras. Each frame it hands the engine
/// a snapshot: the world position (ray origin) and the frustum planes.
/// The engine never looks a camera up by itself.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use super::frustum::Frustum;

/// Camera snapshot: position, matrices and frustum.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
}

impl Camera {
    /// Create a camera from its world position and matrices.
    ///
    /// The frustum is extracted from `projection * view`.
    pub fn new(position: Vec3, view: Mat4, projection: Mat4) -> Self {
        let frustum = Frustum::from_view_projection(&(projection * view));
        Self {
            position,
            view_matrix: view,
            projection_matrix: projection,
            frustum,
        }
    }

    /// Right-handed look-at camera.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, projection: Mat4) -> Self {
        Self::new(eye, Mat4::look_at_rh(eye, target, up), projection)
    }

    /// Camera with caller-computed frustum planes. Matrices are left as identity.
    pub fn with_frustum(position: Vec3, frustum: Frustum) -> Self {
        Self {
            position,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            frustum,
        }
    }

    // ===== GETTERS =====

    /// World-space position, origin of every visibility ray.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }
}

// ===== CAMERA SOURCE =====

/// Provider of the active camera for the current frame.
///
/// Returns `Error::MissingCamera` when there is no active camera.
pub trait CameraSource {
    fn current_camera(&self) -> Result<Camera>;
}

impl CameraSource for Camera {
    fn current_camera(&self) -> Result<Camera> {
        Ok(self.clone())
    }
}

impl CameraSource for Option<Camera> {
    fn current_camera(&self) -> Result<Camera> {
        self.clone().ok_or(Error::MissingCamera)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

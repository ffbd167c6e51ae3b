/// Culling configuration.

use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;

/// What to report when a frame has no active camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCameraPolicy {
    /// Every tracked object is reported not visible
    #[default]
    HideAll,
    /// Every tracked object is reported visible
    ShowAll,
}

/// Tunables for `OcclusionCuller`.
#[derive(Debug, Clone, PartialEq)]
pub struct CullingConfig {
    /// Tag identifying static occluders in the scene
    pub occluder_tag: String,
    /// Inward offset of sample points from the box faces, so rays do not
    /// land on a face shared by two adjacent objects
    pub sample_inset: f32,
    /// Size of the box substituted for objects without a collider
    pub fallback_box_size: Vec3,
    pub missing_camera_policy: MissingCameraPolicy,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            occluder_tag: "StaticOcclude".to_string(),
            sample_inset: 0.001,
            fallback_box_size: Vec3::ONE,
            missing_camera_policy: MissingCameraPolicy::HideAll,
        }
    }
}

impl CullingConfig {
    /// # Errors
    ///
    /// `Error::InvalidConfig` if the inset is negative or not finite, or
    /// the fallback box has a non-positive or non-finite dimension.
    pub fn validate(&self) -> Result<()> {
        if !self.sample_inset.is_finite() || self.sample_inset < 0.0 {
            engine_bail!("visibility::CullingConfig", InvalidConfig,
                "sample_inset must be finite and >= 0 (got {})", self.sample_inset);
        }
        if !self.fallback_box_size.is_finite() || self.fallback_box_size.cmple(Vec3::ZERO).any() {
            engine_bail!("visibility::CullingConfig", InvalidConfig,
                "fallback_box_size must be finite and > 0 (got {})", self.fallback_box_size);
        }
        Ok(())
    }
}

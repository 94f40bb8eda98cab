//! Camera component
//!
//! The focus system only needs the camera's view cone: its position and
//! forward direction come from the entity's [`Transform`], the half-angle
//! from this component.
//!
//! [`Transform`]: crate::core::entity::Transform

use serde::{Deserialize, Serialize};

/// Camera component defining the field-of-view cone used for classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Field-of-view half-angle in degrees
    pub fov_half_angle_deg: f32,
    /// Whether this camera drives the focus system
    pub active: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_half_angle_deg: 60.0,
            active: true,
        }
    }
}

impl Camera {
    /// Create a camera with the given field-of-view half-angle in degrees
    pub fn with_fov(fov_half_angle_deg: f32) -> Self {
        Self {
            fov_half_angle_deg,
            ..Default::default()
        }
    }
}

//! Visibility classification against the camera's view cone

use crate::core::camera::Camera;
use crate::core::entity::{Transform, World};
use glam::Vec3;
use tracing::trace;

/// Snapshot of the camera pose used for classification
#[derive(Debug, Clone, Copy)]
pub struct ViewCone {
    /// Apex of the cone in world space
    pub position: Vec3,
    /// Cone axis (unit vector)
    pub forward: Vec3,
    /// Half-angle of the cone in degrees
    pub half_angle_deg: f32,
}

impl ViewCone {
    /// Create a view cone; `forward` is normalized
    pub fn new(position: Vec3, forward: Vec3, half_angle_deg: f32) -> Self {
        Self {
            position,
            forward: forward.normalize(),
            half_angle_deg,
        }
    }

    /// Build a view cone from a camera component and its transform
    pub fn from_pose(camera: &Camera, transform: &Transform) -> Self {
        Self {
            position: transform.position,
            forward: transform.forward(),
            half_angle_deg: camera.fov_half_angle_deg,
        }
    }

    /// Angle in degrees between the cone axis and the direction to `target`
    ///
    /// A target coincident with the cone apex has no defined direction; it is
    /// reported as angle 0 so it always classifies as in view.
    pub fn angle_to_deg(&self, target: Vec3) -> f32 {
        let to_target = target - self.position;
        if to_target.length_squared() < f32::EPSILON {
            return 0.0;
        }
        self.forward.angle_between(to_target).to_degrees()
    }

    /// Whether `target` lies inside the cone
    pub fn contains(&self, target: Vec3) -> bool {
        self.angle_to_deg(target) <= self.half_angle_deg
    }
}

/// Find the view cone of the first active camera in the world
pub fn find_active_view_cone(world: &World) -> Option<ViewCone> {
    for (_entity, (camera, transform)) in world.query::<(&Camera, &Transform)>().iter() {
        if camera.active {
            return Some(ViewCone::from_pose(camera, transform));
        }
    }

    trace!("No active camera found");
    None
}

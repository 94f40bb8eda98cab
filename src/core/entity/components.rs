//! Core components for the entity system

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Transform component representing position and orientation in world space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Orientation as a quaternion
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform with the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Orient the transform so that its forward axis points along `direction`
    pub fn facing(mut self, direction: Vec3) -> Self {
        self.rotation = Quat::from_rotation_arc(Vec3::NEG_Z, direction.normalize());
        self
    }

    /// Forward direction of this transform
    ///
    /// Forward is -Z in local space, the same convention the camera uses.
    pub fn forward(&self) -> Vec3 {
        (self.rotation * Vec3::NEG_Z).normalize()
    }
}

/// Name component for user-friendly entity identification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    /// Create a new name component
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_default() {
        let transform = Transform::default();
        assert_eq!(transform.position, Vec3::ZERO);
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert!((transform.forward() - Vec3::NEG_Z).length() < 0.001);
    }

    #[test]
    fn test_transform_facing() {
        let transform = Transform::from_position(Vec3::ZERO).facing(Vec3::Z);
        assert!((transform.forward() - Vec3::Z).length() < 0.001);

        let transform = Transform::from_position(Vec3::ZERO).facing(Vec3::new(1.0, 0.0, 1.0));
        let expected = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!((transform.forward() - expected).length() < 0.001);
    }

    #[test]
    fn test_name_component() {
        let name = Name::new("Engine Hum");
        assert_eq!(name.0, "Engine Hum");

        // Test serialization
        let json = serde_json::to_string(&name).unwrap();
        let deserialized: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(name.0, deserialized.0);
    }
}

//! Scene-side collaborators: entities, transforms, and the camera

pub mod camera;
pub mod entity;

//! Entity storage and core components
//!
//! The focus system never owns emitters or the camera; it reads and mutates
//! components stored in a scene world supplied by the host.

pub mod components;
pub mod world;

// Re-export commonly used types
pub use components::{Name, Transform};
pub use world::World;

// Re-export hecs types that users will need
pub use hecs::Entity;

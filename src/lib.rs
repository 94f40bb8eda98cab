//! Camera-focus audio attenuation for 3D scenes
//!
//! This crate decides how loud each sound emitter in a scene should be based
//! on whether it lies inside the camera's field of view, and smoothly ramps
//! emitter volumes toward those targets every frame. Two arbitration
//! policies are provided: per-emitter classification, and a priority variant
//! where the most important emitter's visibility ducks or restores everyone
//! else.

pub mod config;
pub mod core;
pub mod focus;

// Re-export commonly used types
pub mod prelude {
    // Entity system types
    pub use crate::core::entity::{Entity, Name, Transform, World};

    // Camera types
    pub use crate::core::camera::Camera;

    // Math types
    pub use glam::{Quat, Vec3};

    // Focus types
    pub use crate::focus::{
        audio_focus_system, AudioEmitter, EmitterRegistry, FocusState, TickTimer, ViewCone,
    };

    // Config types
    pub use crate::config::{ConfigError, FocusConfig, FocusPolicy};
}

/// Initialize logging for the crate
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

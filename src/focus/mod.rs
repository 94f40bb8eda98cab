//! Camera field-of-view audio focus
//!
//! This module decides a target volume for every registered emitter and
//! ramps the live volumes toward those targets:
//! - visibility classification against the camera's view cone
//! - optional priority arbitration (one emitter's visibility ducks the rest)
//! - frame-rate independent linear volume ramping
//! - fixed-period re-evaluation decoupled from the per-frame ramp

pub mod arbiter;
pub mod components;
pub mod ramp;
pub mod registry;
pub mod scheduler;
pub mod system;
pub mod visibility;


// Re-export commonly used types
pub use arbiter::ArbiterState;
pub use components::AudioEmitter;
pub use ramp::ramp_step;
pub use registry::EmitterRegistry;
pub use scheduler::TickTimer;
pub use system::{audio_focus_system, FocusState};
pub use visibility::{find_active_view_cone, ViewCone};

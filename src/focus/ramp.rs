//! Frame-rate independent volume ramping

/// Advance `current` one frame toward `target`
///
/// Linear interpolation with the factor `ramp_speed * dt` clamped to [0, 1],
/// so a long frame (after a stall) lands exactly on the target instead of
/// overshooting.
pub fn ramp_step(current: f32, target: f32, ramp_speed: f32, dt: f32) -> f32 {
    let t = (ramp_speed * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}

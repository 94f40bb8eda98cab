//! Priority arbitration: one emitter's visibility ducks all the others

use crate::focus::visibility::ViewCone;
use glam::Vec3;

/// The authoritative visibility flag shared by every non-arbiter emitter
///
/// Held across ticks; a tick where no arbiter emitter could be evaluated
/// (all despawned) leaves the previous decision in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArbiterState {
    /// Whether the arbiter emitter was inside the view cone on the last tick
    pub on_screen: bool,
}

impl ArbiterState {
    /// Re-evaluate the flag against every arbiter emitter position, in order
    ///
    /// When several emitters share the minimum priority, each evaluation
    /// overwrites the flag and the last one wins. That matches the original
    /// behaviour; whether it is intended is an open question, so no
    /// deterministic tie-break beyond evaluation order is imposed.
    pub fn evaluate(self, cone: &ViewCone, arbiter_positions: impl Iterator<Item = Vec3>) -> Self {
        let mut state = self;
        for position in arbiter_positions {
            state.on_screen = cone.contains(position);
        }
        state
    }
}

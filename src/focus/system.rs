//! Focus update system
//!
//! One entry point, called once per frame with the frame's elapsed time.
//! Visibility re-evaluation runs on the tick timer; ramping runs every call.
//! The two cadences communicate only through the per-tick target snapshot.

use crate::config::{FocusConfig, FocusPolicy};
use crate::core::entity::{Entity, Transform, World};
use crate::focus::{
    arbiter::ArbiterState,
    components::AudioEmitter,
    ramp::ramp_step,
    registry::EmitterRegistry,
    scheduler::TickTimer,
    visibility::{find_active_view_cone, ViewCone},
};
use std::collections::HashMap;
use tracing::trace;

/// Focus system state
///
/// Owns the startup registry, the tick timer, the priority arbiter's shared
/// visibility flag, and the current target-volume snapshot.
pub struct FocusState {
    registry: Option<EmitterRegistry>,
    timer: TickTimer,
    arbiter: ArbiterState,
    targets: HashMap<Entity, f32>,
}

impl FocusState {
    /// Create state with the config's tick interval
    pub fn new(config: &FocusConfig) -> Self {
        Self {
            registry: None,
            timer: TickTimer::new(config.tick_interval),
            arbiter: ArbiterState::default(),
            targets: HashMap::new(),
        }
    }

    /// The emitter registry, None until the first update
    pub fn registry(&self) -> Option<&EmitterRegistry> {
        self.registry.as_ref()
    }

    /// Current target volume for an emitter, None when it is not being driven
    pub fn target_for(&self, entity: Entity) -> Option<f32> {
        self.targets.get(&entity).copied()
    }

    /// The arbiter's shared visibility flag (priority policy)
    pub fn arbiter_on_screen(&self) -> bool {
        self.arbiter.on_screen
    }
}

/// Per-frame focus update
///
/// On the first call the emitter set is enumerated and baselines are
/// snapshotted; the set is fixed from then on. Despawned emitters are
/// skipped, an empty scene is a no-op.
pub fn audio_focus_system(
    world: &mut World,
    state: &mut FocusState,
    config: &FocusConfig,
    dt: f32,
) {
    if state.registry.is_none() {
        state.registry = Some(EmitterRegistry::capture(world));
    }

    let due = state.timer.advance(dt);

    let Some(registry) = state.registry.as_ref() else {
        return;
    };
    if registry.is_empty() {
        return;
    }

    if due {
        retarget(world, registry, config, &mut state.arbiter, &mut state.targets);
    }

    apply_ramp(world, registry, &state.targets, config, dt);
}

/// Rebuild the target-volume snapshot for this tick
fn retarget(
    world: &World,
    registry: &EmitterRegistry,
    config: &FocusConfig,
    arbiter: &mut ArbiterState,
    targets: &mut HashMap<Entity, f32>,
) {
    targets.clear();
    let cone = find_active_view_cone(world);

    match config.policy {
        FocusPolicy::PerEmitter => {
            retarget_per_emitter(world, registry, cone.as_ref(), config, targets)
        }
        FocusPolicy::Priority => {
            retarget_priority(world, registry, cone.as_ref(), config, arbiter, targets)
        }
    }
}

/// Per-emitter policy: each spatial emitter is classified on its own
///
/// Non-spatial emitters (spatial blend 0) and every emitter when no camera
/// is available target their baseline.
fn retarget_per_emitter(
    world: &World,
    registry: &EmitterRegistry,
    cone: Option<&ViewCone>,
    config: &FocusConfig,
    targets: &mut HashMap<Entity, f32>,
) {
    if cone.is_none() {
        trace!("No view cone, targets fall back to baseline");
    }

    for entry in registry.entries() {
        let Ok(emitter) = world.get::<AudioEmitter>(entry.entity) else {
            continue;
        };
        let Ok(transform) = world.get::<Transform>(entry.entity) else {
            continue;
        };

        let out_of_view = match cone {
            Some(cone) => emitter.spatial_blend != 0.0 && !cone.contains(transform.position),
            None => false,
        };

        let target = if out_of_view {
            entry.baseline * config.attenuation
        } else {
            entry.baseline
        };
        targets.insert(entry.entity, target);
    }
}

/// Priority policy: the minimum-priority emitter's visibility ducks the rest
///
/// With the switch off every emitter targets its baseline (full bypass).
/// With it on, emitters at the startup-recorded minimum priority refresh the
/// shared flag and are themselves not volume-driven; everyone else ducks or
/// restores from that flag regardless of their own position.
fn retarget_priority(
    world: &World,
    registry: &EmitterRegistry,
    cone: Option<&ViewCone>,
    config: &FocusConfig,
    arbiter: &mut ArbiterState,
    targets: &mut HashMap<Entity, f32>,
) {
    let bypass = |targets: &mut HashMap<Entity, f32>| {
        for entry in registry.entries() {
            targets.insert(entry.entity, entry.baseline);
        }
    };

    if !config.enabled {
        bypass(targets);
        return;
    }

    let Some(cone) = cone else {
        trace!("No view cone, priority ducking skipped");
        bypass(targets);
        return;
    };

    let Some(min_priority) = registry.min_priority() else {
        return;
    };

    // Refresh the shared flag from the arbiter emitters, in registry order.
    // Priority is re-read from the live component each tick.
    let arbiter_positions = registry.entries().iter().filter_map(|entry| {
        let emitter = world.get::<AudioEmitter>(entry.entity).ok()?;
        let transform = world.get::<Transform>(entry.entity).ok()?;
        (emitter.priority == min_priority).then_some(transform.position)
    });
    *arbiter = arbiter.evaluate(cone, arbiter_positions);

    for entry in registry.entries() {
        let Ok(emitter) = world.get::<AudioEmitter>(entry.entity) else {
            continue;
        };
        // Arbiter emitters drive the decision but are not volume-driven
        if emitter.priority == min_priority {
            continue;
        }

        let target = if arbiter.on_screen {
            entry.baseline
        } else {
            entry.baseline * config.attenuation
        };
        targets.insert(entry.entity, target);
    }
}

/// Ramp every driven emitter's live volume toward its snapshot target
fn apply_ramp(
    world: &mut World,
    registry: &EmitterRegistry,
    targets: &HashMap<Entity, f32>,
    config: &FocusConfig,
    dt: f32,
) {
    for entry in registry.entries() {
        let Some(&target) = targets.get(&entry.entity) else {
            continue;
        };
        let Ok(emitter) = world.query_one_mut::<&mut AudioEmitter>(entry.entity) else {
            continue;
        };
        emitter.volume = ramp_step(emitter.volume, target, config.ramp_speed, dt);
    }
}

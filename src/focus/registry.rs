//! Emitter registry: the startup snapshot of the scene's sound emitters

use crate::core::entity::{Name, Transform, World};
use crate::focus::components::AudioEmitter;
use hecs::Entity;
use tracing::{debug, trace};

/// One registered emitter
#[derive(Debug, Clone, Copy)]
pub struct EmitterEntry {
    /// The scene entity carrying the [`AudioEmitter`]
    pub entity: Entity,
    /// Volume at capture time; ramp targets are derived from this, never
    /// from the live (possibly attenuated) volume
    pub baseline: f32,
}

/// Snapshot of all sound emitters present at startup
///
/// Captured exactly once; emitters added to the scene later are not picked
/// up, and despawned ones are skipped during processing. Entry order fixes
/// the arbiter evaluation order for the life of the registry.
#[derive(Debug, Clone)]
pub struct EmitterRegistry {
    entries: Vec<EmitterEntry>,
    min_priority: Option<i32>,
}

impl EmitterRegistry {
    /// Enumerate all emitters with a transform and snapshot their baselines
    pub fn capture(world: &World) -> Self {
        let mut entries = Vec::new();
        let mut min_priority: Option<i32> = None;

        for (entity, (emitter, _transform)) in
            world.query::<(&AudioEmitter, &Transform)>().iter()
        {
            trace!(entity = ?entity, volume = emitter.volume, priority = emitter.priority, "Registering emitter");
            entries.push(EmitterEntry {
                entity,
                baseline: emitter.volume,
            });
            min_priority = Some(match min_priority {
                Some(min) => min.min(emitter.priority),
                None => emitter.priority,
            });

            if let Ok(name) = world.get::<Name>(entity) {
                trace!(entity = ?entity, name = %name.0, "Emitter name");
            }
        }

        debug!(
            count = entries.len(),
            min_priority = ?min_priority,
            "Captured emitter registry"
        );

        Self {
            entries,
            min_priority,
        }
    }

    /// Registered emitters in capture order
    pub fn entries(&self) -> &[EmitterEntry] {
        &self.entries
    }

    /// Minimum priority value present at capture time, None when empty
    pub fn min_priority(&self) -> Option<i32> {
        self.min_priority
    }

    /// Whether no emitters were present at capture time
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered emitters
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

//! Emitter component for entities that play sound

use serde::{Deserialize, Serialize};

/// Sound emitter component
///
/// The host runtime owns actual playback; this component mirrors the fields
/// the focus system reads and the volume field it drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioEmitter {
    /// Current playback volume (0.0 to 1.0), driven by the ramp every frame
    pub volume: f32,
    /// Priority, lower values are more important
    pub priority: i32,
    /// How positional the sound is; 0.0 means fully non-spatial
    pub spatial_blend: f32,
}

impl Default for AudioEmitter {
    fn default() -> Self {
        Self {
            volume: 1.0,
            priority: 128,
            spatial_blend: 1.0,
        }
    }
}

impl AudioEmitter {
    /// Create an emitter with the given volume
    pub fn with_volume(volume: f32) -> Self {
        Self {
            volume,
            ..Default::default()
        }
    }

    /// Set the priority, builder style
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the spatial blend, builder style
    pub fn with_spatial_blend(mut self, spatial_blend: f32) -> Self {
        self.spatial_blend = spatial_blend;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitter_default() {
        let emitter = AudioEmitter::default();
        assert_eq!(emitter.volume, 1.0);
        assert_eq!(emitter.priority, 128);
        assert_eq!(emitter.spatial_blend, 1.0);
    }

    #[test]
    fn test_emitter_builders() {
        let emitter = AudioEmitter::with_volume(0.5)
            .with_priority(3)
            .with_spatial_blend(0.0);
        assert_eq!(emitter.volume, 0.5);
        assert_eq!(emitter.priority, 3);
        assert_eq!(emitter.spatial_blend, 0.0);
    }

    #[test]
    fn test_emitter_serde_defaults() {
        let emitter: AudioEmitter = serde_json::from_str(r#"{"priority": 1}"#).unwrap();
        assert_eq!(emitter.volume, 1.0);
        assert_eq!(emitter.priority, 1);
        assert_eq!(emitter.spatial_blend, 1.0);
    }
}

//! Configuration types for the focus attenuation system

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default ramp speed in units per second
pub const DEFAULT_RAMP_SPEED: f32 = 200.0;

/// Default re-evaluation period for visibility classification, in seconds
pub const DEFAULT_TICK_INTERVAL: f32 = 0.1;

/// Valid range for the out-of-view attenuation factor
pub const ATTENUATION_RANGE: std::ops::RangeInclusive<f32> = 0.01..=1.0;

/// Arbitration policy for the focus system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusPolicy {
    /// Every spatial emitter is classified against the view cone on its own
    PerEmitter,
    /// The minimum-priority emitter's visibility ducks or restores all others
    Priority,
}

/// Tunables for the focus attenuation system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Fraction of baseline volume applied to out-of-view emitters (0.01 to 1.0)
    pub attenuation: f32,
    /// Ramp speed in units per second
    pub ramp_speed: f32,
    /// Seconds between visibility re-evaluations
    pub tick_interval: f32,
    /// Arbitration policy
    pub policy: FocusPolicy,
    /// On/off switch, consulted only by the priority policy
    pub enabled: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            attenuation: 1.0,
            ramp_speed: DEFAULT_RAMP_SPEED,
            tick_interval: DEFAULT_TICK_INTERVAL,
            policy: FocusPolicy::PerEmitter,
            enabled: false,
        }
    }
}

impl FocusConfig {
    /// Create a per-emitter config with the given attenuation factor
    ///
    /// The factor is clamped to the valid range, matching the behaviour of a
    /// bounded editor slider.
    pub fn per_emitter(attenuation: f32) -> Self {
        let attenuation = attenuation.clamp(*ATTENUATION_RANGE.start(), *ATTENUATION_RANGE.end());
        debug!(attenuation = attenuation, "Creating per-emitter focus config");
        Self {
            attenuation,
            ..Default::default()
        }
    }

    /// Create a priority-arbitrated config with the given attenuation factor
    pub fn priority(attenuation: f32, enabled: bool) -> Self {
        let attenuation = attenuation.clamp(*ATTENUATION_RANGE.start(), *ATTENUATION_RANGE.end());
        debug!(
            attenuation = attenuation,
            enabled = enabled,
            "Creating priority focus config"
        );
        Self {
            attenuation,
            policy: FocusPolicy::Priority,
            enabled,
            ..Default::default()
        }
    }

    /// Check that all fields are inside their valid ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ATTENUATION_RANGE.contains(&self.attenuation) {
            return Err(ConfigError::AttenuationOutOfRange(self.attenuation));
        }
        if !(self.ramp_speed > 0.0) {
            return Err(ConfigError::NonPositiveRampSpeed(self.ramp_speed));
        }
        if !(self.tick_interval > 0.0) {
            return Err(ConfigError::NonPositiveTickInterval(self.tick_interval));
        }
        Ok(())
    }
}

/// Errors reported by [`FocusConfig::validate`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("attenuation factor {0} outside 0.01..=1.0")]
    AttenuationOutOfRange(f32),
    #[error("ramp speed {0} must be positive")]
    NonPositiveRampSpeed(f32),
    #[error("tick interval {0} must be positive")]
    NonPositiveTickInterval(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FocusConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy, FocusPolicy::PerEmitter);
        assert_eq!(config.ramp_speed, DEFAULT_RAMP_SPEED);
        assert_eq!(config.tick_interval, DEFAULT_TICK_INTERVAL);
        assert!(!config.enabled);
    }

    #[test]
    fn test_constructors_clamp_attenuation() {
        let config = FocusConfig::per_emitter(0.0);
        assert_eq!(config.attenuation, 0.01);

        let config = FocusConfig::priority(5.0, true);
        assert_eq!(config.attenuation, 1.0);
        assert_eq!(config.policy, FocusPolicy::Priority);
        assert!(config.enabled);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = FocusConfig {
            attenuation: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AttenuationOutOfRange(_))
        ));

        let config = FocusConfig {
            ramp_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveRampSpeed(_))
        ));

        let config = FocusConfig {
            tick_interval: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveTickInterval(_))
        ));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = FocusConfig::priority(0.2, true);
        let json = serde_json::to_string(&config).unwrap();
        let restored: FocusConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.attenuation, 0.2);
        assert_eq!(restored.policy, FocusPolicy::Priority);
        assert!(restored.enabled);
    }
}

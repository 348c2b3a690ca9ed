//! Controls Configuration
//!
//! Tunable movement parameters, loadable from JSON. Camera zoom limits
//! and drag sensitivity are engine invariants and stay constants; the
//! walk step is the knob shopkeepers actually ask for.

use serde::{Deserialize, Serialize};

use crate::avatar::MOVEMENT_SPEED;

/// Movement tuning for the walk loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Distance the avatar covers per rendered frame.
    pub movement_speed: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            movement_speed: MOVEMENT_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_constant() {
        assert_eq!(ControlsConfig::default().movement_speed, MOVEMENT_SPEED);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ControlsConfig {
            movement_speed: 0.2,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ControlsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.movement_speed, 0.2);
    }
}

//! Entrance Door
//!
//! Two-state door toggle with an eased swing. The state machine is just
//! `Closed <-> Open`; the swing progress chases the current state's target
//! each frame so the panel animates instead of snapping.

use std::f32::consts::FRAC_PI_2;

use crate::animation::Easing;

/// How much swing progress changes per second.
const SWING_SPEED: f32 = 2.5;

/// The two door states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

/// Entrance door: toggle state plus animated swing progress.
#[derive(Debug, Clone)]
pub struct Door {
    state: DoorState,
    /// Raw swing progress: 0 = fully closed, 1 = fully open.
    progress: f32,
}

impl Door {
    pub fn new() -> Self {
        Self {
            state: DoorState::Closed,
            progress: 0.0,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    /// Flip between `Closed` and `Open`.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            DoorState::Closed => DoorState::Open,
            DoorState::Open => DoorState::Closed,
        };
        log::info!("door: {:?}", self.state);
    }

    /// Advance the swing toward the current state's target.
    pub fn update(&mut self, dt: f32) {
        let target = match self.state {
            DoorState::Closed => 0.0,
            DoorState::Open => 1.0,
        };
        let step = SWING_SPEED * dt;
        if self.progress < target {
            self.progress = (self.progress + step).min(target);
        } else {
            self.progress = (self.progress - step).max(target);
        }
    }

    /// Raw swing progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased hinge angle in radians: 0 closed, pi/2 fully open.
    pub fn swing_angle(&self) -> f32 {
        Easing::Smoothstep.evaluate(self.progress) * FRAC_PI_2
    }
}

impl Default for Door {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_door_closed() {
        let door = Door::new();
        assert_eq!(door.state(), DoorState::Closed);
        assert_eq!(door.progress(), 0.0);
        assert_eq!(door.swing_angle(), 0.0);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut door = Door::new();
        door.toggle();
        assert_eq!(door.state(), DoorState::Open);
        door.toggle();
        assert_eq!(door.state(), DoorState::Closed);
    }

    #[test]
    fn test_progress_converges_to_open() {
        let mut door = Door::new();
        door.toggle();
        for _ in 0..120 {
            door.update(1.0 / 60.0);
            assert!(door.progress() >= 0.0 && door.progress() <= 1.0);
        }
        assert_eq!(door.progress(), 1.0);
        assert!((door.swing_angle() - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_progress_converges_back_to_closed() {
        let mut door = Door::new();
        door.toggle();
        for _ in 0..120 {
            door.update(1.0 / 60.0);
        }
        door.toggle();
        for _ in 0..120 {
            door.update(1.0 / 60.0);
            assert!(door.progress() >= 0.0 && door.progress() <= 1.0);
        }
        assert_eq!(door.progress(), 0.0);
    }

    #[test]
    fn test_mid_swing_reversal_stays_in_range() {
        let mut door = Door::new();
        door.toggle();
        door.update(0.1); // partway open
        let mid = door.progress();
        assert!(mid > 0.0 && mid < 1.0);

        door.toggle(); // reverse mid-swing
        door.update(0.05);
        assert!(door.progress() < mid);
        assert!(door.progress() >= 0.0);
    }

    #[test]
    fn test_update_without_toggle_is_stable() {
        let mut door = Door::new();
        door.update(1.0);
        assert_eq!(door.progress(), 0.0);
    }
}

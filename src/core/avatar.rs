//! Avatar physics: constant gravity, an upward impulse, and field bounds.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};

/// The player's avatar. Its horizontal position is fixed by the config;
/// only the vertical axis is simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top edge of the avatar box. 0 = ceiling, grows downward.
    pub y: f64,
    /// Vertical velocity per tick (positive = downward).
    pub velocity: f64,
    pub alive: bool,
}

/// Which field boundary, if any, the avatar was clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsContact {
    None,
    /// Hit the top. Velocity is zeroed; not fatal.
    Ceiling,
    /// Hit the ground. Velocity is zeroed and the avatar dies.
    Ground,
}

impl Avatar {
    /// A live avatar at the vertical centre of the field, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            y: config.field_height / 2.0,
            velocity: 0.0,
            alive: true,
        }
    }

    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Integrate one tick: velocity first, then position, then clamp.
    /// A dead avatar does not move.
    pub fn update(&mut self, config: &GameConfig) -> BoundsContact {
        if !self.alive {
            return BoundsContact::None;
        }

        self.velocity += config.gravity;
        self.y += self.velocity;

        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
            return BoundsContact::Ceiling;
        }

        let floor = config.avatar_floor();
        if self.y > floor {
            self.y = floor;
            self.velocity = 0.0;
            self.alive = false;
            return BoundsContact::Ground;
        }

        BoundsContact::None
    }

    /// Set velocity to the upward impulse. Returns false (and does nothing)
    /// if the avatar is dead.
    pub fn apply_impulse(&mut self, config: &GameConfig) -> bool {
        if !self.alive {
            return false;
        }
        self.velocity = config.impulse_velocity;
        true
    }

    pub fn bottom(&self, config: &GameConfig) -> f64 {
        self.y + config.avatar_height
    }
}

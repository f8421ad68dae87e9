//! Tunable game constants.
//!
//! Defaults reproduce the original arcade feel in abstract field units
//! (a 400 x 600 field). Any subset can be overridden in
//! `~/.grums_lair/config.json`; missing keys keep their defaults.

use crate::error::ConfigError;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Config file name inside the game directory.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Field geometry
    pub field_width: f64,
    pub field_height: f64,

    // Avatar
    /// Fixed horizontal position of the avatar's left edge.
    pub avatar_x: f64,
    pub avatar_width: f64,
    pub avatar_height: f64,
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a jump. Overrides, never adds.
    pub impulse_velocity: f64,

    // Obstacles
    pub obstacle_width: f64,
    pub gap_height: f64,
    /// Minimum distance between a gap and the top or bottom of the field.
    pub min_edge: f64,
    pub scroll_speed: f64,
    /// A new obstacle spawns once the newest one is this far from the right edge.
    pub spawn_spacing: f64,

    // Timing
    pub death_delay_ms: u64,
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 600.0,

            avatar_x: 50.0,
            avatar_width: 20.0,
            avatar_height: 20.0,
            gravity: 0.2,
            impulse_velocity: -5.0,

            obstacle_width: 60.0,
            gap_height: 200.0,
            min_edge: 80.0,
            scroll_speed: 2.0,
            spawn_spacing: 250.0,

            death_delay_ms: 3000,
            ticks_per_second: 60,
        }
    }
}

impl GameConfig {
    /// Load the config file, falling back to defaults if it is missing,
    /// unreadable, or fails validation.
    pub fn load() -> Self {
        let config: GameConfig = load_json_or_default(CONFIG_FILE);
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring {}: {}", CONFIG_FILE, e);
                GameConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("scroll_speed", self.scroll_speed),
            ("spawn_spacing", self.spawn_spacing),
            ("gravity", self.gravity),
        ];
        let finites = [
            ("avatar_x", self.avatar_x),
            ("impulse_velocity", self.impulse_velocity),
            ("min_edge", self.min_edge),
        ];
        for (field, value) in positives.into_iter().chain(finites) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.min_edge < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "min_edge",
                value: self.min_edge,
            });
        }
        if self.gap_height + 2.0 * self.min_edge > self.field_height {
            return Err(ConfigError::GapDoesNotFit {
                gap_height: self.gap_height,
                min_edge: self.min_edge,
                field_height: self.field_height,
            });
        }
        if self.avatar_height > self.gap_height {
            return Err(ConfigError::AvatarDoesNotFitGap {
                avatar_height: self.avatar_height,
                gap_height: self.gap_height,
            });
        }
        if self.impulse_velocity >= 0.0 {
            return Err(ConfigError::ImpulseNotUpward(self.impulse_velocity));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.checked_countdown_ticks().is_none() {
            return Err(ConfigError::DeathDelayTooLong {
                death_delay_ms: self.death_delay_ms,
                ticks_per_second: self.ticks_per_second,
            });
        }
        Ok(())
    }

    /// Lowest allowed value for the avatar's top edge (the ground contact point).
    pub fn avatar_floor(&self) -> f64 {
        self.field_height - self.avatar_height
    }

    /// Number of ticks the avatar spends dying before the game-over screen.
    /// Saturates at `u32::MAX` for delays that `validate` rejects.
    pub fn death_countdown_ticks(&self) -> u32 {
        self.checked_countdown_ticks().unwrap_or(u32::MAX)
    }

    fn checked_countdown_ticks(&self) -> Option<u32> {
        let ticks = self
            .death_delay_ms
            .checked_mul(u64::from(self.ticks_per_second))?
            / 1000;
        u32::try_from(ticks).ok()
    }

    /// Wall-clock time between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.ticks_per_second.max(1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_death_countdown_is_three_seconds_of_ticks() {
        let config = GameConfig::default();
        assert_eq!(config.death_countdown_ticks(), 180);
    }

    #[test]
    fn test_frame_interval_at_60hz() {
        let config = GameConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_micros(16_666));
    }

    #[test]
    fn test_gap_must_fit_field() {
        let config = GameConfig {
            gap_height: 500.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_impulse_must_point_up() {
        let config = GameConfig {
            impulse_velocity: 3.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ImpulseNotUpward(3.0)));
    }

    #[test]
    fn test_zero_scroll_speed_rejected() {
        let config = GameConfig {
            scroll_speed: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "scroll_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_gravity_must_pull_down() {
        for gravity in [-3.0, 0.0] {
            let config = GameConfig {
                gravity,
                ..GameConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::NotPositive {
                    field: "gravity",
                    value: gravity
                })
            );
        }
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let cases = [
            GameConfig {
                gravity: f64::NAN,
                ..GameConfig::default()
            },
            GameConfig {
                gravity: f64::INFINITY,
                ..GameConfig::default()
            },
            GameConfig {
                avatar_x: f64::NEG_INFINITY,
                ..GameConfig::default()
            },
            GameConfig {
                impulse_velocity: f64::NEG_INFINITY,
                ..GameConfig::default()
            },
            GameConfig {
                min_edge: f64::NAN,
                ..GameConfig::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::NotFinite { .. })),
                "{:?}",
                config
            );
        }
    }

    #[test]
    fn test_overlong_death_delay_rejected_without_panicking() {
        let json = r#"{ "death_delay_ms": 400000000000000000 }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::DeathDelayTooLong {
                death_delay_ms: 400_000_000_000_000_000,
                ticks_per_second: 60,
            })
        );
        assert_eq!(config.death_countdown_ticks(), u32::MAX);
    }

    #[test]
    fn test_death_delay_past_u32_ticks_rejected() {
        // Fits in u64 but not in a u32 tick count
        let config = GameConfig {
            death_delay_ms: 100_000_000_000,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DeathDelayTooLong { .. })
        ));
        assert_eq!(config.death_countdown_ticks(), u32::MAX);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "gravity": 0.3 }"#).unwrap();
        assert!((config.gravity - 0.3).abs() < f64::EPSILON);
        assert!((config.field_height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.ticks_per_second, 60);
    }
}

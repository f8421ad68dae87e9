//! Events produced by a simulation tick.
//!
//! The host maps these to log records or effects; the core never formats
//! anything for display.

use super::session::GameState;

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// A new obstacle entered at the right edge.
    ObstacleSpawned { gap_top: f64 },

    /// Obstacles that scrolled off the left edge.
    ObstaclesRetired { count: usize },

    /// The avatar passed one or more obstacles this tick.
    Scored { points: u32, score: u32 },

    /// The avatar hit an obstacle.
    Collided { score: u32 },

    /// The avatar hit the ground.
    HitGround { score: u32 },

    /// The avatar bumped the ceiling (velocity zeroed, still alive).
    HitCeiling,

    /// The session changed state.
    StateChanged { from: GameState, to: GameState },

    /// The run ended above the previous best.
    NewHighScore { score: u32, previous: u32 },
}

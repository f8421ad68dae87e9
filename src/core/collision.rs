//! Avatar/obstacle collision and pass-through scoring.
//!
//! The avatar is treated as an axis-aligned box even though the renderer
//! may draw it as something rounder.

use super::avatar::Avatar;
use super::track::Obstacle;
use crate::config::GameConfig;

/// Axis-aligned box in field coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Aabb {
    /// Strict overlap on the x axis; touching edges do not count.
    pub fn overlaps_x(&self, left: f64, right: f64) -> bool {
        self.right > left && self.left < right
    }

    /// True if `[top, bottom]` fully contains this box vertically.
    pub fn within_y(&self, top: f64, bottom: f64) -> bool {
        self.top >= top && self.bottom <= bottom
    }
}

pub fn avatar_box(avatar: &Avatar, config: &GameConfig) -> Aabb {
    Aabb {
        left: config.avatar_x,
        top: avatar.y,
        right: config.avatar_x + config.avatar_width,
        bottom: avatar.bottom(config),
    }
}

/// The avatar hits an obstacle when it is horizontally inside the column and
/// not entirely inside the gap.
pub fn check_collision(avatar: &Avatar, obstacle: &Obstacle, config: &GameConfig) -> bool {
    let bounds = avatar_box(avatar, config);
    bounds.overlaps_x(obstacle.x, obstacle.trailing_edge(config.obstacle_width))
        && !bounds.within_y(obstacle.gap_top, obstacle.gap_bottom)
}

/// Mark the obstacle scored once its trailing edge is behind the avatar's
/// left edge. Returns true only on the tick it becomes scored.
pub fn check_score(obstacle: &mut Obstacle, config: &GameConfig) -> bool {
    if obstacle.scored || obstacle.trailing_edge(config.obstacle_width) >= config.avatar_x {
        return false;
    }
    obstacle.scored = true;
    true
}

/// Result of checking one tick's worth of obstacles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub collided: bool,
    pub points: u32,
}

/// Run collision and scoring against every obstacle. Scoring does not
/// depend on whether this tick also produced a collision.
pub fn resolve(avatar: &Avatar, obstacles: &mut [Obstacle], config: &GameConfig) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    for obstacle in obstacles.iter_mut() {
        if !outcome.collided && check_collision(avatar, obstacle, config) {
            outcome.collided = true;
        }
        if check_score(obstacle, config) {
            outcome.points += 1;
        }
    }
    outcome
}

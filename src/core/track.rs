//! The obstacle track: gates that scroll from the right edge to the left.

use crate::config::GameConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A gate: a solid column with a passable gap between two edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Top of the gap (bottom of the upper column).
    pub gap_top: f64,
    /// Bottom of the gap (top of the lower column).
    pub gap_bottom: f64,
    /// Whether the avatar has passed this obstacle (for scoring).
    pub scored: bool,
}

impl Obstacle {
    /// Right edge, the last part of the obstacle to scroll past the avatar.
    pub fn trailing_edge(&self, width: f64) -> f64 {
        self.x + width
    }

    pub fn gap_height(&self) -> f64 {
        self.gap_bottom - self.gap_top
    }
}

/// What changed during one track update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackUpdate {
    /// Gap top of the obstacle spawned this tick, if any.
    pub spawned: Option<f64>,
    /// Obstacles that left the field this tick.
    pub retired: usize,
}

/// Owns the obstacles, oldest (leftmost) first.
#[derive(Debug, Clone, Default)]
pub struct ObstacleTrack {
    obstacles: Vec<Obstacle>,
}

impl ObstacleTrack {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Scroll every obstacle left, spawn at the right edge when there is
    /// room, and drop obstacles that have fully left the field.
    pub fn update<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> TrackUpdate {
        let mut update = TrackUpdate::default();

        for obstacle in &mut self.obstacles {
            obstacle.x -= config.scroll_speed;
        }

        let room_to_spawn = match self.obstacles.last() {
            None => true,
            Some(newest) => newest.x < config.field_width - config.spawn_spacing,
        };
        if room_to_spawn {
            update.spawned = Some(self.spawn(config, rng));
        }

        let before = self.obstacles.len();
        let width = config.obstacle_width;
        self.obstacles.retain(|o| o.trailing_edge(width) >= 0.0);
        update.retired = before - self.obstacles.len();

        update
    }

    /// Push a new obstacle at the right edge with a random gap and return
    /// its gap top.
    ///
    /// The gap top is uniform in `[min_edge, field_height - gap_height - min_edge]`,
    /// so the whole gap always sits inside the field with a margin.
    pub fn spawn<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> f64 {
        let lowest = config.min_edge;
        let highest = config.field_height - config.gap_height - config.min_edge;
        let gap_top = if highest > lowest {
            rng.gen_range(lowest..=highest)
        } else {
            lowest
        };

        self.obstacles.push(Obstacle {
            x: config.field_width,
            gap_top,
            gap_bottom: gap_top + config.gap_height,
            scored: false,
        });
        gap_top
    }

    /// Insert a hand-placed obstacle, keeping spawn order. Used to set up
    /// scenarios; returns false if it would land left of the newest one.
    pub fn push(&mut self, obstacle: Obstacle) -> bool {
        if let Some(newest) = self.obstacles.last() {
            if obstacle.x <= newest.x {
                return false;
            }
        }
        self.obstacles.push(obstacle);
        true
    }
}

//! Maps [`TickEvent`]s to log records.
//!
//! Binary-only: the library reports what happened, the host decides what to
//! record. Routine per-tick events go to `trace`, run milestones to `debug`;
//! state changes and new records are already logged at `info` by the core.

use grums_lair::TickEvent;

pub fn log_tick_events(frame: u64, events: &[TickEvent]) {
    for event in events {
        match event {
            TickEvent::ObstacleSpawned { gap_top } => {
                log::trace!("[frame {}] obstacle spawned, gap top {:.1}", frame, gap_top);
            }
            TickEvent::ObstaclesRetired { count } => {
                log::trace!("[frame {}] {} obstacle(s) retired", frame, count);
            }
            TickEvent::HitCeiling => {
                log::trace!("[frame {}] bumped the ceiling", frame);
            }
            TickEvent::Scored { points, score } => {
                log::debug!("[frame {}] +{} -> score {}", frame, points, score);
            }
            TickEvent::Collided { score } => {
                log::debug!("[frame {}] hit an obstacle at score {}", frame, score);
            }
            TickEvent::HitGround { score } => {
                log::debug!("[frame {}] hit the ground at score {}", frame, score);
            }
            TickEvent::StateChanged { .. } | TickEvent::NewHighScore { .. } => {}
        }
    }
}

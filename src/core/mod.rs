//! Simulation core: obstacle track, avatar physics, collision and scoring,
//! the session state machine, and the frame driver.

pub mod avatar;
pub mod collision;
pub mod events;
pub mod frame;
pub mod session;
pub mod track;

pub use avatar::{Avatar, BoundsContact};
pub use events::TickEvent;
pub use frame::{DrawSurface, FrameDriver, SceneView};
pub use session::{Game, GameInput, GameSession, GameState};
pub use track::{Obstacle, ObstacleTrack};

//! Flight to Grum's Lair - a gate-dodging arcade game for the terminal.
//!
//! The simulation lives in [`core`] and has no terminal dependencies; the
//! rest of the crate hosts it: configuration, high score storage, logging,
//! key mapping and the ratatui renderer.

pub mod config;
pub mod core;
pub mod error;
pub mod highscore;
pub mod input;
pub mod logging;
pub mod ui;
pub mod utils;

pub use config::GameConfig;
pub use crate::core::{DrawSurface, FrameDriver, Game, GameInput, GameState, SceneView, TickEvent};
pub use error::{ConfigError, StorageError};
pub use highscore::{HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore};

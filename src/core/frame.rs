//! Frame driver: one simulation tick and one draw per display refresh.

use super::events::TickEvent;
use super::session::{Game, GameInput, GameState};
use super::track::Obstacle;
use rand::Rng;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView<'a> {
    pub state: GameState,
    pub score: u32,
    pub high_score: u32,

    pub field_width: f64,
    pub field_height: f64,

    pub avatar_x: f64,
    pub avatar_y: f64,
    pub avatar_width: f64,
    pub avatar_height: f64,
    pub avatar_velocity: f64,
    /// Drawn differently once dead.
    pub avatar_alive: bool,

    pub obstacles: &'a [Obstacle],
    pub obstacle_width: f64,
}

impl<'a> SceneView<'a> {
    pub fn of<R: Rng>(game: &'a Game<R>) -> Self {
        let config = game.config();
        let avatar = game.avatar();
        Self {
            state: game.state(),
            score: game.score(),
            high_score: game.high_score(),
            field_width: config.field_width,
            field_height: config.field_height,
            avatar_x: config.avatar_x,
            avatar_y: avatar.y,
            avatar_width: config.avatar_width,
            avatar_height: config.avatar_height,
            avatar_velocity: avatar.velocity,
            avatar_alive: avatar.alive,
            obstacles: game.track().obstacles(),
            obstacle_width: config.obstacle_width,
        }
    }
}

/// The drawing side of the host. Exactly one method is called per frame.
pub trait DrawSurface {
    fn draw_start(&mut self, view: &SceneView<'_>);
    /// Also used while the avatar is dying.
    fn draw_playing(&mut self, view: &SceneView<'_>);
    fn draw_game_over(&mut self, view: &SceneView<'_>);
}

/// Owns the game and sequences update and draw for each frame.
pub struct FrameDriver<R: Rng> {
    game: Game<R>,
    frames: u64,
}

impl<R: Rng> FrameDriver<R> {
    pub fn new(game: Game<R>) -> Self {
        Self { game, frames: 0 }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<R> {
        &mut self.game
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn handle_input(&mut self, input: GameInput) -> bool {
        self.game.handle_input(input)
    }

    /// Run one frame. On the title and game-over screens only the screen is
    /// drawn; otherwise the simulation advances one tick first. Returns the
    /// events produced since the previous frame, including those from input.
    pub fn tick<S: DrawSurface>(&mut self, surface: &mut S) -> Vec<TickEvent> {
        self.frames += 1;
        match self.game.state() {
            GameState::Start => surface.draw_start(&SceneView::of(&self.game)),
            GameState::GameOver => surface.draw_game_over(&SceneView::of(&self.game)),
            GameState::Playing | GameState::Dying { .. } => {
                self.game.tick();
                surface.draw_playing(&SceneView::of(&self.game));
            }
        }
        self.game.take_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::highscore::MemoryHighScoreStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<&'static str>,
        last_obstacles: usize,
        last_alive: bool,
    }

    impl DrawSurface for RecordingSurface {
        fn draw_start(&mut self, _view: &SceneView<'_>) {
            self.calls.push("start");
        }
        fn draw_playing(&mut self, view: &SceneView<'_>) {
            self.calls.push("playing");
            self.last_obstacles = view.obstacles.len();
            self.last_alive = view.avatar_alive;
        }
        fn draw_game_over(&mut self, _view: &SceneView<'_>) {
            self.calls.push("game_over");
        }
    }

    fn driver() -> FrameDriver<StdRng> {
        FrameDriver::new(Game::new(
            GameConfig::default(),
            StdRng::seed_from_u64(3),
            Box::new(MemoryHighScoreStore::default()),
        ))
    }

    #[test]
    fn test_start_screen_draws_without_simulating() {
        let mut driver = driver();
        let mut surface = RecordingSurface::default();
        let events = driver.tick(&mut surface);
        assert_eq!(surface.calls, vec!["start"]);
        assert!(events.is_empty());
        assert!(driver.game().track().is_empty());
    }

    #[test]
    fn test_playing_frame_updates_then_draws() {
        let mut driver = driver();
        let mut surface = RecordingSurface::default();
        driver.handle_input(GameInput::Jump);
        let events = driver.tick(&mut surface);
        assert_eq!(surface.calls, vec!["playing"]);
        assert_eq!(surface.last_obstacles, 1);
        assert!(surface.last_alive);
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::ObstacleSpawned { .. })));
        assert!(events.iter().any(|e| matches!(
            e,
            TickEvent::StateChanged {
                to: GameState::Playing,
                ..
            }
        )));
    }

    #[test]
    fn test_one_draw_per_frame() {
        let mut driver = driver();
        let mut surface = RecordingSurface::default();
        driver.tick(&mut surface);
        driver.handle_input(GameInput::Jump);
        for _ in 0..600 {
            driver.tick(&mut surface);
        }
        assert_eq!(surface.calls.len(), 601);
        assert_eq!(driver.frame_count(), 601);
    }

    #[test]
    fn test_view_reflects_game() {
        let driver = driver();
        let view = SceneView::of(driver.game());
        assert_eq!(view.state, GameState::Start);
        assert!((view.avatar_y - 300.0).abs() < f64::EPSILON);
        assert!((view.field_width - 400.0).abs() < f64::EPSILON);
        assert!(view.obstacles.is_empty());
    }
}

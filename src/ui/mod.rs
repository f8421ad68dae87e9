//! Terminal rendering with ratatui.

pub mod game_common;
pub mod scene;

use crate::core::{DrawSurface, SceneView};
use ratatui::Frame;

/// Draws onto a ratatui frame. Build one inside `Terminal::draw` and hand it
/// to the frame driver.
pub struct TerminalSurface<'f, 'a> {
    frame: &'f mut Frame<'a>,
}

impl<'f, 'a> TerminalSurface<'f, 'a> {
    pub fn new(frame: &'f mut Frame<'a>) -> Self {
        Self { frame }
    }
}

impl DrawSurface for TerminalSurface<'_, '_> {
    fn draw_start(&mut self, view: &SceneView<'_>) {
        let area = self.frame.size();
        scene::render_start(self.frame, area, view);
    }

    fn draw_playing(&mut self, view: &SceneView<'_>) {
        let area = self.frame.size();
        scene::render_playing(self.frame, area, view);
    }

    fn draw_game_over(&mut self, view: &SceneView<'_>) {
        let area = self.frame.size();
        scene::render_game_over(self.frame, area, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{FrameDriver, Game, GameInput};
    use crate::highscore::MemoryHighScoreStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn driver() -> FrameDriver<StdRng> {
        FrameDriver::new(Game::new(
            GameConfig::default(),
            StdRng::seed_from_u64(11),
            Box::new(MemoryHighScoreStore::new(4)),
        ))
    }

    #[test]
    fn test_title_screen_renders() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut driver = driver();
        terminal
            .draw(|frame| {
                driver.tick(&mut TerminalSurface::new(frame));
            })
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("FLIGHT TO GRUM'S LAIR"));
        assert!(text.contains("Highest Score: 4"));
    }

    #[test]
    fn test_playing_screen_renders_avatar_and_score() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut driver = driver();
        driver.handle_input(GameInput::Jump);
        terminal
            .draw(|frame| {
                driver.tick(&mut TerminalSurface::new(frame));
            })
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(text.contains('►'));
    }
}

//! Game session and the state machine that drives it.
//!
//! `Game` owns everything a run needs: the session counters, the avatar,
//! the obstacle track, the random source for gap placement, and the high
//! score store. Hosts hold one `Game` and feed it inputs and ticks.
//!
//! ```text
//! Start --Jump--> Playing --collision/ground--> Dying --countdown--> GameOver
//!   ^                ^                                                 |
//!   |                +------------------- Continue --------------------+
//!   +------------------------------------- Leave ----------------------+
//! ```

use super::avatar::{Avatar, BoundsContact};
use super::collision;
use super::events::TickEvent;
use super::track::ObstacleTrack;
use crate::config::GameConfig;
use crate::highscore::{load_or_zero, HighScoreStore};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Current phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Title screen, waiting for the first jump.
    Start,
    /// Active run.
    Playing,
    /// The avatar is dead; obstacles keep scrolling and scoring until the
    /// countdown ends.
    Dying { ticks_remaining: u32 },
    /// Run over, waiting for continue or leave.
    GameOver,
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Playing => "Playing",
            Self::Dying { .. } => "Dying",
            Self::GameOver => "GameOver",
        }
    }
}

/// Discrete player inputs. Inputs that do not apply to the current state
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Start a run from the title screen, or flap while playing.
    Jump,
    /// Game over only: start a fresh run.
    Continue,
    /// Game over only: return to the title screen.
    Leave,
}

/// Score counters and the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub score: u32,
    pub high_score: u32,
    pub state: GameState,
}

pub struct Game<R: Rng> {
    config: GameConfig,
    session: GameSession,
    avatar: Avatar,
    track: ObstacleTrack,
    rng: R,
    store: Box<dyn HighScoreStore>,
    events: Vec<TickEvent>,
}

impl<R: Rng> Game<R> {
    /// Create a session on the title screen. The high score is read from
    /// `store` once; an unreadable store counts as zero.
    pub fn new(config: GameConfig, rng: R, mut store: Box<dyn HighScoreStore>) -> Self {
        let high_score = load_or_zero(store.as_mut());
        log::info!("Loaded high score {}", high_score);
        let avatar = Avatar::new(&config);
        Self {
            config,
            session: GameSession {
                score: 0,
                high_score,
                state: GameState::Start,
            },
            avatar,
            track: ObstacleTrack::new(),
            rng,
            store,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn high_score(&self) -> u32 {
        self.session.high_score
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn track(&self) -> &ObstacleTrack {
        &self.track
    }

    /// Direct avatar access for setting up scenarios.
    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    /// Direct track access for setting up scenarios.
    pub fn track_mut(&mut self) -> &mut ObstacleTrack {
        &mut self.track
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<TickEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a player input. Returns true if the input did anything.
    pub fn handle_input(&mut self, input: GameInput) -> bool {
        match (input, self.session.state) {
            (GameInput::Jump, GameState::Start) => {
                // The first jump only starts the run; no impulse.
                self.restart();
                true
            }
            (GameInput::Jump, GameState::Playing) => self.avatar.apply_impulse(&self.config),
            (GameInput::Continue, GameState::GameOver) => {
                self.restart();
                true
            }
            (GameInput::Leave, GameState::GameOver) => {
                self.return_to_start();
                true
            }
            _ => false,
        }
    }

    /// Begin a fresh run from any state. A pending death countdown is
    /// discarded before anything else is touched.
    pub fn restart(&mut self) {
        self.reset_into(GameState::Playing);
    }

    /// Go back to the title screen from any state, discarding the run.
    pub fn return_to_start(&mut self) {
        self.reset_into(GameState::Start);
    }

    /// Advance one tick. Does nothing on the title or game-over screens.
    pub fn tick(&mut self) {
        match self.session.state {
            GameState::Start | GameState::GameOver => {}
            GameState::Playing => self.tick_playing(),
            GameState::Dying { ticks_remaining } => self.tick_dying(ticks_remaining),
        }
    }

    fn tick_playing(&mut self) {
        self.advance_track();

        let outcome = collision::resolve(&self.avatar, self.track.obstacles_mut(), &self.config);
        self.add_points(outcome.points);
        if outcome.collided {
            self.avatar.alive = false;
            self.events.push(TickEvent::Collided {
                score: self.session.score,
            });
            self.enter_dying();
        }

        match self.avatar.update(&self.config) {
            BoundsContact::None => {}
            BoundsContact::Ceiling => self.events.push(TickEvent::HitCeiling),
            BoundsContact::Ground => {
                self.events.push(TickEvent::HitGround {
                    score: self.session.score,
                });
                self.enter_dying();
            }
        }
    }

    /// Obstacles keep scrolling while the avatar is dead and still score as
    /// they pass it; the avatar stays where it died.
    fn tick_dying(&mut self, ticks_remaining: u32) {
        self.advance_track();

        // The avatar is already dead, so only the points matter here
        let outcome = collision::resolve(&self.avatar, self.track.obstacles_mut(), &self.config);
        self.add_points(outcome.points);

        let ticks_remaining = ticks_remaining.saturating_sub(1);
        if ticks_remaining == 0 {
            self.enter_game_over();
        } else {
            self.session.state = GameState::Dying { ticks_remaining };
        }
    }

    fn add_points(&mut self, points: u32) {
        if points > 0 {
            self.session.score += points;
            self.events.push(TickEvent::Scored {
                points,
                score: self.session.score,
            });
        }
    }

    fn advance_track(&mut self) {
        let update = self.track.update(&self.config, &mut self.rng);
        if let Some(gap_top) = update.spawned {
            self.events.push(TickEvent::ObstacleSpawned { gap_top });
        }
        if update.retired > 0 {
            self.events.push(TickEvent::ObstaclesRetired {
                count: update.retired,
            });
        }
    }

    fn enter_dying(&mut self) {
        let ticks_remaining = self.config.death_countdown_ticks();
        self.set_state(GameState::Dying { ticks_remaining });
    }

    fn enter_game_over(&mut self) {
        let score = self.session.score;
        let previous = self.session.high_score;
        if score > previous {
            self.session.high_score = score;
            if let Err(e) = self.store.save(score) {
                log::warn!("Could not persist high score {}: {}", score, e);
            }
            log::info!("New high score {} (was {})", score, previous);
            self.events.push(TickEvent::NewHighScore { score, previous });
        }
        self.set_state(GameState::GameOver);
    }

    fn reset_into(&mut self, next: GameState) {
        if let GameState::Dying { ticks_remaining } = self.session.state {
            log::debug!("Cancelled death countdown with {} ticks left", ticks_remaining);
        }
        self.set_state(next);
        self.session.score = 0;
        self.avatar.reset(&self.config);
        self.track.clear();
    }

    fn set_state(&mut self, to: GameState) {
        let from = self.session.state;
        if from.name() != to.name() {
            log::info!("{} -> {} (score {})", from.name(), to.name(), self.session.score);
        }
        self.session.state = to;
        self.events.push(TickEvent::StateChanged { from, to });
    }
}

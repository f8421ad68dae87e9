mod tick_events;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use grums_lair::highscore::{HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore};
use grums_lair::input::{map_key, KeyAction};
use grums_lair::ui::TerminalSurface;
use grums_lair::utils::version_string;
use grums_lair::{logging, FrameDriver, Game, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

/// Options parsed from the command line.
#[derive(Debug, Default)]
struct CliOptions {
    seed: Option<u64>,
    reset_high_score: bool,
}

fn print_help() {
    println!("Flight to Grum's Lair - terminal arcade game\n");
    println!("Usage: grums-lair [options]\n");
    println!("Options:");
    println!("  --seed <n>           Use a fixed seed for gap placement");
    println!("  --reset-high-score   Forget the saved high score");
    println!("  --version            Show version information");
    println!("  --help               Show this help message\n");
    println!("Keys: Space/Up/Enter jump, C continue, L leave, Esc/Q quit");
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match args.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => options.seed = Some(seed),
                _ => {
                    eprintln!("--seed needs a non-negative integer");
                    std::process::exit(1);
                }
            },
            "--reset-high-score" => options.reset_high_score = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'grums-lair --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    options
}

/// Pick the JSON store, or fall back to memory if the home directory is
/// unusable.
fn open_store(reset: bool) -> Box<dyn HighScoreStore> {
    match JsonHighScoreStore::in_game_dir() {
        Ok(store) => {
            if reset {
                match store.clear() {
                    Ok(()) => log::info!("High score reset"),
                    Err(e) => log::warn!("Could not reset high score: {}", e),
                }
            }
            log::info!("High score file: {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("High score will not be saved: {}", e);
            Box::new(MemoryHighScoreStore::default())
        }
    }
}

fn main() -> io::Result<()> {
    let options = parse_args();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled ({})", e);
    }

    let config = GameConfig::load();
    let rng = match options.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let store = open_store(options.reset_high_score);
    let mut driver = FrameDriver::new(Game::new(config, rng, store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut driver);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    println!("Goodbye! Best score: {}", driver.game().high_score());

    result
}

/// Draw one frame per refresh interval and read keys in between.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    driver: &mut FrameDriver<StdRng>,
) -> io::Result<()> {
    let frame_interval = driver.game().config().frame_interval();
    let mut next_frame = Instant::now();

    loop {
        let mut events = Vec::new();
        terminal.draw(|frame| {
            events = driver.tick(&mut TerminalSurface::new(frame));
        })?;
        tick_events::log_tick_events(driver.frame_count(), &events);

        next_frame += frame_interval;

        // Handle input until the next frame is due
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    KeyAction::Game(input) => {
                        driver.handle_input(input);
                    }
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Ignore => {}
                }
            }
            if Instant::now() >= next_frame {
                break;
            }
        }

        // After a stall (suspended terminal, slow draw) resume at the normal
        // pace instead of rushing through a backlog of frames
        let now = Instant::now();
        if now > next_frame + frame_interval * 4 {
            next_frame = now;
        }
    }
}

mod render;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use pacman_arcade::{Direction, Game, GameEvent, Maze, ScoreFile, Settings, SystemClock, TickInput};
use render::Renderer;

/// How long a key counts as held after its last press or repeat event.
const INPUT_HOLD_MS: u64 = 160;

fn main() -> io::Result<()> {
    env_logger::init();
    let settings = Settings::from_env();
    log::info!("starting with {settings:?}");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &settings);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    let best = result?;
    println!("Best score: {best}");
    Ok(())
}

fn run(stdout: &mut Stdout, settings: &Settings) -> io::Result<u32> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let clock = SystemClock::new();
    let mut game = Game::new(Maze::classic(), ScoreFile::new(&settings.scores_path));
    let mut renderer = Renderer::new(&game.view());

    let tick_every = Duration::from_millis(settings.tick_ms);
    let frame_time = Duration::from_micros(1_000_000 / settings.render_fps.max(1));
    let mut last_tick = Instant::now();
    let mut last_seen: [Option<Instant>; 4] = [None; 4];
    let mut last_pressed: Option<Direction> = None;
    let mut restart = false;
    let mut quit = false;

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                let dir = match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        quit = true;
                        None
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        quit = true;
                        None
                    }
                    KeyCode::Char('r') => {
                        restart = true;
                        None
                    }
                    KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
                    KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
                    KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
                    KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
                    _ => None,
                };
                if let Some(dir) = dir {
                    last_seen[idx_for_dir(dir)] = Some(Instant::now());
                    last_pressed = Some(dir);
                }
            }
        }

        if quit || last_tick.elapsed() >= tick_every {
            last_tick = Instant::now();
            let input = intents(active_dir_recent(&last_seen, last_pressed), restart, quit);
            restart = false;
            let events = game.tick(&input, &clock, &mut rng);
            if events.contains(&GameEvent::Quit) {
                return Ok(game.high_scores().best());
            }
            if events.contains(&GameEvent::Restarted) {
                last_seen = [None; 4];
                last_pressed = None;
            }
        }
        render::render(stdout, &game.view(), &mut renderer)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn intents(dir: Option<Direction>, restart: bool, quit: bool) -> TickInput {
    TickInput {
        up: dir == Some(Direction::Up),
        down: dir == Some(Direction::Down),
        left: dir == Some(Direction::Left),
        right: dir == Some(Direction::Right),
        restart,
        quit,
    }
}

/// Terminals rarely report key releases, so a direction stays active for
/// `INPUT_HOLD_MS` after its latest press. The most recent key wins.
fn active_dir_recent(
    last_seen: &[Option<Instant>; 4],
    last_pressed: Option<Direction>,
) -> Option<Direction> {
    let now = Instant::now();
    let hold = Duration::from_millis(INPUT_HOLD_MS);
    if let Some(dir) = last_pressed {
        if let Some(t) = last_seen[idx_for_dir(dir)] {
            if now.duration_since(t) <= hold {
                return Some(dir);
            }
        }
    }
    let mut best: Option<(Direction, Instant)> = None;
    for (idx, dir) in Direction::ALL.iter().enumerate() {
        if let Some(t) = last_seen[idx] {
            if now.duration_since(t) <= hold {
                match best {
                    None => best = Some((*dir, t)),
                    Some((_, bt)) if t > bt => best = Some((*dir, t)),
                    _ => {}
                }
            }
        }
    }
    best.map(|(dir, _)| dir)
}

fn idx_for_dir(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

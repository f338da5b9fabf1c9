//! Per-tick orchestration of one play session.
//!
//! A [`Game`] owns everything that changes while playing: the player,
//! the ghosts, the pellets, the score, the power timer and the spawn
//! schedule. It is rebuilt wholesale on restart; only the maze, the high
//! score table and its file survive.

use crate::clock::Clock;
use crate::components::{PelletKind, Rect, Step};
use crate::constants::{GHOST_POINTS, LEADERBOARD_LEN, PELLET_POINTS, POWER_POINTS};
use crate::ghost::{Dice, Ghost};
use crate::highscores::{HighScores, ScoreFile};
use crate::level::Maze;
use crate::pellets::{Pellet, PelletField};
use crate::player::{Body, Player};
use crate::power::PowerMode;
use crate::spawn::SpawnScheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Input intents for one tick, already decoded from whatever device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Only honored after a game over.
    pub restart: bool,
    pub quit: bool,
}

impl TickInput {
    /// Right beats left and down beats up; both axes may be set at once.
    pub fn step(&self) -> Step {
        let mut step = Step::ZERO;
        if self.left {
            step.dx = -1;
        }
        if self.right {
            step.dx = 1;
        }
        if self.up {
            step.dy = -1;
        }
        if self.down {
            step.dy = 1;
        }
        step
    }
}

/// Things that happened during a tick, for HUD, audio or logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten { kind: PelletKind, points: u32 },
    FieldRefilled,
    PowerStarted,
    PowerEnded,
    GhostSpawned,
    GhostEaten { points: u32 },
    GameOver { score: u32 },
    Restarted,
    Quit,
}

/// Read-only snapshot handed to a renderer.
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    pub arena: (i32, i32),
    pub walls: &'a [Rect],
    pub player: &'a Body,
    pub ghosts: &'a [Ghost],
    pub pellets: &'a [Pellet],
    pub score: u32,
    pub high_scores: [u32; LEADERBOARD_LEN],
    pub power_active: bool,
    pub phase: Phase,
}

pub struct Game {
    maze: Maze,
    player: Player,
    ghosts: Vec<Ghost>,
    pellets: PelletField,
    score: u32,
    power: PowerMode,
    spawner: SpawnScheduler,
    phase: Phase,
    high_scores: HighScores,
    store: ScoreFile,
}

impl Game {
    /// Starts a session on `maze`, loading the high score table from `store`.
    pub fn new(maze: Maze, store: ScoreFile) -> Self {
        let high_scores = store.load();
        Self {
            player: Player::default(),
            ghosts: Vec::new(),
            pellets: PelletField::new(&maze),
            score: 0,
            power: PowerMode::default(),
            spawner: SpawnScheduler::default(),
            phase: Phase::Playing,
            high_scores,
            store,
            maze,
        }
    }

    fn restart(&mut self) {
        self.player = Player::default();
        self.ghosts.clear();
        self.pellets = PelletField::new(&self.maze);
        self.score = 0;
        self.power = PowerMode::default();
        self.spawner = SpawnScheduler::default();
        self.phase = Phase::Playing;
        log::info!("new game");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn view(&self) -> WorldView<'_> {
        WorldView {
            arena: (self.maze.width(), self.maze.height()),
            walls: self.maze.walls(),
            player: &self.player.body,
            ghosts: &self.ghosts,
            pellets: self.pellets.active(),
            score: self.score,
            high_scores: self.high_scores.top(),
            power_active: self.power.is_active(),
            phase: self.phase,
        }
    }

    /// Advances the session by one tick.
    ///
    /// Order: player, spawn, power expiry, ghosts (with frightened
    /// contacts), pellets, lethal contacts. After a game over only
    /// `restart` and `quit` are looked at.
    pub fn tick(
        &mut self,
        input: &TickInput,
        clock: &impl Clock,
        dice: &mut impl Dice,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if input.quit {
            events.push(GameEvent::Quit);
            return events;
        }
        if self.phase == Phase::GameOver {
            if input.restart {
                self.restart();
                events.push(GameEvent::Restarted);
            }
            return events;
        }

        let now = clock.now_ms();
        self.player.steer(input.step(), &self.maze);

        if let Some((x, y)) = self.spawner.poll(now, self.ghosts.len()) {
            self.ghosts.push(Ghost::new(x, y, self.power.is_active()));
            log::info!("ghost released ({} active)", self.ghosts.len());
            events.push(GameEvent::GhostSpawned);
        }

        if self.power.update(now, &mut self.ghosts) {
            log::info!("power mode over");
            events.push(GameEvent::PowerEnded);
        }

        self.move_ghosts(dice, &mut events);
        self.eat_pellets(now, &mut events);
        self.check_caught(&mut events);
        events
    }

    fn move_ghosts(&mut self, dice: &mut impl Dice, events: &mut Vec<GameEvent>) {
        let target = self.player.body.pos();
        let player = self.player.body.rect();
        let maze = &self.maze;
        let mut eaten = 0;
        self.ghosts.retain_mut(|ghost| {
            ghost.advance(maze, target, dice);
            let caught = ghost.vulnerable && ghost.rect().intersects(&player);
            if caught {
                eaten += 1;
            }
            !caught
        });
        for _ in 0..eaten {
            self.score += GHOST_POINTS;
            events.push(GameEvent::GhostEaten {
                points: GHOST_POINTS,
            });
        }
    }

    fn eat_pellets(&mut self, now: u64, events: &mut Vec<GameEvent>) {
        for pos in self.pellets.touching(&self.player.body.rect()) {
            let Some(eaten) = self.pellets.consume(pos) else {
                continue;
            };
            let points = match eaten.kind {
                PelletKind::Normal => PELLET_POINTS,
                PelletKind::Power => {
                    self.power.activate(now, &mut self.ghosts);
                    log::info!("power mode until {:?}", self.power.expires_at());
                    events.push(GameEvent::PowerStarted);
                    POWER_POINTS
                }
            };
            self.score += points;
            events.push(GameEvent::PelletEaten {
                kind: eaten.kind,
                points,
            });
            if eaten.refilled {
                log::debug!("pellet field restocked");
                events.push(GameEvent::FieldRefilled);
            }
        }
    }

    fn check_caught(&mut self, events: &mut Vec<GameEvent>) {
        let player = &self.player.body;
        let caught = self
            .ghosts
            .iter()
            .any(|ghost| !ghost.vulnerable && ghost.body.overlaps(player));
        if !caught {
            return;
        }

        self.phase = Phase::GameOver;
        self.high_scores.record(self.score);
        if let Err(err) = self.store.save(&self.high_scores) {
            log::warn!("{err}");
        }
        log::info!("game over with {} points", self.score);
        events.push(GameEvent::GameOver { score: self.score });
    }
}

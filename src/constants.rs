//! Tuning constants shared by the simulation.
//!
//! All distances are in arena pixels, all times in milliseconds.

pub const ARENA_W: i32 = 800;
pub const ARENA_H: i32 = 600;
pub const TILE_SIZE: i32 = 40;
pub const WALL_THICKNESS: i32 = TILE_SIZE / 4;

/// Side length of the square hit box shared by the player and ghosts.
pub const ENTITY_SIZE: i32 = TILE_SIZE / 2;
pub const PLAYER_SPEED: i32 = 4;
pub const GHOST_SPEED: i32 = PLAYER_SPEED - 1;

pub const PLAYER_START: (i32, i32) = (TILE_SIZE, TILE_SIZE);
/// Inside the ghost house, clear of the vertical wall at column 8.
pub const GHOST_HOUSE: (i32, i32) = (TILE_SIZE * 8 + TILE_SIZE / 2, TILE_SIZE * 6);

/// Side length of a pellet's hit box (twice the dot radius).
pub const PELLET_SIZE: i32 = 8;
pub const LATTICE_STEP: i32 = TILE_SIZE / 2;

/// Side-wall opening that makes the horizontal wrap reachable.
pub const TUNNEL_Y: i32 = 180;
pub const TUNNEL_H: i32 = 50;

pub const MAX_GHOSTS: usize = 4;
pub const GHOST_SPAWN_DELAY_MS: u64 = 5_000;
pub const POWER_DURATION_MS: u64 = 15_000;

pub const PATH_REFRESH_CHANCE: f64 = 0.1;
pub const PURSUIT_BIAS: f64 = 0.3;
pub const PATH_MIN: usize = 3;
pub const PATH_MAX: usize = 6;

pub const PELLET_POINTS: u32 = 10;
pub const POWER_POINTS: u32 = 50;
pub const GHOST_POINTS: u32 = 200;

pub const LEADERBOARD_LEN: usize = 5;

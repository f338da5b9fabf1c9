//! Pac-Man style arcade core.
//!
//! The library holds the whole simulation and knows nothing about
//! terminals: it takes [`game::TickInput`] intents, a [`clock::Clock`] and
//! a [`ghost::Dice`] each tick and exposes a [`game::WorldView`] for
//! drawing. The `pacman` binary wires it to a crossterm frontend.

pub mod clock;
pub mod components;
pub mod constants;
pub mod error;
pub mod game;
pub mod ghost;
pub mod highscores;
pub mod level;
pub mod pellets;
pub mod player;
pub mod power;
pub mod settings;
pub mod spawn;

pub use clock::{Clock, ManualClock, SystemClock};
pub use components::{Direction, PelletKind, Rect, Step};
pub use error::ScoreFileError;
pub use game::{Game, GameEvent, Phase, TickInput, WorldView};
pub use ghost::Dice;
pub use highscores::{HighScores, ScoreFile};
pub use level::Maze;
pub use settings::Settings;

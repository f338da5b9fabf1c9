//! Runtime settings read from the environment.

use std::path::PathBuf;

pub const DEFAULT_TICK_MS: u64 = 16;
pub const DEFAULT_RENDER_FPS: u64 = 60;
pub const DEFAULT_SCORES_PATH: &str = "high_scores.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Simulation step length; 16 ms is roughly 60 Hz.
    pub tick_ms: u64,
    /// Upper bound on redraws per second.
    pub render_fps: u64,
    pub scores_path: PathBuf,
    /// Fixed RNG seed for reproducible ghosts. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            render_fps: DEFAULT_RENDER_FPS,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            seed: None,
        }
    }
}

impl Settings {
    /// Reads `PACMAN_TICK_MS`, `PACMAN_FPS`, `PACMAN_SCORES` and
    /// `PACMAN_SEED`. Missing, unparsable or zero values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
        };
        let defaults = Self::default();
        Self {
            tick_ms: positive("PACMAN_TICK_MS").unwrap_or(defaults.tick_ms),
            render_fps: positive("PACMAN_FPS").unwrap_or(defaults.render_fps),
            scores_path: lookup("PACMAN_SCORES")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.scores_path),
            seed: lookup("PACMAN_SEED").and_then(|v| v.trim().parse::<u64>().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Settings::from_lookup(lookup(&[])), Settings::default());
    }

    #[test]
    fn test_reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("PACMAN_TICK_MS", "33"),
            ("PACMAN_FPS", "30"),
            ("PACMAN_SCORES", "/tmp/scores.txt"),
            ("PACMAN_SEED", "42"),
        ]));
        assert_eq!(settings.tick_ms, 33);
        assert_eq!(settings.render_fps, 30);
        assert_eq!(settings.scores_path, PathBuf::from("/tmp/scores.txt"));
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = Settings::from_lookup(lookup(&[
            ("PACMAN_TICK_MS", "0"),
            ("PACMAN_FPS", "fast"),
            ("PACMAN_SCORES", "  "),
            ("PACMAN_SEED", "x"),
        ]));
        assert_eq!(settings, Settings::default());
    }
}

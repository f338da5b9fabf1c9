use crate::constants::{GHOST_HOUSE, GHOST_SPAWN_DELAY_MS, MAX_GHOSTS};

/// Releases ghosts from the house one at a time.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    last_spawn: Option<u64>,
    delay: u64,
    max: usize,
    house: (i32, i32),
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self::new(GHOST_SPAWN_DELAY_MS, MAX_GHOSTS, GHOST_HOUSE)
    }
}

impl SpawnScheduler {
    pub fn new(delay: u64, max: usize, house: (i32, i32)) -> Self {
        Self {
            last_spawn: None,
            delay,
            max,
            house,
        }
    }

    /// Returns the spawn position when a ghost should be released now, and
    /// records the release. The first ghost comes out immediately; later
    /// ones need more than `delay` since the previous release.
    pub fn poll(&mut self, now: u64, active: usize) -> Option<(i32, i32)> {
        if active >= self.max {
            return None;
        }
        let due = match self.last_spawn {
            None => true,
            Some(last) => now.saturating_sub(last) > self.delay,
        };
        if !due {
            return None;
        }
        self.last_spawn = Some(now);
        Some(self.house)
    }
}

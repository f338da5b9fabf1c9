use crate::constants::POWER_DURATION_MS;
use crate::ghost::Ghost;

/// Global frightened state shared by every ghost.
///
/// While the timer runs, all ghosts are vulnerable. Re-activating restarts
/// the window instead of extending it.
#[derive(Debug, Clone)]
pub struct PowerMode {
    activated_at: Option<u64>,
    duration: u64,
}

impl Default for PowerMode {
    fn default() -> Self {
        Self::new(POWER_DURATION_MS)
    }
}

impl PowerMode {
    pub fn new(duration: u64) -> Self {
        Self {
            activated_at: None,
            duration,
        }
    }

    pub fn is_active(&self) -> bool {
        self.activated_at.is_some()
    }

    /// Time at which the current window lapses, if one is running.
    pub fn expires_at(&self) -> Option<u64> {
        self.activated_at.map(|t| t + self.duration)
    }

    pub fn activate(&mut self, now: u64, ghosts: &mut [Ghost]) {
        self.activated_at = Some(now);
        for ghost in ghosts.iter_mut() {
            ghost.vulnerable = true;
        }
    }

    /// Ends the window once more than `duration` has passed. Returns true on
    /// the tick the window closes.
    pub fn update(&mut self, now: u64, ghosts: &mut [Ghost]) -> bool {
        let Some(start) = self.activated_at else {
            return false;
        };
        if now.saturating_sub(start) <= self.duration {
            return false;
        }
        self.activated_at = None;
        for ghost in ghosts.iter_mut() {
            ghost.vulnerable = false;
        }
        true
    }

    /// Ends the window immediately and returns every ghost to hunting.
    pub fn clear(&mut self, ghosts: &mut [Ghost]) {
        self.activated_at = None;
        for ghost in ghosts.iter_mut() {
            ghost.vulnerable = false;
        }
    }
}

//! High score table and its text-file store.
//!
//! The file holds up to five scores, one per line, highest first. Reading
//! is forgiving: a missing, unreadable or garbled file yields an empty
//! table rather than an error the game has to handle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::LEADERBOARD_LEN;
use crate::error::ScoreFileError;

/// Unique scores, highest first, at most `LEADERBOARD_LEN` of them.
///
/// Zero is never stored; it only appears as padding in [`HighScores::top`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<u32>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: impl IntoIterator<Item = u32>) -> Self {
        let mut table = Self {
            entries: scores.into_iter().collect(),
        };
        table.normalize();
        table
    }

    /// Parses one score per line, skipping lines that are not scores.
    pub fn parse(text: &str) -> Self {
        let scores = text.lines().filter_map(|line| {
            let line = line.trim();
            match line.parse::<u32>() {
                Ok(score) => Some(score),
                Err(_) => {
                    if !line.is_empty() {
                        log::warn!("ignoring malformed high score line {line:?}");
                    }
                    None
                }
            }
        });
        Self::from_scores(scores)
    }

    pub fn to_text(&self) -> String {
        self.entries.iter().map(|s| format!("{s}\n")).collect()
    }

    fn normalize(&mut self) {
        self.entries.retain(|&s| s > 0);
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.dedup();
        self.entries.truncate(LEADERBOARD_LEN);
    }

    pub fn record(&mut self, score: u32) {
        self.entries.push(score);
        self.normalize();
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// The table padded with zeros to a fixed width.
    pub fn top(&self) -> [u32; LEADERBOARD_LEN] {
        let mut top = [0; LEADERBOARD_LEN];
        for (slot, score) in top.iter_mut().zip(&self.entries) {
            *slot = *score;
        }
        top
    }

    pub fn best(&self) -> u32 {
        self.entries.first().copied().unwrap_or(0)
    }
}

/// Location of the persisted high score table.
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the table, creating an empty file on first run.
    pub fn try_load(&self) -> Result<HighScores, ScoreFileError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(HighScores::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::write(&self.path, "").map_err(|source| ScoreFileError::Write {
                    path: self.path.clone(),
                    source,
                })?;
                log::info!("created high score file {}", self.path.display());
                Ok(HighScores::new())
            }
            Err(source) => Err(ScoreFileError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Like [`ScoreFile::try_load`] but falls back to an empty table.
    pub fn load(&self) -> HighScores {
        match self.try_load() {
            Ok(scores) => {
                log::info!("loaded {} high scores", scores.entries().len());
                scores
            }
            Err(err) => {
                log::warn!("{err}; starting with an empty table");
                HighScores::new()
            }
        }
    }

    pub fn save(&self, scores: &HighScores) -> Result<(), ScoreFileError> {
        fs::write(&self.path, scores.to_text()).map_err(|source| ScoreFileError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("high scores saved ({} entries)", scores.entries().len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_top_unique_descending() {
        let mut table = HighScores::from_scores([300, 100]);
        for s in [200, 300, 50, 700, 10, 100] {
            table.record(s);
        }
        assert_eq!(table.entries(), &[700, 300, 200, 100, 50]);
        assert_eq!(table.best(), 700);
    }

    #[test]
    fn test_top_pads_with_zeros() {
        let table = HighScores::from_scores([150]);
        assert_eq!(table.top(), [150, 0, 0, 0, 0]);
        assert_eq!(HighScores::new().top(), [0; LEADERBOARD_LEN]);
    }

    #[test]
    fn test_parse_skips_garbage() {
        let table = HighScores::parse("120\nabc\n\n  80 \n-5\n120\n0\n");
        assert_eq!(table.entries(), &[120, 80]);
    }

    #[test]
    fn test_missing_file_loads_empty_and_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let file = ScoreFile::new(dir.path().join("high_scores.txt"));
        assert_eq!(file.load().top(), [0, 0, 0, 0, 0]);
        assert!(file.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = ScoreFile::new(dir.path().join("scores.txt"));
        let mut table = file.load();
        table.record(150);
        file.save(&table).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "150\n");
        assert_eq!(file.load().top(), [150, 0, 0, 0, 0]);
    }

    #[test]
    fn test_unreadable_store_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be read as a file
        let file = ScoreFile::new(dir.path());
        assert!(matches!(file.try_load(), Err(ScoreFileError::Read { .. })));
        assert_eq!(file.load(), HighScores::new());
    }

    #[test]
    fn test_non_utf8_store_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(ScoreFile::new(path).load(), HighScores::new());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = ScoreFile::new(dir.path().join("missing").join("scores.txt"));
        let err = file.save(&HighScores::from_scores([10])).unwrap_err();
        assert!(matches!(err, ScoreFileError::Write { .. }));
    }
}

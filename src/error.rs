use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures touching the high score file. None of these end a game.
#[derive(Debug, Error)]
pub enum ScoreFileError {
    #[error("cannot read high scores from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write high scores to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

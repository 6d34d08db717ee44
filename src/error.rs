use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnounceError {
    #[error("failed to write announcement for animal {index}")]
    Write {
        index: i64,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn announcer thread for animal {index}")]
    Spawn {
        index: i64,
        #[source]
        source: io::Error,
    },

    #[error("announcer thread for animal {index} panicked")]
    TaskPanicked { index: i64 },
}

impl AnnounceError {
    /// The reader of the sink went away before every line was written.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            AnnounceError::Write { source, .. } => source.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnnounceError>;

//! Error types for the powerchord library

use std::io;

/// Library error type for powerchord operations
#[derive(Debug, thiserror::Error)]
pub enum ChordError {
    /// Root name outside the 12 recognized spellings
    #[error("invalid note: {0:?}")]
    InvalidNote(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<io::Error> for ChordError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}

// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur when compiling or running a pattern.
#[derive(Error, Debug)]
pub enum Error {
    #[error("pattern must not be null")]
    NullPattern,
    #[error("input must not be null")]
    NullInput,
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns true if the error is caused by a missing argument passed by the caller.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NullPattern | Self::NullInput)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

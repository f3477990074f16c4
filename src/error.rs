//! Error types for the project tracker
//!
//! Every failure is raised at the point of violation and propagated to the
//! immediate caller. Validation always runs before mutation, so an `Err`
//! never leaves a half-updated project or container behind.

use thiserror::Error;

/// Errors produced by the containers, projects, tracker and configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Malformed or empty input to a constructor or setter
    #[error("{0}")]
    InvalidArgument(String),

    /// Index outside the valid range of a container
    #[error("Index: {index}, Size: {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Operation not valid in the container's current state
    #[error("{0}")]
    IllegalState(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        TrackerError::InvalidArgument(message.into())
    }

    /// Check an index against `[0, size)`
    pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
        if index >= size {
            return Err(TrackerError::IndexOutOfBounds { index, size });
        }
        Ok(())
    }

    /// Check an insertion position against `[0, size]`
    pub(crate) fn check_position(index: usize, size: usize) -> Result<()> {
        if index > size {
            return Err(TrackerError::IndexOutOfBounds { index, size });
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

/*!
 * Error types for the srtshift application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while parsing or shifting subtitle timestamps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// Text did not contain an `HH:MM:SS,mmm` timestamp
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// A shifted value is still negative after the wrap policy was applied
    #[error("Shifted timestamp is negative: {millis}ms")]
    NegativeTimestamp {
        /// Millisecond value after wrapping
        millis: i64,
    },

    /// Adding the offset overflowed the millisecond range
    #[error("Shift of {offset_ms}ms is out of range")]
    OutOfRange {
        /// Offset that could not be applied
        offset_ms: i64,
    },
}

/// Errors raised by configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured extension cannot select any file
    #[error("Invalid file extension: {0:?}")]
    InvalidExtension(String),

    /// The config file could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

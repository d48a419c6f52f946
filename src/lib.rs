/*!
 * # srtshift - batch subtitle timestamp shifter
 *
 * Shifts every timestamp in a folder of SRT files by a fixed offset, except
 * for the cues that come before the first long pause of each file.
 *
 * ## Architecture
 *
 * - `timestamp`: `HH:MM:SS,mmm` scanning, parsing and formatting
 * - `gap_detector`: first stage, finds the first pause of at least a threshold
 * - `timestamp_shifter`: second stage, rewrites a single line
 * - `subtitle_processor`: runs both stages over the lines of one file
 * - `report`: renders structured results as log records
 * - `file_utils`: file system operations
 * - `app_controller`: batch processing of a directory
 * - `app_config`: configuration management
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod gap_detector;
pub mod report;
pub mod subtitle_processor;
pub mod timestamp;
pub mod timestamp_shifter;

// Re-export main types for easier usage
pub use app_config::{Config, NegativeWrap};
pub use app_controller::{Controller, ShiftRequest};
pub use errors::{AppError, ConfigError, SubtitleError};
pub use gap_detector::{CueInterval, GapDetector, GapScan, Pause};
pub use subtitle_processor::{ShiftOutcome, ShiftPipeline};
pub use timestamp::Timestamp;
pub use timestamp_shifter::{LineDecision, TimestampShifter};

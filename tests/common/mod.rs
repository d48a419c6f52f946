/*!
 * Common test utilities for the srtshift test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Two cues separated by an 8 second pause, then a third one 1 second later
pub const PAUSED_SUBTITLE: &str = "1
00:00:01,000 --> 00:00:02,000
Before the pause.

2
00:00:10,000 --> 00:00:11,000
After the pause.

3
00:00:12,000 --> 00:00:13,500
Still after the pause.
";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file with a long pause for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, PAUSED_SUBTITLE)
}

/// Route library log records through env_logger so reporting code runs under test
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

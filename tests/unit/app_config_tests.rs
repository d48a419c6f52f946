/*!
 * Tests for application configuration functionality
 */

use std::fs;
use anyhow::Result;
use srtshift::app_config::{Config, LineEnding, LogLevel, NegativeWrap};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.negative_wrap, NegativeWrap::TwoHours);
    assert_eq!(config.extension, "srt");
    assert_eq!(config.line_ending, LineEnding::Preserve);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withBadExtensions_shouldFail() {
    let mut config = Config::default();

    config.extension = "".to_string();
    assert!(config.validate().is_err());

    config.extension = ".".to_string();
    assert!(config.validate().is_err());

    config.extension = "sub/srt".to_string();
    assert!(config.validate().is_err());

    config.extension = ".SRT".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.normalized_extension(), "SRT");
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefault() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert_eq!(config, Config::default());
    assert!(path.exists());
    let reloaded: Config = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(reloaded, config);
    Ok(())
}

/// Test that an existing config file is loaded
#[test]
fn test_load_or_create_withExistingFile_shouldLoadValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "log_level": "debug", "negative_wrap": "modulo_day", "line_ending": "crlf" }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.negative_wrap, NegativeWrap::ModuloDay);
    assert_eq!(config.line_ending, LineEnding::Crlf);
    assert_eq!(config.extension, "srt");
    Ok(())
}

/// Test that a malformed config file is reported
#[test]
fn test_load_or_create_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let err = Config::load_or_create(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
    Ok(())
}

/// Test log level conversion into the log crate filter
#[test]
fn test_log_level_conversion_shouldMapEachLevel() {
    assert_eq!(log::LevelFilter::from(LogLevel::Error), log::LevelFilter::Error);
    assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
}

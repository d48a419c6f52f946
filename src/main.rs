// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;
use std::path::PathBuf;

use srtshift::app_config::{self, Config, NegativeWrap};
use srtshift::app_controller::{Controller, ShiftRequest};
use srtshift::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for NegativeWrap to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliNegativeWrap {
    /// Add two hours once to negative results
    TwoHours,
    /// Wrap negative results into a 24 hour day
    ModuloDay,
}

impl From<CliNegativeWrap> for NegativeWrap {
    fn from(cli_wrap: CliNegativeWrap) -> Self {
        match cli_wrap {
            CliNegativeWrap::TwoHours => NegativeWrap::TwoHours,
            CliNegativeWrap::ModuloDay => NegativeWrap::ModuloDay,
        }
    }
}

/// srtshift - shift subtitle timestamps after the first long pause
#[derive(Parser, Debug)]
#[command(name = "srtshift")]
#[command(version)]
#[command(about = "Shift SRT timestamps after the first long pause of each file")]
#[command(long_about = "srtshift rewrites every .srt file of INPUT_DIR into OUTPUT_DIR, shifting
timestamps by SHIFT_SECONDS. In each file, cues before the first gap of at least
PAUSE_THRESHOLD_SECONDS keep their original timing.

EXAMPLES:
    srtshift in/ out/ 3 5            # Shift by +3s after the first 5s pause
    srtshift in/ out/ -9.5 10        # Shift backward by 9.5s
    srtshift --wrap modulo-day in/ out/ -30 0")]
#[command(allow_negative_numbers = true)]
struct CommandLineOptions {
    /// Directory containing the subtitle files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Directory the shifted files are written to (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Seconds to shift by, positive or negative decimal
    #[arg(value_name = "SHIFT_SECONDS", value_parser = parse_seconds)]
    shift_seconds: f64,

    /// Minimum gap between cues, in seconds, that counts as the pause
    #[arg(value_name = "PAUSE_THRESHOLD_SECONDS", value_parser = parse_seconds)]
    pause_threshold_seconds: f64,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Correction for shifted timestamps below zero
    #[arg(short, long, value_enum)]
    wrap: Option<CliNegativeWrap>,
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a decimal number", value))?;
    if !secs.is_finite() {
        return Err(format!("'{}' is not a finite number", value));
    }
    Ok(secs)
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn print_usage() {
    let mut cmd = CommandLineOptions::command();
    println!("{}", cmd.render_usage());
    println!("Use positive or negative decimal numbers to shift forward/backward (e.g., -9.5)");
}

fn main() -> Result<()> {
    // Info until the config has been read
    CustomLogger::init(LevelFilter::Info)?;

    let options = match CommandLineOptions::try_parse() {
        Ok(options) => options,
        Err(e) if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::UnknownArgument
                | ErrorKind::TooManyValues
                | ErrorKind::WrongNumberOfValues
        ) =>
        {
            print_usage();
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    run(options)
}

fn run(options: CommandLineOptions) -> Result<()> {
    let mut config = match &options.config_path {
        Some(path) => Config::load_or_create(path)?,
        None => Config::default(),
    };

    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    if let Some(wrap) = options.wrap {
        config.negative_wrap = wrap.into();
    }
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    if !FileManager::dir_exists(&options.input_dir) {
        error!("Error: Invalid directory {:?}", options.input_dir);
        return Ok(());
    }

    let request = ShiftRequest {
        shift_secs: options.shift_seconds,
        pause_threshold_secs: options.pause_threshold_seconds,
    };

    if let Err(e) = controller.run_folder(options.input_dir, options.output_dir, request) {
        error!("Error: {:#}", e);
    }

    Ok(())
}

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::gap_detector::GapDetector;
use crate::report::{self, BatchSummary, FileReport};
use crate::subtitle_processor::{ShiftPipeline, split_lines};
use crate::timestamp_shifter::TimestampShifter;

// @module: Application controller for batch timestamp shifting

/// Per-run shift parameters taken from the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftRequest {
    /// Offset applied to shifted timestamps, in seconds (may be negative)
    pub shift_secs: f64,

    /// Minimum gap between cues that counts as the pause, in seconds
    pub pause_threshold_secs: f64,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the per-file pipeline for a request
    pub fn pipeline(&self, request: &ShiftRequest) -> ShiftPipeline {
        ShiftPipeline::new(
            GapDetector::from_secs(request.pause_threshold_secs),
            TimestampShifter::from_secs(request.shift_secs, self.config.negative_wrap),
        )
    }

    /// Shift every subtitle file directly inside `input_dir` into `output_dir`
    ///
    /// Fails without touching anything when `input_dir` cannot be listed.
    /// Failures on individual files are logged and counted.
    pub fn run_folder(&self, input_dir: PathBuf, output_dir: PathBuf, request: ShiftRequest) -> Result<BatchSummary> {
        let files = FileManager::find_files(&input_dir, self.config.normalized_extension())
            .with_context(|| format!("Invalid input directory: {:?}", input_dir))?;

        debug!(
            "Found {} .{} files in {:?}",
            files.len(),
            self.config.normalized_extension(),
            input_dir
        );

        let pipeline = self.pipeline(&request);
        let progress_bar = self.create_progress_bar(files.len() as u64);
        let mut summary = BatchSummary::default();

        for file in &files {
            let file_name = file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress_bar.set_message(file_name.clone());

            match progress_bar.suspend(|| self.process_file(file, &output_dir, &pipeline)) {
                Ok(file_report) => summary.record(&file_report),
                Err(e) => {
                    progress_bar.suspend(|| error!("Error processing file {}: {}", file_name, e));
                    summary.record_failure();
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        report::log_summary(&summary);

        Ok(summary)
    }

    /// Read, shift and write one file
    pub fn process_file(&self, input_file: &Path, output_dir: &Path, pipeline: &ShiftPipeline) -> Result<FileReport, AppError> {
        let file_name = input_file
            .file_name()
            .ok_or_else(|| AppError::File(format!("Not a file: {:?}", input_file)))?;
        let display_name = file_name.to_string_lossy().to_string();

        let content = FileManager::read_to_string(input_file)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        let lines = split_lines(&content);
        let outcome = pipeline.process(&lines);
        report::log_outcome(&display_name, &outcome);

        let line_ending = self.config.line_ending.resolve(&content);
        let output_path = output_dir.join(file_name);
        FileManager::write_to_file(&output_path, &outcome.render(line_ending))
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        let file_report = FileReport::from_outcome(&display_name, &outcome);
        report::log_report(&file_report);

        Ok(file_report)
    }

    // Hidden when stderr is not a terminal or per-line logging is on
    fn create_progress_bar(&self, len: u64) -> ProgressBar {
        if log::max_level() >= log::LevelFilter::Debug {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar
    }
}

/*!
 * Console reporting for processed files.
 *
 * The pipeline returns structured results; this module turns them into log
 * records. Nothing here feeds back into the output files.
 */

use log::{debug, info, warn};

use crate::subtitle_processor::ShiftOutcome;
use crate::timestamp_shifter::LineDecision;

/// Summary of one processed file
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub file_name: String,
    pub lines_read: usize,
    /// Pause duration in seconds and the boundary it starts
    pub pause: Option<(f64, String)>,
    pub modified_lines: usize,
    pub kept_lines: usize,
    /// Timestamps that could not be shifted
    pub failed_timestamps: usize,
}

impl FileReport {
    pub fn from_outcome(file_name: &str, outcome: &ShiftOutcome<'_>) -> Self {
        let failed_timestamps = outcome
            .lines
            .iter()
            .map(|l| match &l.decision {
                LineDecision::Shifted { failures, .. } => failures.len(),
                _ => 0,
            })
            .sum();

        FileReport {
            file_name: file_name.to_string(),
            lines_read: outcome.lines_read(),
            pause: outcome
                .pause()
                .map(|p| (p.duration_secs(), p.boundary.to_string())),
            modified_lines: outcome.modified_lines(),
            kept_lines: outcome.kept_lines(),
            failed_timestamps,
        }
    }
}

/// Totals over a whole batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
    pub modified_lines: usize,
}

impl BatchSummary {
    pub fn record(&mut self, report: &FileReport) {
        self.processed += 1;
        self.modified_lines += report.modified_lines;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }
}

/// Log the scan result and each line decision of a file
pub fn log_outcome(file_name: &str, outcome: &ShiftOutcome<'_>) {
    info!("Processing: {}", file_name);
    info!("Read {} lines", outcome.lines_read());

    match outcome.pause() {
        Some(pause) => info!(
            "Found pause of {} seconds at {} (cue {}, line {})",
            pause.duration_secs(),
            pause.boundary,
            pause.cue_num,
            pause.line_index + 1
        ),
        None => debug!("No pause found, shifting every timestamp"),
    }

    for line in &outcome.lines {
        match &line.decision {
            LineDecision::Untouched => {}
            LineDecision::Kept => debug!("Kept original: {}", line.original),
            LineDecision::Shifted { text, failures } => {
                debug!("Modified: {} -> {}", line.original, text);
                for failure in failures {
                    warn!("Line {}: {}, timestamp left unchanged", line.line_index + 1, failure);
                }
            }
        }
    }
}

/// Log the per-file completion message
pub fn log_report(report: &FileReport) {
    info!("Successfully processed {}", report.file_name);
    info!("Modified {} timestamp lines", report.modified_lines);
}

/// Log the batch totals
pub fn log_summary(summary: &BatchSummary) {
    if summary.failed > 0 {
        warn!(
            "Finished: {} files processed, {} failed, {} timestamp lines modified",
            summary.processed, summary.failed, summary.modified_lines
        );
    } else {
        info!(
            "Finished: {} files processed, {} timestamp lines modified",
            summary.processed, summary.modified_lines
        );
    }
}

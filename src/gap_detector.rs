/*!
 * Long-pause detection.
 *
 * First stage of the shift pipeline: collects the timing lines of a file and
 * remembers where the first pause of at least the threshold begins.
 */

use log::trace;

use crate::timestamp::{Timestamp, parse_pair};

/// Timing of one subtitle cue as found in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueInterval {
    /// 1-based count of timing lines seen so far
    pub cue_num: usize,

    /// 0-based index of the originating line
    pub line_index: usize,

    pub start: Timestamp,
    pub end: Timestamp,
}

/// The first pause whose duration met the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pause {
    /// Signed gap between the previous cue's end and `boundary`
    pub duration_ms: i64,

    /// Start time of the cue that ends the pause
    pub boundary: Timestamp,

    /// Cue that ends the pause
    pub cue_num: usize,
    pub line_index: usize,
}

impl Pause {
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// Result of scanning a file's lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapScan {
    pub cues: Vec<CueInterval>,
    pub pause: Option<Pause>,
}

impl GapScan {
    /// Timestamps before this value stay unshifted; `None` shifts everything
    pub fn shift_boundary(&self) -> Option<Timestamp> {
        self.pause.map(|p| p.boundary)
    }
}

/// Detects the first pause of at least `threshold_ms` between consecutive cues
#[derive(Debug, Clone, Copy)]
pub struct GapDetector {
    threshold_ms: i64,
}

impl GapDetector {
    /// A zero or negative threshold makes the first consecutive pair qualify
    pub fn new(threshold_ms: i64) -> Self {
        Self { threshold_ms }
    }

    /// Convert a threshold in seconds, truncating toward zero
    pub fn from_secs(threshold_secs: f64) -> Self {
        Self::new((threshold_secs * 1000.0) as i64)
    }

    pub fn threshold_ms(&self) -> i64 {
        self.threshold_ms
    }

    pub fn scan(&self, lines: &[&str]) -> GapScan {
        let mut scan = GapScan::default();

        for (line_index, line) in lines.iter().enumerate() {
            let Some((start, end)) = parse_pair(line) else {
                continue;
            };

            let cue = CueInterval {
                cue_num: scan.cues.len() + 1,
                line_index,
                start,
                end,
            };

            if scan.pause.is_none() {
                if let Some(prev) = scan.cues.last() {
                    let gap = start.millis_since(prev.end);
                    if gap >= self.threshold_ms {
                        trace!("Pause of {}ms before cue {}", gap, cue.cue_num);
                        scan.pause = Some(Pause {
                            duration_ms: gap,
                            boundary: start,
                            cue_num: cue.cue_num,
                            line_index,
                        });
                    }
                }
            }

            scan.cues.push(cue);
        }

        scan
    }
}

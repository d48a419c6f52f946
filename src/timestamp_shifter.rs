/*!
 * Per-line timestamp rewriting.
 *
 * Second stage of the shift pipeline. Everything here is pure: a line, the
 * shift boundary found by the gap detector and the shifter settings go in,
 * a `LineDecision` comes out.
 */

use crate::app_config::NegativeWrap;
use crate::errors::SubtitleError;
use crate::timestamp::{Timestamp, find_timestamps};

/// Added once to negative results under `NegativeWrap::TwoHours`
pub const TWO_HOURS_MS: i64 = 2 * 60 * 60 * 1000;

/// Modulus for `NegativeWrap::ModuloDay`
pub const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// What happened to a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDecision {
    /// No timestamp on the line
    Untouched,

    /// Line starts before the shift boundary and is emitted verbatim
    Kept,

    /// Every timestamp on the line was rewritten
    Shifted {
        text: String,
        /// Occurrences left as-is because their shifted value was not representable
        failures: Vec<SubtitleError>,
    },
}

impl LineDecision {
    /// Text to write for `original` under this decision
    pub fn output<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            LineDecision::Shifted { text, .. } => text,
            LineDecision::Untouched | LineDecision::Kept => original,
        }
    }

    pub fn is_shifted(&self) -> bool {
        matches!(self, LineDecision::Shifted { .. })
    }
}

/// Applies a fixed offset to timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampShifter {
    offset_ms: i64,
    wrap: NegativeWrap,
}

impl TimestampShifter {
    pub fn new(offset_ms: i64, wrap: NegativeWrap) -> Self {
        Self { offset_ms, wrap }
    }

    /// Offset given in seconds, rounded to the nearest millisecond
    ///
    /// Rounds rather than truncates, so `1.001` is 1001ms instead of the
    /// 1000ms a plain `as i64` cast of `1.001 * 1000.0` would give.
    /// Offsets beyond the `i64` range saturate.
    pub fn from_secs(offset_secs: f64, wrap: NegativeWrap) -> Self {
        Self::new((offset_secs * 1000.0).round() as i64, wrap)
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    pub fn wrap(&self) -> NegativeWrap {
        self.wrap
    }

    /// Shift one timestamp, wrapping negative results
    pub fn adjust(&self, ts: Timestamp) -> Result<Timestamp, SubtitleError> {
        let shifted = (ts.as_millis() as i64)
            .checked_add(self.offset_ms)
            .ok_or(SubtitleError::OutOfRange { offset_ms: self.offset_ms })?;
        if shifted >= 0 {
            return Ok(Timestamp::from_millis(shifted as u64));
        }

        let wrapped = match self.wrap {
            NegativeWrap::TwoHours => shifted + TWO_HOURS_MS,
            NegativeWrap::ModuloDay => shifted.rem_euclid(ONE_DAY_MS),
        };

        if wrapped < 0 {
            return Err(SubtitleError::NegativeTimestamp { millis: wrapped });
        }
        Ok(Timestamp::from_millis(wrapped as u64))
    }

    /// Decide and rewrite a single line
    ///
    /// Eligibility is decided once from the line's first timestamp: the line
    /// shifts when no boundary is set or that timestamp is at or after it.
    pub fn shift_line(&self, line: &str, boundary: Option<Timestamp>) -> LineDecision {
        let matches = find_timestamps(line);
        let Some(first) = matches.first() else {
            return LineDecision::Untouched;
        };

        if boundary.is_some_and(|b| first.value < b) {
            return LineDecision::Kept;
        }

        let mut text = String::with_capacity(line.len());
        let mut failures = Vec::new();
        let mut last = 0;

        for m in &matches {
            text.push_str(&line[last..m.range.start]);
            match self.adjust(m.value) {
                Ok(shifted) => text.push_str(&shifted.to_string()),
                Err(e) => {
                    text.push_str(&line[m.range.clone()]);
                    failures.push(e);
                }
            }
            last = m.range.end;
        }
        text.push_str(&line[last..]);

        LineDecision::Shifted { text, failures }
    }
}

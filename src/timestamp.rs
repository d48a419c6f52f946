/*!
 * SRT timestamp primitives.
 *
 * Timestamps are recognised with a fixed-grammar scanner instead of a regex:
 * exactly `DD:DD:DD,DDD` with ASCII digits, found left to right without
 * overlapping. Digit groups are taken verbatim, so out-of-range minutes or
 * seconds are accepted and preserved through arithmetic.
 */

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::errors::SubtitleError;

/// Length of `HH:MM:SS,mmm`
pub const TIMESTAMP_LEN: usize = 12;

/// Separator between the start and end timestamps of a timing line
pub const PAIR_SEPARATOR: &str = " --> ";

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// A point in a subtitle timeline with millisecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Parse the first `HH:MM:SS,mmm` occurrence found anywhere in `text`
    pub fn parse(text: &str) -> Result<Self, SubtitleError> {
        find_timestamps(text)
            .into_iter()
            .next()
            .map(|m| m.value)
            .ok_or_else(|| SubtitleError::MalformedTimestamp(text.to_string()))
    }

    /// Signed distance `self - earlier` in milliseconds
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0 as i64 - earlier.0 as i64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / MS_PER_HOUR;
        let minutes = (self.0 % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (self.0 % MS_PER_MINUTE) / MS_PER_SECOND;
        let millis = self.0 % MS_PER_SECOND;

        write!(f, "{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl FromStr for Timestamp {
    type Err = SubtitleError;

    /// Strict parse: the whole string must be one timestamp
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != TIMESTAMP_LEN {
            return Err(SubtitleError::MalformedTimestamp(s.to_string()));
        }
        scan_at(s.as_bytes(), 0).ok_or_else(|| SubtitleError::MalformedTimestamp(s.to_string()))
    }
}

/// One timestamp occurrence inside a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampMatch {
    /// Byte range of the occurrence within the line
    pub range: Range<usize>,
    pub value: Timestamp,
}

/// Find every timestamp in `line`, left to right, non-overlapping
pub fn find_timestamps(line: &str) -> Vec<TimestampMatch> {
    let bytes = line.as_bytes();
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos + TIMESTAMP_LEN <= bytes.len() {
        match scan_at(bytes, pos) {
            Some(value) => {
                matches.push(TimestampMatch {
                    range: pos..pos + TIMESTAMP_LEN,
                    value,
                });
                pos += TIMESTAMP_LEN;
            }
            None => pos += 1,
        }
    }

    matches
}

/// Parse the first `<start> --> <end>` pair in a timing line
pub fn parse_pair(line: &str) -> Option<(Timestamp, Timestamp)> {
    let bytes = line.as_bytes();

    find_timestamps(line).into_iter().find_map(|start| {
        let sep_end = start.range.end + PAIR_SEPARATOR.len();
        if bytes.get(start.range.end..sep_end)? != PAIR_SEPARATOR.as_bytes() {
            return None;
        }
        let end = scan_at(bytes, sep_end)?;
        Some((start.value, end))
    })
}

// Match `DD:DD:DD,DDD` at exactly `pos`
fn scan_at(bytes: &[u8], pos: usize) -> Option<Timestamp> {
    let b = bytes.get(pos..pos + TIMESTAMP_LEN)?;

    let shape_ok = b[2] == b':' && b[5] == b':' && b[8] == b',';
    let digits_ok = [0, 1, 3, 4, 6, 7, 9, 10, 11]
        .iter()
        .all(|&i| b[i].is_ascii_digit());
    if !shape_ok || !digits_ok {
        return None;
    }

    let num = |range: Range<usize>| {
        b[range]
            .iter()
            .fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0'))
    };

    let hours = num(0..2);
    let minutes = num(3..5);
    let seconds = num(6..8);
    let millis = num(9..12);

    Some(Timestamp(
        ((hours * 60 + minutes) * 60 + seconds) * MS_PER_SECOND + millis,
    ))
}

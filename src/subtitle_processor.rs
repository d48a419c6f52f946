use crate::gap_detector::{GapDetector, GapScan, Pause};
use crate::timestamp_shifter::{LineDecision, TimestampShifter};

// @module: Two-stage shift pipeline for the lines of one subtitle file

/// Split file content into lines, accepting both `\n` and `\r\n` terminators
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

/// Join lines, terminating every line with `line_ending`
pub fn join_lines<'a, I>(lines: I, line_ending: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push_str(line_ending);
    }
    out
}

// @struct: One input line and what the shifter did with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedLine<'a> {
    pub line_index: usize,
    pub original: &'a str,
    pub decision: LineDecision,
}

impl ProcessedLine<'_> {
    pub fn output(&self) -> &str {
        self.decision.output(self.original)
    }
}

/// Everything the pipeline learned about one file
#[derive(Debug, Clone)]
pub struct ShiftOutcome<'a> {
    pub scan: GapScan,
    pub lines: Vec<ProcessedLine<'a>>,
}

impl ShiftOutcome<'_> {
    pub fn pause(&self) -> Option<&Pause> {
        self.scan.pause.as_ref()
    }

    pub fn lines_read(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines whose timestamps were rewritten
    pub fn modified_lines(&self) -> usize {
        self.lines.iter().filter(|l| l.decision.is_shifted()).count()
    }

    /// Number of timestamp lines left as-is because they precede the pause
    pub fn kept_lines(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.decision == LineDecision::Kept)
            .count()
    }

    pub fn output_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|l| l.output())
    }

    /// Render the output file content
    pub fn render(&self, line_ending: &str) -> String {
        join_lines(self.output_lines(), line_ending)
    }
}

// @struct: Gap detection followed by per-line shifting
#[derive(Debug, Clone, Copy)]
pub struct ShiftPipeline {
    detector: GapDetector,
    shifter: TimestampShifter,
}

impl ShiftPipeline {
    pub fn new(detector: GapDetector, shifter: TimestampShifter) -> Self {
        Self { detector, shifter }
    }

    pub fn detector(&self) -> &GapDetector {
        &self.detector
    }

    pub fn shifter(&self) -> &TimestampShifter {
        &self.shifter
    }

    /// Scan `lines` for the first long pause, then shift every eligible line
    pub fn process<'a>(&self, lines: &[&'a str]) -> ShiftOutcome<'a> {
        let scan = self.detector.scan(lines);
        let boundary = scan.shift_boundary();

        let lines = lines
            .iter()
            .enumerate()
            .map(|(line_index, &original)| ProcessedLine {
                line_index,
                original,
                decision: self.shifter.shift_line(original, boundary),
            })
            .collect();

        ShiftOutcome { scan, lines }
    }

    /// Process whole file content and render the output with `line_ending`
    pub fn process_content(&self, content: &str, line_ending: &str) -> String {
        let lines = split_lines(content);
        self.process(&lines).render(line_ending)
    }
}

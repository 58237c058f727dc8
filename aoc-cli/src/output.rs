//! Output formatting for run results

use aoc_harness::{FixtureSummary, Outcome, Reporter, SolutionRef, Verdict};
use chrono::TimeDelta;
use std::io::{self, Write};
use std::path::Path;

/// 256-colour palette indices
mod codes {
    pub const PASS: u8 = 2;
    pub const FAIL: u8 = 1;
    pub const UNCHECKED: u8 = 5;
    pub const TIMING: u8 = 4;
}

const RESET: &str = "\x1b[0m";

fn paint(text: &str, code: u8, color: bool) -> String {
    if color {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Prints run progress on stdout
///
/// In quiet mode only the answers are printed, one per line.
pub struct OutputFormatter {
    quiet: bool,
    color: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }
}

impl Reporter for OutputFormatter {
    fn fixture_started(&mut self, solution: &SolutionRef, path: &Path, records: usize) {
        if !self.quiet {
            println!("{}", render_header(solution, path, records));
        }
    }

    fn outcome(&mut self, outcome: &Outcome) {
        if self.quiet {
            println!("{}", outcome.answer);
        } else {
            println!("{}", render_outcome(outcome, self.color));
        }
    }

    fn summary(&mut self, solution: &SolutionRef, summary: &FixtureSummary) {
        if !self.quiet {
            println!("{}", render_summary(solution, summary, self.color));
        }
    }
}

/// Write a bare answer, without a trailing newline, and flush
pub fn write_answer(out: &mut dyn Write, answer: &str) -> io::Result<()> {
    out.write_all(answer.as_bytes())?;
    out.flush()
}

fn render_header(solution: &SolutionRef, path: &Path, records: usize) -> String {
    let noun = if records == 1 { "record" } else { "records" };
    format!(
        "Running {} on {} test {} from {}:",
        solution,
        records,
        noun,
        path.display()
    )
}

/// `test #1: ✔ 514579 (12µs)`
fn render_outcome(outcome: &Outcome, color: bool) -> String {
    let (mark, code) = match &outcome.verdict {
        Verdict::Pass => ("✔", codes::PASS),
        Verdict::Fail { .. } => ("✖", codes::FAIL),
        Verdict::Unchecked => ("?", codes::UNCHECKED),
    };
    let mut line = format!(
        "  {}: {} {}",
        outcome.source,
        paint(mark, code, color),
        paint(&outcome.answer, code, color)
    );
    if let Verdict::Fail { expected } = &outcome.verdict {
        line.push_str(&format!(" (expected: {})", expected));
    }
    let timing = format!("({})", format_duration(outcome.duration()));
    line.push(' ');
    line.push_str(&paint(&timing, codes::TIMING, color));
    line
}

fn render_summary(solution: &SolutionRef, summary: &FixtureSummary, color: bool) -> String {
    let mut counts = vec![
        paint(&format!("{} passed", summary.passed), codes::PASS, color),
        paint(
            &format!("{} failed", summary.failed),
            if summary.failed > 0 { codes::FAIL } else { codes::PASS },
            color,
        ),
    ];
    if summary.unchecked > 0 {
        counts.push(paint(
            &format!("{} unchecked", summary.unchecked),
            codes::UNCHECKED,
            color,
        ));
    }
    if summary.skipped > 0 {
        counts.push(format!("{} skipped", summary.skipped));
    }
    format!("{}: {}", solution, counts.join(", "))
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

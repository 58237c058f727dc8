//! Dispatching solution callables against fixtures or real input

use crate::error::{HarnessError, SolveError};
use crate::fixture::load_fixtures;
use crate::loader::load_input;
use crate::registry::SolutionRegistry;
use crate::shape::PuzzleInput;
use crate::solution::{Solution, SolutionRef};
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Options for a fixture run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Also run records that carry no expected answer for the part
    pub include_unchecked: bool,
}

/// Result of comparing an answer with the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail { expected: String },
    /// Nothing to compare against
    Unchecked,
}

/// Where the input of a run came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// 1-based record number within the fixture file
    Fixture(usize),
    Real,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Fixture(n) => write!(f, "test #{}", n),
            InputSource::Real => f.write_str("input"),
        }
    }
}

/// One invocation of a solution callable
#[derive(Debug, Clone)]
pub struct Outcome {
    pub solution: SolutionRef,
    pub source: InputSource,
    pub answer: String,
    pub verdict: Verdict,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Outcome {
    pub fn duration(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }
}

/// Aggregate counts of a fixture run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureSummary {
    pub passed: usize,
    pub failed: usize,
    pub unchecked: usize,
    /// Records without an expected answer that were not run
    pub skipped: usize,
}

impl FixtureSummary {
    /// No record produced a wrong answer
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Fail { .. } => self.failed += 1,
            Verdict::Unchecked => self.unchecked += 1,
        }
    }
}

/// Receives run progress as it happens
pub trait Reporter {
    /// A fixture file was loaded and is about to be run
    fn fixture_started(&mut self, _solution: &SolutionRef, _path: &Path, _records: usize) {}

    fn outcome(&mut self, outcome: &Outcome);

    /// All records of a fixture file have been evaluated
    fn summary(&mut self, _solution: &SolutionRef, _summary: &FixtureSummary) {}
}

/// Runs registered solutions
///
/// # Example
///
/// ```
/// use aoc_harness::{Outcome, Part, RegistryBuilder, Reporter, Runner, Solution, SolutionRef};
///
/// struct Print;
///
/// impl Reporter for Print {
///     fn outcome(&mut self, outcome: &Outcome) {
///         println!("{}: {}", outcome.solution, outcome.answer);
///     }
/// }
///
/// fn part_1(lines: &[&str]) -> Result<usize, String> {
///     Ok(lines.len())
/// }
///
/// let registry = RegistryBuilder::new()
///     .register(2023, 1, Part::One, Solution::lines(part_1))
///     .unwrap()
///     .build();
///
/// let outcome = Runner::new(&registry)
///     .run_input(SolutionRef::new(2023, 1, Part::One), "a\nb\n".to_string(), None, &mut Print)
///     .unwrap();
/// assert_eq!(outcome.answer, "2");
/// ```
pub struct Runner<'r> {
    registry: &'r SolutionRegistry,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r SolutionRegistry) -> Self {
        Self { registry }
    }

    /// Run a solution against every record of a fixture file
    ///
    /// Resolution happens before the file is read, so a missing solution is
    /// reported even when the fixture file is missing too. A wrong answer is
    /// counted and the remaining records still run; a callable error aborts.
    ///
    /// # Returns
    /// * `Ok(FixtureSummary)` - Every record was evaluated
    /// * `Err(HarnessError::Resolution)` - Nothing registered for `solution`
    /// * `Err(HarnessError::Load | HarnessError::Format)` - The fixture file is missing or malformed
    /// * `Err(HarnessError::Execution)` - The callable failed on a record
    pub fn run_fixtures(
        &self,
        solution_ref: SolutionRef,
        path: &Path,
        options: RunOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<FixtureSummary, HarnessError> {
        let solution = self.registry.resolve(&solution_ref)?;
        let fixtures = load_fixtures(path)?;
        reporter.fixture_started(&solution_ref, path, fixtures.len());

        let mut summary = FixtureSummary::default();
        for (index, fixture) in fixtures.into_iter().enumerate() {
            let source = InputSource::Fixture(index + 1);
            let expected = fixture.expected(solution_ref.part).map(str::to_owned);
            if expected.is_none() && !options.include_unchecked {
                debug!(solution = %solution_ref, %source, "no expected answer, skipping");
                summary.skipped += 1;
                continue;
            }

            let input = PuzzleInput::from_text(fixture.input, solution.shape());
            let outcome = invoke(solution_ref, solution, source, &input, expected)?;
            summary.record(&outcome.verdict);
            reporter.outcome(&outcome);
        }

        info!(
            solution = %solution_ref,
            passed = summary.passed,
            failed = summary.failed,
            unchecked = summary.unchecked,
            skipped = summary.skipped,
            "fixture run finished"
        );
        reporter.summary(&solution_ref, &summary);
        Ok(summary)
    }

    /// Run a solution once against real puzzle input
    ///
    /// `expected` is an answer accepted earlier; without one the outcome is
    /// unchecked.
    pub fn run_input(
        &self,
        solution_ref: SolutionRef,
        text: String,
        expected: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<Outcome, HarnessError> {
        let solution = self.registry.resolve(&solution_ref)?;
        let input = PuzzleInput::from_text(text, solution.shape());
        let expected = expected.map(str::to_owned);
        let outcome = invoke(solution_ref, solution, InputSource::Real, &input, expected)?;
        reporter.outcome(&outcome);
        Ok(outcome)
    }

    /// Run a solution once against an input file
    pub fn run_input_file(
        &self,
        solution_ref: SolutionRef,
        path: &Path,
        expected: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<Outcome, HarnessError> {
        let solution = self.registry.resolve(&solution_ref)?;
        let input = load_input(path, solution.shape())?;
        let expected = expected.map(str::to_owned);
        let outcome = invoke(solution_ref, solution, InputSource::Real, &input, expected)?;
        reporter.outcome(&outcome);
        Ok(outcome)
    }
}

fn invoke(
    solution_ref: SolutionRef,
    solution: &Solution,
    source: InputSource,
    input: &PuzzleInput,
    expected: Option<String>,
) -> Result<Outcome, HarnessError> {
    debug!(solution = %solution_ref, %source, shape = %solution.shape(), "invoking");
    let started_at = Utc::now();
    let answer = solution
        .call(input)
        .map_err(|source: SolveError| HarnessError::Execution {
            solution: solution_ref,
            source,
        })?;
    let finished_at = Utc::now();

    let verdict = match expected {
        None => Verdict::Unchecked,
        Some(expected) if expected == answer => Verdict::Pass,
        Some(expected) => Verdict::Fail { expected },
    };
    Ok(Outcome {
        solution: solution_ref,
        source,
        answer,
        verdict,
        started_at,
        finished_at,
    })
}

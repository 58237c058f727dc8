//! The `create`, `run` and `exec` actions

use crate::cache::InputCache;
use crate::cli::RunTarget;
use crate::config::{Config, session_from_env};
use crate::error::CliError;
use crate::exit_codes;
use crate::input::InputFetcher;
use aoc_harness::{
    HarnessError, ParameterShape, Part, PuzzleInput, Reporter, RunOptions, Runner, Scaffolded,
    SolutionRef, SolutionRegistry, fixture_path, load_input, scaffold,
};
use aoc_http_client::AocClient;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// How a command finished without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// A fixture record produced a wrong answer
    TestFailure,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => exit_codes::OK,
            Status::TestFailure => exit_codes::TEST_FAILURE,
        }
    }
}

/// Scaffold the module and fixture file of the configured day
pub fn create(config: &Config, offline: bool, shape: ParameterShape) -> Result<Scaffolded, CliError> {
    let title = if offline {
        None
    } else {
        match AocClient::new() {
            Ok(client) => lookup_title(&client, config.year, config.day),
            Err(e) => {
                warn!(error = %e, "no HTTP client, creating without a title");
                None
            }
        }
    };

    let created = scaffold(&config.layout(), config.year, config.day, shape, title.as_deref())?;
    if !config.quiet {
        println!("Created {}", created.module.display());
        println!("Created {}", created.fixture.display());
        if created.new_year {
            println!("Registered year_{:04}", config.year);
        }
    }
    Ok(created)
}

/// Puzzle title, or `None` with a warning when it cannot be fetched
fn lookup_title(client: &AocClient, year: u16, day: u8) -> Option<String> {
    let session = session_from_env();
    match client.get_title(year, day, session.as_ref().map(|s| s.as_str())) {
        Ok(title) => {
            debug!(year, day, %title, "found puzzle title");
            Some(title)
        }
        Err(e) => {
            warn!(year, day, error = %e, "could not fetch the puzzle title");
            None
        }
    }
}

/// What `run` should do
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub part: Part,
    pub target: RunTarget,
    pub include_unchecked: bool,
    pub file: Option<PathBuf>,
}

/// Run a part of the configured day against fixtures and/or real input
pub fn run(
    config: &Config,
    request: &RunRequest,
    reporter: &mut dyn Reporter,
) -> Result<Status, CliError> {
    let registry = aoc_solutions::registry()?;
    let client = AocClient::new()?;
    run_with_registry(&registry, config, request, client, session_from_env(), reporter)
}

fn run_with_registry(
    registry: &SolutionRegistry,
    config: &Config,
    request: &RunRequest,
    client: AocClient,
    session: Option<Zeroizing<String>>,
    reporter: &mut dyn Reporter,
) -> Result<Status, CliError> {
    let solution_ref = SolutionRef::new(config.year, config.day, request.part);
    // Fail on an unknown solution before touching fixtures or the network
    registry.resolve(&solution_ref).map_err(HarnessError::from)?;
    let runner = Runner::new(registry);
    let mut status = Status::Ok;

    if request.target.includes_tests() {
        let path = fixture_path(&config.fixtures_dir, config.year, config.day)
            .map_err(HarnessError::from)?;
        let options = RunOptions {
            include_unchecked: request.include_unchecked,
        };
        let summary = runner.run_fixtures(solution_ref, &path, options, reporter)?;
        if !summary.is_success() {
            status = Status::TestFailure;
        }
    }

    if request.target.includes_input() {
        let mut fetcher =
            InputFetcher::new(InputCache::new(config.cache_dir.clone()), client, session);
        match &request.file {
            Some(path) => {
                let expected = fetcher.known_answer(config.year, config.day, request.part);
                runner.run_input_file(solution_ref, path, expected.as_deref(), reporter)?;
            }
            None => {
                let text = fetcher.fetch(config.year, config.day)?;
                let expected = fetcher.known_answer(config.year, config.day, request.part);
                runner.run_input(solution_ref, text, expected.as_deref(), reporter)?;
            }
        }
    }

    Ok(status)
}

/// Call one solution and return its raw answer
///
/// Without a file the solution gets empty input.
pub fn exec(solution_ref: SolutionRef, file: Option<&Path>) -> Result<String, CliError> {
    let registry = aoc_solutions::registry()?;
    exec_with_registry(&registry, solution_ref, file)
}

fn exec_with_registry(
    registry: &SolutionRegistry,
    solution_ref: SolutionRef,
    file: Option<&Path>,
) -> Result<String, CliError> {
    let solution = registry.resolve(&solution_ref).map_err(HarnessError::from)?;
    eprintln!("## Calling {}", solution_ref);

    let input = match file {
        Some(path) => load_input(path, solution.shape()).map_err(HarnessError::from)?,
        None => PuzzleInput::from_text(String::new(), solution.shape()),
    };
    let answer = solution
        .call(&input)
        .map_err(|source| HarnessError::Execution {
            solution: solution_ref,
            source,
        })?;
    Ok(answer)
}

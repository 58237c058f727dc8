//! Error types for the harness

use crate::shape::ParameterShape;
use crate::solution::{Part, SolutionRef};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for reading puzzle input and fixture files
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for malformed fixture files
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A part marker showed up before the record-opening delimiter
    #[error("line {line}: part marker `{marker}` before any record-opening delimiter")]
    MarkerBeforeRecord { line: usize, marker: String },
    /// Text before the first delimiter line
    #[error("line {line}: expected a delimiter line made of `#` characters")]
    MissingDelimiter { line: usize },
    /// A marker line naming something other than `part_1` or `part_2`
    #[error("line {line}: unknown marker `{marker}`")]
    UnknownMarker { line: usize, marker: String },
    /// The same part marker twice within one record
    #[error("line {line}: `{part}` appears twice in the same record")]
    DuplicatePart { line: usize, part: Part },
    /// A record with expected output but no input block
    #[error("line {line}: record has expected output but no input")]
    MissingInput { line: usize },
    /// The YAML document could not be read as a list of records
    #[error("invalid YAML fixture: {0}")]
    Yaml(String),
    /// A YAML record field holding a list or mapping
    #[error("record {index}: field `{field}` must be a scalar")]
    NonScalar { index: usize, field: &'static str },
}

/// Error type for looking up a solution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// Nothing registered for the requested year, day and part
    #[error("No solution registered for {0}")]
    NotFound(SolutionRef),
}

/// Error type for running a solution callable
#[derive(Debug, Error)]
pub enum SolveError {
    /// The callable was handed input of the wrong shape
    #[error("Solution expects {expected} input, got {actual}")]
    ShapeMismatch {
        expected: ParameterShape,
        actual: ParameterShape,
    },
    /// The callable returned an error
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The callable panicked; holds the panic message
    #[error("Solution panicked: {0}")]
    Panicked(String),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a callable for a year, day and part that already has one
    #[error("Duplicate solution registration for {0}")]
    Duplicate(SolutionRef),
    /// Day outside 1..=25
    #[error("Invalid day {day} for year {year}")]
    InvalidDay { year: u16, day: u8 },
}

/// Error type for scaffolding a new solution module
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Refusing to overwrite an existing file
    #[error("{} already exists, not overwriting", .0.display())]
    AlreadyExists(PathBuf),
    /// Day outside 1..=25
    #[error("Invalid day {0}: must be between 1 and 25")]
    InvalidDay(u8),
    /// The registration block to extend could not be found
    #[error("Cannot find a `{macro_name}!` block in {}", path.display())]
    MissingBlock {
        path: PathBuf,
        macro_name: &'static str,
    },
    /// Filesystem failure
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when a part name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown part `{0}`, expected one of part_1, 1, a, part_2, 2, b")]
pub struct ParsePartError(pub String);

/// Error returned when a parameter shape name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown parameter shape `{0}`, expected `text` or `lines`")]
pub struct ParseShapeError(pub String);

/// Top-level error for a harness run
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Input or fixture file could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Fixture file is malformed
    #[error("Invalid fixture file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    /// No callable for the requested solution
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// The callable failed
    #[error("{solution} failed: {source}")]
    Execution {
        solution: SolutionRef,
        #[source]
        source: SolveError,
    },
}

//! Advent of Code Solution Harness
//!
//! Loads puzzle input, dispatches it to registered solution callables and
//! checks the answers against fixture files.
//!
//! # Overview
//!
//! This library provides:
//! - An explicit registry mapping (year, day, part) to a callable
//! - Callables that declare their input shape: raw text or a sequence of lines
//! - A fixture parser for two layouts (delimited text and YAML) with serializers
//! - A runner that compares answers against fixtures and reports each record
//! - Scaffolding for new solution modules
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{Day, Part, RegistryBuilder, Solution, SolutionRef, PuzzleInput};
//!
//! fn part_1(lines: &[&str]) -> Result<i32, std::num::ParseIntError> {
//!     lines.iter().map(|l| l.parse::<i32>()).sum()
//! }
//!
//! fn part_2(document: &str) -> Result<usize, String> {
//!     Ok(document.len())
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_day(2023, 1, Day::new().part_1(Solution::lines(part_1)).part_2(Solution::text(part_2)))
//!     .unwrap()
//!     .build();
//!
//! let solution = registry.resolve(&SolutionRef::new(2023, 1, Part::One)).unwrap();
//! let input = PuzzleInput::from_text("1\n2\n3\n".to_string(), solution.shape());
//! assert_eq!(solution.call(&input).unwrap(), "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Registration
//!
//! A solutions crate declares its modules with [`solutions!`] (one per year)
//! and [`years!`] (at the crate root). The macros generate `register` and
//! `register_all` functions that feed every day's [`Day`] into a
//! [`RegistryBuilder`]. Nothing is discovered at runtime.
//!
//! ## Line policy
//!
//! Line-shaped input follows [`str::lines`]: `\n` and `\r\n` both end a line, a
//! final terminator does not produce an empty trailing line, interior blank
//! lines are kept. Text-shaped input is handed over unchanged.

mod error;
pub mod fixture;
mod loader;
mod registry;
mod runner;
pub mod scaffold;
mod shape;
mod solution;

// Re-export public API
pub use error::{
    FormatError, HarnessError, LoadError, ParsePartError, ParseShapeError, RegistrationError,
    ResolutionError, ScaffoldError, SolveError,
};
pub use fixture::{Fixture, FixtureFormat, fixture_path, load_fixtures};
pub use loader::{load_input, read_input};
pub use registry::{DAYS_PER_YEAR, RegistryBuilder, SolutionRegistry};
pub use runner::{FixtureSummary, InputSource, Outcome, Reporter, RunOptions, Runner, Verdict};
pub use scaffold::{Layout, Scaffolded, scaffold};
pub use shape::{ParameterShape, PuzzleInput, split_lines};
pub use solution::{Day, Part, Solution, SolutionRef};

//! Advent of Code puzzle solutions with explicit registration
//!
//! Solutions are organized by year as `year_YYYY/day_DD.rs`. Each year module
//! lists its days in an [`aoc_harness::solutions!`] block and the years are
//! listed below; `aoc <year> <day> create` extends both blocks.
//!
//! Example inputs live next to the sources in `fixtures/yearYYYY/dayDD.yaml`
//! (or `.txt` in the delimited layout).

use aoc_harness::{RegistrationError, RegistryBuilder, SolutionRegistry};

pub mod utils;

aoc_harness::years! {
    year_2020,
    year_2023,
}

/// Fixture files of this crate
pub const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// Sources of this crate, where new solution modules are scaffolded
pub const SOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

/// Build a registry holding every solution in this crate
pub fn registry() -> Result<SolutionRegistry, RegistrationError> {
    Ok(register_all(RegistryBuilder::new())?.build())
}

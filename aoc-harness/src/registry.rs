//! Explicit registry mapping (year, day, part) to solution callables

use crate::error::{RegistrationError, ResolutionError};
use crate::solution::{Day, Part, Solution, SolutionRef};
use std::collections::BTreeMap;
use tracing::trace;

/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Builder for constructing a SolutionRegistry with fluent API
///
/// The registry is immutable once built. Every callable has to be registered
/// explicitly; registering the same (year, day, part) twice is an error.
///
/// # Example
///
/// ```
/// use aoc_harness::{Part, RegistryBuilder, Solution, SolutionRef};
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
/// assert!(registry.resolve(&SolutionRef::new(2023, 1, Part::One)).is_ok());
/// assert!(registry.resolve(&SolutionRef::new(2023, 1, Part::Two)).is_err());
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    solutions: BTreeMap<SolutionRef, Solution>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callable for a specific year, day and part
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the callable registered, ready for chaining
    /// * `Err(RegistrationError::Duplicate)` - Something is already registered there
    /// * `Err(RegistrationError::InvalidDay)` - Day outside 1..=25
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        part: Part,
        solution: Solution,
    ) -> Result<Self, RegistrationError> {
        if !(1..=DAYS_PER_YEAR).contains(&day) {
            return Err(RegistrationError::InvalidDay { year, day });
        }
        let key = SolutionRef::new(year, day, part);
        if self.solutions.contains_key(&key) {
            return Err(RegistrationError::Duplicate(key));
        }
        trace!(solution = %key, shape = %solution.shape(), "registered");
        self.solutions.insert(key, solution);
        Ok(self)
    }

    /// Register every part a solution module declares for its day
    pub fn register_day(mut self, year: u16, day: u8, parts: Day) -> Result<Self, RegistrationError> {
        for (part, solution) in parts.into_parts() {
            self = self.register(year, day, part, solution)?;
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry {
            solutions: self.solutions,
        }
    }
}

/// Immutable registry for resolving solution callables
#[derive(Debug)]
pub struct SolutionRegistry {
    solutions: BTreeMap<SolutionRef, Solution>,
}

impl SolutionRegistry {
    /// Look up the callable for a year, day and part
    pub fn resolve(&self, solution: &SolutionRef) -> Result<&Solution, ResolutionError> {
        self.solutions
            .get(solution)
            .ok_or(ResolutionError::NotFound(*solution))
    }

    /// Iterate over registered callables ordered by year, day and part
    pub fn iter(&self) -> impl Iterator<Item = (&SolutionRef, &Solution)> + '_ {
        self.solutions.iter()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Declare the day modules of one year and generate its `register` function
///
/// Each day module must expose `pub fn solution() -> aoc_harness::Day`.
///
/// ```ignore
/// aoc_harness::solutions! {
///     year = 2023;
///     day_01 = 1,
///     day_02 = 2,
/// }
/// ```
#[macro_export]
macro_rules! solutions {
    (year = $year:literal; $($module:ident = $day:literal),* $(,)?) => {
        $(pub mod $module;)*

        /// Register every day of this year
        pub fn register(
            builder: $crate::RegistryBuilder,
        ) -> ::std::result::Result<$crate::RegistryBuilder, $crate::RegistrationError> {
            $(let builder = builder.register_day($year, $day, $module::solution())?;)*
            Ok(builder)
        }
    };
}

/// Declare the year modules of a solutions crate and generate `register_all`
///
/// Each year module is expected to come from [`solutions!`].
///
/// ```ignore
/// aoc_harness::years! {
///     year_2020,
///     year_2023,
/// }
/// ```
#[macro_export]
macro_rules! years {
    ($($year:ident),* $(,)?) => {
        $(pub mod $year;)*

        /// Register every solution of every year
        pub fn register_all(
            builder: $crate::RegistryBuilder,
        ) -> ::std::result::Result<$crate::RegistryBuilder, $crate::RegistrationError> {
            $(let builder = $year::register(builder)?;)*
            Ok(builder)
        }
    };
}

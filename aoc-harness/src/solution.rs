//! Solution callables and their declared input shapes

use crate::error::{ParsePartError, SolveError};
use crate::shape::{ParameterShape, PuzzleInput};
use std::any::Any;
use std::error::Error;
use std::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

/// One of the two sub-problems of a puzzle day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts, in order
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// The part number (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    /// The callable name, `part_1` or `part_2`
    pub fn name(self) -> &'static str {
        match self {
            Part::One => "part_1",
            Part::Two => "part_2",
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Part {
    type Err = ParsePartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "part_1" | "1" | "a" => Ok(Part::One),
            "part_2" | "2" | "b" => Ok(Part::Two),
            other => Err(ParsePartError(other.to_string())),
        }
    }
}

/// Identifies one callable: a part of a puzzle day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolutionRef {
    pub year: u16,
    pub day: u8,
    pub part: Part,
}

impl SolutionRef {
    pub fn new(year: u16, day: u8, part: Part) -> Self {
        Self { year, day, part }
    }
}

impl Display for SolutionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02} {}", self.year, self.day, self.part)
    }
}

type SolveFn = Box<dyn Fn(&PuzzleInput) -> Result<String, SolveError> + Send + Sync>;

/// A solution callable together with the input shape it declares
///
/// The callable's return value is converted to its answer text with `Display`.
///
/// # Example
///
/// ```
/// use aoc_harness::{ParameterShape, PuzzleInput, Solution};
///
/// fn part_1(lines: &[&str]) -> Result<usize, std::convert::Infallible> {
///     Ok(lines.len())
/// }
///
/// let solution = Solution::lines(part_1);
/// assert_eq!(solution.shape(), ParameterShape::Lines);
///
/// let input = PuzzleInput::from_text("a\nb\nc\n".to_string(), solution.shape());
/// assert_eq!(solution.call(&input).unwrap(), "3");
/// ```
pub struct Solution {
    shape: ParameterShape,
    solve: SolveFn,
}

impl Solution {
    /// Wrap a callable that takes the raw input text
    pub fn text<F, T, E>(f: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        T: Display + 'static,
        E: Into<Box<dyn Error + Send + Sync>> + 'static,
    {
        Self {
            shape: ParameterShape::RawText,
            solve: Box::new(move |input| match input {
                PuzzleInput::Text(text) => answer(f(text)),
                other => Err(SolveError::ShapeMismatch {
                    expected: ParameterShape::RawText,
                    actual: other.shape(),
                }),
            }),
        }
    }

    /// Wrap a callable that takes the input as a sequence of lines
    pub fn lines<F, T, E>(f: F) -> Self
    where
        F: Fn(&[&str]) -> Result<T, E> + Send + Sync + 'static,
        T: Display + 'static,
        E: Into<Box<dyn Error + Send + Sync>> + 'static,
    {
        Self {
            shape: ParameterShape::Lines,
            solve: Box::new(move |input| match input {
                PuzzleInput::Lines(lines) => {
                    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
                    answer(f(&lines))
                }
                other => Err(SolveError::ShapeMismatch {
                    expected: ParameterShape::Lines,
                    actual: other.shape(),
                }),
            }),
        }
    }

    /// The input shape this callable declares
    pub fn shape(&self) -> ParameterShape {
        self.shape
    }

    /// Invoke the callable
    ///
    /// # Returns
    /// * `Ok(String)` - The answer as text
    /// * `Err(SolveError::ShapeMismatch)` - `input` was prepared for another shape
    /// * `Err(SolveError::Failed)` - The callable returned an error
    /// * `Err(SolveError::Panicked)` - The callable panicked
    pub fn call(&self, input: &PuzzleInput) -> Result<String, SolveError> {
        panic::catch_unwind(AssertUnwindSafe(|| (self.solve)(input)))
            .unwrap_or_else(|payload| Err(SolveError::Panicked(panic_message(payload.as_ref()))))
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solution")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn answer<T, E>(result: Result<T, E>) -> Result<String, SolveError>
where
    T: Display,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    result
        .map(|value| value.to_string())
        .map_err(|e| SolveError::Failed(e.into()))
}

/// The callables one solution module declares for its day
///
/// # Example
///
/// ```
/// use aoc_harness::{Day, Part, Solution};
///
/// fn part_1(document: &str) -> Result<usize, String> {
///     Ok(document.len())
/// }
///
/// let day = Day::new().part_1(Solution::text(part_1));
/// let parts: Vec<Part> = day.into_parts().map(|(part, _)| part).collect();
/// assert_eq!(parts, vec![Part::One]);
/// ```
#[derive(Debug, Default)]
pub struct Day {
    part_1: Option<Solution>,
    part_2: Option<Solution>,
}

impl Day {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part_1(mut self, solution: Solution) -> Self {
        self.part_1 = Some(solution);
        self
    }

    pub fn part_2(mut self, solution: Solution) -> Self {
        self.part_2 = Some(solution);
        self
    }

    /// The declared parts, in order
    pub fn into_parts(self) -> impl Iterator<Item = (Part, Solution)> {
        [(Part::One, self.part_1), (Part::Two, self.part_2)]
            .into_iter()
            .filter_map(|(part, solution)| solution.map(|s| (part, s)))
    }
}

//! Parameter shapes and shaped puzzle input

use crate::error::ParseShapeError;
use std::fmt;
use std::str::FromStr;

/// How a solution callable wants its input handed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterShape {
    /// The whole input as one string, unchanged
    RawText,
    /// The input split into lines
    #[default]
    Lines,
}

impl fmt::Display for ParameterShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterShape::RawText => f.write_str("text"),
            ParameterShape::Lines => f.write_str("lines"),
        }
    }
}

impl FromStr for ParameterShape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "raw" => Ok(ParameterShape::RawText),
            "lines" => Ok(ParameterShape::Lines),
            other => Err(ParseShapeError(other.to_string())),
        }
    }
}

/// Puzzle input prepared for one parameter shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleInput {
    Text(String),
    Lines(Vec<String>),
}

impl PuzzleInput {
    /// Shape raw text for a callable
    pub fn from_text(text: String, shape: ParameterShape) -> Self {
        match shape {
            ParameterShape::RawText => PuzzleInput::Text(text),
            ParameterShape::Lines => PuzzleInput::Lines(split_lines(&text)),
        }
    }

    pub fn shape(&self) -> ParameterShape {
        match self {
            PuzzleInput::Text(_) => ParameterShape::RawText,
            PuzzleInput::Lines(_) => ParameterShape::Lines,
        }
    }
}

/// Split text into lines.
///
/// `\n` and `\r\n` both end a line. A final line terminator does not produce a
/// trailing empty entry, empty lines in the middle are kept.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

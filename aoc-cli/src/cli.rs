//! CLI argument parsing using clap

use aoc_harness::{DAYS_PER_YEAR, ParameterShape, Part};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// First year Advent of Code ran
pub const FIRST_YEAR: u16 = 2015;

/// A year or day given as a number or as `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArg<T> {
    Today,
    Value(T),
}

/// Parse a year: `today` or 2015 onwards
pub fn parse_year(s: &str) -> Result<DateArg<u16>, String> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(DateArg::Today);
    }
    let year: u16 = s
        .parse()
        .map_err(|_| format!("`{}` is not a year or `today`", s))?;
    if year < FIRST_YEAR {
        return Err(format!("Advent of Code started in {}", FIRST_YEAR));
    }
    Ok(DateArg::Value(year))
}

/// Parse a day: `today` or 1-25
pub fn parse_day(s: &str) -> Result<DateArg<u8>, String> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(DateArg::Today);
    }
    match s.parse::<u8>() {
        Ok(day) if (1..=DAYS_PER_YEAR).contains(&day) => Ok(DateArg::Value(day)),
        _ => Err(format!("`{}` is not a day between 1 and 25 or `today`", s)),
    }
}

/// Which input a `run` uses
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum RunTarget {
    /// The fixture records of the day
    #[default]
    Test,
    /// The real puzzle input
    #[value(alias = "challenge")]
    Input,
    /// Fixtures first, then the real input
    All,
}

impl RunTarget {
    pub fn includes_tests(self) -> bool {
        matches!(self, RunTarget::Test | RunTarget::All)
    }

    pub fn includes_input(self) -> bool {
        matches!(self, RunTarget::Input | RunTarget::All)
    }
}

/// Flags shared by every action
#[derive(ClapArgs, Debug, Clone)]
pub struct GlobalArgs {
    /// Source directory of the solutions crate
    #[arg(long, global = true)]
    pub solutions_dir: Option<PathBuf>,

    /// Directory holding the yearYYYY fixture directories
    #[arg(long, global = true)]
    pub fixtures_dir: Option<PathBuf>,

    /// Cache directory for puzzle inputs
    #[arg(long, global = true, default_value = "~/.cache/aoc_harness")]
    pub cache_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Advent of Code solution manager
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Scaffold and run Advent of Code solutions", version)]
pub struct Args {
    /// Puzzle year, or `today`
    #[arg(value_parser = parse_year)]
    pub year: DateArg<u16>,

    /// Puzzle day, or `today`
    #[arg(value_parser = parse_day)]
    pub day: DateArg<u8>,

    #[command(subcommand)]
    pub action: Action,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Create the solution module and an empty fixture file
    Create {
        /// Do not look up the puzzle title online
        #[arg(long)]
        offline: bool,

        /// Input shape of the generated callables: `lines` or `text`
        #[arg(long, default_value = "lines")]
        shape: ParameterShape,
    },
    /// Run one part against fixtures and/or the real input
    Run {
        /// Part to run: part_1, 1, a, part_2, 2 or b
        part: Part,

        /// Input to run against
        #[arg(value_enum, default_value = "test")]
        target: RunTarget,

        /// Also run fixture records without an expected answer
        #[arg(long)]
        all_tests: bool,

        /// Read the real input from this file instead of the cache
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Call one solution callable and print its raw answer
#[derive(Parser, Debug)]
#[command(name = "aoc-exec", about = "Call a solution and print its answer", version)]
pub struct ExecArgs {
    /// Puzzle year
    #[arg(value_parser = parse_year)]
    pub year: DateArg<u16>,

    /// Puzzle day
    #[arg(value_parser = parse_day)]
    pub day: DateArg<u8>,

    /// Part to call: part_1, 1, a, part_2, 2 or b
    pub part: Part,

    /// Input file; the callable gets empty input without it
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// More diagnostics on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use proptest::prelude::*;

    #[test]
    fn test_command_definitions() {
        Args::command().debug_assert();
        ExecArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let args = Args::try_parse_from(["aoc", "2023", "7", "run", "b", "all", "--all-tests"]).unwrap();
        assert_eq!(args.year, DateArg::Value(2023));
        assert_eq!(args.day, DateArg::Value(7));
        match args.action {
            Action::Run {
                part,
                target,
                all_tests,
                file,
            } => {
                assert_eq!(part, Part::Two);
                assert_eq!(target, RunTarget::All);
                assert!(all_tests);
                assert!(file.is_none());
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_run_defaults_to_tests() {
        let args = Args::try_parse_from(["aoc", "today", "today", "run", "part_1"]).unwrap();
        assert_eq!(args.year, DateArg::Today);
        assert!(matches!(
            args.action,
            Action::Run {
                target: RunTarget::Test,
                ..
            }
        ));
    }

    #[test]
    fn test_challenge_alias() {
        let args = Args::try_parse_from(["aoc", "2023", "1", "run", "1", "challenge"]).unwrap();
        assert!(matches!(
            args.action,
            Action::Run {
                target: RunTarget::Input,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_create_with_global_flags() {
        let args =
            Args::try_parse_from(["aoc", "2023", "6", "create", "--shape", "text", "-q", "--offline"])
                .unwrap();
        assert!(args.global.quiet);
        assert!(matches!(
            args.action,
            Action::Create {
                offline: true,
                shape: ParameterShape::RawText
            }
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["aoc", "2023", "26", "run", "1"]).is_err());
        assert!(Args::try_parse_from(["aoc", "2014", "1", "run", "1"]).is_err());
        assert!(Args::try_parse_from(["aoc", "2023", "1", "run", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "2023", "1", "submit", "1"]).is_err());
    }

    #[test]
    fn test_parse_exec() {
        let args = ExecArgs::try_parse_from(["aoc-exec", "2020", "1", "a", "--file", "in.txt"]).unwrap();
        assert_eq!(args.part, Part::One);
        assert_eq!(args.file, Some(PathBuf::from("in.txt")));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        /// *For any* number, exactly 1 to 25 parse as a day
        #[test]
        fn prop_day_range(n in any::<u16>()) {
            let parsed = parse_day(&n.to_string());
            if (1..=25).contains(&n) {
                prop_assert_eq!(parsed, Ok(DateArg::Value(n as u8)));
            } else {
                prop_assert!(parsed.is_err());
            }
        }

        /// *For any* number, a year parses exactly from 2015 onwards
        #[test]
        fn prop_year_from_first_event(n in any::<u16>()) {
            let parsed = parse_year(&n.to_string());
            if n >= FIRST_YEAR {
                prop_assert_eq!(parsed, Ok(DateArg::Value(n)));
            } else {
                prop_assert!(parsed.is_err());
            }
        }

        /// *For any* casing, `today` is accepted for both year and day
        #[test]
        fn prop_today_any_case(word in "[tT][oO][dD][aA][yY]") {
            prop_assert_eq!(parse_year(&word), Ok(DateArg::Today));
            prop_assert_eq!(parse_day(&word), Ok(DateArg::Today));
        }
    }
}

//! Configuration resolution from CLI args

use crate::cli::{DateArg, GlobalArgs};
use crate::error::CliError;
use aoc_harness::{DAYS_PER_YEAR, Layout};
use chrono::{Datelike, NaiveDate};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

/// Environment variable holding the adventofcode.com session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub year: u16,
    pub day: u8,
    /// Source directory of the solutions crate
    pub solutions_dir: PathBuf,
    /// Directory holding the yearYYYY fixture directories
    pub fixtures_dir: PathBuf,
    /// Cache directory path, `~` expanded
    pub cache_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
    /// Emit ANSI colours on stdout
    pub color: bool,
}

impl Config {
    /// Build config from CLI args, resolving `today` against the local date
    pub fn from_args(
        year: DateArg<u16>,
        day: DateArg<u8>,
        global: &GlobalArgs,
    ) -> Result<Self, CliError> {
        let today = chrono::Local::now().date_naive();
        Self::resolve(year, day, global, today)
    }

    fn resolve(
        year: DateArg<u16>,
        day: DateArg<u8>,
        global: &GlobalArgs,
        today: NaiveDate,
    ) -> Result<Self, CliError> {
        let (year, day) = resolve_date(year, day, today)?;

        let config = Config {
            year,
            day,
            solutions_dir: global
                .solutions_dir
                .clone()
                .map(|dir| expand_tilde(&dir))
                .unwrap_or_else(|| PathBuf::from(aoc_solutions::SOURCE_DIR)),
            fixtures_dir: global
                .fixtures_dir
                .clone()
                .map(|dir| expand_tilde(&dir))
                .unwrap_or_else(|| PathBuf::from(aoc_solutions::FIXTURES_DIR)),
            cache_dir: expand_tilde(&global.cache_dir),
            quiet: global.quiet,
            color: should_colorize(global.no_color),
        };
        debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Where scaffolded files go
    pub fn layout(&self) -> Layout {
        Layout::new(&self.solutions_dir, &self.fixtures_dir)
    }
}

/// Turn `today` arguments into a concrete puzzle date
///
/// A `today` day is only valid from December 1 to 25.
pub fn resolve_date(
    year: DateArg<u16>,
    day: DateArg<u8>,
    today: NaiveDate,
) -> Result<(u16, u8), CliError> {
    let year = match year {
        DateArg::Value(year) => year,
        DateArg::Today => u16::try_from(today.year())
            .map_err(|_| CliError::Usage(format!("Cannot use {} as a puzzle year", today.year())))?,
    };

    let day = match day {
        DateArg::Value(day) => day,
        DateArg::Today => {
            // day() is 1..=31, so the cast is lossless
            let day = today.day() as u8;
            if today.month() != 12 || day > DAYS_PER_YEAR {
                return Err(CliError::Usage(format!(
                    "`today` is not a puzzle day ({}); only December 1 to 25 are",
                    today
                )));
            }
            day
        }
    };

    Ok((year, day))
}

/// Colour is off with `--no-color`, when `NO_COLOR` is set, or when stdout is
/// not a terminal
fn should_colorize(no_color: bool) -> bool {
    if no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Expand ~ to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Session key from the environment, if set and non-empty
pub fn session_from_env() -> Option<Zeroizing<String>> {
    std::env::var(SESSION_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .map(Zeroizing::new)
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session key: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    if s.is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(Zeroizing::new(s))
}

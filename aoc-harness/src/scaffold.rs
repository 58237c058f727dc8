//! Creating a new solution module and its fixture file from templates

use crate::error::ScaffoldError;
use crate::fixture::year_dir;
use crate::registry::DAYS_PER_YEAR;
use crate::shape::ParameterShape;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a solutions crate keeps its sources and fixtures
#[derive(Debug, Clone)]
pub struct Layout {
    /// The `src` directory holding `lib.rs` and the `year_YYYY` modules
    pub solutions_dir: PathBuf,
    /// The directory holding the `yearYYYY` fixture directories
    pub fixtures_dir: PathBuf,
}

impl Layout {
    pub fn new(solutions_dir: impl Into<PathBuf>, fixtures_dir: impl Into<PathBuf>) -> Self {
        Self {
            solutions_dir: solutions_dir.into(),
            fixtures_dir: fixtures_dir.into(),
        }
    }

    pub fn year_module_dir(&self, year: u16) -> PathBuf {
        self.solutions_dir.join(format!("year_{:04}", year))
    }

    pub fn day_module(&self, year: u16, day: u8) -> PathBuf {
        self.year_module_dir(year).join(format!("day_{:02}.rs", day))
    }

    pub fn fixture_file(&self, year: u16, day: u8) -> PathBuf {
        year_dir(&self.fixtures_dir, year).join(format!("day{:02}.yaml", day))
    }
}

/// Files written by [`scaffold`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub module: PathBuf,
    pub fixture: PathBuf,
    /// The year module did not exist and was created and registered
    pub new_year: bool,
}

/// Create the solution module and empty fixture file of a day and register it
///
/// Nothing is written when the module or the fixture file already exists, or
/// when the registration blocks cannot be found.
///
/// # Returns
/// * `Ok(Scaffolded)` - Paths of the new files
/// * `Err(ScaffoldError::AlreadyExists)` - The module or fixture file is already there
/// * `Err(ScaffoldError::InvalidDay)` - Day outside 1..=25
/// * `Err(ScaffoldError::MissingBlock)` - No `solutions!`/`years!` block to extend
pub fn scaffold(
    layout: &Layout,
    year: u16,
    day: u8,
    shape: ParameterShape,
    title: Option<&str>,
) -> Result<Scaffolded, ScaffoldError> {
    if !(1..=DAYS_PER_YEAR).contains(&day) {
        return Err(ScaffoldError::InvalidDay(day));
    }

    let module = layout.day_module(year, day);
    let fixture = layout.fixture_file(year, day);
    for path in [&module, &fixture] {
        if path.exists() {
            return Err(ScaffoldError::AlreadyExists(path.clone()));
        }
    }

    // Prepare every edit before touching the disk
    let module_dir = layout.year_module_dir(year);
    let year_mod = module_dir.join("mod.rs");
    let new_year = !year_mod.exists();
    let year_source = if new_year {
        year_module_template(year)
    } else {
        read(&year_mod)?
    };
    let year_source = register_entry(
        &year_source,
        &year_mod,
        "solutions",
        &format!("day_{:02}", day),
        &format!("day_{:02} = {},", day, day),
    )?;
    let lib_edit = if new_year {
        let lib = layout.solutions_dir.join("lib.rs");
        let source = read(&lib)?;
        let year_name = format!("year_{:04}", year);
        let edited = register_entry(&source, &lib, "years", &year_name, &format!("{},", year_name))?;
        Some((lib, edited))
    } else {
        None
    };

    create_dir(&module_dir)?;
    create_dir(&year_dir(&layout.fixtures_dir, year))?;
    create_new(&module, &day_module_template(year, day, shape, title))?;
    create_new(&fixture, &fixture_template(year, day))?;
    write(&year_mod, &year_source)?;
    if let Some((lib, edited)) = lib_edit {
        write(&lib, &edited)?;
    }

    info!(year, day, module = %module.display(), fixture = %fixture.display(), "scaffolded");
    Ok(Scaffolded {
        module,
        fixture,
        new_year,
    })
}

/// Add `entry` as the last line of the `name! { ... }` block in `source`
///
/// Leaves the source unchanged when a line of the block already starts with `key`.
fn register_entry(
    source: &str,
    path: &Path,
    name: &'static str,
    key: &str,
    entry: &str,
) -> Result<String, ScaffoldError> {
    let missing = || ScaffoldError::MissingBlock {
        path: path.to_path_buf(),
        macro_name: name,
    };
    let opener = format!("{}! {{", name);

    let mut lines: Vec<&str> = source.lines().collect();
    let open = lines
        .iter()
        .position(|line| line.trim_end().ends_with(&opener))
        .ok_or_else(missing)?;
    let close = open
        + lines[open..]
            .iter()
            .position(|line| line.trim() == "}")
            .ok_or_else(missing)?;

    let body = &lines[open + 1..close];
    if body.iter().any(|line| line.trim_start().starts_with(key)) {
        return Ok(source.to_string());
    }

    // The previous entry needs a separator before a new one can follow
    let mut fixed_last = None;
    if let Some(last) = (open + 1..close).rev().find(|&i| !lines[i].trim().is_empty()) {
        let trimmed = lines[last].trim_end();
        if !trimmed.ends_with([',', ';']) {
            fixed_last = Some((last, format!("{},", trimmed)));
        }
    }
    let indented = format!("    {}", entry);
    lines.insert(close, indented.as_str());

    let mut out = String::with_capacity(source.len() + indented.len() + 1);
    for (i, line) in lines.iter().enumerate() {
        match &fixed_last {
            Some((index, fixed)) if *index == i => out.push_str(fixed),
            _ => out.push_str(line),
        }
        out.push('\n');
    }
    Ok(out)
}

fn year_module_template(year: u16) -> String {
    format!("aoc_harness::solutions! {{\n    year = {};\n}}\n", year)
}

fn day_module_template(year: u16, day: u8, shape: ParameterShape, title: Option<&str>) -> String {
    let heading = match title {
        Some(title) => format!("//! {} day {}: {}", year, day, title),
        None => format!("//! {} day {}", year, day),
    };
    let (constructor, param) = match shape {
        ParameterShape::Lines => ("lines", "_lines: &[&str]"),
        ParameterShape::RawText => ("text", "_input: &str"),
    };
    format!(
        "{heading}

use aoc_harness::{{Day, Solution}};

pub fn solution() -> Day {{
    Day::new()
        .part_1(Solution::{constructor}(part_1))
        .part_2(Solution::{constructor}(part_2))
}}

fn part_1({param}) -> anyhow::Result<u64> {{
    anyhow::bail!(\"part 1 is not solved yet\")
}}

fn part_2({param}) -> anyhow::Result<u64> {{
    anyhow::bail!(\"part 2 is not solved yet\")
}}
"
    )
}

fn fixture_template(year: u16, day: u8) -> String {
    format!(
        "# Examples for {} day {}
#
# - input: |
#     first line
#     second line
#   part_1: answer
#   part_2: answer
",
        year, day
    )
}

fn read(path: &Path) -> Result<String, ScaffoldError> {
    fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn write(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|source| io_error(path, source))
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| io_error(path, source))
}

/// Write a file that must not exist yet
fn create_new(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists(path.to_path_buf()),
            _ => io_error(path, source),
        })?;
    file.write_all(content.as_bytes())
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

//! Fixture files: example inputs with the answers they should produce
//!
//! Two layouts are understood:
//!
//! - **Delimited** (`.txt`): the first line is a run of `#` characters that
//!   becomes the delimiter. A bare delimiter line closes the current record and
//!   opens the next one; `<delimiter> part_1` and `<delimiter> part_2` start the
//!   expected output of that part.
//!
//!   ```text
//!   ####
//!   1721
//!   979
//!   #### part_1
//!   514579
//!   ####
//!   ```
//!
//! - **YAML** (`.yaml`, `.yml`): a list of records with an `input` field and
//!   optional `part_1` / `part_2` fields.
//!
//!   ```yaml
//!   - input: |
//!       1721
//!       979
//!     part_1: 514579
//!   ```
//!
//! Files with another extension are sniffed: a first non-blank line made only
//! of `#` characters means delimited, anything else is read as YAML.

mod delimited;
mod yaml;

use crate::error::{FormatError, HarnessError, LoadError};
use crate::loader::read_input;
use crate::solution::Part;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions probed when looking up the fixture file of a day
pub const FIXTURE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "txt"];

/// One test case: an input and the answers it should produce
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fixture {
    pub input: String,
    pub part_1: Option<String>,
    pub part_2: Option<String>,
}

impl Fixture {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_expected(mut self, part: Part, expected: impl Into<String>) -> Self {
        *self.slot(part) = Some(expected.into());
        self
    }

    /// Expected answer for a part, if the record has one
    pub fn expected(&self, part: Part) -> Option<&str> {
        match part {
            Part::One => self.part_1.as_deref(),
            Part::Two => self.part_2.as_deref(),
        }
    }

    fn slot(&mut self, part: Part) -> &mut Option<String> {
        match part {
            Part::One => &mut self.part_1,
            Part::Two => &mut self.part_2,
        }
    }
}

/// Layout of a fixture file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Delimited,
    Yaml,
}

impl FixtureFormat {
    /// Pick the layout from the file extension, falling back to sniffing the content
    pub fn detect(path: &Path, content: &str) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") => FixtureFormat::Delimited,
            Some("yaml" | "yml") => FixtureFormat::Yaml,
            _ => Self::sniff(content),
        }
    }

    /// Pick the layout from the first non-blank line
    pub fn sniff(content: &str) -> Self {
        match content.lines().find(|line| !line.trim().is_empty()) {
            Some(line) if delimited::is_delimiter(line.trim_end()) => FixtureFormat::Delimited,
            _ => FixtureFormat::Yaml,
        }
    }
}

/// Parse fixture file content in the given layout
///
/// Parsing is all-or-nothing: a malformed file yields an error and no records.
pub fn parse_fixtures(content: &str, format: FixtureFormat) -> Result<Vec<Fixture>, FormatError> {
    match format {
        FixtureFormat::Delimited => delimited::parse(content),
        FixtureFormat::Yaml => yaml::parse(content),
    }
}

/// Read and parse a fixture file
pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>, HarnessError> {
    let content = read_input(path)?;
    let format = FixtureFormat::detect(path, &content);
    let fixtures = parse_fixtures(&content, format).map_err(|source| HarnessError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?format, records = fixtures.len(), "loaded fixtures");
    Ok(fixtures)
}

/// Serialize records in the delimited layout
pub fn to_delimited(fixtures: &[Fixture]) -> String {
    delimited::serialize(fixtures)
}

/// Serialize records in the YAML layout
pub fn to_yaml(fixtures: &[Fixture]) -> Result<String, FormatError> {
    yaml::serialize(fixtures)
}

/// Directory holding the fixture files of a year: `<dir>/yearYYYY`
pub fn year_dir(dir: &Path, year: u16) -> PathBuf {
    dir.join(format!("year{:04}", year))
}

/// Candidate fixture paths for a day, in lookup order
pub fn fixture_candidates(dir: &Path, year: u16, day: u8) -> impl Iterator<Item = PathBuf> {
    let base = year_dir(dir, year);
    FIXTURE_EXTENSIONS
        .into_iter()
        .map(move |ext| base.join(format!("day{:02}.{}", day, ext)))
}

/// Find the fixture file of a day
///
/// # Returns
/// * `Ok(PathBuf)` - The first existing `dayDD.yaml`, `dayDD.yml` or `dayDD.txt`
/// * `Err(LoadError::NotFound)` - None exist; the path reported is the `.yaml` one
pub fn fixture_path(dir: &Path, year: u16, day: u8) -> Result<PathBuf, LoadError> {
    fixture_candidates(dir, year, day)
        .find(|path| path.is_file())
        .ok_or_else(|| {
            LoadError::NotFound(year_dir(dir, year).join(format!("day{:02}.yaml", day)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            FixtureFormat::detect(Path::new("day01.txt"), "- input: x"),
            FixtureFormat::Delimited
        );
        assert_eq!(
            FixtureFormat::detect(Path::new("day01.yml"), "####\n"),
            FixtureFormat::Yaml
        );
    }

    #[test]
    fn test_sniff_layout() {
        assert_eq!(FixtureFormat::sniff("\n####\nabc\n"), FixtureFormat::Delimited);
        assert_eq!(FixtureFormat::sniff("- input: abc\n"), FixtureFormat::Yaml);
        // A YAML comment is a single `#`, not a delimiter
        assert_eq!(FixtureFormat::sniff("# notes\n- input: abc\n"), FixtureFormat::Yaml);
        assert_eq!(FixtureFormat::sniff(""), FixtureFormat::Yaml);
    }

    #[test]
    fn test_load_sniffed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day01.fixture");
        fs::write(&path, "####\nabc\n#### part_2\n3\n####\n").unwrap();

        let fixtures = load_fixtures(&path).unwrap();
        assert_eq!(fixtures, vec![Fixture::new("abc").with_expected(Part::Two, "3")]);
    }

    #[test]
    fn test_load_reports_path_on_format_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day01.txt");
        fs::write(&path, "#### part_1\n42\n").unwrap();

        match load_fixtures(&path) {
            Err(HarnessError::Format { path: p, source }) => {
                assert_eq!(p, path);
                assert!(matches!(source, FormatError::MarkerBeforeRecord { line: 1, .. }));
            }
            other => panic!("Expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_fixture_path_lookup_order() {
        let temp = TempDir::new().unwrap();
        let dir = year_dir(temp.path(), 2023);
        fs::create_dir_all(&dir).unwrap();

        assert!(matches!(
            fixture_path(temp.path(), 2023, 7),
            Err(LoadError::NotFound(p)) if p == dir.join("day07.yaml")
        ));

        fs::write(dir.join("day07.txt"), "").unwrap();
        assert_eq!(fixture_path(temp.path(), 2023, 7).unwrap(), dir.join("day07.txt"));

        fs::write(dir.join("day07.yaml"), "").unwrap();
        assert_eq!(fixture_path(temp.path(), 2023, 7).unwrap(), dir.join("day07.yaml"));
    }

    /// Blocks in the shape the delimited parser produces: single lines are
    /// trimmed, multi-line blocks keep their final newline
    fn block() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9.#]([a-z0-9 .#]{0,6}[a-z0-9.#])?", 1..5).prop_map(|lines| {
            if lines.len() == 1 {
                lines[0].clone()
            } else {
                format!("{}\n", lines.join("\n"))
            }
        })
    }

    fn fixture() -> impl Strategy<Value = Fixture> {
        (block(), prop::option::of("[0-9]{1,8}"), prop::option::of("[0-9a-z]{1,8}")).prop_map(
            |(input, part_1, part_2)| Fixture {
                input,
                part_1,
                part_2,
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_delimited_round_trip(fixtures in prop::collection::vec(fixture(), 0..5)) {
            let text = to_delimited(&fixtures);
            prop_assert_eq!(FixtureFormat::sniff(&text), FixtureFormat::Delimited);
            prop_assert_eq!(parse_fixtures(&text, FixtureFormat::Delimited).unwrap(), fixtures);
        }

        /// *For any* hand-written delimited file, including blocks with
        /// indentation and a last line without a terminator, serializing the
        /// parsed records and parsing again gives the same records.
        #[test]
        fn prop_delimited_reparse_is_stable(
            records in prop::collection::vec(
                (
                    prop::collection::vec(" {0,2}[a-z0-9.]{1,6} {0,2}", 1..4),
                    prop::option::of(" {0,2}[0-9]{1,6}"),
                ),
                1..4,
            ),
            terminated in any::<bool>(),
        ) {
            let mut text = String::from("####\n");
            for (i, (input, part_1)) in records.iter().enumerate() {
                if i > 0 {
                    text.push_str("####\n");
                }
                text.push_str(&input.join("\n"));
                text.push('\n');
                if let Some(expected) = part_1 {
                    text.push_str("#### part_1\n");
                    text.push_str(expected);
                    text.push('\n');
                }
            }
            if !terminated {
                text.pop();
            }

            let first = parse_fixtures(&text, FixtureFormat::Delimited).unwrap();
            prop_assert_eq!(first.len(), records.len());
            let again = parse_fixtures(&to_delimited(&first), FixtureFormat::Delimited).unwrap();
            prop_assert_eq!(again, first);
        }

        #[test]
        fn prop_yaml_round_trip(fixtures in prop::collection::vec(fixture(), 0..5)) {
            let text = to_yaml(&fixtures).unwrap();
            prop_assert_eq!(parse_fixtures(&text, FixtureFormat::Yaml).unwrap(), fixtures);
        }
    }
}

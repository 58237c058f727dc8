//! The `#`-delimited fixture layout

use super::Fixture;
use crate::error::FormatError;
use crate::solution::Part;

const MIN_DELIMITER: usize = 2;
const DEFAULT_DELIMITER: usize = 4;

/// A bare run of at least two `#`
pub(super) fn is_delimiter(line: &str) -> bool {
    line.len() >= MIN_DELIMITER && line.bytes().all(|b| b == b'#')
}

/// What a line means relative to the delimiter
enum Line<'a> {
    /// Bare delimiter: record boundary
    Boundary,
    /// Delimiter followed by a marker name
    Marker(&'a str),
    Content,
}

fn classify<'a>(line: &'a str, delimiter: &str) -> Line<'a> {
    let Some(rest) = line.trim_end().strip_prefix(delimiter) else {
        return Line::Content;
    };
    if rest.is_empty() {
        Line::Boundary
    } else if rest.starts_with(char::is_whitespace) {
        Line::Marker(rest.trim())
    } else {
        // e.g. a grid row such as `####.#` when the delimiter is `####`
        Line::Content
    }
}

/// Which block content lines are appended to
#[derive(Clone, Copy)]
enum Block {
    Input,
    Expected(Part),
}

/// A record being assembled
struct Record {
    /// Line of the delimiter that opened the record
    opened_at: usize,
    block: Block,
    input: Option<String>,
    part_1: Option<String>,
    part_2: Option<String>,
    seen: [bool; 2],
}

impl Record {
    fn new(opened_at: usize) -> Self {
        Self {
            opened_at,
            block: Block::Input,
            input: None,
            part_1: None,
            part_2: None,
            seen: [false; 2],
        }
    }

    fn start_part(&mut self, part: Part, line: usize) -> Result<(), FormatError> {
        let seen = &mut self.seen[usize::from(part.number() - 1)];
        if *seen {
            return Err(FormatError::DuplicatePart { line, part });
        }
        *seen = true;
        self.block = Block::Expected(part);
        Ok(())
    }

    fn push(&mut self, line: &str) {
        let slot = match self.block {
            Block::Input => &mut self.input,
            Block::Expected(Part::One) => &mut self.part_1,
            Block::Expected(Part::Two) => &mut self.part_2,
        };
        let block = slot.get_or_insert_with(String::new);
        block.push_str(line);
        // The last line of a file may lack its terminator
        if !line.ends_with('\n') {
            block.push('\n');
        }
    }

    /// `Ok(None)` for a record without any content
    fn finish(self) -> Result<Option<Fixture>, FormatError> {
        let Record {
            opened_at,
            input,
            part_1,
            part_2,
            ..
        } = self;
        match input {
            Some(input) => Ok(Some(Fixture {
                input: normalize(input),
                part_1: part_1.map(normalize),
                part_2: part_2.map(normalize),
            })),
            None if part_1.is_none() && part_2.is_none() => Ok(None),
            None => Err(FormatError::MissingInput { line: opened_at }),
        }
    }
}

/// Single-line blocks lose surrounding whitespace, multi-line blocks stay verbatim
fn normalize(block: String) -> String {
    if block.matches('\n').count() <= 1 {
        block.trim().to_string()
    } else {
        block
    }
}

fn marker_part(marker: &str, line: usize) -> Result<Part, FormatError> {
    match marker {
        "part_1" => Ok(Part::One),
        "part_2" => Ok(Part::Two),
        other => Err(FormatError::UnknownMarker {
            line,
            marker: other.to_string(),
        }),
    }
}

pub(super) fn parse(content: &str) -> Result<Vec<Fixture>, FormatError> {
    let mut lines = content
        .split_inclusive('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line));

    // The first non-blank line fixes the delimiter
    let (opened_at, delimiter) = loop {
        let Some((number, line)) = lines.next() else {
            return Ok(Vec::new());
        };
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        if is_delimiter(trimmed) {
            break (number, trimmed);
        }
        let hashes = trimmed.len() - trimmed.trim_start_matches('#').len();
        let rest = &trimmed[hashes..];
        if hashes >= MIN_DELIMITER && rest.starts_with(char::is_whitespace) {
            return Err(FormatError::MarkerBeforeRecord {
                line: number,
                marker: rest.trim().to_string(),
            });
        }
        return Err(FormatError::MissingDelimiter { line: number });
    };

    let mut fixtures = Vec::new();
    let mut record = Record::new(opened_at);
    for (number, line) in lines {
        match classify(line, delimiter) {
            Line::Boundary => {
                let finished = std::mem::replace(&mut record, Record::new(number));
                fixtures.extend(finished.finish()?);
            }
            Line::Marker(marker) => {
                let part = marker_part(marker, number)?;
                record.start_part(part, number)?;
            }
            Line::Content => record.push(line),
        }
    }
    // A final record without a closing delimiter is kept
    fixtures.extend(record.finish()?);

    Ok(fixtures)
}

pub(super) fn serialize(fixtures: &[Fixture]) -> String {
    let delimiter = pick_delimiter(fixtures);
    let mut out = format!("{}\n", delimiter);
    for fixture in fixtures {
        push_block(&mut out, &fixture.input);
        for part in Part::ALL {
            if let Some(expected) = fixture.expected(part) {
                out.push_str(&format!("{} {}\n", delimiter, part));
                push_block(&mut out, expected);
            }
        }
        out.push_str(&delimiter);
        out.push('\n');
    }
    out
}

fn push_block(out: &mut String, block: &str) {
    out.push_str(block);
    if !block.ends_with('\n') {
        out.push('\n');
    }
}

/// The shortest delimiter of at least four `#` that no content line could be mistaken for
fn pick_delimiter(fixtures: &[Fixture]) -> String {
    let blocks: Vec<&str> = fixtures
        .iter()
        .flat_map(|f| [Some(f.input.as_str()), f.expected(Part::One), f.expected(Part::Two)])
        .flatten()
        .collect();

    let mut delimiter = "#".repeat(DEFAULT_DELIMITER);
    while blocks
        .iter()
        .flat_map(|block| block.lines())
        .any(|line| !matches!(classify(line, &delimiter), Line::Content))
    {
        delimiter.push('#');
    }
    delimiter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let content = "####\n\
                       1721\n979\n366\n299\n675\n1456\n\
                       #### part_1\n\
                       514579\n\
                       #### part_2\n\
                       241861950\n\
                       ####\n\
                       1\n2\n\
                       ####\n";
        let fixtures = parse(content).unwrap();
        assert_eq!(
            fixtures,
            vec![
                Fixture::new("1721\n979\n366\n299\n675\n1456\n")
                    .with_expected(Part::One, "514579")
                    .with_expected(Part::Two, "241861950"),
                Fixture::new("1\n2\n"),
            ]
        );
    }

    #[test]
    fn test_single_line_blocks_trimmed() {
        let fixtures = parse("###\n  abc  \n### part_2\n 42\n###\n").unwrap();
        assert_eq!(fixtures, vec![Fixture::new("abc").with_expected(Part::Two, "42")]);
    }

    #[test]
    fn test_empty_records_skipped() {
        let fixtures = parse("\n####\n####\nx\n####\n####\n").unwrap();
        assert_eq!(fixtures, vec![Fixture::new("x")]);
    }

    #[test]
    fn test_unterminated_record_kept() {
        let fixtures = parse("####\nx\ny\n#### part_1\n7").unwrap();
        assert_eq!(fixtures, vec![Fixture::new("x\ny\n").with_expected(Part::One, "7")]);
    }

    #[test]
    fn test_unterminated_multi_line_block_kept_verbatim() {
        let first = parse("####\n  x\ny").unwrap();
        assert_eq!(first, vec![Fixture::new("  x\ny\n")]);
        assert_eq!(parse(&serialize(&first)).unwrap(), first);
    }

    #[test]
    fn test_grid_rows_are_content() {
        let fixtures = parse("####\n####.#\n#..###\n#### part_1\n3\n####\n").unwrap();
        assert_eq!(
            fixtures,
            vec![Fixture::new("####.#\n#..###\n").with_expected(Part::One, "3")]
        );
    }

    #[test]
    fn test_crlf_markers() {
        let fixtures = parse("####\r\nab\r\n#### part_1\r\n5\r\n####\r\n").unwrap();
        assert_eq!(fixtures, vec![Fixture::new("ab").with_expected(Part::One, "5")]);
    }

    #[test]
    fn test_marker_before_record() {
        assert_eq!(
            parse("\n#### part_1\n514579\n####\n"),
            Err(FormatError::MarkerBeforeRecord {
                line: 2,
                marker: "part_1".to_string()
            })
        );
    }

    #[test]
    fn test_text_before_delimiter() {
        assert_eq!(
            parse("1721\n####\n"),
            Err(FormatError::MissingDelimiter { line: 1 })
        );
    }

    #[test]
    fn test_unknown_marker() {
        assert_eq!(
            parse("####\nx\n#### part_3\n1\n####\n"),
            Err(FormatError::UnknownMarker {
                line: 3,
                marker: "part_3".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_marker() {
        assert_eq!(
            parse("####\nx\n#### part_1\n1\n#### part_1\n2\n####\n"),
            Err(FormatError::DuplicatePart {
                line: 5,
                part: Part::One
            })
        );
    }

    #[test]
    fn test_expected_without_input() {
        assert_eq!(
            parse("####\nx\n####\n#### part_1\n1\n####\n"),
            Err(FormatError::MissingInput { line: 3 })
        );
    }

    #[test]
    fn test_marker_without_content_is_absent() {
        let fixtures = parse("####\nx\n#### part_1\n####\n").unwrap();
        assert_eq!(fixtures, vec![Fixture::new("x")]);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(parse(""), Ok(Vec::new()));
        assert_eq!(parse("\n\n"), Ok(Vec::new()));
    }

    #[test]
    fn test_serialize_avoids_colliding_delimiter() {
        let fixtures = vec![Fixture::new("####\n#####\n").with_expected(Part::One, "2")];
        let text = serialize(&fixtures);
        assert!(text.starts_with("######\n"));
        assert_eq!(parse(&text).unwrap(), fixtures);
    }
}

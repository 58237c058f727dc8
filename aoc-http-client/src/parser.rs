//! HTML response parsing utilities

use crate::error::AocError;
use regex::Regex;
use scraper::{Html, Selector};
use std::cell::OnceCell;

/// Answers already accepted for a puzzle, as shown on its page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleAnswers {
    pub part_1: Option<String>,
    pub part_2: Option<String>,
}

/// Parser for AOC puzzle pages with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    heading_regex: OnceCell<Regex>,
    heading_selector: OnceCell<Selector>,
    paragraph_selector: OnceCell<Selector>,
    code_selector: OnceCell<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            heading_regex: OnceCell::new(),
            heading_selector: OnceCell::new(),
            paragraph_selector: OnceCell::new(),
            code_selector: OnceCell::new(),
        }
    }

    /// Get or compile the `--- Day N: Title ---` regex
    fn heading_regex(&self) -> &Regex {
        self.heading_regex
            .get_or_init(|| Regex::new(r"^\s*---\s*Day\s+\d+:\s*(.+?)\s*---\s*$").unwrap())
    }

    /// Get or compile the puzzle heading selector
    fn heading_selector(&self) -> &Selector {
        self.heading_selector
            .get_or_init(|| Selector::parse("article.day-desc > h2").unwrap())
    }

    /// Get or compile the selector for paragraphs below the puzzle articles
    fn paragraph_selector(&self) -> &Selector {
        self.paragraph_selector
            .get_or_init(|| Selector::parse("main > p").unwrap())
    }

    fn code_selector(&self) -> &Selector {
        self.code_selector.get_or_init(|| Selector::parse("code").unwrap())
    }

    /// Extract the accepted answers from a puzzle page
    ///
    /// A solved part is followed by `Your puzzle answer was <code>...</code>.`;
    /// the first such paragraph belongs to part one, the second to part two.
    /// Pages fetched without a session never show answers.
    pub fn extract_answers(&self, html: &str) -> PuzzleAnswers {
        let document = Html::parse_document(html);
        let mut answers = document
            .select(self.paragraph_selector())
            .filter(|p| {
                p.text()
                    .collect::<String>()
                    .trim_start()
                    .starts_with("Your puzzle answer was")
            })
            .filter_map(|p| p.select(self.code_selector()).next())
            .map(|code| code.text().collect::<String>().trim().to_string());

        PuzzleAnswers {
            part_1: answers.next(),
            part_2: answers.next(),
        }
    }

    /// Extract the title from a puzzle page
    ///
    /// Only the first puzzle article is considered; part two repeats a generic
    /// `--- Part Two ---` heading.
    pub fn extract_title(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);
        let heading = document
            .select(self.heading_selector())
            .next()
            .ok_or(AocError::MissingTitle)?;
        let text = heading.text().collect::<String>();

        let captures = self
            .heading_regex()
            .captures(&text)
            .ok_or(AocError::MissingTitle)?;
        Ok(captures[1].to_string())
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(headings: &[&str]) -> String {
        let articles: String = headings
            .iter()
            .map(|h| format!(r#"<article class="day-desc"><h2>{}</h2><p>...</p></article>"#, h))
            .collect();
        format!("<html><body><main>{}</main></body></html>", articles)
    }

    #[test]
    fn test_extract_title() {
        let parser = ResponseParser::new();
        let html = page(&["--- Day 7: Camel Cards ---", "--- Part Two ---"]);
        assert_eq!(parser.extract_title(&html).unwrap(), "Camel Cards");
    }

    #[test]
    fn test_heading_with_id_attribute() {
        let parser = ResponseParser::new();
        let html = r#"<html><body><main><article class="day-desc"><h2 id="part1">--- Day 1: Trebuchet?! ---</h2></article></main></body></html>"#;
        assert_eq!(parser.extract_title(html).unwrap(), "Trebuchet?!");
    }

    #[test]
    fn test_missing_article() {
        let parser = ResponseParser::new();
        let html = "<html><body><main><h2>--- Day 1: Orphan ---</h2></main></body></html>";
        assert!(matches!(parser.extract_title(html), Err(AocError::MissingTitle)));
    }

    #[test]
    fn test_unexpected_heading() {
        let parser = ResponseParser::new();
        let html = page(&["--- Part Two ---"]);
        assert!(matches!(parser.extract_title(&html), Err(AocError::MissingTitle)));
    }

    #[test]
    fn test_malformed_html() {
        let parser = ResponseParser::new();
        // scraper is lenient and will still parse this
        let html = r#"<html><body><article class="day-desc"><h2>--- Day 3: Gear Ratios ---"#;
        assert_eq!(parser.extract_title(html).unwrap(), "Gear Ratios");
    }

    const SOLVED_PAGE: &str = r#"<html><body><main>
<article class="day-desc"><h2>--- Day 1: Report Repair ---</h2><p>...</p></article>
<p>Your puzzle answer was <code>514579</code>.</p>
<article class="day-desc"><h2 id="part2">--- Part Two ---</h2><p>...</p></article>
<p>Your puzzle answer was <code>241861950</code>.</p>
<p class="day-success">Both parts of this puzzle are complete! They provide two gold stars: **</p>
</main></body></html>"#;

    #[test]
    fn test_extract_both_answers() {
        let parser = ResponseParser::new();
        assert_eq!(
            parser.extract_answers(SOLVED_PAGE),
            PuzzleAnswers {
                part_1: Some("514579".to_string()),
                part_2: Some("241861950".to_string()),
            }
        );
    }

    #[test]
    fn test_extract_first_answer_only() {
        let parser = ResponseParser::new();
        let html = r#"<main><article class="day-desc"><h2>--- Day 9: Mirage Maintenance ---</h2></article>
<p>Your puzzle answer was <code>114</code>.</p>
<article class="day-desc"><h2 id="part2">--- Part Two ---</h2></article>
<p>Answer: <form method="post"><input type="text" name="answer"/></form></p></main>"#;
        assert_eq!(
            parser.extract_answers(html),
            PuzzleAnswers {
                part_1: Some("114".to_string()),
                part_2: None,
            }
        );
    }

    #[test]
    fn test_unsolved_page_has_no_answers() {
        let parser = ResponseParser::new();
        let html = page(&["--- Day 7: Camel Cards ---"]);
        assert_eq!(parser.extract_answers(&html), PuzzleAnswers::default());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        /// *For any* day and title, the title inside the heading is recovered.
        #[test]
        fn prop_title_extraction(
            day in 1u8..=25,
            title in "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10}){0,3}",
        ) {
            let parser = ResponseParser::new();
            let html = page(&[&format!("--- Day {}: {} ---", day, title)]);
            prop_assert_eq!(parser.extract_title(&html).unwrap(), title);
        }
    }
}

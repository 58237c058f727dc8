//! Locating the real puzzle input: cache first, download on a miss

use crate::cache::InputCache;
use crate::config::prompt_session;
use crate::error::CliError;
use aoc_harness::Part;
use aoc_http_client::AocClient;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

/// Fetches puzzle input, downloading it once and caching it afterwards
pub struct InputFetcher {
    cache: InputCache,
    client: AocClient,
    session: Option<Zeroizing<String>>,
}

impl InputFetcher {
    /// Without a session, one is prompted for on the first download
    pub fn new(cache: InputCache, client: AocClient, session: Option<Zeroizing<String>>) -> Self {
        Self {
            cache,
            client,
            session,
        }
    }

    /// Get the input of a day
    ///
    /// A failed cache write is logged and does not fail the fetch.
    pub fn fetch(&mut self, year: u16, day: u8) -> Result<String, CliError> {
        if let Some(input) = self.cache.get(year, day)? {
            debug!(year, day, "input cache hit");
            return Ok(input);
        }
        debug!(year, day, "input cache miss");

        let session = match &self.session {
            Some(session) => session.clone(),
            None => {
                let session = prompt_session(&format!(
                    "Session token required to download the input of {}/{:02}",
                    year, day
                ))?;
                self.session = Some(session.clone());
                session
            }
        };

        let input = self.client.get_input(year, day, &session)?;
        info!(year, day, bytes = input.len(), "downloaded input");

        if let Err(e) = self.cache.put(year, day, &input) {
            warn!(year, day, error = %e, "failed to cache input");
        }
        Ok(input)
    }

    /// The answer already accepted for a part, used to check a real run
    ///
    /// Only asked for when a session is at hand; a failed lookup is logged
    /// and leaves the run unchecked.
    pub fn known_answer(&self, year: u16, day: u8, part: Part) -> Option<String> {
        let session = self.session.as_ref()?;
        match self.client.get_answers(year, day, session) {
            Ok(answers) => {
                let answer = match part {
                    Part::One => answers.part_1,
                    Part::Two => answers.part_2,
                };
                debug!(year, day, %part, found = answer.is_some(), "looked up accepted answer");
                answer
            }
            Err(e) => {
                warn!(year, day, error = %e, "could not fetch the accepted answer");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fetcher(server: &mockito::Server, dir: &std::path::Path) -> InputFetcher {
        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();
        InputFetcher::new(
            InputCache::new(dir.to_path_buf()),
            client,
            Some(Zeroizing::new("abc123".to_string())),
        )
    }

    #[test]
    fn test_cache_hit_skips_download() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/2020/day/1/input").expect(0).create();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2020_day01.txt"), "1721\n979\n").unwrap();

        let input = fetcher(&server, temp.path()).fetch(2020, 1).unwrap();
        assert_eq!(input, "1721\n979\n");
        mock.assert();
    }

    #[test]
    fn test_miss_downloads_and_caches() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2023/day/6/input")
            .match_header("cookie", "session=abc123")
            .with_status(200)
            .with_body("Time: 7 15 30\nDistance: 9 40 200\n")
            .expect(1)
            .create();
        let temp = TempDir::new().unwrap();
        let mut fetcher = fetcher(&server, temp.path());

        let first = fetcher.fetch(2023, 6).unwrap();
        let second = fetcher.fetch(2023, 6).unwrap();

        assert_eq!(first, "Time: 7 15 30\nDistance: 9 40 200\n");
        assert_eq!(first, second);
        assert_eq!(
            fs::read_to_string(temp.path().join("2023_day06.txt")).unwrap(),
            first
        );
        mock.assert();
    }

    #[test]
    fn test_download_failure_is_not_cached() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/2023/day/25/input")
            .with_status(404)
            .create();
        let temp = TempDir::new().unwrap();

        let result = fetcher(&server, temp.path()).fetch(2023, 25);
        assert!(matches!(result, Err(CliError::Http(_))));
        assert!(!temp.path().join("2023_day25.txt").exists());
    }

    #[test]
    fn test_known_answer_per_part() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2020/day/1")
            .match_header("cookie", "session=abc123")
            .with_status(200)
            .with_body(
                "<main><article><p>...</p></article>\
                 <p>Your puzzle answer was <code>514579</code>.</p></main>",
            )
            .expect(2)
            .create();
        let temp = TempDir::new().unwrap();
        let fetcher = fetcher(&server, temp.path());

        assert_eq!(
            fetcher.known_answer(2020, 1, Part::One).as_deref(),
            Some("514579")
        );
        assert_eq!(fetcher.known_answer(2020, 1, Part::Two), None);
        mock.assert();
    }

    #[test]
    fn test_known_answer_needs_session() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/2020/day/1").expect(0).create();
        let temp = TempDir::new().unwrap();
        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();
        let fetcher = InputFetcher::new(InputCache::new(temp.path().to_path_buf()), client, None);

        assert_eq!(fetcher.known_answer(2020, 1, Part::One), None);
        mock.assert();
    }

    #[test]
    fn test_known_answer_lookup_failure_is_none() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/2020/day/1").with_status(500).create();
        let temp = TempDir::new().unwrap();

        assert_eq!(fetcher(&server, temp.path()).known_answer(2020, 1, Part::One), None);
    }

    #[test]
    fn test_unwritable_cache_still_returns_input() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/2023/day/2/input")
            .with_status(200)
            .with_body("Game 1: 3 blue\n")
            .create();
        let temp = TempDir::new().unwrap();
        // A file where the cache directory should be
        let blocked = temp.path().join("cache");
        fs::write(&blocked, "").unwrap();

        let input = fetcher(&server, &blocked).fetch(2023, 2).unwrap();
        assert_eq!(input, "Game 1: 3 blue\n");
    }
}

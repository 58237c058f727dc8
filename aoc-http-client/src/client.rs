//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::{PuzzleAnswers, ResponseParser};
use reqwest::header::{COOKIE, HeaderValue};
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// The main AOC HTTP client
///
/// Fetches personal puzzle input, puzzle titles and accepted answers from the
/// Advent of Code website. Answers are never submitted.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let title = client.get_title(2023, 7, None)?;
/// let input = client.get_input(2023, 7, session)?;
/// println!("{}: {} bytes", title, input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration and no redirect policy
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a sensitive cookie header value from a session string
    ///
    /// The temporary `session=...` string is zeroized once the header is built.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut header_value = header_value
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()))?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }

    /// Build `<base>/<segments...>`
    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: reqwest::Url, session: Option<&str>) -> Result<String, AocError> {
        let mut request = self.client.get(url);
        if let Some(session) = session {
            request = request.header(COOKIE, Self::create_cookie_header(session)?);
        }
        let response = request.send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| AocError::Encoding)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// # Arguments
    ///
    /// * `year` - The AOC year (e.g., 2023)
    /// * `day` - The day number (1-25)
    /// * `session` - The session cookie value
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.url(&[&year.to_string(), "day", &day.to_string(), "input"])?;
        self.get(url, Some(session))
    }

    /// Fetch the title of a puzzle, e.g. `Camel Cards`
    ///
    /// Puzzle pages are public, so the session is optional.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not unlocked yet)
    /// * `AocError::MissingTitle` - The page has no `--- Day N: Title ---` heading
    pub fn get_title(&self, year: u16, day: u8, session: Option<&str>) -> Result<String, AocError> {
        let url = self.url(&[&year.to_string(), "day", &day.to_string()])?;
        let html = self.get(url, session)?;
        self.parser.extract_title(&html)
    }

    /// Fetch the answers already accepted for a puzzle
    ///
    /// Unsolved parts are `None`. The page only shows answers to the owner of
    /// `session`.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., a redirect for an expired session)
    pub fn get_answers(&self, year: u16, day: u8, session: &str) -> Result<PuzzleAnswers, AocError> {
        let url = self.url(&[&year.to_string(), "day", &day.to_string()])?;
        let html = self.get(url, Some(session))?;
        Ok(self.parser.extract_answers(&html))
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL and timeout
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL for the client
    ///
    /// Useful for testing with mock servers. The URL is parsed at builder time.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, etc.)
    ///
    /// The redirect policy is always overridden to `Policy::none()`.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        // A missing or expired session answers with a redirect to the front
        // page; surface it as a status error instead of following it
        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

//! AOC HTTP Client Library
//!
//! A thin adapter over the Advent of Code website: downloads personal puzzle
//! input, looks up puzzle titles and reads back answers that were already
//! accepted. Answers are never submitted.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Puzzle title lookup (`--- Day 7: Camel Cards ---` gives `Camel Cards`)
//! - Accepted answers of solved parts, for checking real-input runs
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2023, 1, session)?;
//! let title = client.get_title(2023, 1, Some(session))?;
//! println!("{}: {} lines", title, input.lines().count());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
pub use parser::PuzzleAnswers;

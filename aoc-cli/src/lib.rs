//! Command-line front end for the Advent of Code harness
//!
//! Two binaries share this library:
//! - `aoc <year> <day> create|run ...` scaffolds solution modules and runs them
//!   against fixtures or the real puzzle input
//! - `aoc-exec <year> <day> <part> [--file PATH]` calls one solution and prints
//!   its raw answer
//!
//! Answers and reports go to stdout, diagnostics to stderr.

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod input;
pub mod logging;
pub mod output;

//! 2023 day 6: Wait For It
//!
//! Holding the button for `b` of a race lasting `t` travels `(t - b) * b`, so
//! the winning holds are the integers strictly between the roots of
//! `b² - tb + d = 0` for record distance `d`.

use crate::utils::math::quadratic_roots;
use crate::utils::strings::ints;
use anyhow::{Context, ensure};
use aoc_harness::{Day, Solution};

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::text(part_2))
}

/// Number of integer hold times that beat the record
fn ways_to_win(time: u64, distance: u64) -> u64 {
    let Some((lo, hi)) = quadratic_roots(1.0, -(time as f64), distance as f64) else {
        return 0;
    };
    // Roots are exclusive bounds, even when they are integers
    let first = lo.floor() as i64 + 1;
    let last = hi.ceil() as i64 - 1;
    u64::try_from(last - first + 1).unwrap_or(0)
}

fn part_1(lines: &[&str]) -> anyhow::Result<u64> {
    ensure!(lines.len() >= 2, "expected a `Time:` and a `Distance:` line");
    let values = |line: &str| -> anyhow::Result<Vec<u64>> {
        let (_, numbers) = line.split_once(':').context("missing `:`")?;
        Ok(ints(numbers)?)
    };
    let times = values(lines[0])?;
    let distances = values(lines[1])?;
    ensure!(times.len() == distances.len(), "times and distances differ in length");

    Ok(times
        .into_iter()
        .zip(distances)
        .map(|(time, distance)| ways_to_win(time, distance))
        .product())
}

/// The spaces between digits were bad kerning: it is one long race
fn part_2(document: &str) -> anyhow::Result<u64> {
    let joined = document.replace(' ', "");
    let lines: Vec<&str> = joined.lines().collect();
    part_1(&lines)
}

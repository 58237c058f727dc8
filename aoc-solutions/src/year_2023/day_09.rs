//! 2023 day 9: Mirage Maintenance

use crate::utils::strings::ints;
use aoc_harness::{Day, Solution};
use itertools::Itertools;

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::lines(part_2))
}

/// Next value of the sequence, found through repeated differences
fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    let differences: Vec<i64> = values.iter().tuple_windows().map(|(a, b)| b - a).collect();
    values.last().copied().unwrap_or(0) + extrapolate(&differences)
}

fn histories(lines: &[&str]) -> anyhow::Result<Vec<Vec<i64>>> {
    Ok(lines
        .iter()
        .map(|line| ints::<i64>(line))
        .collect::<Result<Vec<_>, _>>()?)
}

fn part_1(lines: &[&str]) -> anyhow::Result<i64> {
    Ok(histories(lines)?.iter().map(|h| extrapolate(h)).sum())
}

/// Extrapolating backwards is extrapolating the reversed history
fn part_2(lines: &[&str]) -> anyhow::Result<i64> {
    Ok(histories(lines)?
        .into_iter()
        .map(|mut h| {
            h.reverse();
            extrapolate(&h)
        })
        .sum())
}

//! 2020 day 1: Report Repair

use anyhow::{Context, anyhow};
use aoc_harness::{Day, Solution};
use itertools::Itertools;

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::lines(part_2))
}

fn entries(lines: &[&str]) -> anyhow::Result<Vec<u64>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.trim()
                .parse::<u64>()
                .with_context(|| format!("line {}: not a number: {:?}", i + 1, line))
        })
        .collect()
}

/// Product of the `k` entries that sum to 2020
fn product_of(lines: &[&str], k: usize) -> anyhow::Result<u64> {
    entries(lines)?
        .into_iter()
        .combinations(k)
        .find(|combo| combo.iter().sum::<u64>() == 2020)
        .map(|combo| combo.iter().product())
        .ok_or_else(|| anyhow!("no {} entries sum to 2020", k))
}

fn part_1(lines: &[&str]) -> anyhow::Result<u64> {
    product_of(lines, 2)
}

fn part_2(lines: &[&str]) -> anyhow::Result<u64> {
    product_of(lines, 3)
}

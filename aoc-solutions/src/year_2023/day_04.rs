//! 2023 day 4: Scratchcards

use anyhow::Context;
use aoc_harness::{Day, Solution};
use std::collections::HashSet;

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::lines(part_2))
}

/// How many of the numbers we have are winning numbers, per card
fn matches(lines: &[&str]) -> anyhow::Result<Vec<usize>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| -> anyhow::Result<usize> {
            let (_, numbers) = line
                .split_once(':')
                .with_context(|| format!("line {}: missing `:`", i + 1))?;
            let (winning, have) = numbers
                .split_once('|')
                .with_context(|| format!("line {}: missing `|`", i + 1))?;
            let winning: HashSet<&str> = winning.split_whitespace().collect();
            Ok(have.split_whitespace().filter(|n| winning.contains(n)).count())
        })
        .collect()
}

fn part_1(lines: &[&str]) -> anyhow::Result<u64> {
    Ok(matches(lines)?
        .into_iter()
        .filter(|&n| n > 0)
        .map(|n| 1u64 << (n - 1))
        .sum())
}

/// Each card wins copies of the next `matches` cards
fn part_2(lines: &[&str]) -> anyhow::Result<u64> {
    let matches = matches(lines)?;
    let mut copies = vec![1u64; matches.len()];
    for (i, &n) in matches.iter().enumerate() {
        let end = (i + 1 + n).min(copies.len());
        for j in i + 1..end {
            copies[j] += copies[i];
        }
    }
    Ok(copies.iter().sum())
}

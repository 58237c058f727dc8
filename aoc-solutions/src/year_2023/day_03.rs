//! 2023 day 3: Gear Ratios

use aoc_harness::{Day, Solution};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::lines(part_2))
}

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// A part number and the cells around it
struct Number {
    value: u64,
    row: usize,
    start: usize,
    end: usize,
}

impl Number {
    /// Cells touching the number, diagonals included; may run past the grid edge
    fn neighbours(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = self.row.saturating_sub(1)..=self.row + 1;
        rows.flat_map(move |y| (self.start.saturating_sub(1)..=self.end).map(move |x| (y, x)))
    }
}

fn numbers(lines: &[&str]) -> anyhow::Result<Vec<Number>> {
    let mut numbers = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        for m in NUMBER.find_iter(line) {
            numbers.push(Number {
                value: m.as_str().parse()?,
                row,
                start: m.start(),
                end: m.end(),
            });
        }
    }
    Ok(numbers)
}

fn cell(lines: &[&str], (y, x): (usize, usize)) -> Option<u8> {
    lines.get(y)?.as_bytes().get(x).copied()
}

fn is_symbol(b: u8) -> bool {
    b != b'.' && !b.is_ascii_digit()
}

fn part_1(lines: &[&str]) -> anyhow::Result<u64> {
    Ok(numbers(lines)?
        .iter()
        .filter(|n| n.neighbours().any(|pos| cell(lines, pos).is_some_and(is_symbol)))
        .map(|n| n.value)
        .sum())
}

fn part_2(lines: &[&str]) -> anyhow::Result<u64> {
    let mut gears: HashMap<(usize, usize), Vec<u64>> = HashMap::new();
    for number in numbers(lines)? {
        for pos in number.neighbours() {
            if cell(lines, pos) == Some(b'*') {
                gears.entry(pos).or_default().push(number.value);
            }
        }
    }
    Ok(gears
        .values()
        .filter(|parts| parts.len() == 2)
        .map(|parts| parts.iter().product::<u64>())
        .sum())
}

//! 2023 day 1: Trebuchet?!

use anyhow::anyhow;
use aoc_harness::{Day, Solution};

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::lines(part_2))
}

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Lines without any digit do not count
fn part_1(lines: &[&str]) -> anyhow::Result<u32> {
    Ok(lines
        .iter()
        .filter_map(|line| {
            let mut digits = line.chars().filter_map(|c| c.to_digit(10));
            let first = digits.next()?;
            Some(first * 10 + digits.last().unwrap_or(first))
        })
        .sum())
}

/// Digits at each position, spelled-out ones included; words may overlap
fn digits_with_words(line: &str) -> impl Iterator<Item = u32> + '_ {
    (0..line.len()).filter_map(move |i| {
        let rest = line.get(i..)?;
        let c = rest.chars().next()?;
        c.to_digit(10).or_else(|| {
            WORDS
                .iter()
                .position(|word| rest.starts_with(word))
                .map(|n| n as u32 + 1)
        })
    })
}

fn part_2(lines: &[&str]) -> anyhow::Result<u32> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| -> anyhow::Result<u32> {
            let mut digits = digits_with_words(line);
            let first = digits
                .next()
                .ok_or_else(|| anyhow!("line {}: no digit in {:?}", i + 1, line))?;
            Ok(first * 10 + digits.last().unwrap_or(first))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_words() {
        assert_eq!(digits_with_words("eightwothree").collect::<Vec<_>>(), vec![8, 2, 3]);
        assert_eq!(part_2(&["oneight"]).unwrap(), 18);
    }

    #[test]
    fn test_line_without_digit() {
        assert_eq!(part_1(&["abc", "a1b"]).unwrap(), 11);
        assert!(part_2(&["abc"]).is_err());
    }
}

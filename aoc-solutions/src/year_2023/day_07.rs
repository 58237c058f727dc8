//! 2023 day 7: Camel Cards

use anyhow::{Context, anyhow};
use aoc_harness::{Day, Solution};
use std::collections::HashMap;

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::lines(part_2))
}

/// Card labels from weakest to strongest
const CARDS: &str = "23456789TJQKA";
/// With jokers, `J` becomes the weakest card
const CARDS_WITH_JOKERS: &str = "J23456789TQKA";

/// Sort key of a hand: the card counts in descending order (so `[5]` beats
/// `[4, 1]` beats `[3, 2]`), then the strength of each card in order
type Strength = (Vec<u8>, Vec<usize>);

fn strength(hand: &str, order: &str, jokers: bool) -> anyhow::Result<Strength> {
    let mut counts: HashMap<char, u8> = HashMap::new();
    for card in hand.chars() {
        *counts.entry(card).or_default() += 1;
    }
    let wild = if jokers { counts.remove(&'J').unwrap_or(0) } else { 0 };

    let mut kind: Vec<u8> = counts.into_values().collect();
    kind.sort_unstable_by(|a, b| b.cmp(a));
    // Jokers join the largest group; a hand of only jokers is five of a kind
    match kind.first_mut() {
        Some(largest) => *largest += wild,
        None => kind.push(wild),
    }

    let cards = hand
        .chars()
        .map(|card| order.find(card).ok_or_else(|| anyhow!("unknown card {:?}", card)))
        .collect::<anyhow::Result<_>>()?;
    Ok((kind, cards))
}

fn winnings(lines: &[&str], order: &str, jokers: bool) -> anyhow::Result<u64> {
    let mut hands = lines
        .iter()
        .enumerate()
        .map(|(i, line)| -> anyhow::Result<(Strength, u64)> {
            let (hand, bid) = line
                .split_once(' ')
                .with_context(|| format!("line {}: expected `<hand> <bid>`", i + 1))?;
            Ok((strength(hand, order, jokers)?, bid.trim().parse()?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    hands.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(hands
        .iter()
        .zip(1u64..)
        .map(|((_, bid), rank)| bid * rank)
        .sum())
}

fn part_1(lines: &[&str]) -> anyhow::Result<u64> {
    winnings(lines, CARDS, false)
}

fn part_2(lines: &[&str]) -> anyhow::Result<u64> {
    winnings(lines, CARDS_WITH_JOKERS, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_kinds_order() {
        let kind = |hand| strength(hand, CARDS, false).unwrap().0;
        assert!(kind("AAAAA") > kind("AA8AA"));
        assert!(kind("AA8AA") > kind("23332"));
        assert!(kind("23332") > kind("TTT98"));
        assert!(kind("TTT98") > kind("23432"));
        assert!(kind("23432") > kind("A23A4"));
        assert!(kind("A23A4") > kind("23456"));
    }

    #[test]
    fn test_jokers_join_largest_group() {
        assert_eq!(strength("QJJQ2", CARDS_WITH_JOKERS, true).unwrap().0, vec![4, 1]);
        assert_eq!(strength("JJJJJ", CARDS_WITH_JOKERS, true).unwrap().0, vec![5]);
    }

    #[test]
    fn test_unknown_card() {
        assert!(strength("AAAAX", CARDS, false).is_err());
    }
}

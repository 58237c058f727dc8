//! 2023 day 2: Cube Conundrum

use anyhow::{Context, bail};
use aoc_harness::{Day, Solution};

pub fn solution() -> Day {
    Day::new()
        .part_1(Solution::lines(part_1))
        .part_2(Solution::lines(part_2))
}

/// Cubes of each colour shown in one handful
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }
}

struct Game {
    id: u32,
    handfuls: Vec<Cubes>,
}

/// `Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green`
fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (header, sets) = line.split_once(": ").context("missing `: `")?;
    let id = header
        .strip_prefix("Game ")
        .context("missing `Game ` prefix")?
        .parse()?;

    let handfuls = sets
        .split("; ")
        .map(|set| {
            set.split(", ").try_fold(Cubes::default(), |mut cubes, item| -> anyhow::Result<Cubes> {
                let (count, colour) = item.split_once(' ').context("expected `<count> <colour>`")?;
                let count: u32 = count.parse()?;
                match colour {
                    "red" => cubes.red += count,
                    "green" => cubes.green += count,
                    "blue" => cubes.blue += count,
                    other => bail!("unknown colour {:?}", other),
                }
                Ok(cubes)
            })
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(Game { id, handfuls })
}

fn games(lines: &[&str]) -> anyhow::Result<Vec<Game>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_game(line).with_context(|| format!("line {}", i + 1)))
        .collect()
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

fn part_1(lines: &[&str]) -> anyhow::Result<u32> {
    Ok(games(lines)?
        .iter()
        .filter(|game| game.handfuls.iter().all(|h| h.fits_in(BAG)))
        .map(|game| game.id)
        .sum())
}

fn part_2(lines: &[&str]) -> anyhow::Result<u32> {
    Ok(games(lines)?
        .iter()
        .map(|game| {
            let least = game.handfuls.iter().fold(Cubes::default(), |acc, &h| acc.max(h));
            least.red * least.green * least.blue
        })
        .sum())
}

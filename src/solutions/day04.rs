use std::collections::HashSet;

use aoc_support::grid::{Coord, adjacent_8, parse_coords_char};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle(
    title = "Day 4: Printing Department",
    parser = PaperRolls,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2025<4> {}

/*
Input is a map of the printing department, with `@` marking a roll of paper and `.` empty floor.

A forklift can access a roll if fewer than four of the eight positions around it hold rolls.
*/

const ACCESS_THRESHOLD: usize = 4;

struct PaperRolls(HashSet<Coord>);

impl ParseData for PaperRolls {
    fn parse(input: &str) -> DynamicResult<Self> {
        let rolls = parse_coords_char(input)?
            .into_iter()
            .filter_map(|(coord, c)| (c == '@').then_some(coord))
            .collect();
        Ok(Self(rolls))
    }
}

/// The rolls a forklift can reach right now.
fn accessible(rolls: &HashSet<Coord>) -> Vec<Coord> {
    rolls
        .iter()
        .copied()
        .filter(|&roll| {
            adjacent_8(roll)
                .filter(|neighbour| rolls.contains(neighbour))
                .count()
                < ACCESS_THRESHOLD
        })
        .collect()
}

/*
For part 1, count the rolls a forklift can access.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = PaperRolls;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(accessible(&input.0).len())
    }
}

/*
For part 2, accessible rolls are removed, which may make more rolls accessible. Keep removing until
no roll is accessible and count how many were removed in total.
*/

impl Solution<PartTwo> for Day04 {
    type Input = PaperRolls;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut rolls = input.0.clone();
        let mut removed = 0;
        loop {
            let to_remove = accessible(&rolls);
            if to_remove.is_empty() {
                break;
            }
            removed += to_remove.len();
            for roll in to_remove {
                rolls.remove(&roll);
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = PaperRolls::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 13);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = PaperRolls::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 43);
        Ok(())
    }

    #[test]
    fn isolated_roll_is_accessible() -> DynamicResult<()> {
        let parsed = PaperRolls::parse("...\n.@.\n...\n")?;
        assert_eq!(<Day04 as Solution<PartOne>>::solve(&parsed)?, 1);
        assert_eq!(<Day04 as Solution<PartTwo>>::solve(&parsed)?, 1);
        Ok(())
    }
}

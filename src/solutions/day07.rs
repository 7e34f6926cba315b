use std::collections::{HashMap, HashSet};

use aoc_support::grid::{Coord, Grid};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 7: Laboratories",
    parser = Manifold,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2025<7> {}

/*
Input is a diagram of a tachyon manifold. A tachyon beam enters at `S` and moves downward. Empty
space is `.` and a splitter is `^`.

A beam reaching a splitter stops, and two new beams continue downward from the positions directly
left and right of the splitter. Beams that end up in the same position merge.
*/

#[derive(Error, Debug)]
#[error("manifold has no beam entry 'S'")]
struct MissingEntry;

struct Manifold {
    entry_column: i32,
    /// Columns of the splitters, per row below the entry.
    splitter_rows: Vec<HashSet<i32>>,
}

impl ParseData for Manifold {
    fn parse(input: &str) -> DynamicResult<Self> {
        let grid = Grid::from_chars(input)?;
        let entry = grid.find(|&c| c == 'S').ok_or(MissingEntry)?;
        let splitter_rows = (entry.y + 1..grid.height())
            .map(|y| {
                (0..grid.width())
                    .filter(|&x| grid.get(Coord::new(x, y)) == Some(&'^'))
                    .collect()
            })
            .collect();
        Ok(Self {
            entry_column: entry.x,
            splitter_rows,
        })
    }
}

/*
For part 1, count how many times a beam is split.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Manifold;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut beams = HashSet::from([input.entry_column]);
        let mut splits = 0;
        for splitters in &input.splitter_rows {
            let mut next_beams = HashSet::with_capacity(beams.len() * 2);
            for beam in beams {
                if splitters.contains(&beam) {
                    splits += 1;
                    next_beams.insert(beam - 1);
                    next_beams.insert(beam + 1);
                } else {
                    next_beams.insert(beam);
                }
            }
            beams = next_beams;
        }
        Ok(splits)
    }
}

/*
For part 2, a single tachyon particle is sent instead, which takes both paths at every splitter by
splitting time itself. Count the timelines the particle ends up on.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Manifold;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut timelines: HashMap<i32, u64> = HashMap::from([(input.entry_column, 1)]);
        for splitters in &input.splitter_rows {
            let mut next_timelines: HashMap<i32, u64> = HashMap::new();
            for (column, count) in timelines {
                let targets = if splitters.contains(&column) {
                    vec![column - 1, column + 1]
                } else {
                    vec![column]
                };
                for target in targets {
                    let entry = next_timelines.entry(target).or_default();
                    *entry = entry.checked_add(count).ok_or(Overflow("timelines"))?;
                }
            }
            timelines = next_timelines;
        }
        Ok(timelines
            .into_values()
            .checked_sum()
            .ok_or(Overflow("total timelines"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 21);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 40);
        Ok(())
    }

    #[test]
    fn missed_splitters_do_not_count() -> DynamicResult<()> {
        let parsed = Manifold::parse("..S..\n.....\n..^..\n^....\n")?;
        assert_eq!(<Day07 as Solution<PartOne>>::solve(&parsed)?, 1);
        assert_eq!(<Day07 as Solution<PartTwo>>::solve(&parsed)?, 2);
        Ok(())
    }

    #[test]
    fn missing_entry_is_rejected() {
        assert!(Manifold::parse("...\n.^.\n").is_err());
    }
}

use std::collections::HashSet;
use std::ops::RangeInclusive;

use aoc_support::parsing::{parse_input_lines, parse_with_context};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 5: Cafeteria",
    parser = Inventory,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2025<5> {}

/*
Input is the cafeteria's inventory database: a block of fresh ingredient ID ranges (`3-5`, both ends
inclusive), a blank line, then a block of available ingredient IDs, one per line.

Ranges can overlap. An ID is fresh if it is inside any range.
*/

#[derive(Error, Debug)]
enum ParseInventoryError {
    #[error("inventory has no blank line between ranges and IDs")]
    MissingSeparator,

    #[error("range is not formatted as 'first-last': {0:?}")]
    InvalidRange(String),

    #[error("range {first}-{last} ends before it starts")]
    ReversedRange { first: u64, last: u64 },
}

struct Inventory {
    fresh_ranges: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

impl ParseData for Inventory {
    fn parse(input: &str) -> DynamicResult<Self> {
        let input = input.replace("\r\n", "\n");
        let (ranges_block, ids_block) = input
            .split_once("\n\n")
            .ok_or(ParseInventoryError::MissingSeparator)?;

        let fresh_ranges = parse_input_lines(ranges_block, |_, line| -> DynamicResult<_> {
            let (first, last) = line
                .split_once('-')
                .ok_or_else(|| ParseInventoryError::InvalidRange(line.to_string()))?;
            let (first, last) = (parse_with_context(first)?, parse_with_context(last)?);
            if last < first {
                return Err(ParseInventoryError::ReversedRange { first, last }.into());
            }
            Ok(first..=last)
        })
        .collect::<Result<_, _>>()?;

        let available = parse_input_lines(ids_block, |_, line| -> DynamicResult<u64> {
            Ok(parse_with_context(line)?)
        })
        .collect::<Result<_, _>>()?;

        Ok(Self {
            fresh_ranges,
            available,
        })
    }
}

impl Inventory {
    fn is_fresh(&self, id: u64) -> bool {
        self.fresh_ranges.iter().any(|range| range.contains(&id))
    }
}

/// Merge ranges into sorted, disjoint ranges. Ranges that only touch are merged too.
fn merge_ranges(ranges: &[RangeInclusive<u64>]) -> Vec<RangeInclusive<u64>> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|range| (*range.start(), *range.end()));

    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut()
            && *range.start() <= last.end().saturating_add(1)
        {
            let end = (*last.end()).max(*range.end());
            *last = *last.start()..=end;
        } else {
            merged.push(range);
        }
    }
    merged
}

/*
For part 1, count how many of the available ingredient IDs are fresh. An ID listed more than once
counts once.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = Inventory;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let distinct: HashSet<u64> = input.available.iter().copied().collect();
        Ok(distinct.into_iter().filter(|&id| input.is_fresh(id)).count())
    }
}

/*
For part 2, ignore the available IDs and count every ID the fresh ranges consider fresh.
*/

impl Solution<PartTwo> for Day05 {
    type Input = Inventory;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let lengths = merge_ranges(&input.fresh_ranges)
            .into_iter()
            .map(|range| {
                range
                    .end()
                    .checked_sub(*range.start())
                    .and_then(|span| span.checked_add(1))
                    .ok_or(Overflow("length of fresh range"))
            })
            .collect::<Result<Vec<u64>, _>>()?;
        let count = lengths
            .into_iter()
            .checked_sum()
            .ok_or(Overflow("count of fresh IDs"))?;
        Ok(count)
    }
}

use std::ops::RangeInclusive;

use aoc_support::parsing::parse_with_context;
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 2: Gift Shop",
    parser = IdRanges,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2025<2> {}

/*
Input is a comma separated list of product ID ranges, `first-last` inclusive. The list may wrap
over several lines and end with a trailing comma.
*/

#[derive(thiserror::Error, Debug)]
#[error("range is not formatted as 'first-last': {0:?}")]
struct InvalidRange(String);

struct IdRanges(Vec<RangeInclusive<u64>>);

impl ParseData for IdRanges {
    fn parse(input: &str) -> DynamicResult<Self> {
        let ranges = input
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| -> DynamicResult<_> {
                let (first, last) = item
                    .split_once('-')
                    .ok_or_else(|| InvalidRange(item.to_string()))?;
                Ok(parse_with_context(first)?..=parse_with_context(last)?)
            })
            .collect::<Result<_, _>>()?;
        Ok(Self(ranges))
    }
}

/// How often a digit block must repeat for an ID to be invalid.
#[derive(Debug, Clone, Copy)]
enum Repetition {
    Twice,
    AtLeastTwice,
}

impl Repetition {
    fn allows(self, repeats: usize) -> bool {
        match self {
            Self::Twice => repeats == 2,
            Self::AtLeastTwice => repeats >= 2,
        }
    }
}

/// Determine if the ID's digits are one block repeated as often as `repetition` requires.
fn is_repeated_block(id: u64, repetition: Repetition) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    (1..=len / 2)
        .filter(|block_len| len % block_len == 0 && repetition.allows(len / block_len))
        .any(|block_len| digits == digits[..block_len].repeat(len / block_len))
}

fn sum_invalid_ids(ranges: &IdRanges, repetition: Repetition) -> DynamicResult<u64> {
    let sum = ranges
        .0
        .iter()
        .flat_map(Clone::clone)
        .filter(|&id| is_repeated_block(id, repetition))
        .checked_sum()
        .ok_or(Overflow("sum of invalid IDs"))?;
    Ok(sum)
}

/*
For part 1, an invalid ID is some sequence of digits repeated exactly twice, like `6464` or
`123123`. Sum the invalid IDs within all ranges.
*/

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_invalid_ids(input, Repetition::Twice)
    }
}

/*
For part 2, a sequence repeated at least twice is invalid, so `123123123` and `1111111` count too.
*/

impl Solution<PartTwo> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_invalid_ids(input, Repetition::AtLeastTwice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1_227_775_554);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4_174_379_265);
        Ok(())
    }

    #[test]
    fn repeated_blocks() {
        assert!(is_repeated_block(6464, Repetition::Twice));
        assert!(!is_repeated_block(111, Repetition::Twice));
        assert!(is_repeated_block(111, Repetition::AtLeastTwice));
        assert!(is_repeated_block(824_824_824, Repetition::AtLeastTwice));
        assert!(!is_repeated_block(101, Repetition::AtLeastTwice));
        assert!(!is_repeated_block(7, Repetition::AtLeastTwice));
    }

    #[test]
    fn malformed_range_is_rejected() {
        assert!(IdRanges::parse("11-22,95").is_err());
    }
}

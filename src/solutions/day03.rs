use aoc_support::parsing::parse_input_lines;
use aoc_support::runner::puzzle;
use aoc_support::{DynamicError, DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 3: Lobby",
    parser = BatteryBanks,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2025<3> {}

/*
Input is one bank of batteries per line. Each battery is a digit from 1 to 9 giving its joltage.

Turning on some batteries of a bank produces a joltage reading of their digits in bank order, e.g.
turning on the `4` and `7` of `14327` reads 47. Batteries cannot be rearranged.
*/

#[derive(Error, Debug)]
enum ParseBankError {
    #[error("battery is not a digit: {0:?}")]
    NotADigit(char),
}

struct BatteryBanks(Vec<Vec<u8>>);

impl ParseData for BatteryBanks {
    fn parse(input: &str) -> DynamicResult<Self> {
        let banks = parse_input_lines(input, |_, line| -> DynamicResult<Vec<u8>> {
            line.chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .ok_or_else(|| DynamicError::from(ParseBankError::NotADigit(c)))
                })
                .collect()
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(banks))
    }
}

/// The largest joltage reading from turning on exactly `count` batteries of the bank.
///
/// Greedily picks each next digit as the largest (earliest on ties) that still leaves enough
/// batteries after it for the remaining digits.
fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }

    let mut joltage: u64 = 0;
    let mut start = 0;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, digit) = window
            .iter()
            .enumerate()
            // `max_by_key` keeps the last maximum, so compare reversed indices to keep the first
            .max_by_key(|&(index, digit)| (*digit, std::cmp::Reverse(index)))?;
        joltage = joltage.checked_mul(10)?.checked_add(u64::from(*digit))?;
        start += offset + 1;
    }
    Some(joltage)
}

fn total_joltage(banks: &BatteryBanks, count: usize) -> DynamicResult<u64> {
    let joltages = banks
        .0
        .iter()
        .map(|bank| {
            max_joltage(bank, count).ok_or_else(|| format!("bank has fewer than {count} batteries"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(joltages
        .into_iter()
        .checked_sum()
        .ok_or(Overflow("total output joltage"))?)
}

/*
For part 1, turn on exactly two batteries per bank for the largest reading, and sum the readings.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = BatteryBanks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_joltage(input, 2)
    }
}

/*
For part 2, turn on exactly twelve batteries per bank.
*/

impl Solution<PartTwo> for Day03 {
    type Input = BatteryBanks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_joltage(input, 12)
    }
}

use aoc_support::parsing::{parse_input_lines, parse_with_context};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 1: Secret Entrance",
    parser = Rotations,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2025<1> {}

/*
Input is a list of rotations for a safe's dial, one per line. A rotation is `L` or `R` followed by
a distance in clicks, e.g. `L68`.

The dial shows numbers 0 through 99 and starts pointing at 50. Left turns towards lower numbers,
right towards higher, wrapping around between 0 and 99.
*/

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rotation {
    turn: Turn,
    distance: u32,
}

#[derive(Error, Debug)]
enum ParseRotationError {
    #[error("rotation line is empty")]
    Empty,

    #[error("rotation must start with 'L' or 'R', found {0:?}")]
    InvalidTurn(char),
}

struct Rotations(Vec<Rotation>);

impl ParseData for Rotations {
    fn parse(input: &str) -> DynamicResult<Self> {
        let rotations = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let mut chars = line.chars();
            let turn = match chars.next() {
                Some('L') => Turn::Left,
                Some('R') => Turn::Right,
                Some(other) => return Err(ParseRotationError::InvalidTurn(other).into()),
                None => return Err(ParseRotationError::Empty.into()),
            };
            let distance = parse_with_context(chars.as_str())?;
            Ok(Rotation { turn, distance })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rotations))
    }
}

impl Rotation {
    /// Apply the rotation to a dial position, returning the new position and how many clicks
    /// landed on 0 along the way (including the final click).
    fn apply(self, position: u32) -> (u32, u64) {
        let Self { turn, distance } = self;
        match turn {
            Turn::Right => (
                (position + distance % DIAL_SIZE) % DIAL_SIZE,
                (u64::from(position) + u64::from(distance)) / u64::from(DIAL_SIZE),
            ),
            Turn::Left => {
                let zero_clicks = if position == 0 {
                    distance / DIAL_SIZE
                } else if distance >= position {
                    (distance - position) / DIAL_SIZE + 1
                } else {
                    0
                };
                (
                    (position + DIAL_SIZE - distance % DIAL_SIZE) % DIAL_SIZE,
                    u64::from(zero_clicks),
                )
            }
        }
    }
}

/*
For part 1, the password is the number of rotations that leave the dial pointing at 0.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Rotations;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut position = DIAL_START;
        let mut stops_at_zero = 0;
        for rotation in &input.0 {
            position = rotation.apply(position).0;
            if position == 0 {
                stops_at_zero += 1;
            }
        }
        Ok(stops_at_zero)
    }
}

/*
For part 2, every click that points the dial at 0 counts, whether during or at the end of a
rotation. A single large rotation can pass 0 many times.
*/

impl Solution<PartTwo> for Day01 {
    type Input = Rotations;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut position = DIAL_START;
        let mut zero_clicks: u64 = 0;
        for rotation in &input.0 {
            let (next_position, clicks) = rotation.apply(position);
            position = next_position;
            zero_clicks = zero_clicks
                .checked_add(clicks)
                .ok_or(Overflow("clicks on zero"))?;
        }
        Ok(zero_clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn large_rotation_passes_zero_repeatedly() {
        let rotation = Rotation {
            turn: Turn::Right,
            distance: 1000,
        };
        assert_eq!(rotation.apply(50), (50, 10));

        let rotation = Rotation {
            turn: Turn::Left,
            distance: 250,
        };
        assert_eq!(rotation.apply(0), (50, 2));
    }

    #[test]
    fn largest_distance_counts_every_pass() -> DynamicResult<()> {
        let parsed = Rotations::parse("R4294967295\n")?;
        assert_eq!(parsed.0[0].apply(DIAL_START), (45, 42_949_673));
        assert_eq!(<Day01 as Solution<PartOne>>::solve(&parsed)?, 0);
        assert_eq!(<Day01 as Solution<PartTwo>>::solve(&parsed)?, 42_949_673);
        Ok(())
    }

    #[test]
    fn invalid_turn_is_rejected() {
        assert!(Rotations::parse("U5\n").is_err());
        assert!(Rotations::parse("Lx\n").is_err());
    }
}

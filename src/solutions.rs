//! Solutions implemented for Advent of Code 2025.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day.
//!
//! The `new-day` command registers new days automatically. By hand:
//! 1. Make a submodule holding the solution, implementing [`Puzzle`] for
//!    [`AdventOfCode2025<DAY>`].
//! 2. Import the submodule below `IMPORT SUBMODULES HERE`.
//! 3. Add a match case below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! 1 => AdventOfCode2025::<1>::run(input, reporter, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_support::DynamicResult;
use aoc_support::runner::{Puzzle, Reporter};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;

/// Solutions collected by day.
///
/// A submodule implements [`Puzzle`] for its day with
/// [`#[puzzle]`][aoc_support::runner::puzzle]:
///
/// ```ignore
/// #[puzzle(title = "Day 1: Secret Entrance", part_one = Day01, part_two = Day01)]
/// impl super::AdventOfCode2025<1> {}
/// ```
struct AdventOfCode2025<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// [`DayNotAvailable`] for a day without a solution, otherwise any error of the solution.
pub fn run_day(
    day: u8,
    input: &str,
    reporter: &mut dyn Reporter,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2025::<1>::run(input, reporter, timed),
        2 => AdventOfCode2025::<2>::run(input, reporter, timed),
        3 => AdventOfCode2025::<3>::run(input, reporter, timed),
        4 => AdventOfCode2025::<4>::run(input, reporter, timed),
        5 => AdventOfCode2025::<5>::run(input, reporter, timed),
        6 => AdventOfCode2025::<6>::run(input, reporter, timed),
        7 => AdventOfCode2025::<7>::run(input, reporter, timed),
        8 => AdventOfCode2025::<8>::run(input, reporter, timed),
        9 => AdventOfCode2025::<9>::run(input, reporter, timed),
        10 => AdventOfCode2025::<10>::run(input, reporter, timed),
        11 => AdventOfCode2025::<11>::run(input, reporter, timed),
        12 => AdventOfCode2025::<12>::run(input, reporter, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::time::Duration;

    use aoc_support::PartKind;

    use super::*;

    /// Keeps the answers, ignoring every other event.
    #[derive(Default)]
    struct AnswerReporter {
        answers: Vec<String>,
    }

    impl Reporter for AnswerReporter {
        fn puzzle_title(&mut self, _title: &str) {}

        fn parse_start(&mut self) {}

        fn parse_end(&mut self, _duration_opt: Option<Duration>) {}

        fn part_start(&mut self, _part: PartKind) {}

        fn part_answer(
            &mut self,
            _part: PartKind,
            answer: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.answers.push(answer.to_string());
        }
    }

    #[test]
    fn unknown_day_is_not_available() {
        let mut reporter = AnswerReporter::default();
        for day in [0, 13, 25] {
            let error = run_day(day, "", &mut reporter, false).unwrap_err();
            let not_available = error.downcast_ref::<DayNotAvailable>().unwrap();
            assert_eq!(not_available.0, day);
            assert_eq!(
                error.to_string(),
                format!("no solution available for day {day}")
            );
        }
        assert!(reporter.answers.is_empty());
    }

    #[test]
    fn registered_day_reports_both_answers() -> DynamicResult<()> {
        let mut reporter = AnswerReporter::default();
        run_day(
            1,
            "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n",
            &mut reporter,
            true,
        )?;
        assert_eq!(reporter.answers, ["3", "6"]);
        Ok(())
    }
}

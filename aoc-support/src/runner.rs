//! Running puzzle parts and reporting their answers.
//!
//! A puzzle is made runnable with the [`#[puzzle]`][puzzle] attribute:
//!
//! ```
//! # use aoc_support::runner::puzzle;
//! # use aoc_support::{DynamicResult, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! #[puzzle(title = "Day 1", part_one = Day01)]
//! struct Day01Puzzle;
//! ```
//!
//! The generated [`Puzzle::run`] reports the title, then parses (when a `parser` is given) and
//! solves each part in order, stopping at the first error.
//!
//! `title` and `part_one` are required:
//!
//! ```compile_fail
//! # use aoc_support::runner::puzzle;
//! #[puzzle(title = "Day 1")]
//! struct Day01Puzzle;
//! ```
//!
//! Each property may be given once:
//!
//! ```compile_fail
//! # use aoc_support::runner::puzzle;
//! # use aoc_support::{DynamicResult, PartOne, Solution};
//! # struct Day01;
//! # impl Solution<PartOne> for Day01 {
//! #     type Input = str;
//! #     type Output = usize;
//! #     fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #         Ok(0)
//! #     }
//! # }
//! #[puzzle(title = "Day 1", title = "Day 1 again", part_one = Day01)]
//! struct Day01Puzzle;
//! ```
//!
//! and unknown properties are rejected:
//!
//! ```compile_fail
//! # use aoc_support::runner::puzzle;
//! # use aoc_support::{DynamicResult, PartOne, Solution};
//! # struct Day01;
//! # impl Solution<PartOne> for Day01 {
//! #     type Input = str;
//! #     type Output = usize;
//! #     fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #         Ok(0)
//! #     }
//! # }
//! #[puzzle(title = "Day 1", part_one = Day01, part_three = Day01)]
//! struct Day01Puzzle;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{DynamicResult, ParseData, Part, PartKind, Solution};

pub use aoc_support_macros::puzzle;

/// Receives the events of running a puzzle.
pub trait Reporter {
    /// The puzzle's title, reported before anything else.
    fn puzzle_title(&mut self, title: &str);

    /// Parsing the input started.
    fn parse_start(&mut self);

    /// Parsing finished, with its duration when timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part started solving.
    fn part_start(&mut self, part: PartKind);

    /// A part produced its answer, with its duration when timed.
    fn part_answer(&mut self, part: PartKind, answer: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate `f` once, measuring the elapsed time only when `timed` is set.
///
/// Everything `f` does counts towards the duration, including dropping values it consumes.
pub fn measure<T>(timed: bool, f: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = f();
        (result, Some(start.elapsed()))
    } else {
        (f(), None)
    }
}

/// Parse the input into `D`, reporting the step.
///
/// # Errors
///
/// Propagates the parsing error of `D`.
pub fn parse_step<D: ParseData>(
    input: &str,
    reporter: &mut dyn Reporter,
    timed: bool,
) -> DynamicResult<D> {
    reporter.parse_start();
    let (result, duration_opt) = measure(timed, || D::parse(input));
    let parsed = result?;
    reporter.parse_end(duration_opt);
    Ok(parsed)
}

/// Solve part `P` with solution `S`, reporting the answer.
///
/// # Errors
///
/// Propagates the error of the solution.
pub fn part_step<S, P>(
    input: &S::Input,
    reporter: &mut dyn Reporter,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    reporter.part_start(part);
    let (result, duration_opt) = measure(timed, || S::solve(input));
    let answer = result?;
    reporter.part_answer(part, &answer, duration_opt);
    Ok(())
}

/// A runnable puzzle day, usually implemented through [`#[puzzle]`][puzzle].
pub trait Puzzle {
    /// Run every available part of the puzzle on the input.
    ///
    /// # Errors
    ///
    /// The first parsing or solving error.
    fn run(input: &str, reporter: &mut dyn Reporter, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PartOne, PartTwo};

    /// Records events as strings.
    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn puzzle_title(&mut self, title: &str) {
            self.events.push(format!("title {title}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse".to_string());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.events.push(format!("parsed timed={}", duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("start {part}"));
        }

        fn part_answer(
            &mut self,
            part: PartKind,
            answer: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.events.push(format!(
                "{part} = {answer} timed={}",
                duration_opt.is_some()
            ));
        }
    }

    struct Words(Vec<String>);

    impl ParseData for Words {
        fn parse(input: &str) -> DynamicResult<Self> {
            if input.is_empty() {
                return Err("empty input".into());
            }
            Ok(Self(input.split_whitespace().map(String::from).collect()))
        }
    }

    struct WordCount;

    impl Solution<PartOne> for WordCount {
        type Input = Words;
        type Output = usize;

        fn solve(input: &Words) -> DynamicResult<usize> {
            Ok(input.0.len())
        }
    }

    impl Solution<PartTwo> for WordCount {
        type Input = Words;
        type Output = usize;

        fn solve(input: &Words) -> DynamicResult<usize> {
            input
                .0
                .iter()
                .map(String::len)
                .max()
                .ok_or_else(|| "no words".into())
        }
    }

    #[puzzle(title = "Words", parser = Words, part_one = WordCount, part_two = WordCount)]
    struct WordPuzzle;

    struct LineCount;

    impl Solution<PartOne> for LineCount {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<usize> {
            Ok(input.lines().count())
        }
    }

    #[puzzle(title = "Lines", part_one = LineCount)]
    impl LineCount {}

    #[test]
    fn measure_only_times_when_asked() {
        let (value, duration) = measure(false, || 2 + 2);
        assert_eq!(value, 4);
        assert!(duration.is_none());

        let (_, duration) = measure(true, || ());
        assert!(duration.is_some());
    }

    #[test]
    fn parsed_puzzle_reports_every_step() -> DynamicResult<()> {
        let mut reporter = RecordingReporter::default();
        WordPuzzle::run("one three five", &mut reporter, true)?;
        assert_eq!(
            reporter.events,
            [
                "title Words",
                "parse",
                "parsed timed=true",
                "start Part 1",
                "Part 1 = 3 timed=true",
                "start Part 2",
                "Part 2 = 5 timed=true",
            ]
        );
        Ok(())
    }

    #[test]
    fn raw_puzzle_skips_parsing_and_part_two() -> DynamicResult<()> {
        let mut reporter = RecordingReporter::default();
        LineCount::run("a\nb\n", &mut reporter, false)?;
        assert_eq!(
            reporter.events,
            ["title Lines", "start Part 1", "Part 1 = 2 timed=false"]
        );
        Ok(())
    }

    #[test]
    fn parse_error_stops_the_run() {
        let mut reporter = RecordingReporter::default();
        let result = WordPuzzle::run("", &mut reporter, false);
        assert!(result.is_err());
        assert_eq!(reporter.events, ["title Words", "parse"]);
    }
}

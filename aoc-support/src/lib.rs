//! Shared support for Advent of Code puzzle solutions.
//!
//! A puzzle day is split into two parts. Each part is a [`Solution`] that maps the puzzle input to
//! a single answer, optionally sharing a pre-parsed input through [`ParseData`].
//!
//! # Quick Start
//!
//! A part that reads the raw input string:
//!
//! ```
//! use aoc_support::{DynamicResult, PartOne, Solution};
//!
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//! ```
//!
//! Parts sharing a parsed input:
//!
//! ```
//! use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//! use aoc_support::parsing::parse_numbers_split;
//!
//! struct Depths(Vec<u32>);
//!
//! impl ParseData for Depths {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(parse_numbers_split(input)?))
//!     }
//! }
//!
//! struct Day02;
//!
//! impl Solution<PartOne> for Day02 {
//!     type Input = Depths;
//!     type Output = u32;
//!
//!     fn solve(input: &Depths) -> DynamicResult<u32> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Day02 {
//!     type Input = Depths;
//!     type Output = u32;
//!
//!     fn solve(input: &Depths) -> DynamicResult<u32> {
//!         Ok(input.0.iter().copied().max().unwrap_or_default())
//!     }
//! }
//! ```
//!
//! The [`runner`] module turns these into a runnable [`runner::Puzzle`].

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::option_if_let_else,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

// lets `#[puzzle]` expansions inside this crate resolve `aoc_support::...` paths
extern crate self as aoc_support;

pub mod direction;
pub mod grid;
pub mod parsing;
pub mod runner;

mod private {
    /// Keeps [`Part`][super::Part] implementations inside this crate.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies one of the two parts of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl PartKind {
    /// The level number the puzzle website uses for this part.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part {}", self.level())
    }
}

/// Marker for the part a [`Solution`] answers.
pub trait Part: private::Sealed {
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Computes the answer of one puzzle [`Part`].
pub trait Solution<P: Part> {
    /// The input passed to [`Solution::solve`] by reference.
    ///
    /// Use `str` to receive the raw puzzle text, or a type implementing [`ParseData`] to share a
    /// parsed input between parts.
    type Input: ?Sized;

    /// The answer type.
    type Output: Display;

    /// Compute the answer for the input.
    ///
    /// # Errors
    ///
    /// Malformed input or an arithmetic overflow while solving, as a dynamically dispatched
    /// error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Input data built by parsing the puzzle text once, before any part is solved.
pub trait ParseData {
    /// Parse the puzzle text.
    ///
    /// # Errors
    ///
    /// Any parsing failure, as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_kind_displays_level() {
        assert_eq!(PartKind::One.to_string(), "Part 1");
        assert_eq!(PartKind::Two.to_string(), "Part 2");
        assert_eq!(PartTwo::kind().level(), 2);
    }
}

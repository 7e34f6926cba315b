//! Helpers and errors for parsing puzzle input.

use std::str::FromStr;

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type, keeping the string as error context.
///
/// # Errors
///
/// A [`ParseContextError`] sourcing [`F::Err`][FromStr::Err] if the string does not parse.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line of the input failed to parse.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero based, displayed one based.
    line_index: usize,
    source: DynamicError,
}

/// Parse each line of the input with a closure receiving the line index and the line.
///
/// A failing line's error is wrapped in an [`InvalidLine`] naming the line.
///
/// ```
/// # use aoc_support::parsing::{parse_input_lines, parse_with_context};
/// let values = parse_input_lines("1\n2\n3\n", |_, line| Ok(parse_with_context::<u8>(line)?))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn parse_input_lines<T, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
    })
}

/// Parse whitespace separated numbers, e.g. `"3  4 -5"`.
///
/// # Errors
///
/// A [`ParseContextError`] for the first token that is not a number.
pub fn parse_numbers_split<F>(s: &str) -> Result<Vec<F>, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    s.split_whitespace().map(parse_with_context).collect()
}

/// Parse comma separated numbers, e.g. `"3,4,-5\n"`.
///
/// Whitespace around the whole list and around each number is ignored.
///
/// # Errors
///
/// A [`ParseContextError`] for the first item that is not a number, including an empty item.
pub fn parse_numbers_comma<F>(s: &str) -> Result<Vec<F>, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    s.trim()
        .split(',')
        .map(|item| parse_with_context(item.trim()))
        .collect()
}

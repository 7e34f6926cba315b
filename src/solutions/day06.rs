use aoc_support::parsing::parse_with_context;
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

use crate::checked_math::{CheckedProduct, Overflow};

#[puzzle(
    title = "Day 6: Trash Compactor",
    parser = Worksheet,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2025<6> {}

/*
Input is a math worksheet: rows of numbers above a final row of operators (`*` or `+`). Each
problem is a vertical group of numbers with its operator at the bottom, and problems are separated
by a column of only spaces.

Whitespace inside the worksheet is significant for part 2, so lines are kept as written.
*/

#[derive(Error, Debug)]
enum WorksheetError {
    #[error("worksheet has no operator row")]
    MissingOperators,

    #[error("unknown operator {0:?}")]
    UnknownOperator(char),

    #[error("worksheet has {numbers} number columns but {operators} operators")]
    ColumnMismatch { numbers: usize, operators: usize },

    #[error("numbers left over without an operator")]
    DanglingNumbers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

impl TryFrom<char> for Operation {
    type Error = WorksheetError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Self::Add),
            '*' => Ok(Self::Multiply),
            other => Err(WorksheetError::UnknownOperator(other)),
        }
    }
}

impl Operation {
    fn apply(self, numbers: &[u64]) -> Result<u64, Overflow> {
        let numbers = numbers.iter().copied();
        match self {
            Self::Add => numbers.checked_sum().ok_or(Overflow("problem sum")),
            Self::Multiply => numbers.checked_product().ok_or(Overflow("problem product")),
        }
    }
}

struct Worksheet {
    number_rows: Vec<String>,
    operator_row: String,
}

impl ParseData for Worksheet {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut number_rows: Vec<String> = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        let operator_row = number_rows.pop().ok_or(WorksheetError::MissingOperators)?;
        Ok(Self {
            number_rows,
            operator_row,
        })
    }
}

fn grand_total(answers: impl Iterator<Item = u64>) -> DynamicResult<u64> {
    Ok(answers.checked_sum().ok_or(Overflow("grand total"))?)
}

/*
For part 1, numbers are read across each row, separated by whitespace, so the n-th number of each
row belongs to the n-th problem. Sum the answers of all problems.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Worksheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let operations = input
            .operator_row
            .split_whitespace()
            .map(|op| {
                let mut chars = op.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Operation::try_from(c),
                    _ => Err(WorksheetError::UnknownOperator(op.chars().last().unwrap_or(' '))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = input
            .number_rows
            .iter()
            .map(|row| {
                row.split_whitespace()
                    .map(parse_with_context::<u64>)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(row) = rows.iter().find(|row| row.len() != operations.len()) {
            return Err(WorksheetError::ColumnMismatch {
                numbers: row.len(),
                operators: operations.len(),
            }
            .into());
        }

        let answers = operations
            .iter()
            .enumerate()
            .map(|(column, operation)| {
                let numbers: Vec<u64> = rows.iter().map(|row| row[column]).collect();
                operation.apply(&numbers)
            })
            .collect::<Result<Vec<_>, _>>()?;
        grand_total(answers.into_iter())
    }
}

/*
For part 2, cephalopod math is written right to left in columns. Each character column holds one
number, most significant digit at the top, and problems are read starting from the rightmost one.
The operator sits under the leftmost column of its problem.
*/

impl Solution<PartTwo> for Day06 {
    type Input = Worksheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let rows: Vec<Vec<char>> = input
            .number_rows
            .iter()
            .map(|row| row.chars().collect())
            .collect();
        let operators: Vec<char> = input.operator_row.chars().collect();
        let width = rows
            .iter()
            .map(Vec::len)
            .chain([operators.len()])
            .max()
            .unwrap_or_default();

        let mut answers = Vec::new();
        let mut numbers = Vec::new();
        for column in (0..width).rev() {
            // short rows read as trailing spaces
            let digits: String = rows
                .iter()
                .map(|row| row.get(column).copied().unwrap_or(' '))
                .collect();
            let digits = digits.trim();
            if digits.is_empty() {
                continue;
            }
            numbers.push(parse_with_context::<u64>(digits)?);

            match operators.get(column).copied().unwrap_or(' ') {
                ' ' => {}
                op => {
                    answers.push(Operation::try_from(op)?.apply(&numbers)?);
                    numbers.clear();
                }
            }
        }
        if !numbers.is_empty() {
            return Err(WorksheetError::DanglingNumbers.into());
        }
        grand_total(answers.into_iter())
    }
}

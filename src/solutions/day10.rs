use std::collections::{HashSet, VecDeque};

use aoc_support::parsing::{parse_input_lines, parse_numbers_comma};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use good_lp::{
    Expression, Solution as _, SolverModel, Variable, constraint, microlp, variable, variables,
};
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 10: Factory",
    parser = Machines,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2025<10> {}

/*
Input is one machine per line, e.g. `[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}`:
- the indicator light diagram in square brackets, `#` for a light that should be on,
- one or more button wiring schematics in parentheses, listing the indices affected by the button,
- the joltage requirements in curly braces.
*/

#[derive(Error, Debug)]
enum MachineError {
    #[error("machine is missing its {0}")]
    Missing(&'static str),

    #[error("unexpected section {0:?}")]
    UnexpectedSection(String),

    #[error("machine has {0} lights, at most 64 are supported")]
    TooManyLights(usize),

    #[error("button wires index {index}, but the machine has only {count}")]
    WireOutOfRange { index: usize, count: usize },

    #[error("light diagram cannot be reached with the buttons")]
    LightsUnreachable,

    #[error("joltage requirements cannot be reached with the buttons")]
    JoltageUnreachable,
}

struct Machine {
    /// Bit `i` is set when light `i` should be on.
    lights: u64,
    light_count: usize,
    buttons: Vec<Vec<usize>>,
    joltages: Vec<u32>,
}

fn strip_delimiters<'a>(section: &'a str, open: char, close: char) -> Option<&'a str> {
    section.strip_prefix(open)?.strip_suffix(close)
}

impl Machine {
    fn parse_line(line: &str) -> DynamicResult<Self> {
        let mut sections = line.split_whitespace();

        let diagram = sections
            .next()
            .and_then(|section| strip_delimiters(section, '[', ']'))
            .ok_or(MachineError::Missing("light diagram"))?;
        let light_count = diagram.len();
        if light_count > 64 {
            return Err(MachineError::TooManyLights(light_count).into());
        }
        let lights = diagram
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == '#')
            .fold(0, |mask, (index, _)| mask | 1 << index);

        let mut buttons = Vec::new();
        let mut joltages = None;
        for section in sections {
            if let Some(wires) = strip_delimiters(section, '(', ')') {
                let wires: Vec<usize> = parse_numbers_comma(wires)?;
                if let Some(&index) = wires.iter().find(|&&index| index >= light_count) {
                    return Err(MachineError::WireOutOfRange {
                        index,
                        count: light_count,
                    }
                    .into());
                }
                buttons.push(wires);
            } else if let Some(requirements) = strip_delimiters(section, '{', '}')
                && joltages.is_none()
            {
                joltages = Some(parse_numbers_comma::<u32>(requirements)?);
            } else {
                return Err(MachineError::UnexpectedSection(section.to_string()).into());
            }
        }
        let joltages = joltages.ok_or(MachineError::Missing("joltage requirements"))?;

        Ok(Self {
            lights,
            light_count,
            buttons,
            joltages,
        })
    }

    fn button_mask(wires: &[usize]) -> u64 {
        wires.iter().fold(0, |mask, &index| mask | 1 << index)
    }
}

struct Machines(Vec<Machine>);

impl ParseData for Machines {
    fn parse(input: &str) -> DynamicResult<Self> {
        let machines = parse_input_lines(input, |_, line| Machine::parse_line(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(machines))
    }
}

fn total_presses(
    machines: &Machines,
    fewest_presses: impl Fn(&Machine) -> DynamicResult<u64>,
) -> DynamicResult<u64> {
    let presses = machines
        .0
        .iter()
        .map(fewest_presses)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(presses
        .into_iter()
        .checked_sum()
        .ok_or(Overflow("total button presses"))?)
}

/*
For part 1, all lights start off and a button toggles each light it is wired to. Find the fewest
button presses that show a machine's light diagram, and sum that over all machines.

Joltage requirements are ignored.
*/

/// Breadth first search over the light states, each button press being an XOR with its mask.
fn fewest_presses_for_lights(machine: &Machine) -> DynamicResult<u64> {
    let masks: Vec<u64> = machine
        .buttons
        .iter()
        .map(|wires| Machine::button_mask(wires))
        .collect();

    let mut queue = VecDeque::from([(0_u64, 0_u64)]);
    let mut visited = HashSet::from([0_u64]);
    while let Some((state, presses)) = queue.pop_front() {
        if state == machine.lights {
            return Ok(presses);
        }
        for mask in &masks {
            let next = state ^ mask;
            if visited.insert(next) {
                queue.push_back((next, presses + 1));
            }
        }
    }
    Err(MachineError::LightsUnreachable.into())
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = Machines;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_presses(input, fewest_presses_for_lights)
    }
}

/*
For part 2, the machines are switched to joltage mode. Each counter starts at 0 and a button adds 1
to each counter it is wired to. Find the fewest presses that make every counter exactly match its
joltage requirement, and sum that over all machines.

Light diagrams are ignored.
*/

/// Round a solver value that should hold a whole number of presses.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is checked to be a whole number within u32 range"
)]
fn whole_presses(value: f64) -> Option<u64> {
    let rounded = value.round();
    ((rounded - value).abs() < 1e-6 && (0.0..=f64::from(u32::MAX)).contains(&rounded))
        .then_some(rounded as u64)
}

/// Integer linear program: minimise the sum of presses, one non-negative integer variable per
/// button, with one equality constraint per counter.
fn fewest_presses_for_joltage(machine: &Machine) -> DynamicResult<u64> {
    let mut problem_vars = variables!();
    let presses: Vec<Variable> = machine
        .buttons
        .iter()
        .map(|_| problem_vars.add(variable().integer().min(0)))
        .collect();
    let objective: Expression = presses.iter().copied().sum();

    let mut problem = problem_vars.minimise(objective).using(microlp);
    for (counter, &target) in machine.joltages.iter().enumerate() {
        let wired: Expression = machine
            .buttons
            .iter()
            .zip(&presses)
            .filter(|(wires, _)| wires.contains(&counter))
            .map(|(_, &button)| button)
            .sum();
        let target = f64::from(target);
        problem = problem.with(constraint!(wired == target));
    }
    let solution = problem
        .solve()
        .map_err(|_| MachineError::JoltageUnreachable)?;

    let counts = presses
        .iter()
        .map(|&button| whole_presses(solution.value(button)))
        .collect::<Option<Vec<u64>>>()
        .ok_or(MachineError::JoltageUnreachable)?;

    // the solver works in floating point, so confirm the rounded presses hit every target
    let mut counters = vec![0_u64; machine.joltages.len()];
    for (wires, &count) in machine.buttons.iter().zip(&counts) {
        for &index in wires {
            if let Some(counter) = counters.get_mut(index) {
                *counter += count;
            }
        }
    }
    if counters
        .iter()
        .zip(&machine.joltages)
        .any(|(&reached, &target)| reached != u64::from(target))
    {
        return Err(MachineError::JoltageUnreachable.into());
    }

    Ok(counts
        .into_iter()
        .checked_sum()
        .ok_or(Overflow("button presses"))?)
}

impl Solution<PartTwo> for Day10 {
    type Input = Machines;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_presses(input, fewest_presses_for_joltage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Machines::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 7);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Machines::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 33);
        Ok(())
    }

    #[test]
    fn per_machine_presses() -> DynamicResult<()> {
        let parsed = Machines::parse(EXAMPLE_INPUT)?;
        let lights: Vec<u64> = parsed
            .0
            .iter()
            .map(fewest_presses_for_lights)
            .collect::<Result<_, _>>()?;
        assert_eq!(lights, [2, 3, 2]);

        let joltage: Vec<u64> = parsed
            .0
            .iter()
            .map(fewest_presses_for_joltage)
            .collect::<Result<_, _>>()?;
        assert_eq!(joltage, [10, 12, 11]);
        Ok(())
    }

    #[test]
    fn diagram_bits_are_least_significant_first() -> DynamicResult<()> {
        let machine = Machine::parse_line("[.##.] (3) {1}")?;
        assert_eq!(machine.lights, 0b0110);
        assert_eq!(machine.light_count, 4);
        assert_eq!(Machine::button_mask(&[0, 2]), 0b0101);
        Ok(())
    }

    #[test]
    fn unreachable_lights_are_an_error() -> DynamicResult<()> {
        let machine = Machine::parse_line("[#.] (1) {0,1}")?;
        assert!(fewest_presses_for_lights(&machine).is_err());
        Ok(())
    }

    #[test]
    fn malformed_machines_are_rejected() {
        assert!(Machine::parse_line("(0) {1}").is_err());
        assert!(Machine::parse_line("[#] (1) {1}").is_err());
        assert!(Machine::parse_line("[#] (0)").is_err());
    }
}

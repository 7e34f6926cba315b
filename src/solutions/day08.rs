use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use aoc_support::parsing::{parse_input_lines, parse_numbers_comma};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point3;
use petgraph::unionfind::UnionFind;
use thiserror::Error;

use crate::checked_math::{CheckedProduct, Overflow};

#[puzzle(
    title = "Day 8: Playground",
    parser = JunctionBoxes,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2025<8> {}

/*
Input is the 3D position of each junction box, one `X,Y,Z` per line.

Boxes are connected with strings of lights, always joining the two boxes that are closest together
(straight-line distance) and not yet directly connected. Connected boxes form a circuit, and
connecting two boxes already in the same circuit changes nothing.
*/

/// How many of the closest pairs are connected for part 1.
const CONNECTIONS: usize = 1000;

#[derive(Error, Debug)]
enum JunctionError {
    #[error("expected 3 coordinates, found {0}")]
    NotThreeDimensional(usize),

    #[error("need at least two junction boxes to connect")]
    TooFewBoxes,
}

struct JunctionBoxes(Vec<Point3<i64>>);

impl ParseData for JunctionBoxes {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut boxes: Vec<Point3<i64>> = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            match parse_numbers_comma::<i64>(line)?[..] {
                [x, y, z] => Ok(Point3::new(x, y, z)),
                ref other => Err(JunctionError::NotThreeDimensional(other.len()).into()),
            }
        })
        .collect::<Result<_, _>>()?;
        // a position listed again is the same box
        let mut seen = HashSet::new();
        boxes.retain(|position| seen.insert(*position));
        Ok(Self(boxes))
    }
}

impl JunctionBoxes {
    /// Every pair of box indices, closest first.
    fn pairs_by_distance(&self) -> Vec<(usize, usize)> {
        let boxes = &self.0;
        let mut pairs: Vec<(i64, usize, usize)> = (0..boxes.len())
            .flat_map(|a| (a + 1..boxes.len()).map(move |b| (a, b)))
            .map(|(a, b)| {
                let offset = boxes[a] - boxes[b];
                (offset.dot(&offset), a, b)
            })
            .collect();
        pairs.sort_unstable();
        pairs.into_iter().map(|(_, a, b)| (a, b)).collect()
    }
}

/// Connect the `connections` closest pairs and multiply the sizes of the three largest circuits.
fn largest_circuits_product(boxes: &JunctionBoxes, connections: usize) -> DynamicResult<u64> {
    let mut circuits = UnionFind::new(boxes.0.len());
    for (a, b) in boxes.pairs_by_distance().into_iter().take(connections) {
        circuits.union(a, b);
    }

    let mut sizes: HashMap<usize, u64> = HashMap::new();
    for index in 0..boxes.0.len() {
        *sizes.entry(circuits.find(index)).or_default() += 1;
    }
    let mut sizes: Vec<u64> = sizes.into_values().collect();
    sizes.sort_unstable_by_key(|&size| Reverse(size));

    Ok(sizes
        .into_iter()
        .take(3)
        .checked_product()
        .ok_or(Overflow("circuit size product"))?)
}

/*
For part 1, connect the 1000 pairs of boxes closest together, then multiply together the sizes of
the three largest circuits.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = JunctionBoxes;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        largest_circuits_product(input, CONNECTIONS)
    }
}

/*
For part 2, keep connecting the closest pairs until all boxes form a single circuit. Multiply the X
coordinates of the last two boxes connected.
*/

impl Solution<PartTwo> for Day08 {
    type Input = JunctionBoxes;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let boxes = &input.0;
        let mut circuits = UnionFind::new(boxes.len());
        let mut circuit_count = boxes.len();
        for (a, b) in input.pairs_by_distance() {
            if !circuits.union(a, b) {
                continue;
            }
            circuit_count -= 1;
            if circuit_count == 1 {
                return Ok(boxes[a]
                    .x
                    .checked_mul(boxes[b].x)
                    .ok_or(Overflow("X coordinate product"))?);
            }
        }
        Err(JunctionError::TooFewBoxes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn part_one_solves_example_with_ten_connections() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let result = largest_circuits_product(&parsed, 10)?;
        assert_eq!(result, 40);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 25272);
        Ok(())
    }

    #[test]
    fn closest_pair_comes_first() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let pairs = parsed.pairs_by_distance();
        // 162,817,812 and 425,690,689
        assert_eq!(pairs[0], (0, 19));
        Ok(())
    }

    #[test]
    fn single_box_cannot_form_circuit() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse("1,2,3\n")?;
        assert!(<Day08 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn repeated_position_is_one_box() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse("1,1,1\n1,1,1\n5,5,5\n")?;
        assert_eq!(parsed.0, [Point3::new(1, 1, 1), Point3::new(5, 5, 5)]);
        assert_eq!(<Day08 as Solution<PartTwo>>::solve(&parsed)?, 5);

        let parsed = JunctionBoxes::parse("1,1,1\n1,1,1\n")?;
        assert!(<Day08 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn two_dimensional_point_is_rejected() {
        assert!(JunctionBoxes::parse("1,2\n").is_err());
    }
}

use std::collections::HashMap;
use std::sync::LazyLock;

use aoc_support::grid::parse_coords_hash;
use aoc_support::parsing::{parse_numbers_split, parse_with_context};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, Solution};
use regex::Regex;
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(title = "Day 12: Christmas Tree Farm", parser = Farm, part_one = Day12)]
impl super::AdventOfCode2025<12> {}

/*
Input starts with the present shapes, each an index line like `4:` followed by a small map where
`#` is part of the shape. Blank lines separate the shapes.

After the shapes come the regions under the trees, one per line, e.g. `12x5: 1 0 1 0 2 2` for a
region 12 wide and 5 tall that must hold one present of shape 0, one of shape 2, and two each of
shapes 4 and 5.
*/

static REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)x(\d+):\s*(.*)$").expect("pattern should be valid"));

#[derive(Error, Debug)]
enum FarmError {
    #[error("shape header is not formatted as 'index:': {0:?}")]
    InvalidShapeHeader(String),

    #[error("region is not formatted as 'WxH: counts': {0:?}")]
    InvalidRegion(String),

    #[error("region asks for shape {0}, which is not defined")]
    UnknownShape(usize),
}

struct Region {
    width: u64,
    height: u64,
    /// How many presents of each shape, by shape index.
    presents: Vec<u64>,
}

struct Farm {
    /// Cells covered by each shape, by shape index.
    shape_cells: HashMap<usize, u64>,
    regions: Vec<Region>,
}

fn parse_shape(block: &str) -> DynamicResult<(usize, u64)> {
    let (header, map) = block.split_once('\n').unwrap_or((block, ""));
    let index = header
        .trim()
        .strip_suffix(':')
        .ok_or_else(|| FarmError::InvalidShapeHeader(header.to_string()))?;
    let cells = parse_coords_hash(map)?.len();
    Ok((parse_with_context(index)?, u64::try_from(cells)?))
}

fn parse_region(line: &str) -> DynamicResult<Region> {
    let captures = REGION
        .captures(line.trim())
        .ok_or_else(|| FarmError::InvalidRegion(line.to_string()))?;
    Ok(Region {
        width: parse_with_context(&captures[1])?,
        height: parse_with_context(&captures[2])?,
        presents: parse_numbers_split(&captures[3])?,
    })
}

impl ParseData for Farm {
    fn parse(input: &str) -> DynamicResult<Self> {
        let input = input.replace("\r\n", "\n");
        let mut shape_cells = HashMap::new();
        let mut regions = Vec::new();
        for block in input.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
            if REGION.is_match(block.lines().next().unwrap_or_default()) {
                for line in block.lines().filter(|line| !line.trim().is_empty()) {
                    regions.push(parse_region(line)?);
                }
            } else {
                let (index, cells) = parse_shape(block)?;
                shape_cells.insert(index, cells);
            }
        }
        Ok(Self {
            shape_cells,
            regions,
        })
    }
}

impl Farm {
    /// Whether a region has more room than its presents' cells would cover.
    ///
    /// Only counts cells, no placements are tried.
    fn has_room(&self, region: &Region) -> DynamicResult<bool> {
        let mut occupied: u64 = 0;
        for (shape, &count) in region.presents.iter().enumerate() {
            let cells = self
                .shape_cells
                .get(&shape)
                .ok_or(FarmError::UnknownShape(shape))?;
            occupied = count
                .checked_mul(*cells)
                .and_then(|cells| occupied.checked_add(cells))
                .ok_or(Overflow("occupied cells"))?;
        }
        let area = region
            .width
            .checked_mul(region.height)
            .ok_or(Overflow("region area"))?;
        Ok(area > occupied)
    }
}

/*
Presents can be rotated and flipped, and must be placed on the region's grid without overlapping.
Count the regions that can fit all of their listed presents.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Farm;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut fitting = 0;
        for region in &input.regions {
            if input.has_room(region)? {
                fitting += 1;
            }
        }
        Ok(fitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Farm::parse(EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn parses_shapes_and_regions() -> DynamicResult<()> {
        let parsed = Farm::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.shape_cells.len(), 6);
        assert_eq!(parsed.shape_cells[&5], 7);
        assert_eq!(parsed.regions.len(), 3);
        assert_eq!(parsed.regions[1].width, 12);
        assert_eq!(parsed.regions[1].presents, [1, 0, 1, 0, 2, 2]);
        Ok(())
    }

    #[test]
    fn full_region_has_no_room() -> DynamicResult<()> {
        let parsed = Farm::parse("0:\n##\n##\n\n2x2: 1\n4x2: 1\n")?;
        assert!(!parsed.has_room(&parsed.regions[0])?);
        assert!(parsed.has_room(&parsed.regions[1])?);
        Ok(())
    }

    #[test]
    fn unknown_shape_is_an_error() -> DynamicResult<()> {
        let parsed = Farm::parse("0:\n#\n\n3x3: 0 1\n")?;
        assert!(<Day12 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }
}

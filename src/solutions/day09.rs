use aoc_support::parsing::{parse_input_lines, parse_numbers_comma};
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 9: Movie Theater",
    parser = RedTiles,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2025<9> {}

/*
Input is the position of each red tile on the theater floor, one `X,Y` per line.

A rectangle using two red tiles as opposite corners covers every tile between them, both corners
included, so `2,5` and `9,7` make a rectangle of area 8 * 3 = 24.
*/

type Tile = Point2<i64>;

#[derive(Error, Debug)]
#[error("expected an 'X,Y' position, found {0} numbers")]
struct InvalidTile(usize);

struct RedTiles(Vec<Tile>);

impl ParseData for RedTiles {
    fn parse(input: &str) -> DynamicResult<Self> {
        let tiles = parse_input_lines(input, |_, line| -> DynamicResult<Tile> {
            match parse_numbers_comma::<i64>(line)?[..] {
                [x, y] => Ok(Tile::new(x, y)),
                ref other => Err(InvalidTile(other.len()).into()),
            }
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(tiles))
    }
}

/// An axis aligned box given by its inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min: Tile,
    max: Tile,
}

impl Bounds {
    fn spanning(a: Tile, b: Tile) -> Self {
        Self {
            min: Tile::new(a.x.min(b.x), a.y.min(b.y)),
            max: Tile::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Whether `other` intersects the open interior of this box.
    fn overlaps_interior(&self, other: &Self) -> bool {
        other.min.x < self.max.x
            && other.max.x > self.min.x
            && other.min.y < self.max.y
            && other.max.y > self.min.y
    }

    fn contains(&self, point: Tile) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Number of tiles covered, edges included.
    fn tile_area(&self) -> Option<u64> {
        let width = self.max.x.abs_diff(self.min.x).checked_add(1)?;
        let height = self.max.y.abs_diff(self.min.y).checked_add(1)?;
        width.checked_mul(height)
    }
}

/// Every rectangle with red tiles on two opposite corners.
fn corner_rectangles(tiles: &[Tile]) -> impl Iterator<Item = (Tile, Tile)> + '_ {
    tiles
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| tiles[i + 1..].iter().map(move |&b| (a, b)))
}

/*
For part 1, find the largest area of any rectangle using two red tiles as opposite corners.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = RedTiles;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut largest = 0;
        for (a, b) in corner_rectangles(&input.0) {
            let area = Bounds::spanning(a, b)
                .tile_area()
                .ok_or(Overflow("rectangle area"))?;
            largest = largest.max(area);
        }
        Ok(largest)
    }
}

/*
For part 2, the red tiles are listed in loop order, and each is joined to the next (and the last to
the first) by a straight line of green tiles. Every tile inside the loop is green too.

The rectangle must still have red tiles on opposite corners, but may only cover red or green tiles.
*/

/// The loop through the red tiles, in a coordinate space scaled by 2 so that the centre of any
/// rectangle between tiles falls on an integer position.
struct TileLoop {
    edges: Vec<Bounds>,
}

impl TileLoop {
    fn new(tiles: &[Tile]) -> Self {
        let edges = tiles
            .iter()
            .zip(tiles.iter().cycle().skip(1))
            .map(|(&a, &b)| Bounds::spanning(a * 2, b * 2))
            .collect();
        Self { edges }
    }

    /// Whether a scaled point lies on the loop or inside it.
    fn encloses(&self, point: Tile) -> bool {
        if self.edges.iter().any(|edge| edge.contains(point)) {
            return true;
        }
        // even-odd rule: cast a ray towards +x and count the vertical edges crossed,
        // half-open in y so a ray through a corner counts once
        let crossings = self
            .edges
            .iter()
            .filter(|edge| edge.min.x == edge.max.x && edge.min.x > point.x)
            .filter(|edge| edge.min.y <= point.y && point.y < edge.max.y)
            .count();
        crossings % 2 == 1
    }

    /// Whether a rectangle between two red tiles covers only tiles on or inside the loop.
    fn fits(&self, a: Tile, b: Tile) -> bool {
        let scaled = Bounds::spanning(a * 2, b * 2);
        if self
            .edges
            .iter()
            .any(|edge| scaled.overlaps_interior(edge))
        {
            return false;
        }
        // no edge cuts through, so the rectangle is wholly inside or wholly outside
        let centre = Tile::new(
            (scaled.min.x + scaled.max.x) / 2,
            (scaled.min.y + scaled.max.y) / 2,
        );
        self.encloses(centre)
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = RedTiles;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let tile_loop = TileLoop::new(&input.0);
        let mut largest = 0;
        for (a, b) in corner_rectangles(&input.0) {
            let area = Bounds::spanning(a, b)
                .tile_area()
                .ok_or(Overflow("rectangle area"))?;
            if area > largest && tile_loop.fits(a, b) {
                largest = area;
            }
        }
        Ok(largest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    fn solve_part_two(input: &str) -> DynamicResult<u64> {
        let parsed = RedTiles::parse(input)?;
        <Day09 as Solution<PartTwo>>::solve(&parsed)
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 50);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        assert_eq!(solve_part_two(EXAMPLE_INPUT)?, 24);
        Ok(())
    }

    #[test]
    fn part_two_solves_notched_loop() -> DynamicResult<()> {
        let input = "4,2\n13,2\n13,4\n8,4\n8,6\n11,6\n11,10\n4,10\n";
        assert_eq!(solve_part_two(input)?, 40);
        Ok(())
    }

    #[test]
    fn part_two_solves_loop_with_inner_pocket() -> DynamicResult<()> {
        let input = "3,2\n13,2\n13,4\n8,4\n8,6\n11,6\n11,11\n7,11\n7,8\n5,8\n5,10\n3,10\n";
        assert_eq!(solve_part_two(input)?, 35);
        Ok(())
    }

    #[test]
    fn part_two_solves_spiral_loop() -> DynamicResult<()> {
        let input = "3,2\n17,2\n17,13\n13,13\n13,11\n15,11\n15,8\n11,8\n11,15\n18,15\n18,17\n\
            4,17\n4,12\n6,12\n6,5\n3,5\n";
        assert_eq!(solve_part_two(input)?, 66);
        Ok(())
    }

    #[test]
    fn rectangle_area_includes_edges() {
        let bounds = Bounds::spanning(Tile::new(9, 7), Tile::new(2, 5));
        assert_eq!(bounds.tile_area(), Some(24));
    }
}

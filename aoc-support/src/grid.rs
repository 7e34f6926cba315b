//! Character grids and coordinates.
//!
//! Coordinates put `x` across a line (growing right) and `y` down the lines (growing down), so the
//! first character of the input sits at `(0, 0)`.

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Write};

use nalgebra::{Point2, Vector2};
use thiserror::Error;

/// A position in a grid.
pub type Coord = Point2<i32>;

/// An error building a grid from text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid is too large for i32 coordinates")]
    TooLarge,

    #[error("expected a digit at {coord}, found {found:?}")]
    NotADigit { coord: Coord, found: char },
}

const NEIGHBOURS_4: [Vector2<i32>; 4] = [
    Vector2::new(0, -1),
    Vector2::new(1, 0),
    Vector2::new(0, 1),
    Vector2::new(-1, 0),
];

const NEIGHBOURS_8: [Vector2<i32>; 8] = [
    Vector2::new(-1, -1),
    Vector2::new(0, -1),
    Vector2::new(1, -1),
    Vector2::new(-1, 0),
    Vector2::new(1, 0),
    Vector2::new(-1, 1),
    Vector2::new(0, 1),
    Vector2::new(1, 1),
];

/// The four orthogonal neighbours: up, right, down, left.
pub fn adjacent_4(coord: Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOURS_4.into_iter().map(move |offset| coord + offset)
}

/// The eight surrounding cells, row by row from the top left.
pub fn adjacent_8(coord: Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOURS_8.into_iter().map(move |offset| coord + offset)
}

/// Iterate every character with its coordinate, in reading order.
fn coords_chars(s: &str) -> impl Iterator<Item = Result<(Coord, char), GridError>> {
    s.lines().enumerate().flat_map(|(y, line)| {
        line.chars().enumerate().map(move |(x, c)| -> Result<_, GridError> {
            let x = i32::try_from(x).map_err(|_| GridError::TooLarge)?;
            let y = i32::try_from(y).map_err(|_| GridError::TooLarge)?;
            Ok((Coord::new(x, y), c))
        })
    })
}

/// Map every coordinate to its character.
///
/// # Errors
///
/// [`GridError::TooLarge`] if a coordinate overflows `i32`.
pub fn parse_coords_char(s: &str) -> Result<HashMap<Coord, char>, GridError> {
    coords_chars(s).collect()
}

/// Map every coordinate to its digit value.
///
/// # Errors
///
/// [`GridError::NotADigit`] for the first character that is not `0` to `9`.
pub fn parse_coords_int(s: &str) -> Result<HashMap<Coord, u8>, GridError> {
    coords_chars(s)
        .map(|item| -> Result<_, GridError> {
            let (coord, c) = item?;
            let digit = c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(GridError::NotADigit { coord, found: c })?;
            Ok((coord, digit))
        })
        .collect()
}

/// Collect the coordinates holding a `#`, such as walls.
///
/// # Errors
///
/// [`GridError::TooLarge`] if a coordinate overflows `i32`.
pub fn parse_coords_hash(s: &str) -> Result<HashSet<Coord>, GridError> {
    coords_chars(s)
        .filter_map(|item| match item {
            Ok((coord, '#')) => Some(Ok(coord)),
            Ok(_) => None,
            Err(error) => Some(Err(error)),
        })
        .collect()
}

/// Render a set of coordinates as `#` on `.` over the set's bounding box.
#[must_use]
pub fn format_coords_hash(coords: &HashSet<Coord>) -> String {
    let (Some(min_x), Some(max_x)) = (
        coords.iter().map(|c| c.x).min(),
        coords.iter().map(|c| c.x).max(),
    ) else {
        return String::new();
    };
    let min_y = coords.iter().map(|c| c.y).min().unwrap_or_default();
    let max_y = coords.iter().map(|c| c.y).max().unwrap_or_default();

    (min_y..=max_y)
        .map(|y| {
            (min_x..=max_x)
                .map(|x| {
                    if coords.contains(&Coord::new(x, y)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: HashMap<Coord, T>,
    /// Number of columns in the widest line.
    width: i32,
    /// Number of lines.
    height: i32,
}

impl<T> Grid<T> {
    /// Build a grid mapping every character through `map_fn`.
    ///
    /// # Errors
    ///
    /// [`GridError::TooLarge`] if a coordinate overflows `i32`.
    pub fn from_str_with(s: &str, mut map_fn: impl FnMut(char) -> T) -> Result<Self, GridError> {
        let mut cells = HashMap::new();
        let mut width = 0;
        let mut height = 0;
        for item in coords_chars(s) {
            let (coord, c) = item?;
            width = width.max(coord.x + 1);
            height = height.max(coord.y + 1);
            cells.insert(coord, map_fn(c));
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.cells.get(&coord)
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Replace a cell's value, returning the previous one.
    pub fn insert(&mut self, coord: Coord, value: T) -> Option<T> {
        self.cells.insert(coord, value)
    }

    /// The cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.cells.iter().map(|(coord, value)| (*coord, value))
    }

    /// The first coordinate in reading order whose value matches.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Coord> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Coord::new(x, y)))
            .find(|coord| self.cells.get(coord).is_some_and(&mut predicate))
    }
}

impl Grid<char> {
    /// Build a grid of the input's characters.
    ///
    /// # Errors
    ///
    /// [`GridError::TooLarge`] if a coordinate overflows `i32`.
    pub fn from_chars(s: &str) -> Result<Self, GridError> {
        Self::from_str_with(s, |c| c)
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.cells.get(&Coord::new(x, y)) {
                    Some(value) => write!(f, "{value}")?,
                    None => f.write_char(' ')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "#.#\n..S\n##.\n";

    #[test]
    fn adjacent_4_is_clockwise_from_up() {
        let around: Vec<_> = adjacent_4(Coord::new(1, 1)).collect();
        assert_eq!(
            around,
            [
                Coord::new(1, 0),
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(0, 1)
            ]
        );
    }

    #[test]
    fn adjacent_8_skips_center() {
        let around: HashSet<_> = adjacent_8(Coord::new(0, 0)).collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&Coord::new(0, 0)));
        assert!(around.contains(&Coord::new(-1, -1)));
        assert!(around.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn coords_char_maps_every_cell() {
        let coords = parse_coords_char(MAZE).unwrap();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[&Coord::new(2, 1)], 'S');
    }

    #[test]
    fn coords_int_rejects_non_digits() {
        let coords = parse_coords_int("12\n30\n").unwrap();
        assert_eq!(coords[&Coord::new(0, 1)], 3);
        assert_eq!(
            parse_coords_int("1x").unwrap_err(),
            GridError::NotADigit {
                coord: Coord::new(1, 0),
                found: 'x'
            }
        );
    }

    #[test]
    fn coords_hash_round_trips_through_format() {
        let walls = parse_coords_hash(MAZE).unwrap();
        assert_eq!(walls.len(), 4);
        assert_eq!(format_coords_hash(&walls), "#.#\n...\n##.");
        assert_eq!(format_coords_hash(&HashSet::new()), "");
    }

    #[test]
    fn grid_tracks_size_and_finds_cells() {
        let grid = Grid::from_chars(MAZE).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.find(|&c| c == 'S'), Some(Coord::new(2, 1)));
        assert_eq!(grid.find(|&c| c == '#'), Some(Coord::new(0, 0)));
        assert_eq!(grid.get(Coord::new(3, 0)), None);
        assert_eq!(grid.to_string(), MAZE);
    }

    #[test]
    fn grid_maps_cells() {
        let grid = Grid::from_str_with("ab\n", |c| c == 'b').unwrap();
        assert_eq!(grid.get(Coord::new(1, 0)), Some(&true));
        assert_eq!(grid.iter().filter(|(_, open)| **open).count(), 1);
    }
}

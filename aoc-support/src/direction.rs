//! Cardinal directions and a pointer walking a [`Grid`].

use std::fmt::Display;
use std::ops::{Add, Sub};

use nalgebra::Vector2;
use thiserror::Error;

use crate::grid::{Coord, Grid};

/// A cardinal direction on screen, where up decreases `y`.
///
/// Variants are in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction4 {
    Up,
    Right,
    Down,
    Left,
}

/// An error reading a [`Direction4`] from a character.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("character is not a direction arrow: {0:?}")]
pub struct InvalidDirectionChar(pub char);

impl Direction4 {
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The unit offset of one step.
    #[must_use]
    pub fn offset(self) -> Vector2<i32> {
        match self {
            Self::Up => Vector2::new(0, -1),
            Self::Right => Vector2::new(1, 0),
            Self::Down => Vector2::new(0, 1),
            Self::Left => Vector2::new(-1, 0),
        }
    }

    /// Turned a quarter clockwise.
    #[must_use]
    pub fn cw(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Turned a quarter counterclockwise.
    #[must_use]
    pub fn ccw(self) -> Self {
        self.opposite().cw()
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        self.cw().cw()
    }

    /// Move `coord` by `n` steps in this direction.
    #[must_use]
    pub fn apply(self, coord: Coord, n: i32) -> Coord {
        coord + self.offset() * n
    }

    /// The arrow for this direction: `^`, `>`, `v` or `<`.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Up => '^',
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
        }
    }
}

impl TryFrom<char> for Direction4 {
    type Error = InvalidDirectionChar;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' => Ok(Self::Up),
            '>' => Ok(Self::Right),
            'v' => Ok(Self::Down),
            '<' => Ok(Self::Left),
            _ => Err(InvalidDirectionChar(value)),
        }
    }
}

/// An error moving or looking with a [`Pointer`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer has no direction")]
    NoDirection,

    #[error("position {0} is outside the grid")]
    OutOfBounds(Coord),
}

/// A position with an optional facing direction.
///
/// Pointers are equal when both position and direction match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pointer {
    pub position: Coord,
    pub direction: Option<Direction4>,
}

impl Pointer {
    #[must_use]
    pub fn new(position: Coord, direction: Option<Direction4>) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Move `n` steps forward.
    ///
    /// # Errors
    ///
    /// [`PointerError::NoDirection`] if the pointer does not face anywhere.
    pub fn step(&mut self, n: i32) -> Result<&mut Self, PointerError> {
        let direction = self.direction.ok_or(PointerError::NoDirection)?;
        self.position = direction.apply(self.position, n);
        Ok(self)
    }

    /// The grid value `n` steps away, towards `direction` or else the facing direction.
    ///
    /// # Errors
    ///
    /// [`PointerError::NoDirection`] without any direction, or [`PointerError::OutOfBounds`] if
    /// the looked at position is not in the grid.
    pub fn look<'g, T>(
        &self,
        grid: &'g Grid<T>,
        direction: Option<Direction4>,
        n: i32,
    ) -> Result<&'g T, PointerError> {
        let direction = direction
            .or(self.direction)
            .ok_or(PointerError::NoDirection)?;
        let target = direction.apply(self.position, n);
        grid.get(target).ok_or(PointerError::OutOfBounds(target))
    }

    pub fn place_at(&mut self, position: Coord) {
        self.position = position;
    }

    /// The grid value under the pointer, if inside the grid.
    #[must_use]
    pub fn value<'g, T>(&self, grid: &'g Grid<T>) -> Option<&'g T> {
        grid.get(self.position)
    }

    /// Position, direction and value under the pointer, e.g. for loop detection.
    #[must_use]
    pub fn state<'g, T>(&self, grid: &'g Grid<T>) -> (Coord, Option<Direction4>, Option<&'g T>) {
        (self.position, self.direction, self.value(grid))
    }
}

/// Adds positions; the result has no direction.
impl Add for Pointer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.position + rhs.position.coords, None)
    }
}

/// Subtracts positions; the result has no direction.
impl Sub for Pointer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(Coord::from(self.position - rhs.position), None)
    }
}

impl Display for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pointer(x={}, y={}", self.position.x, self.position.y)?;
        if let Some(direction) = self.direction {
            write!(f, ", direction='{}'", direction.as_char())?;
        }
        write!(f, ")")
    }
}

//! Coordinates used to address cells of the field and to place the ship.
use std::{convert::TryFrom, ops::Add};

/// One of the two axes of the field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// The vertical axis, indexed by row. Rows grow to the south.
    Row,
    /// The horizontal axis, indexed by column. Columns grow to the east.
    Col,
}

/// The coordinates of a cell in the field's current window.
///
/// Ordered by row, then column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Get the component along the given axis.
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Signed position of the ship, in the same frame as [`Coordinate`].
///
/// Unlike a [`Coordinate`] this may lie outside the field: a move puts the ship one step
/// past the border before the field grows to catch up, and once every mine is gone the
/// ship can wander freely.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Get the component along the given axis.
    pub fn along(&self, axis: Axis) -> isize {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }

    /// Mutable access to the component along the given axis.
    pub(crate) fn along_mut(&mut self, axis: Axis) -> &mut isize {
        match axis {
            Axis::Row => &mut self.row,
            Axis::Col => &mut self.col,
        }
    }

    /// Convert into a cell [`Coordinate`]. Returns `None` if either component is negative.
    /// Does not check the upper bounds of any field.
    pub fn to_coordinate(self) -> Option<Coordinate> {
        Some(Coordinate::new(
            usize::try_from(self.row).ok()?,
            usize::try_from(self.col).ok()?,
        ))
    }
}

impl From<Coordinate> for Position {
    fn from(coord: Coordinate) -> Self {
        // Cell coordinates index into a Vec, so they always fit in an isize.
        Self::new(coord.row as isize, coord.col as isize)
    }
}

/// Displacement relative to a [`Position`], used by moves and firing patterns.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Offset {
    /// Rows to move; negative is north.
    pub rows: isize,
    /// Columns to move; negative is west.
    pub cols: isize,
}

impl Offset {
    pub const fn new(rows: isize, cols: isize) -> Self {
        Self { rows, cols }
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, offset: Offset) -> Position {
        Position::new(self.row + offset.rows, self.col + offset.cols)
    }
}

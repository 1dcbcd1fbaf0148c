use std::borrow::Borrow;

use crate::board::{Axis, Coordinate};

/// Width and height of a rectangular region of cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Width of the region. This cooresponds to the `col` of a [`Coordinate`].
    width: usize,
    /// Height of the region. This cooresponds to the `row` of a [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// A single cell.
    pub const UNIT: Dimensions = Dimensions {
        width: 1,
        height: 1,
    };

    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width
                .checked_mul(height)
                .map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the extent along the given axis: the height for rows, the width for columns.
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Col => self.width,
        }
    }

    /// Compute the total number of cells.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// The cell in the middle of the region, rounding toward the origin on even extents.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.height / 2, self.width / 2)
    }

    /// Returns true if the given [`Coordinate`] lies inside these [`Dimensions`].
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a row-major linear index.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.width + coord.col)
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.width,
            col: idx % self.width,
        }
    }

    /// Get an iterator over rows of this region. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |row| (0..width).map(move |col| Coordinate { row, col }))
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`Dimensions`]. If so, return
    /// it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.height && c.col < self.width {
            Some(coord)
        } else {
            None
        }
    }
}

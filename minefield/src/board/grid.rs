//! Resizable storage for the field's cells.

use std::{
    mem,
    ops::{Index, IndexMut, Range},
};

use crate::{
    board::{Coordinate, Dimensions, FieldError},
    commands::Direction,
};

/// Row-major grid whose visible window can grow and shrink on every side.
///
/// Cells live in a flat arena. The window is a rectangle inside the arena, described by its
/// origin and [`Dimensions`], and all public coordinates are relative to the window.
/// Shrinking only moves the window's edges. Growing reuses arena space beyond the window
/// when there is enough of it and otherwise moves the window into a larger arena, so a
/// field that keeps drifting in one direction reallocates only occasionally.
#[derive(Debug, Clone)]
pub(crate) struct Grid<T> {
    /// Backing storage, row-major over `arena`.
    cells: Vec<T>,
    /// Extents of the backing storage.
    arena: Dimensions,
    /// Arena coordinate of the window's first cell.
    origin: Coordinate,
    /// Extents of the window.
    dim: Dimensions,
}

impl<T> Grid<T> {
    /// Build a grid from a list of rows. All rows must have the same, nonzero, length.
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, FieldError> {
        let width = rows.first().ok_or(FieldError::NoRows)?.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(FieldError::EmptyRow { row });
            }
            if cells.len() != width {
                return Err(FieldError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        let dim = Dimensions::new(width, rows.len());
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            arena: dim,
            origin: Coordinate::new(0, 0),
            dim,
        })
    }

    /// Extents of the visible window.
    pub(crate) fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Get a reference to the cell at the given window [`Coordinate`].
    pub(crate) fn get(&self, coord: Coordinate) -> Option<&T> {
        if self.dim.contains(coord) {
            self.cells.get(self.arena_index(coord))
        } else {
            None
        }
    }

    /// Get a mutable reference to the cell at the given window [`Coordinate`].
    pub(crate) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut T> {
        if self.dim.contains(coord) {
            let idx = self.arena_index(coord);
            self.cells.get_mut(idx)
        } else {
            None
        }
    }

    /// Iterate the rows of the window, north to south.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> {
        let (start, width) = (self.origin.col, self.dim.width());
        self.cells
            .chunks(self.arena.width())
            .skip(self.origin.row)
            .take(self.dim.height())
            .map(move |row| &row[start..start + width])
    }

    /// Iterate every cell of the window along with its coordinate.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coordinate::new(row, col), cell))
        })
    }

    /// Mutably iterate every cell of the window.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        let (start, width) = (self.origin.col, self.dim.width());
        let (skip, take) = (self.origin.row, self.dim.height());
        self.cells
            .chunks_mut(self.arena.width())
            .skip(skip)
            .take(take)
            .flat_map(move |row| row[start..start + width].iter_mut())
    }

    /// Remove `count` lines from the given side of the window.
    /// Panics if that would leave the window empty.
    pub(crate) fn shrink(&mut self, side: Direction, count: usize) {
        let extent = self.dim.extent(side.axis());
        if count >= extent {
            panic!(
                "cannot remove {} lines from the {:?} side of a window {} lines across",
                count, side, extent
            );
        }
        let (width, height) = (self.dim.width(), self.dim.height());
        match side {
            Direction::North => {
                self.origin.row += count;
                self.dim = Dimensions::new(width, height - count);
            }
            Direction::South => self.dim = Dimensions::new(width, height - count),
            Direction::West => {
                self.origin.col += count;
                self.dim = Dimensions::new(width - count, height);
            }
            Direction::East => self.dim = Dimensions::new(width - count, height),
        }
    }

    /// Index into `cells` of a window coordinate. Does not check the window bounds.
    fn arena_index(&self, coord: Coordinate) -> usize {
        (self.origin.row + coord.row) * self.arena.width() + self.origin.col + coord.col
    }

    /// Number of unused arena lines beyond the window on the given side.
    fn slack(&self, side: Direction) -> usize {
        match side {
            Direction::North => self.origin.row,
            Direction::South => self.arena.height() - self.origin.row - self.dim.height(),
            Direction::West => self.origin.col,
            Direction::East => self.arena.width() - self.origin.col - self.dim.width(),
        }
    }
}

impl<T: Default> Grid<T> {
    /// Construct a grid of default cells.
    pub(crate) fn new(dim: Dimensions) -> Self {
        Self {
            cells: (0..dim.total_size()).map(|_| T::default()).collect(),
            arena: dim,
            origin: Coordinate::new(0, 0),
            dim,
        }
    }

    /// Discard every cell and start over with default cells in the given dimensions.
    pub(crate) fn reset(&mut self, dim: Dimensions) {
        *self = Self::new(dim);
    }

    /// Add `count` lines of default cells on the given side of the window. Coordinates of
    /// existing cells shift by `count` when growing north or west.
    pub(crate) fn grow(&mut self, side: Direction, count: usize) {
        if count == 0 {
            return;
        }
        if self.slack(side) < count {
            let margin = count.max(self.dim.width()).max(self.dim.height());
            self.relocate(margin);
        }
        let (width, height) = (self.dim.width(), self.dim.height());
        match side {
            Direction::North => {
                self.origin.row -= count;
                self.dim = Dimensions::new(width, height + count);
                self.fill_default(0..count, 0..width);
            }
            Direction::South => {
                self.dim = Dimensions::new(width, height + count);
                self.fill_default(height..height + count, 0..width);
            }
            Direction::West => {
                self.origin.col -= count;
                self.dim = Dimensions::new(width + count, height);
                self.fill_default(0..height, 0..count);
            }
            Direction::East => {
                self.dim = Dimensions::new(width + count, height);
                self.fill_default(0..height, width..width + count);
            }
        }
    }

    /// Move the window into a fresh arena with `margin` free lines on every side.
    fn relocate(&mut self, margin: usize) {
        let arena = Dimensions::new(
            self.dim.width() + 2 * margin,
            self.dim.height() + 2 * margin,
        );
        let mut cells: Vec<T> = (0..arena.total_size()).map(|_| T::default()).collect();
        for coord in self.dim.iter_coordinates().flatten() {
            let from = self.arena_index(coord);
            let to = (coord.row + margin) * arena.width() + coord.col + margin;
            cells[to] = mem::take(&mut self.cells[from]);
        }
        self.cells = cells;
        self.arena = arena;
        self.origin = Coordinate::new(margin, margin);
    }

    /// Overwrite a block of window cells with the default. Cells uncovered by growing may
    /// still hold whatever was there before the window last shrank.
    fn fill_default(&mut self, rows: Range<usize>, cols: Range<usize>) {
        for row in rows {
            for col in cols.clone() {
                let idx = self.arena_index(Coordinate::new(row, col));
                self.cells[idx] = T::default();
            }
        }
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<u8> {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    fn snapshot(grid: &Grid<u8>) -> Vec<Vec<u8>> {
        grid.rows().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(
            Grid::<u8>::from_rows(vec![]).unwrap_err(),
            FieldError::NoRows
        );
        assert_eq!(
            Grid::<u8>::from_rows(vec![vec![]]).unwrap_err(),
            FieldError::EmptyRow { row: 0 }
        );
        assert_eq!(
            Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err(),
            FieldError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn grow_adds_default_lines_on_each_side() {
        let mut grid = sample();
        grid.grow(Direction::North, 1);
        grid.grow(Direction::East, 2);
        assert_eq!(
            snapshot(&grid),
            vec![vec![0, 0, 0, 0, 0], vec![1, 2, 3, 0, 0], vec![4, 5, 6, 0, 0]]
        );
        grid.grow(Direction::South, 1);
        grid.grow(Direction::West, 1);
        assert_eq!(grid.dimensions(), Dimensions::new(6, 4));
        assert_eq!(grid[Coordinate::new(1, 1)], 1);
        assert_eq!(grid[Coordinate::new(2, 3)], 6);
        assert_eq!(grid[Coordinate::new(3, 0)], 0);
    }

    #[test]
    fn shrink_then_grow_clears_uncovered_cells() {
        let mut grid = sample();
        grid.shrink(Direction::West, 1);
        assert_eq!(snapshot(&grid), vec![vec![2, 3], vec![5, 6]]);
        grid.grow(Direction::West, 1);
        assert_eq!(snapshot(&grid), vec![vec![0, 2, 3], vec![0, 5, 6]]);
        grid.shrink(Direction::South, 1);
        grid.shrink(Direction::East, 1);
        assert_eq!(snapshot(&grid), vec![vec![0, 2]]);
    }

    #[test]
    #[should_panic]
    fn shrink_cannot_empty_the_window() {
        let mut grid = sample();
        grid.shrink(Direction::North, 2);
    }

    #[test]
    fn repeated_growth_keeps_contents() {
        let mut grid = sample();
        for _ in 0..10 {
            grid.grow(Direction::North, 2);
            grid.grow(Direction::West, 2);
        }
        assert_eq!(grid.dimensions(), Dimensions::new(23, 22));
        assert_eq!(grid[Coordinate::new(20, 20)], 1);
        assert_eq!(grid[Coordinate::new(21, 22)], 6);
        assert_eq!(grid.iter().filter(|(_, cell)| **cell != 0).count(), 6);
    }

    #[test]
    fn iter_mut_only_touches_the_window() {
        let mut grid = sample();
        grid.shrink(Direction::North, 1);
        for cell in grid.iter_mut() {
            *cell += 10;
        }
        grid.grow(Direction::North, 1);
        assert_eq!(snapshot(&grid), vec![vec![0, 0, 0], vec![14, 15, 16]]);
    }

    #[test]
    fn out_of_window_coordinates_have_no_cell() {
        let mut grid = sample();
        grid.shrink(Direction::East, 1);
        assert_eq!(grid.get(Coordinate::new(0, 2)), None);
        assert_eq!(grid.get_mut(Coordinate::new(2, 0)), None);
    }
}

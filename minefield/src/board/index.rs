//! Index of where the remaining mines are.

use std::collections::BTreeSet;

use crate::board::{grid::Grid, Axis, Cell, Coordinate};

/// Occupied rows, columns and cells of a field.
///
/// Derived entirely from the grid and rebuilt whenever the grid changes shape; it is never
/// consulted for the contents of a cell.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MineIndex {
    /// Rows holding at least one mine.
    rows: BTreeSet<usize>,
    /// Columns holding at least one mine.
    cols: BTreeSet<usize>,
    /// Every cell holding a mine.
    mines: BTreeSet<Coordinate>,
}

impl MineIndex {
    /// Build an index over the given grid.
    pub(crate) fn from_grid(grid: &Grid<Cell>) -> Self {
        let mut index = Self::default();
        index.rebuild(grid);
        index
    }

    /// Discard the current contents and index the given grid.
    pub(crate) fn rebuild(&mut self, grid: &Grid<Cell>) {
        self.rows.clear();
        self.cols.clear();
        self.mines.clear();
        for (coord, _) in grid.iter().filter(|(_, cell)| cell.is_some()) {
            self.rows.insert(coord.row);
            self.cols.insert(coord.col);
            self.mines.insert(coord);
        }
    }

    /// Number of mines, passed or not.
    pub fn len(&self) -> usize {
        self.mines.len()
    }

    /// Returns true if no mines remain.
    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }

    /// Returns true if there is a mine at the given coordinate.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.mines.contains(coord)
    }

    /// Iterate the coordinates of every mine, ordered by row then column.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.mines.iter()
    }

    /// The lowest and highest occupied line along the given axis.
    pub fn span(&self, axis: Axis) -> Option<(usize, usize)> {
        let lines = match axis {
            Axis::Row => &self.rows,
            Axis::Col => &self.cols,
        };
        Some((*lines.iter().next()?, *lines.iter().next_back()?))
    }

    /// Distance along the given axis from `center` to the farthest mine, or `None` if there
    /// are no mines.
    pub fn radius(&self, axis: Axis, center: isize) -> Option<isize> {
        self.span(axis).map(|(min, max)| {
            let to_min = (min as isize - center).abs();
            let to_max = (max as isize - center).abs();
            to_min.max(to_max)
        })
    }
}

//! The field of mines and the types used to address it.

use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use tracing::{debug, trace};

use crate::{
    commands::{Direction, Pattern},
    ship::Ship,
};

use self::grid::Grid;
pub use self::{
    coordinate::{Axis, Coordinate, Offset, Position},
    depth::{cell_symbol, parse_cell, Cell, Depth, EMPTY_SYMBOL, PASSED_SYMBOL},
    dimensions::Dimensions,
    errors::{FieldError, ParseCellError},
    index::MineIndex,
};

mod coordinate;
mod depth;
mod dimensions;
mod errors;
mod grid;
mod index;

/// Number of lines added to a side of the field whenever it grows.
///
/// Trimming keeps the field symmetric around the ship, so growing by a single line could
/// be trimmed straight back off before the ship gets to use it.
pub const EXPANSION: usize = 2;

/// Rectangular field of mines around the ship.
///
/// The field does not own the ship, but every operation that changes the field's origin
/// takes the [`Ship`] and moves its recorded position to match.
#[derive(Debug, Clone)]
pub struct Field {
    /// Depth of the mine in each cell, if any.
    grid: Grid<Cell>,
    /// Where the mines are, as of the last change in shape.
    mines: MineIndex,
}

impl Field {
    /// Construct a field from rows of cells. All rows must have the same, nonzero, length.
    /// The field is not trimmed.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, FieldError> {
        let grid = Grid::from_rows(rows)?;
        let mines = MineIndex::from_grid(&grid);
        Ok(Self { grid, mines })
    }

    /// Get the current [`Dimensions`] of the field.
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    /// Get the current width of the field.
    pub fn width(&self) -> usize {
        self.grid.dimensions().width()
    }

    /// Get the current height of the field.
    pub fn height(&self) -> usize {
        self.grid.dimensions().height()
    }

    /// Position of the center cell.
    pub fn center(&self) -> Position {
        self.grid.dimensions().center().into()
    }

    /// Get the cell at the given coordinate. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Iterate the rows of the field, north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    /// The index of remaining mines.
    pub fn mines(&self) -> &MineIndex {
        &self.mines
    }

    /// Number of mines left in the field, including mines that were already passed.
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Returns true if any mine in the field has been passed by the ship.
    pub fn has_passed_mines(&self) -> bool {
        self.grid
            .iter()
            .any(|(_, cell)| cell.map_or(false, Depth::is_passed))
    }

    /// Returns true if the ship, having just moved in `direction`, is too close to that
    /// edge of the field to keep every mine within its radius. Always false once the last
    /// mine is gone.
    pub fn should_expand(&self, direction: Direction, ship: &Ship) -> bool {
        let axis = direction.axis();
        let pos = ship.position().along(axis);
        let radius = match self.mines.radius(axis, pos) {
            Some(radius) => radius,
            None => return false,
        };
        if direction.is_toward_origin() {
            pos - radius < 0
        } else {
            pos + radius > self.dimensions().extent(axis) as isize
        }
    }

    /// Add [`EXPANSION`] empty lines to the given side of the field.
    pub fn expand(&mut self, direction: Direction, ship: &mut Ship) {
        self.grid.grow(direction, EXPANSION);
        if direction.is_toward_origin() {
            ship.shift(direction.axis(), EXPANSION as isize);
        }
        self.mines.rebuild(&self.grid);
        debug!(?direction, dimensions = ?self.dimensions(), "expanded field");
    }

    /// Cut the field down to the lines within reach of the ship: on each axis, every line
    /// farther from the ship than the farthest mine is removed. With no mines left the field
    /// becomes a single empty cell holding the ship.
    ///
    /// Returns the sides that lost lines.
    pub fn trim(&mut self, ship: &mut Ship) -> BitFlags<Direction> {
        self.mines.rebuild(&self.grid);
        let before = self.dimensions();
        let trimmed = if self.mines.is_empty() {
            self.collapse(ship)
        } else {
            self.trim_axis(Axis::Col, ship) | self.trim_axis(Axis::Row, ship)
        };
        self.mines.rebuild(&self.grid);
        if !trimmed.is_empty() {
            debug!(?trimmed, from = ?before, to = ?self.dimensions(), "trimmed field");
        }
        trimmed
    }

    /// Drop the ship one step: every mine comes one step closer. Mines that reach depth 0
    /// stay where they are as passed mines.
    pub fn descend(&mut self) {
        for depth in self.grid.iter_mut().flatten() {
            *depth = depth.descend();
        }
        trace!("field descended");
    }

    /// Fire `pattern` from `at`, destroying every active mine it hits. Targets outside the
    /// field are ignored, as are passed mines. Returns the number of mines destroyed.
    ///
    /// The mine index is stale until the next [`trim`][Field::trim].
    pub fn fire(&mut self, pattern: Pattern, at: Position) -> usize {
        let mut destroyed = 0;
        for &offset in pattern.offsets() {
            let target = match (at + offset).to_coordinate() {
                Some(target) => target,
                None => continue,
            };
            if let Some(cell) = self.grid.get_mut(target) {
                if cell.map_or(false, Depth::is_active) {
                    *cell = None;
                    destroyed += 1;
                    trace!(row = target.row, col = target.col, "mine destroyed");
                }
            }
        }
        destroyed
    }

    /// Render the field, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Replace the field with a single empty cell and put the ship on it.
    fn collapse(&mut self, ship: &mut Ship) -> BitFlags<Direction> {
        let dim = self.dimensions();
        let mut trimmed = BitFlags::empty();
        if dim.height() > 1 {
            trimmed.insert(Direction::North);
            trimmed.insert(Direction::South);
        }
        if dim.width() > 1 {
            trimmed.insert(Direction::East);
            trimmed.insert(Direction::West);
        }
        self.grid.reset(Dimensions::UNIT);
        ship.relocate(Position::default());
        trimmed
    }

    /// Trim one axis around the ship. Uses the mine index as it was before this trim began;
    /// removing columns never changes which rows hold mines.
    fn trim_axis(&mut self, axis: Axis, ship: &mut Ship) -> BitFlags<Direction> {
        let (leading_side, trailing_side) = match axis {
            Axis::Row => (Direction::North, Direction::South),
            Axis::Col => (Direction::West, Direction::East),
        };
        let center = ship.position().along(axis);
        let radius = match self.mines.radius(axis, center) {
            Some(radius) => radius,
            None => return BitFlags::empty(),
        };
        let last = self.dimensions().extent(axis) as isize - 1;
        let mut trimmed = BitFlags::empty();

        let trailing = (last - (center + radius)).max(0).min(last);
        if trailing > 0 {
            self.grid.shrink(trailing_side, trailing as usize);
            trimmed.insert(trailing_side);
        }
        let leading = (center - radius).max(0).min(last - trailing);
        if leading > 0 {
            self.grid.shrink(leading_side, leading as usize);
            ship.shift(axis, -leading);
            trimmed.insert(leading_side);
        }
        trimmed
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.rows() {
            for &cell in row {
                write!(f, "{}", cell_symbol(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    /// Parse a field from text, one row per line.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows = text
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        parse_cell(symbol)
                            .map_err(|source| FieldError::InvalidCell { row, col, source })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> Field {
        text.parse().unwrap()
    }

    #[test]
    fn renders_one_line_per_row() {
        let field = field("a.Z\n...\n");
        assert_eq!(field.render(), "a.Z\n...\n");
        assert_eq!(field.dimensions(), Dimensions::new(3, 2));
        assert_eq!(field.mine_count(), 2);
    }

    #[test]
    fn parse_reports_the_bad_cell() {
        let err = "ab.\n.#.\n".parse::<Field>().unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidCell {
                row: 1,
                col: 1,
                source: ParseCellError::new('#'),
            }
        );
        assert_eq!("".parse::<Field>().unwrap_err(), FieldError::NoRows);
    }

    #[test]
    fn trim_without_mines_leaves_one_empty_cell() {
        for text in &[".", "...\n...\n...", ".....\n.....\n....."] {
            let mut field = field(text);
            let mut ship = Ship::new(Position::new(2, 7));
            field.trim(&mut ship);
            assert_eq!(field.dimensions(), Dimensions::UNIT);
            assert_eq!(field.get(Coordinate::new(0, 0)), Some(None));
            assert_eq!(field.render(), ".\n");
            assert_eq!(ship.position(), Position::new(0, 0));
        }
    }

    #[test]
    fn trim_keeps_lines_within_radius_of_ship() {
        let mut field = field(".....\n.a...\n.....\n.....\n.....");
        let mut ship = Ship::new(field.center());
        let trimmed = field.trim(&mut ship);
        assert_eq!(field.render(), "a..\n...\n...\n");
        assert_eq!(ship.position(), Position::new(1, 1));
        assert_eq!(trimmed, BitFlags::all());
        // Already tight.
        assert!(field.trim(&mut ship).is_empty());
    }

    #[test]
    fn trim_does_not_pad_short_sides() {
        let mut field = field("c..\n...\n...");
        let mut ship = Ship::new(Position::new(0, 0));
        field.trim(&mut ship);
        assert_eq!(field.render(), "c\n");
        let mut ship = Ship::new(Position::new(0, 2));
        let mut field = self::field("c..\n...\n...");
        field.trim(&mut ship);
        assert_eq!(field.render(), "c..\n");
        assert_eq!(ship.position(), Position::new(0, 2));
    }

    #[test]
    fn descend_lowers_every_mine() {
        let mut field = field("c.a\n.Z.\n...");
        for _ in 0..3 {
            field.descend();
        }
        assert_eq!(field.get(Coordinate::new(0, 0)), Some(Depth::new(0)));
        assert_eq!(field.get(Coordinate::new(0, 2)), Some(Depth::new(-2)));
        assert_eq!(field.get(Coordinate::new(1, 1)), Some(Depth::new(49)));
        assert_eq!(field.get(Coordinate::new(0, 1)), Some(None));
        assert_eq!(field.render(), "*.*\n.W.\n...\n");
        assert!(field.has_passed_mines());
        assert_eq!(field.mine_count(), 3);
    }

    #[test]
    fn fire_skips_passed_mines() {
        let mut field = field("a.b\n...\nb.a");
        field.descend();
        assert!(field.has_passed_mines());
        let destroyed = field.fire(Pattern::Alpha, Position::new(1, 1));
        assert_eq!(destroyed, 2);
        assert_eq!(field.render(), "*..\n...\n..*\n");
    }

    #[test]
    fn fire_ignores_targets_outside_the_field() {
        let mut field = field("bb.\nb..\n...");
        assert_eq!(field.fire(Pattern::Beta, Position::new(0, 0)), 2);
        assert_eq!(field.render(), "b..\n...\n...\n");
        assert_eq!(field.fire(Pattern::Delta, Position::new(-1, 0)), 1);
        assert_eq!(field.fire(Pattern::Gamma, Position::new(5, 5)), 0);
        assert_eq!(field.render(), "...\n...\n...\n");
    }

    #[test]
    fn expand_then_trim_restores_a_tight_field() {
        let original = field("a.b\n...\nc.d");
        for &direction in Direction::ALL {
            let mut field = original.clone();
            let mut ship = Ship::new(field.center());
            assert!(field.trim(&mut ship).is_empty());

            field.expand(direction, &mut ship);
            let grown = match direction.axis() {
                Axis::Row => Dimensions::new(3, 5),
                Axis::Col => Dimensions::new(5, 3),
            };
            assert_eq!(field.dimensions(), grown);
            assert_eq!(field.mine_count(), 4);

            let trimmed = field.trim(&mut ship);
            assert_eq!(trimmed, BitFlags::from(direction));
            assert_eq!(field.render(), original.render());
            assert_eq!(ship.position(), Position::new(1, 1));
        }
    }

    #[test]
    fn expand_toward_origin_moves_the_ship() {
        let mut field = field("..a");
        let mut ship = Ship::new(Position::new(0, 1));
        field.expand(Direction::West, &mut ship);
        assert_eq!(ship.position(), Position::new(0, 3));
        field.expand(Direction::North, &mut ship);
        assert_eq!(ship.position(), Position::new(2, 3));
        field.expand(Direction::East, &mut ship);
        field.expand(Direction::South, &mut ship);
        assert_eq!(ship.position(), Position::new(2, 3));
        assert_eq!(field.dimensions(), Dimensions::new(7, 5));
        assert_eq!(field.get(Coordinate::new(2, 4)), Some(Depth::new(1)));
    }

    #[test]
    fn should_expand_when_mines_fall_outside() {
        let field = field("z..");
        // Ship has just moved north off the field.
        let ship = Ship::new(Position::new(-1, 1));
        assert!(field.should_expand(Direction::North, &ship));
        let ship = Ship::new(Position::new(0, 1));
        assert!(!field.should_expand(Direction::North, &ship));
        assert!(!field.should_expand(Direction::West, &ship));

        let field = self::field(".\n.\nz");
        let ship = Ship::new(Position::new(1, 1));
        assert!(field.should_expand(Direction::East, &ship));
        let ship = Ship::new(Position::new(1, 0));
        assert!(!field.should_expand(Direction::East, &ship));
        assert!(!field.should_expand(Direction::South, &ship));
    }

    #[test]
    fn empty_field_never_expands() {
        let field = field("...");
        let ship = Ship::new(Position::new(-4, 9));
        for &direction in Direction::ALL {
            assert!(!field.should_expand(direction, &ship));
        }
    }
}

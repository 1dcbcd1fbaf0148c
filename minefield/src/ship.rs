//! The ship flying through the field.
use crate::{
    board::{Axis, Position},
    commands::Direction,
};

/// Position of the ship in the field's current frame, plus the counters used for scoring.
///
/// The field moves the ship's recorded position whenever it adds or removes lines to the
/// north or west, so the position always refers to the same physical spot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    position: Position,
    moves: usize,
    shots: usize,
}

impl Ship {
    /// Construct a ship at the given position with no moves or shots recorded.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            moves: 0,
            shots: 0,
        }
    }

    /// Current position of the ship.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of moves made so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Number of firing patterns used so far.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Move one cell in the given direction.
    pub fn travel(&mut self, direction: Direction) {
        self.moves += 1;
        self.position = self.position + direction.offset();
    }

    /// Record a shot. Which cells are hit is up to the field.
    pub fn fire(&mut self) {
        self.shots += 1;
    }

    /// Shift the recorded position along an axis after the field's origin moved.
    pub(crate) fn shift(&mut self, axis: Axis, by: isize) {
        *self.position.along_mut(axis) += by;
    }

    /// Put the ship at a new position without counting a move.
    pub(crate) fn relocate(&mut self, position: Position) {
        self.position = position;
    }
}

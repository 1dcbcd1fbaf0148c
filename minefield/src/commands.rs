//! The commands a script is made of: four moves and four firing patterns.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use thiserror::Error;

use crate::board::{Axis, Offset};

/// Compass direction for moving the ship, and for naming the sides of the field.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Toward row 0.
    North = 0b0001,
    /// Toward the last row.
    South = 0b0010,
    /// Toward the last column.
    East = 0b0100,
    /// Toward column 0.
    West = 0b1000,
}

impl Direction {
    /// All directions.
    pub const ALL: &'static [Direction] = &[
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Row,
            Direction::East | Direction::West => Axis::Col,
        }
    }

    /// Single step in this direction.
    pub fn offset(self) -> Offset {
        match self {
            Direction::North => Offset::new(-1, 0),
            Direction::South => Offset::new(1, 0),
            Direction::East => Offset::new(0, 1),
            Direction::West => Offset::new(0, -1),
        }
    }

    /// Whether this direction points toward lower coordinates.
    pub fn is_toward_origin(self) -> bool {
        matches!(self, Direction::North | Direction::West)
    }

    /// Script name of this direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Firing pattern, given as a fixed set of cells relative to the ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Pattern {
    /// The four diagonal neighbors.
    Alpha,
    /// The four orthogonal neighbors.
    Beta,
    /// The ship's cell and its east and west neighbors.
    Gamma,
    /// The ship's cell and its north and south neighbors.
    Delta,
}

impl Pattern {
    /// All patterns.
    pub const ALL: &'static [Pattern] = &[
        Pattern::Alpha,
        Pattern::Beta,
        Pattern::Gamma,
        Pattern::Delta,
    ];

    /// Cells hit by this pattern, relative to the ship.
    pub fn offsets(self) -> &'static [Offset] {
        const ALPHA: &[Offset] = &[
            Offset::new(-1, -1),
            Offset::new(1, -1),
            Offset::new(-1, 1),
            Offset::new(1, 1),
        ];
        const BETA: &[Offset] = &[
            Offset::new(0, -1),
            Offset::new(-1, 0),
            Offset::new(1, 0),
            Offset::new(0, 1),
        ];
        const GAMMA: &[Offset] = &[Offset::new(0, -1), Offset::new(0, 0), Offset::new(0, 1)];
        const DELTA: &[Offset] = &[Offset::new(-1, 0), Offset::new(0, 0), Offset::new(1, 0)];
        match self {
            Pattern::Alpha => ALPHA,
            Pattern::Beta => BETA,
            Pattern::Gamma => GAMMA,
            Pattern::Delta => DELTA,
        }
    }

    /// Script name of this pattern.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Alpha => "alpha",
            Pattern::Beta => "beta",
            Pattern::Gamma => "gamma",
            Pattern::Delta => "delta",
        }
    }
}

/// A single script command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// Move the ship one cell.
    Move(Direction),
    /// Fire a pattern around the ship.
    Fire(Pattern),
}

impl Command {
    /// Script name of this command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Move(direction) => direction.name(),
            Command::Fire(pattern) => pattern.name(),
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}

impl From<Pattern> for Command {
    fn from(pattern: Pattern) -> Self {
        Command::Fire(pattern)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a token does not name a command.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown command {token:?}")]
pub struct ParseCommandError {
    /// The token that was rejected.
    token: String,
}

impl ParseCommandError {
    /// Get the token that was rejected.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a command name, ignoring ASCII case.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let moves = Direction::ALL.iter().copied().map(Command::Move);
        let fires = Pattern::ALL.iter().copied().map(Command::Fire);
        moves
            .chain(fires)
            .find(|command| command.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseCommandError {
                token: token.to_owned(),
            })
    }
}

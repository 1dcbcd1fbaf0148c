//! Simulation of a mine clearing exercise.
//!
//! A ship flies down through a cuboid of mines. Each mine is given as a depth: the number
//! of steps until the ship's depth plane passes it. The ship runs a fixed script of move
//! and fire commands, one script line per step, and drops one unit of depth after every
//! line. The visible [`Field`] is kept trimmed to the smallest region around the ship that
//! still holds every remaining mine, growing again when the ship flies toward its edge.
//!
//! [`board`] holds the field and the types used to address it. [`commands`] defines the
//! moves and firing patterns a script is made of, [`ship`] tracks the ship and its
//! counters, and [`game`] drives a whole exercise and scores it.

pub mod board;
pub mod commands;
pub mod game;
pub mod ship;

pub use crate::{
    board::{Cell, Depth, Field},
    commands::{Command, Direction, Pattern},
    game::{Debrief, Exercise, Status, StepReport, Verdict},
    ship::Ship,
};

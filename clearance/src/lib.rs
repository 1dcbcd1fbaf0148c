//! Command line front end for [`minefield`]: reads a field file and a script file, runs the
//! exercise and prints the debrief.

pub mod input;
pub mod report;

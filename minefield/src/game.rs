//! Runs a script against a field and scores the result.
//!
//! An [`Exercise`] owns the field and the ship for the length of one run. Each script line
//! is one step: the commands on the line are carried out in order, then the ship drops one
//! unit of depth. Once the field is clear, or once any mine has been passed, the remaining
//! lines are skipped without touching the field or the ship's counters.

use tracing::{debug, info, trace};

use crate::{
    board::Field,
    commands::Command,
    ship::Ship,
};

pub use self::score::{efficiency_score, Outcome, Tally, Verdict};

pub mod score;

/// State of an exercise, as checked before each script line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    /// Mines remain and none has been passed yet.
    Active,
    /// Every mine has been destroyed.
    Cleared,
    /// At least one mine has been passed. This never goes back to [`Status::Active`].
    Passed,
}

/// Record of one executed script line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StepReport {
    /// 1-based number of the script line.
    pub line: usize,
    /// Rendering of the field before the line ran.
    pub before: String,
    /// Commands on the line.
    pub commands: Vec<Command>,
    /// Rendering of the field after the line ran and the ship dropped.
    pub after: String,
}

/// Everything that came out of running a script.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Debrief {
    /// Reports for the lines that were executed, in order. Skipped lines have none.
    pub steps: Vec<StepReport>,
    /// Final result.
    pub verdict: Verdict,
}

/// A single run of the exercise.
#[derive(Debug, Clone)]
pub struct Exercise {
    field: Field,
    ship: Ship,
    /// Mines in the field when the exercise began.
    starting_mines: usize,
    /// Set once any mine has been passed.
    mines_passed: bool,
}

impl Exercise {
    /// Start an exercise with the ship at the center of the field. The field is trimmed
    /// straight away, so oversized input is cut down before the first step.
    pub fn new(mut field: Field) -> Self {
        let mut ship = Ship::new(field.center());
        let starting_mines = field.mine_count();
        field.trim(&mut ship);
        debug!(
            starting_mines,
            dimensions = ?field.dimensions(),
            "exercise started"
        );
        let mines_passed = field.has_passed_mines();
        Self {
            field,
            ship,
            starting_mines,
            mines_passed,
        }
    }

    /// The field in its current state.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The ship in its current state.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Mines in the field when the exercise began.
    pub fn starting_mines(&self) -> usize {
        self.starting_mines
    }

    /// Current state of the exercise. A clear field takes precedence over passed mines.
    pub fn status(&self) -> Status {
        if self.field.mine_count() == 0 {
            Status::Cleared
        } else if self.mines_passed {
            Status::Passed
        } else {
            Status::Active
        }
    }

    /// Carry out a single command, leaving the field trimmed around the ship.
    pub fn execute(&mut self, command: Command) {
        trace!(%command, "executing");
        match command {
            Command::Move(direction) => {
                self.ship.travel(direction);
                if self.field.should_expand(direction, &self.ship) {
                    self.field.expand(direction, &mut self.ship);
                }
            }
            Command::Fire(pattern) => {
                self.ship.fire();
                let destroyed = self.field.fire(pattern, self.ship.position());
                trace!(%command, destroyed, "fired");
            }
        }
        self.field.trim(&mut self.ship);
    }

    /// Run one script line regardless of status: every command in order, then drop the ship
    /// one step.
    pub fn step(&mut self, line: usize, commands: &[Command]) -> StepReport {
        debug!(line, commands = commands.len(), "step");
        let before = self.field.render();
        let status = self.status();
        for &command in commands {
            self.execute(command);
        }
        self.field.descend();
        self.field.trim(&mut self.ship);
        self.mines_passed |= self.field.has_passed_mines();

        let now = self.status();
        if now != status {
            info!(line, status = ?now, "exercise status changed");
        }
        StepReport {
            line,
            before,
            commands: commands.to_vec(),
            after: self.field.render(),
        }
    }

    /// Run a whole script, skipping lines once the field is clear or a mine has been
    /// passed, and score the result.
    pub fn run<L: AsRef<[Command]>>(&mut self, script: &[L]) -> Debrief {
        let mut steps = Vec::new();
        let mut cleared_early = false;
        for (idx, commands) in script.iter().enumerate() {
            let line = idx + 1;
            let status = self.status();
            cleared_early = status == Status::Cleared;
            if status != Status::Active {
                trace!(line, ?status, "skipping line");
                continue;
            }
            steps.push(self.step(line, commands.as_ref()));
        }
        let verdict = self.verdict(cleared_early);
        debug!(%verdict, "exercise finished");
        Debrief { steps, verdict }
    }

    /// Score the exercise as it stands. `cleared_early` says whether the field was already
    /// clear when the last script line came up.
    pub fn verdict(&self, cleared_early: bool) -> Verdict {
        Tally {
            starting_mines: self.starting_mines,
            remaining_mines: self.field.mine_count(),
            shots: self.ship.shots(),
            moves: self.ship.moves(),
            cleared_early,
        }
        .verdict()
    }
}

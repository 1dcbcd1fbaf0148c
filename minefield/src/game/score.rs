//! Scoring of a finished exercise.
use std::{cmp, fmt};

/// Points awarded per starting mine.
pub const POINTS_PER_MINE: usize = 10;
/// Points deducted per shot fired.
pub const SHOT_PENALTY: usize = 5;
/// Cap on the shot deduction, per starting mine.
pub const MAX_SHOT_PENALTY_PER_MINE: usize = 5;
/// Points deducted per move made.
pub const MOVE_PENALTY: usize = 2;
/// Cap on the move deduction, per starting mine.
pub const MAX_MOVE_PENALTY_PER_MINE: usize = 3;

/// Whether the exercise cleared every mine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    Pass,
    Fail,
}

/// Final result of an exercise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Verdict {
    outcome: Outcome,
    score: usize,
}

impl Verdict {
    /// A passing verdict with the given score.
    pub fn pass(score: usize) -> Self {
        Self {
            outcome: Outcome::Pass,
            score,
        }
    }

    /// A failing verdict. Failures always score zero.
    pub fn fail() -> Self {
        Self {
            outcome: Outcome::Fail,
            score: 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_pass(&self) -> bool {
        self.outcome == Outcome::Pass
    }
}

impl fmt::Display for Verdict {
    /// Formats as `pass (<score>)` or `fail (0)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let outcome = match self.outcome {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
        };
        write!(f, "{} ({})", outcome, self.score)
    }
}

/// Everything needed to score a finished exercise.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Tally {
    /// Mines in the field when the exercise started.
    pub starting_mines: usize,
    /// Mines left at the end, including passed mines.
    pub remaining_mines: usize,
    /// Firing patterns used.
    pub shots: usize,
    /// Moves made.
    pub moves: usize,
    /// Whether the field was already clear when the last script line came up.
    pub cleared_early: bool,
}

impl Tally {
    /// Score the exercise.
    ///
    /// Any mine left is a failure. Clearing the field with script lines to spare scores a
    /// flat 1, while clearing it on the very last line earns the full efficiency score.
    pub fn verdict(&self) -> Verdict {
        if self.remaining_mines > 0 {
            Verdict::fail()
        } else if self.cleared_early {
            Verdict::pass(1)
        } else {
            Verdict::pass(efficiency_score(
                self.starting_mines,
                self.shots,
                self.moves,
            ))
        }
    }
}

/// Ten points per starting mine, less capped deductions for shots and moves.
pub fn efficiency_score(starting_mines: usize, shots: usize, moves: usize) -> usize {
    let base = POINTS_PER_MINE * starting_mines;
    let shot_penalty = cmp::min(
        shots.saturating_mul(SHOT_PENALTY),
        MAX_SHOT_PENALTY_PER_MINE * starting_mines,
    );
    let move_penalty = cmp::min(
        moves.saturating_mul(MOVE_PENALTY),
        MAX_MOVE_PENALTY_PER_MINE * starting_mines,
    );
    base - shot_penalty - move_penalty
}

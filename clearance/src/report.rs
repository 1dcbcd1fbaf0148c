//! Rendering an exercise debrief for the terminal.

use std::io::{self, Write};

use minefield::{Debrief, StepReport};

/// Write the report of a finished exercise: every executed step, then the verdict line.
/// With `score_only` set, only the verdict line is written.
pub fn write_debrief<W: Write>(
    out: &mut W,
    debrief: &Debrief,
    score_only: bool,
) -> io::Result<()> {
    if !score_only {
        for step in &debrief.steps {
            write_step(out, step)?;
        }
    }
    writeln!(out, "{}", debrief.verdict)
}

/// Write one step: its label, the field before, the commands, and the field after, each
/// followed by a blank line. Renders already end in a newline.
pub fn write_step<W: Write>(out: &mut W, step: &StepReport) -> io::Result<()> {
    writeln!(out, "Step {}", step.line)?;
    writeln!(out)?;
    write!(out, "{}", step.before)?;
    writeln!(out)?;
    let commands: Vec<&str> = step.commands.iter().map(|command| command.name()).collect();
    writeln!(out, "{}", commands.join(" "))?;
    writeln!(out)?;
    write!(out, "{}", step.after)?;
    writeln!(out)
}

/// Render a debrief into a string.
pub fn render_debrief(debrief: &Debrief, score_only: bool) -> String {
    let mut out = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_debrief(&mut out, debrief, score_only);
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    use minefield::{Command, Direction, Pattern, Verdict};

    fn debrief() -> Debrief {
        Debrief {
            steps: vec![StepReport {
                line: 1,
                before: "b.b\n".to_owned(),
                commands: vec![
                    Command::Move(Direction::North),
                    Command::Fire(Pattern::Gamma),
                ],
                after: ".\n".to_owned(),
            }],
            verdict: Verdict::pass(15),
        }
    }

    #[test]
    fn steps_are_separated_by_blank_lines() {
        assert_eq!(
            render_debrief(&debrief(), false),
            "Step 1\n\nb.b\n\nnorth gamma\n\n.\n\npass (15)\n"
        );
    }

    #[test]
    fn score_only_prints_the_verdict() {
        assert_eq!(render_debrief(&debrief(), true), "pass (15)\n");
        let failed = Debrief {
            steps: Vec::new(),
            verdict: Verdict::fail(),
        };
        assert_eq!(render_debrief(&failed, false), "fail (0)\n");
    }
}

//! Reading and validating field and script files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use minefield::{board::FieldError, Command, Field};

/// A single row of a field file.
static FIELD_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z.]+$").unwrap());
/// A single token of a script line.
static COMMAND_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// Reason why an input file was rejected. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("field is empty")]
    EmptyField,
    #[error("field contains invalid characters on line {line}")]
    InvalidFieldLine { line: usize },
    #[error("field is not rectangular: line {line} has {found} cells, expected {expected}")]
    NotRectangular {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("field has no unique center: {width}x{height} is not odd in both directions")]
    NoUniqueCenter { width: usize, height: usize },
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("script contains invalid command `{token}` on line {line}")]
    InvalidCommand { line: usize, token: String },
    #[error("script line {line} has no commands")]
    EmptyScriptLine { line: usize },
    #[error("unable to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// Line of the file the error was found on, if it concerns a single line.
    pub fn line(&self) -> Option<usize> {
        match *self {
            InputError::InvalidFieldLine { line }
            | InputError::NotRectangular { line, .. }
            | InputError::InvalidCommand { line, .. }
            | InputError::EmptyScriptLine { line } => Some(line),
            _ => None,
        }
    }
}

/// Validate the text of a field file and build the field from it.
///
/// Every row must be made of letters and `.`, all rows must be the same width, and both
/// the width and the height must be odd so that the ship has a center cell to start on.
pub fn parse_field(text: &str) -> Result<Field, InputError> {
    let mut width = None;
    let mut height = 0;
    for (idx, row) in text.lines().enumerate() {
        let line = idx + 1;
        if !FIELD_ROW.is_match(row) {
            return Err(InputError::InvalidFieldLine { line });
        }
        let found = row.len();
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(InputError::NotRectangular {
                    line,
                    expected,
                    found,
                })
            }
            Some(_) => {}
        }
        height += 1;
    }
    let width = width.ok_or(InputError::EmptyField)?;
    if width % 2 == 0 || height % 2 == 0 {
        return Err(InputError::NoUniqueCenter { width, height });
    }
    let field: Field = text.parse()?;
    debug!(width, height, mines = field.mine_count(), "parsed field");
    Ok(field)
}

/// Validate the text of a script file, returning the commands of each line in order.
///
/// Tokens are separated by whitespace and matched case-insensitively. Every line must
/// carry at least one command.
pub fn parse_script(text: &str) -> Result<Vec<Vec<Command>>, InputError> {
    let script = text
        .lines()
        .enumerate()
        .map(|(idx, row)| parse_script_line(idx + 1, row))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(lines = script.len(), "parsed script");
    Ok(script)
}

fn parse_script_line(line: usize, row: &str) -> Result<Vec<Command>, InputError> {
    let commands = row
        .split_whitespace()
        .map(|token| {
            let command: Option<Command> = Some(token)
                .filter(|token| COMMAND_TOKEN.is_match(token))
                .and_then(|token| token.parse().ok());
            command.ok_or_else(|| InputError::InvalidCommand {
                line,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<Command>, _>>()?;
    if commands.is_empty() {
        return Err(InputError::EmptyScriptLine { line });
    }
    Ok(commands)
}

/// Read and validate a field file.
pub fn read_field(path: impl AsRef<Path>) -> Result<Field, InputError> {
    parse_field(&read(path.as_ref())?)
}

/// Read and validate a script file.
pub fn read_script(path: impl AsRef<Path>) -> Result<Vec<Vec<Command>>, InputError> {
    parse_script(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use minefield::{Direction, Pattern};

    #[test]
    fn field_rows_must_match() {
        let field = parse_field("...\n.b.\nZ..\n").unwrap();
        assert_eq!(field.mine_count(), 2);

        let err = parse_field("...\n.#.\n...").unwrap_err();
        assert_eq!(err.to_string(), "field contains invalid characters on line 2");
        assert_eq!(err.line(), Some(2));

        let err = parse_field("...\n....\n...").unwrap_err();
        assert!(matches!(
            err,
            InputError::NotRectangular {
                line: 2,
                expected: 3,
                found: 4
            }
        ));
    }

    #[test]
    fn field_needs_a_center() {
        assert!(matches!(parse_field(""), Err(InputError::EmptyField)));
        assert!(matches!(
            parse_field("..\n.."),
            Err(InputError::NoUniqueCenter {
                width: 2,
                height: 2
            })
        ));
        assert!(matches!(
            parse_field("...\n..."),
            Err(InputError::NoUniqueCenter { .. })
        ));
        assert!(parse_field("a").is_ok());
    }

    #[test]
    fn field_blank_line_is_invalid() {
        let err = parse_field("...\n\n...").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn field_accepts_crlf() {
        let field = parse_field("a..\r\n...\r\n...\r\n").unwrap();
        assert_eq!(field.render(), "a..\n...\n...\n");
    }

    #[test]
    fn script_tokens_ignore_case() {
        let script = parse_script("North  ALPHA\n\tgamma\r\nwest east\n").unwrap();
        assert_eq!(
            script,
            vec![
                vec![Direction::North.into(), Pattern::Alpha.into()],
                vec![Pattern::Gamma.into()],
                vec![Direction::West.into(), Direction::East.into()],
            ]
        );
        assert!(parse_script("").unwrap().is_empty());
    }

    #[test]
    fn script_rejects_unknown_tokens() {
        let err = parse_script("north\nnorth up\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "script contains invalid command `up` on line 2"
        );
        let err = parse_script("gamma2\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidCommand { line: 1, ref token } if token == "gamma2"
        ));
    }

    #[test]
    fn script_blank_line_is_invalid() {
        let err = parse_script("north\n   \nsouth\n").unwrap_err();
        assert!(matches!(err, InputError::EmptyScriptLine { line: 2 }));
    }
}

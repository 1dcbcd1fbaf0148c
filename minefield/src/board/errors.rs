//! Errors used when building a [`Field`][crate::board::Field].

use thiserror::Error;

/// Error returned when a character does not encode a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid cell {symbol:?}, expected a letter or '.'")]
pub struct ParseCellError {
    /// The character that was rejected.
    symbol: char,
}

impl ParseCellError {
    pub(crate) fn new(symbol: char) -> Self {
        Self { symbol }
    }

    /// Get the character that was rejected.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

/// Reason why a set of rows could not be turned into a field.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FieldError {
    /// There were no rows at all.
    #[error("field has no rows")]
    NoRows,
    /// A row had no cells.
    #[error("row {row} of the field is empty")]
    EmptyRow { row: usize },
    /// Rows did not all have the same width.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in the text did not encode a cell.
    #[error("row {row}, column {col}: {source}")]
    InvalidCell {
        row: usize,
        col: usize,
        #[source]
        source: ParseCellError,
    },
}

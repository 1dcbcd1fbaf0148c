//! Mine depths and their single letter encoding.
use std::fmt;

use crate::board::ParseCellError;

/// Contents of a single cell of the field: `None` if there is no mine.
pub type Cell = Option<Depth>;

/// Symbol used for a cell without a mine.
pub const EMPTY_SYMBOL: char = '.';

/// Symbol used for a mine that the ship has already passed.
pub const PASSED_SYMBOL: char = '*';

/// Distance of a mine below the ship's depth plane, in steps.
///
/// Positive depths are still ahead of the ship and can be shot. Once a depth reaches zero
/// the mine has been passed; it stays in the field and can no longer be destroyed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Depth(i32);

impl Depth {
    /// The deepest mine that can be encoded, `Z`.
    pub const MAX: Depth = Depth(52);

    /// Construct a [`Depth`] from its numeric value. Returns `None` if the value is deeper
    /// than [`Depth::MAX`].
    pub fn new(value: i32) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Depth(value))
        } else {
            None
        }
    }

    /// Decode a letter: `a`..=`z` are 1 to 26 and `A`..=`Z` continue from 27 to 52.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'a'..='z' => Some(Depth(letter as i32 - 'a' as i32 + 1)),
            'A'..='Z' => Some(Depth(letter as i32 - 'A' as i32 + 27)),
            _ => None,
        }
    }

    /// The numeric depth.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Whether the mine is still below the ship and can be shot.
    pub fn is_active(self) -> bool {
        self.0 > 0
    }

    /// Whether the ship has already passed this mine.
    pub fn is_passed(self) -> bool {
        !self.is_active()
    }

    /// The depth one step later.
    pub fn descend(self) -> Self {
        Depth(self.0.saturating_sub(1))
    }

    /// Encode as a letter, or [`PASSED_SYMBOL`] once the mine has been passed.
    pub fn symbol(self) -> char {
        match self.0 {
            d if d <= 0 => PASSED_SYMBOL,
            d @ 1..=26 => (b'a' + (d - 1) as u8) as char,
            d => (b'A' + (d - 27) as u8) as char,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Decode a single field character.
pub fn parse_cell(symbol: char) -> Result<Cell, ParseCellError> {
    if symbol == EMPTY_SYMBOL {
        Ok(None)
    } else {
        Depth::from_letter(symbol)
            .map(Some)
            .ok_or_else(|| ParseCellError::new(symbol))
    }
}

/// Encode a cell as the character used when rendering the field.
pub fn cell_symbol(cell: Cell) -> char {
    cell.map_or(EMPTY_SYMBOL, Depth::symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_cover_one_through_fifty_two() {
        let letters = ('a'..='z').chain('A'..='Z');
        for (expected, letter) in (1..).zip(letters) {
            let depth = Depth::from_letter(letter).unwrap();
            assert_eq!(depth.value(), expected);
            assert_eq!(depth.symbol(), letter);
        }
        assert_eq!(Depth::from_letter('Z'), Some(Depth::MAX));
    }

    #[test]
    fn passed_depths_render_as_star() {
        for value in &[0, -1, -40] {
            assert_eq!(Depth::new(*value).unwrap().symbol(), PASSED_SYMBOL);
        }
    }

    #[test]
    fn only_letters_and_dot_are_cells() {
        assert_eq!(parse_cell('.'), Ok(None));
        assert_eq!(parse_cell('c'), Ok(Depth::new(3)));
        assert_eq!(parse_cell('*'), Err(ParseCellError::new('*')));
        assert_eq!(parse_cell('7'), Err(ParseCellError::new('7')));
        assert_eq!(cell_symbol(None), EMPTY_SYMBOL);
    }

    #[test]
    fn depth_cannot_exceed_max() {
        assert_eq!(Depth::new(53), None);
        assert!(Depth::new(52).is_some());
    }

    #[test]
    fn descending_to_zero_passes_the_mine() {
        let a = Depth::from_letter('a').unwrap();
        assert!(a.is_active());
        assert!(a.descend().is_passed());
        assert_eq!(a.descend().value(), 0);
    }
}

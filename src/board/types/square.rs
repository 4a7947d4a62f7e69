//! Square types and notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A cell on the board, represented as (row, column).
///
/// Row 0 is rank `1`, column 0 is file `a`, so `Square(4, 5)` is `f5`.
/// Outside the crate squares come from [`Square::new`], `TryFrom` or
/// notation, so both coordinates are always below 8:
///
/// ```compile_fail
/// let off_board = othello_engine::Square(8, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)"))]
pub struct Square(pub(crate) usize, pub(crate) usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Cell index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Caller guarantees `idx < 64`.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Step one cell in direction `(dr, dc)`, or `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let r = self.0 as isize + dr;
        let c = self.1 as isize + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square(r as usize, c as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    /// From a cell index, a1 = 0 through h8 = 63.
    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::try_from((idx / 8, idx % 8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file.to_ascii_lowercase() {
            f @ 'a'..='h' => f as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_maps_file_to_col_and_rank_to_row() {
        let sq: Square = "f5".parse().unwrap();
        assert_eq!(sq, Square(4, 5));
        assert_eq!(sq.to_string(), "f5");
        assert_eq!("A1".parse::<Square>().unwrap(), Square(0, 0));
        assert_eq!(Square(7, 7).to_string(), "h8");
    }

    #[test]
    fn rejects_bad_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(1, 1), Some(Square(1, 1)));
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }

    #[test]
    fn index_round_trips() {
        for idx in 0..64 {
            assert_eq!(Square::from_index(idx).as_index(), idx);
        }
        assert!(Square::try_from((8, 0)).is_err());
    }

    #[test]
    fn checked_constructors_reject_off_board_cells() {
        assert_eq!(Square::new(7, 7), Some(Square(7, 7)));
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
        assert_eq!(Square::try_from(63usize), Ok(Square(7, 7)));
        assert_eq!(
            Square::try_from(64usize),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
    }
}

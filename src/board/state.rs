//! Position representation.

use std::fmt;
use std::str::FromStr;

use super::error::PositionError;
use super::types::{Cell, Player, Square};

/// An 8x8 board: 64 cells indexed row-major from a1.
///
/// `Position` is `Copy`; every move produces a new value, so a parent
/// position is never edited underneath a sibling search branch.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [Cell; 64],
}

impl Position {
    /// Standard starting position: White on d4/e5, Black on e4/d5.
    #[must_use]
    pub fn new() -> Self {
        Position::empty()
            .with(Square(3, 3), Cell::White)
            .with(Square(4, 4), Cell::White)
            .with(Square(3, 4), Cell::Black)
            .with(Square(4, 3), Cell::Black)
    }

    /// Board with no discs (for building synthetic positions).
    #[must_use]
    pub const fn empty() -> Self {
        Position {
            cells: [Cell::Empty; 64],
        }
    }

    /// Copy of this position with one cell replaced.
    #[must_use]
    pub fn with(mut self, sq: Square, cell: Cell) -> Self {
        self.cells[sq.as_index()] = cell;
        self
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn cell_at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.as_index()] = cell;
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; 64] {
        &self.cells
    }

    #[must_use]
    pub fn disc_count(&self, player: Player) -> u32 {
        let target = player.cell();
        self.cells.iter().filter(|&&c| c == target).count() as u32
    }

    #[must_use]
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count() as u32
    }

    /// Disc differential from `player`'s point of view
    #[must_use]
    pub fn disc_difference(&self, player: Player) -> i32 {
        self.disc_count(player) as i32 - self.disc_count(player.opponent()) as i32
    }

    /// 64 characters of `-`/`B`/`W`, row-major from a1.
    #[must_use]
    pub fn to_board_string(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    /// Parse 64 characters of `-`/`B`/`W` (`.` also accepted for empty).
    pub fn from_board_string(s: &str) -> Result<Self, PositionError> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 64 {
            return Err(PositionError::WrongLength { found: chars.len() });
        }

        let mut pos = Position::empty();
        for (index, &ch) in chars.iter().enumerate() {
            let cell = Cell::from_char(ch).ok_or(PositionError::InvalidCell { char: ch, index })?;
            pos.cells[index] = cell;
        }
        Ok(pos)
    }

    /// 64 characters from `mover`'s perspective: `-` empty, `X` mover, `O` opponent.
    #[must_use]
    pub fn perspective_key(&self, mover: Player) -> String {
        self.cells
            .iter()
            .map(|c| match c.owner() {
                None => '-',
                Some(p) if p == mover => 'X',
                Some(_) => 'O',
            })
            .collect()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_board_string(s)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_board_string())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in (0..8).rev() {
            write!(f, "{}", row + 1)?;
            for col in 0..8 {
                write!(f, " {}", self.cell(Square(row, col)).to_char())?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "B:{} W:{}",
            self.disc_count(Player::Black),
            self.disc_count(Player::White)
        )
    }
}

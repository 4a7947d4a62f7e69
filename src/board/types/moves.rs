//! Move type and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::square::Square;

/// A disc placement plus the opponent discs it captures.
///
/// Only meaningful for the position and mover it was generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    to: Square,
    flips: Bitboard,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(to: Square, flips: Bitboard) -> Self {
        Move { to, flips }
    }

    /// Destination cell
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Captured cells as a set
    #[inline]
    #[must_use]
    pub const fn flips(self) -> Bitboard {
        self.flips
    }

    /// Captured cells in ascending index order
    #[inline]
    pub fn flipped(self) -> impl Iterator<Item = Square> {
        self.flips.iter()
    }

    #[inline]
    #[must_use]
    pub const fn flip_count(self) -> u32 {
        self.flips.popcount()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to)
    }
}

/// Upper bound on legal moves: one per empty cell.
const MAX_MOVES: usize = 64;

const EMPTY_SLOT: Move = Move::new(Square(0, 0), Bitboard::EMPTY);

/// List of moves with fixed-size backing array, in generation order.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_SLOT; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Find the move landing on `sq`
    #[must_use]
    pub fn find(&self, sq: Square) -> Option<Move> {
        self.iter().copied().find(|m| m.to() == sq)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

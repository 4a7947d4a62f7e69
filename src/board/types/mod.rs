//! Core board types.
//!
//! - `Player` and `Cell` - sides and cell contents
//! - `Square` - (row, column) cell coordinate with `f5`-style notation
//! - `Bitboard` - 64-bit cell set used for flip sets
//! - `Move` and `MoveList` - placements and their capture sets

mod bitboard;
mod moves;
mod player;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList};
pub use player::{Cell, Player};
pub use square::Square;

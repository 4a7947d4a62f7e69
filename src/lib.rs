#[macro_use]
mod diag;

pub mod board;
pub mod book;
pub mod engine;
pub mod protocol;
pub mod tt;
pub mod zobrist;

pub use board::{Move, Player, Position, SearchEngine, SearchResult, Square};
pub use book::OpeningBook;
pub use tt::TranspositionTable;

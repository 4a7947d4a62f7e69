//! Othello board representation and move search.
//!
//! A `Position` is a plain 64-cell array; moves are generated by scanning the
//! eight compass directions from every empty cell.
//!
//! # Example
//! ```
//! use othello_engine::board::{Player, Position};
//!
//! let position = Position::new();
//! let moves = position.legal_moves(Player::Black);
//! println!("Black has {} opening moves", moves.len());
//! ```

mod error;
pub mod eval;
mod eval_tables;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{MoveParseError, PositionError, SquareError};
pub use state::Position;
pub use types::{Bitboard, BitboardIter, Cell, Move, MoveList, Player, Square};

pub use eval::{evaluate, Evaluator, PhaseEvaluator, StaticEvaluator};
pub use eval_tables::WeightTable;

// Public API - search and configuration
pub use search::{
    build_strategy, final_score, EngineConfig, GreedyStrategy, MoveSource, Phase, Profile,
    SearchEngine, SearchResult, SearchStats, Strategy, StrategyKind, BOOK_SCORE,
    DEFAULT_ENDGAME_THRESHOLD, DEFAULT_MIDGAME_DEPTH, DEFAULT_TT_SLOTS, SCORE_INF, WIN_BONUS,
};

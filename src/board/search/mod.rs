//! Move search.
//!
//! Features:
//! - Opening book short-circuit
//! - Fixed-depth NegaScout (principal variation search) in the midgame
//! - Exhaustive NegaAlpha solver once few enough cells are empty
//! - Transposition table keyed by Zobrist fingerprint and side to move
//! - Greedy one-ply fallback behind the same `Strategy` interface

mod constants;
mod endgame;
mod midgame;
mod params;
mod strategy;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::book::OpeningBook;
use crate::tt::TranspositionTable;
use crate::zobrist::ZobristKeys;

use super::{Move, Player, Position};

pub use constants::{
    BOOK_SCORE, DEFAULT_ENDGAME_THRESHOLD, DEFAULT_MIDGAME_DEPTH, DEFAULT_TT_SLOTS, SCORE_INF,
    WIN_BONUS,
};
pub use params::{EngineConfig, Profile};
pub use strategy::{build_strategy, GreedyStrategy, Strategy, StrategyKind};

/// Game stage, decided by the number of empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Midgame,
    Endgame,
}

/// How a move was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveSource {
    Book,
    Midgame,
    Endgame,
    Greedy,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveSource::Book => "book",
            MoveSource::Midgame => "midgame",
            MoveSource::Endgame => "endgame",
            MoveSource::Greedy => "greedy",
        };
        write!(f, "{name}")
    }
}

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    pub best_move: Move,
    /// From the mover's point of view
    pub score: i32,
    pub source: MoveSource,
    pub nodes: u64,
    /// Plies searched; empty cells for an endgame solve, 0 for book moves
    pub depth: u32,
}

/// Statistics tracked during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub tt_stores: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Full search engine. Owns its key table, cache and book, so separate
/// instances never share state.
pub struct SearchEngine {
    config: EngineConfig,
    keys: ZobristKeys,
    tt: TranspositionTable,
    book: OpeningBook,
    stats: SearchStats,
    last_phase: Option<Phase>,
    last_root_empties: Option<u32>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        SearchEngine {
            keys: ZobristKeys::new(config.zobrist_seed),
            tt: TranspositionTable::new(config.tt_slots),
            book: OpeningBook::new(config.book.clone()),
            stats: SearchStats::default(),
            last_phase: None,
            last_root_empties: None,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration. Rebuilds only what the change touches;
    /// the cache is always cleared.
    pub fn set_config(&mut self, config: EngineConfig) {
        if config.zobrist_seed != self.config.zobrist_seed {
            self.keys = ZobristKeys::new(config.zobrist_seed);
        }
        if config.tt_slots != self.config.tt_slots {
            self.tt = TranspositionTable::new(config.tt_slots);
        } else {
            self.tt.clear();
        }
        if config.book != self.config.book {
            self.book = OpeningBook::new(config.book.clone());
        }
        self.last_phase = None;
        self.last_root_empties = None;
        self.config = config;
    }

    /// Use a prepared book instead of the configured source.
    pub fn set_book(&mut self, book: OpeningBook) {
        self.book = book;
    }

    pub fn new_game(&mut self) {
        self.tt.clear();
        self.last_phase = None;
        self.last_root_empties = None;
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    #[must_use]
    pub fn keys(&self) -> &ZobristKeys {
        &self.keys
    }

    #[must_use]
    pub fn phase_for(&self, empty_count: u32) -> Phase {
        if empty_count > self.config.endgame_threshold {
            Phase::Midgame
        } else {
            Phase::Endgame
        }
    }

    /// Best move for `mover`, or `None` when `mover` has to pass.
    pub fn best_move(&mut self, position: &Position, mover: Player) -> Option<SearchResult> {
        let legal = position.legal_moves(mover);
        self.best_move_among(position, mover, legal.as_slice())
    }

    /// Best move among the caller's precomputed legal moves.
    ///
    /// Ties keep the earliest move in `legal`. An empty slice returns `None`.
    pub fn best_move_among(
        &mut self,
        position: &Position,
        mover: Player,
        legal: &[Move],
    ) -> Option<SearchResult> {
        if legal.is_empty() {
            return None;
        }
        self.stats.reset();

        if let Some(result) = self.book_move(position, mover, legal) {
            return Some(result);
        }

        let empties = position.empty_count();
        let phase = self.phase_for(empties);
        self.prepare_table(phase, empties);

        let hash = self.keys.init_hash(position);
        let opponent = mover.opponent();
        let depth = self.config.midgame_depth.max(1);
        let mut best: Option<(Move, i32)> = None;

        for mv in legal {
            let child = position.apply_move(mv, mover);
            let child_hash = self.keys.update_hash(hash, mv, mover);
            // Window (best, +inf): moves that cannot beat the best only return a bound
            let alpha = best.map_or(-SCORE_INF, |(_, s)| s);
            let score = match phase {
                Phase::Midgame => {
                    -self.negascout(&child, child_hash, opponent, depth - 1, -SCORE_INF, -alpha)
                }
                Phase::Endgame => {
                    -self.negaalpha(&child, child_hash, opponent, -SCORE_INF, -alpha)
                }
            };
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((*mv, score));
            }
        }

        let (best_move, score) = best?;
        let (source, depth) = match phase {
            Phase::Midgame => (MoveSource::Midgame, depth),
            Phase::Endgame => (MoveSource::Endgame, empties),
        };
        log_debug!(
            "{source} search: move {best_move} score {score} depth {depth} nodes {} tt hits {} stores {}",
            self.stats.nodes,
            self.stats.tt_hits,
            self.stats.tt_stores
        );

        Some(SearchResult {
            best_move,
            score,
            source,
            nodes: self.stats.nodes,
            depth,
        })
    }

    /// Clear the cache unless every stored entry came from a root at least
    /// as full as this one in the same phase. Entries from emptier roots were
    /// searched deeper than this root would search them and would change its
    /// answer; entries from fuller roots are never deep enough to hit.
    fn prepare_table(&mut self, phase: Phase, empties: u32) {
        let went_back = self.last_root_empties.is_some_and(|last| empties > last);
        if went_back || self.last_phase != Some(phase) {
            // Heuristic and exact scores must not meet in the same table either
            self.tt.clear();
        }
        self.last_phase = Some(phase);
        self.last_root_empties = Some(empties);
    }

    /// First book reply that is among the legal moves, in book order.
    fn book_move(&self, position: &Position, mover: Player, legal: &[Move]) -> Option<SearchResult> {
        let replies = self.book.lookup(position, mover);
        let best_move = replies
            .iter()
            .find_map(|sq| legal.iter().find(|m| m.to() == *sq))
            .copied()?;
        log_info!("book move {best_move} for {mover}");
        Some(SearchResult {
            best_move,
            score: BOOK_SCORE,
            source: MoveSource::Book,
            nodes: 0,
            depth: 0,
        })
    }

    /// Exact game-theoretic score of `position` with `mover` to move,
    /// solving to the end regardless of the endgame threshold.
    pub fn solve(&mut self, position: &Position, mover: Player) -> i32 {
        self.stats.reset();
        self.prepare_table(Phase::Endgame, position.empty_count());
        let hash = self.keys.init_hash(position);
        self.negaalpha(position, hash, mover, -SCORE_INF, SCORE_INF)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(EngineConfig::default())
    }
}

/// Score of a finished game for `mover`: disc differential, pushed out by
/// `WIN_BONUS` when decisive.
#[must_use]
pub fn final_score(position: &Position, mover: Player) -> i32 {
    let diff = position.disc_difference(mover);
    match diff.signum() {
        1 => diff + WIN_BONUS,
        -1 => diff - WIN_BONUS,
        _ => 0,
    }
}

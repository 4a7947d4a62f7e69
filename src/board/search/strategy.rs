//! Interchangeable move-selection strategies.

use std::fmt;
use std::str::FromStr;

use crate::board::eval::{Evaluator, StaticEvaluator};
use crate::board::{Move, Player, Position};

use super::{EngineConfig, MoveSource, SearchEngine, SearchResult};

/// Anything that can pick a move for the side to move.
pub trait Strategy: Send {
    fn name(&self) -> &'static str;

    /// Pick among `legal`, which the caller computed for `mover`.
    /// `None` when `legal` is empty.
    fn choose_move(
        &mut self,
        position: &Position,
        mover: Player,
        legal: &[Move],
    ) -> Option<SearchResult>;

    fn best_move(&mut self, position: &Position, mover: Player) -> Option<SearchResult> {
        let legal = position.legal_moves(mover);
        self.choose_move(position, mover, legal.as_slice())
    }

    /// Forget anything carried over from earlier positions.
    fn new_game(&mut self) {}

    /// Apply a new configuration where the strategy has one.
    fn configure(&mut self, _config: &EngineConfig) {}
}

impl Strategy for SearchEngine {
    fn name(&self) -> &'static str {
        "search"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        mover: Player,
        legal: &[Move],
    ) -> Option<SearchResult> {
        self.best_move_among(position, mover, legal)
    }

    fn new_game(&mut self) {
        SearchEngine::new_game(self);
    }

    fn configure(&mut self, config: &EngineConfig) {
        self.set_config(config.clone());
    }
}

/// One-ply greedy choice by static weights. No cache, no lookahead.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy {
    evaluator: StaticEvaluator,
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        mover: Player,
        legal: &[Move],
    ) -> Option<SearchResult> {
        let mut best: Option<(Move, i32)> = None;
        for mv in legal {
            let child = position.apply_move(mv, mover);
            let score = self.evaluator.evaluate(&child, mover, child.empty_count());
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((*mv, score));
            }
        }
        let (best_move, score) = best?;
        Some(SearchResult {
            best_move,
            score,
            source: MoveSource::Greedy,
            nodes: legal.len() as u64,
            depth: 1,
        })
    }
}

/// Which strategy to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Search,
    Greedy,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Search => write!(f, "search"),
            StrategyKind::Greedy => write!(f, "greedy"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(StrategyKind::Search),
            "greedy" => Ok(StrategyKind::Greedy),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// Build a strategy once; callers keep it for the whole game.
#[must_use]
pub fn build_strategy(kind: StrategyKind, config: EngineConfig) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Search => Box::new(SearchEngine::new(config)),
        StrategyKind::Greedy => Box::new(GreedyStrategy::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Square};

    #[test]
    fn greedy_grabs_the_corner() {
        // Black can play a1 (through b2) or b1 (through c1)
        let pos = Position::empty()
            .with(Square(1, 1), Cell::White)
            .with(Square(2, 2), Cell::Black)
            .with(Square(0, 2), Cell::White)
            .with(Square(0, 3), Cell::Black);
        let mut greedy = GreedyStrategy::default();
        let result = greedy.best_move(&pos, Player::Black).unwrap();
        assert_eq!(result.best_move.to(), Square(0, 0));
        assert_eq!(result.source, MoveSource::Greedy);
    }

    #[test]
    fn greedy_returns_none_without_moves() {
        let mut greedy = GreedyStrategy::default();
        assert!(greedy.choose_move(&Position::new(), Player::Black, &[]).is_none());
    }

    #[test]
    fn factory_builds_requested_kind() {
        let config = EngineConfig::default();
        assert_eq!(build_strategy(StrategyKind::Search, config.clone()).name(), "search");
        assert_eq!(build_strategy(StrategyKind::Greedy, config).name(), "greedy");
        assert_eq!("GREEDY".parse::<StrategyKind>(), Ok(StrategyKind::Greedy));
    }
}

//! Static position evaluation.
//!
//! Scores are zero-sum weighted disc sums from the mover's point of view:
//! `+weight` per mover disc, `-weight` per opponent disc.

use super::eval_tables::{WeightTable, PHASE_BANDS, STATIC_WEIGHTS};
use super::state::Position;
use super::types::Player;

/// A static scoring function. Positive favours `mover`.
pub trait Evaluator {
    fn evaluate(&self, position: &Position, mover: Player, empty_count: u32) -> i32;
}

/// Phase-banded evaluator used by the full search.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseEvaluator;

/// One fixed table for every phase; used by the greedy fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticEvaluator;

impl Evaluator for PhaseEvaluator {
    fn evaluate(&self, position: &Position, mover: Player, empty_count: u32) -> i32 {
        weighted_sum(position, mover, table_for_phase(empty_count))
    }
}

impl Evaluator for StaticEvaluator {
    fn evaluate(&self, position: &Position, mover: Player, _empty_count: u32) -> i32 {
        weighted_sum(position, mover, &STATIC_WEIGHTS)
    }
}

/// Phase-banded evaluation of `position` for `mover`.
#[must_use]
pub fn evaluate(position: &Position, mover: Player, empty_count: u32) -> i32 {
    PhaseEvaluator.evaluate(position, mover, empty_count)
}

/// Weight table for the band containing `empty_count`.
#[must_use]
pub fn table_for_phase(empty_count: u32) -> &'static WeightTable {
    PHASE_BANDS
        .iter()
        .find(|(min_empty, _)| empty_count >= *min_empty)
        .map_or(PHASE_BANDS[PHASE_BANDS.len() - 1].1, |(_, table)| *table)
}

fn weighted_sum(position: &Position, mover: Player, table: &WeightTable) -> i32 {
    position
        .cells()
        .iter()
        .zip(table.iter())
        .map(|(cell, &weight)| match cell.owner() {
            Some(p) if p == mover => weight,
            Some(_) => -weight,
            None => 0,
        })
        .sum()
}

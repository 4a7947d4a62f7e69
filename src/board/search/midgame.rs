//! Fixed-depth NegaScout.

use crate::board::eval::evaluate;
use crate::board::{Player, Position};
use crate::tt::BoundType;

use super::SearchEngine;

impl SearchEngine {
    /// Principal variation search to `depth` plies, score from `mover`'s view.
    ///
    /// A pass keeps `depth`; only a placement consumes a ply.
    pub(super) fn negascout(
        &mut self,
        position: &Position,
        hash: u64,
        mover: Player,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let key = hash ^ self.keys.side_key(mover);
        if self.config.use_tt {
            if let Some(score) = self.tt.probe(key, depth, alpha, beta) {
                self.stats.tt_hits += 1;
                return score;
            }
        }

        let empties = position.empty_count();
        if depth == 0 {
            return evaluate(position, mover, empties);
        }

        let opponent = mover.opponent();
        let moves = position.legal_moves(mover);
        let alpha_orig = alpha;

        if moves.is_empty() {
            if !position.has_legal_move(opponent) {
                return evaluate(position, mover, empties);
            }
            let score = -self.negascout(position, hash, opponent, depth, -beta, -alpha);
            self.store(key, depth, score, alpha_orig, beta);
            return score;
        }

        let mut best_score = -super::SCORE_INF;
        for (i, mv) in moves.iter().enumerate() {
            let child = position.apply_move(mv, mover);
            let child_hash = self.keys.update_hash(hash, mv, mover);

            let score = if i == 0 {
                -self.negascout(&child, child_hash, opponent, depth - 1, -beta, -alpha)
            } else {
                let scout =
                    -self.negascout(&child, child_hash, opponent, depth - 1, -alpha - 1, -alpha);
                if scout > alpha && scout < beta {
                    -self.negascout(&child, child_hash, opponent, depth - 1, -beta, -alpha)
                } else {
                    scout
                }
            };

            if score > best_score {
                best_score = score;
                if score > alpha {
                    alpha = score;
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }

        self.store(key, depth, best_score, alpha_orig, beta);
        best_score
    }

    /// Record a node result, classifying it against the window it was searched with.
    pub(super) fn store(&mut self, key: u64, depth: u32, score: i32, alpha: i32, beta: i32) {
        if !self.config.use_tt {
            return;
        }
        let bound = if score <= alpha {
            BoundType::UpperBound
        } else if score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt.store(key, depth, score, bound);
        self.stats.tt_stores += 1;
    }
}

//! Exhaustive NegaAlpha endgame solver.

use crate::board::{Player, Position};

use super::{final_score, SearchEngine, SCORE_INF};

impl SearchEngine {
    /// Alpha-beta to the end of the game, score from `mover`'s view.
    ///
    /// Cache entries are tagged with the empty-cell count, which is the
    /// remaining depth of an exhaustive search.
    pub(super) fn negaalpha(
        &mut self,
        position: &Position,
        hash: u64,
        mover: Player,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let empties = position.empty_count();
        if empties == 0 {
            return final_score(position, mover);
        }

        let key = hash ^ self.keys.side_key(mover);
        if self.config.use_tt {
            if let Some(score) = self.tt.probe(key, empties, alpha, beta) {
                self.stats.tt_hits += 1;
                return score;
            }
        }

        let opponent = mover.opponent();
        let moves = position.legal_moves(mover);
        let alpha_orig = alpha;

        if moves.is_empty() {
            if !position.has_legal_move(opponent) {
                return final_score(position, mover);
            }
            let score = -self.negaalpha(position, hash, opponent, -beta, -alpha);
            self.store(key, empties, score, alpha_orig, beta);
            return score;
        }

        let mut best_score = -SCORE_INF;
        for mv in &moves {
            let child = position.apply_move(mv, mover);
            let child_hash = self.keys.update_hash(hash, mv, mover);
            let score = -self.negaalpha(&child, child_hash, opponent, -beta, -alpha);

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

        self.store(key, empties, best_score, alpha_orig, beta);
        best_score
    }
}

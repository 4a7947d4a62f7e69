//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Passes, finished games and board-edge captures
//! - `search.rs` - Midgame and endgame search behaviour
//! - `proptest.rs` - Property-based tests over random playouts


use rand::prelude::*;

use crate::board::{Player, Position};

/// Play up to `plies` random legal moves from the start, passing whenever
/// the side to move is blocked. Returns the reached position and the side
/// to move there.
pub(super) fn random_playout(seed: u64, plies: usize) -> (Position, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::new();
    let mut mover = Player::Black;

    for _ in 0..plies {
        let moves = position.legal_moves(mover);
        if moves.is_empty() {
            if !position.has_legal_move(mover.opponent()) {
                break;
            }
            mover = mover.opponent();
            continue;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        position = position.apply_move(&mv, mover);
        mover = mover.opponent();
    }
    (position, mover)
}

/// Same as `random_playout` but keeps going until at most `empties` cells
/// remain (or the game ends).
pub(super) fn playout_to_empties(seed: u64, empties: u32) -> (Position, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::new();
    let mut mover = Player::Black;

    while position.empty_count() > empties {
        let moves = position.legal_moves(mover);
        if moves.is_empty() {
            if !position.has_legal_move(mover.opponent()) {
                break;
            }
            mover = mover.opponent();
            continue;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        position = position.apply_move(&mv, mover);
        mover = mover.opponent();
    }
    (position, mover)
}

//! Zobrist hashing for positions.
//!
//! Provides incrementally-updatable 64-bit position fingerprints for the
//! transposition table. Keys come from a seeded generator so fingerprints,
//! cache behaviour and search traces are reproducible across runs.

use rand::prelude::*;

use crate::board::{Cell, Move, Player, Position};

/// Seed used when the configuration does not override it
pub const DEFAULT_ZOBRIST_SEED: u64 = 1_234_567_890;

#[derive(Clone, Debug)]
pub struct ZobristKeys {
    // cell_keys[cell_index][occupant]: occupant 0=Empty, 1=Black, 2=White
    cell_keys: [[u64; 3]; 64],
    white_to_move_key: u64,
    seed: u64,
}

impl ZobristKeys {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cell_keys = [[0u64; 3]; 64];

        for cell in &mut cell_keys {
            for key in cell.iter_mut() {
                *key = rng.gen();
            }
        }
        let white_to_move_key = rng.gen();

        ZobristKeys {
            cell_keys,
            white_to_move_key,
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    fn key(&self, idx: usize, cell: Cell) -> u64 {
        self.cell_keys[idx][cell.index()]
    }

    /// Fingerprint of a position computed from scratch.
    #[must_use]
    pub fn init_hash(&self, position: &Position) -> u64 {
        position
            .cells()
            .iter()
            .enumerate()
            .fold(0, |hash, (idx, &cell)| hash ^ self.key(idx, cell))
    }

    /// Fingerprint after `mover` plays `mv`, derived from the parent's.
    ///
    /// The destination goes Empty -> mover and every flipped cell goes
    /// opponent -> mover; XOR-ing a key twice cancels it.
    #[must_use]
    pub fn update_hash(&self, hash: u64, mv: &Move, mover: Player) -> u64 {
        let own = mover.cell();
        let theirs = mover.opponent().cell();

        let to = mv.to().as_index();
        let mut hash = hash ^ self.key(to, Cell::Empty) ^ self.key(to, own);
        for sq in mv.flipped() {
            let idx = sq.as_index();
            hash ^= self.key(idx, theirs) ^ self.key(idx, own);
        }
        hash
    }

    /// Side-to-move component mixed into cache keys only.
    #[inline]
    #[must_use]
    pub fn side_key(&self, mover: Player) -> u64 {
        match mover {
            Player::Black => 0,
            Player::White => self.white_to_move_key,
        }
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::new(DEFAULT_ZOBRIST_SEED)
    }
}

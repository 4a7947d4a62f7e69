//! Transposition table for caching search results.
//!
//! Fixed number of slots (a power of two) indexed by the low bits of the key,
//! one entry per slot and no chaining. Every store overwrites its slot, so
//! the table only ever speeds search up; a lost entry is simply re-searched.

use crate::board::DEFAULT_TT_SLOTS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub bound_type: BoundType,
}

pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table with at least `slots` entries (rounded up to a power of two).
    #[must_use]
    pub fn new(slots: usize) -> Self {
        let num_entries = slots.max(1).next_power_of_two();
        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Raw entry for `key`, if its slot still holds it.
    #[must_use]
    pub fn entry(&self, key: u64) -> Option<&TTEntry> {
        self.table[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Look up a usable score for a node searched to `depth` with window (alpha, beta).
    ///
    /// A hit needs a matching key and a stored depth of at least `depth`.
    /// Bounded entries only answer when they already decide the window:
    /// a lower bound at or above `beta` returns `beta`, an upper bound at or
    /// below `alpha` returns `alpha`.
    #[must_use]
    pub fn probe(&self, key: u64, depth: u32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entry(key)?;
        if entry.depth < depth {
            return None;
        }
        match entry.bound_type {
            BoundType::Exact => Some(entry.score),
            BoundType::LowerBound if entry.score >= beta => Some(beta),
            BoundType::UpperBound if entry.score <= alpha => Some(alpha),
            _ => None,
        }
    }

    /// Store an entry, unconditionally replacing whatever held the slot.
    pub fn store(&mut self, key: u64, depth: u32, score: i32, bound_type: BoundType) {
        let index = self.index(key);
        self.table[index] = Some(TTEntry {
            key,
            depth,
            score,
            bound_type,
        });
    }

    /// Occupied slots in per mille (0-1000).
    #[must_use]
    pub fn occupancy_per_mille(&self) -> u32 {
        let sample = self.table.len().min(1000);
        let occupied = self.table.iter().take(sample).filter(|e| e.is_some()).count();
        ((occupied * 1000) / sample) as u32
    }

    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|slot| *slot = None);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_SLOTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_rounds_to_power_of_two() {
        assert_eq!(TranspositionTable::new(1000).capacity(), 1024);
        assert_eq!(TranspositionTable::new(0).capacity(), 1);
        assert_eq!(TranspositionTable::default().capacity(), 65536);
    }

    #[test]
    fn test_exact_entry_hits_at_shallower_depth() {
        let mut tt = TranspositionTable::new(16);
        tt.store(0xABCD, 5, 42, BoundType::Exact);
        assert_eq!(tt.probe(0xABCD, 5, -100, 100), Some(42));
        assert_eq!(tt.probe(0xABCD, 3, -100, 100), Some(42));
        assert_eq!(tt.probe(0xABCD, 6, -100, 100), None);
    }

    #[test]
    fn test_bounds_only_answer_when_they_decide_the_window() {
        let mut tt = TranspositionTable::new(16);
        tt.store(1, 4, 50, BoundType::LowerBound);
        assert_eq!(tt.probe(1, 4, 0, 40), Some(40));
        assert_eq!(tt.probe(1, 4, 0, 60), None);

        tt.store(2, 4, -50, BoundType::UpperBound);
        assert_eq!(tt.probe(2, 4, -40, 0), Some(-40));
        assert_eq!(tt.probe(2, 4, -60, 0), None);
    }

    #[test]
    fn test_slot_collision_overwrites_and_guards() {
        let mut tt = TranspositionTable::new(16);
        // Same low bits, different keys
        tt.store(0x10, 8, 7, BoundType::Exact);
        tt.store(0x110, 1, 9, BoundType::Exact);
        assert_eq!(tt.probe(0x10, 1, -100, 100), None);
        assert_eq!(tt.probe(0x110, 1, -100, 100), Some(9));
    }

    #[test]
    fn test_clear_empties_table() {
        let mut tt = TranspositionTable::new(4);
        for key in 0..4 {
            tt.store(key, 1, 0, BoundType::Exact);
        }
        assert_eq!(tt.occupancy_per_mille(), 1000);
        tt.clear();
        assert_eq!(tt.occupancy_per_mille(), 0);
        assert!(tt.entry(1).is_none());
    }
}

//! Positional weight tables.
//!
//! Row-major from a1. All tables are symmetric under the board's eight
//! reflections/rotations, so orientation never matters.

pub type WeightTable = [i32; 64];

/// Opening: corners dominate, X/C-squares next to empty corners are poison.
pub const OPENING_WEIGHTS: WeightTable = [
    100, -40, 20, 5, 5, 20, -40, 100, //
    -40, -80, -1, -1, -1, -1, -80, -40, //
    20, -1, 5, 1, 1, 5, -1, 20, //
    5, -1, 1, 0, 0, 1, -1, 5, //
    5, -1, 1, 0, 0, 1, -1, 5, //
    20, -1, 5, 1, 1, 5, -1, 20, //
    -40, -80, -1, -1, -1, -1, -80, -40, //
    100, -40, 20, 5, 5, 20, -40, 100,
];

pub const MIDGAME_WEIGHTS: WeightTable = [
    120, -20, 20, 5, 5, 20, -20, 120, //
    -20, -40, -5, -5, -5, -5, -40, -20, //
    20, -5, 15, 3, 3, 15, -5, 20, //
    5, -5, 3, 3, 3, 3, -5, 5, //
    5, -5, 3, 3, 3, 3, -5, 5, //
    20, -5, 15, 3, 3, 15, -5, 20, //
    -20, -40, -5, -5, -5, -5, -40, -20, //
    120, -20, 20, 5, 5, 20, -20, 120,
];

/// Late game: flattened toward raw disc value ahead of the exhaustive solver.
pub const LATE_WEIGHTS: WeightTable = [
    60, -5, 15, 10, 10, 15, -5, 60, //
    -5, -10, 3, 3, 3, 3, -10, -5, //
    15, 3, 5, 4, 4, 5, 3, 15, //
    10, 3, 4, 2, 2, 4, 3, 10, //
    10, 3, 4, 2, 2, 4, 3, 10, //
    15, 3, 5, 4, 4, 5, 3, 15, //
    -5, -10, 3, 3, 3, 3, -10, -5, //
    60, -5, 15, 10, 10, 15, -5, 60,
];

/// Single table used by the greedy fallback for every phase.
pub const STATIC_WEIGHTS: WeightTable = [
    30, -12, 0, -1, -1, 0, -12, 30, //
    -12, -15, -3, -3, -3, -3, -15, -12, //
    0, -3, 0, -1, -1, 0, -3, 0, //
    -1, -3, -1, -1, -1, -1, -3, -1, //
    -1, -3, -1, -1, -1, -1, -3, -1, //
    0, -3, 0, -1, -1, 0, -3, 0, //
    -12, -15, -3, -3, -3, -3, -15, -12, //
    30, -12, 0, -1, -1, 0, -12, 30,
];

/// Phase bands as (minimum empty cells, table), most empties first.
pub const PHASE_BANDS: [(u32, &WeightTable); 3] = [
    (41, &OPENING_WEIGHTS),
    (21, &MIDGAME_WEIGHTS),
    (0, &LATE_WEIGHTS),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn is_symmetric(table: &WeightTable) -> bool {
        (0..8).all(|r| {
            (0..8).all(|c| {
                let v = table[r * 8 + c];
                v == table[r * 8 + (7 - c)] && v == table[(7 - r) * 8 + c] && v == table[c * 8 + r]
            })
        })
    }

    #[test]
    fn tables_are_symmetric() {
        for table in [&OPENING_WEIGHTS, &MIDGAME_WEIGHTS, &LATE_WEIGHTS, &STATIC_WEIGHTS] {
            assert!(is_symmetric(table));
        }
    }

    #[test]
    fn bands_are_ordered_and_cover_zero() {
        assert!(PHASE_BANDS.windows(2).all(|w| w[0].0 > w[1].0));
        assert_eq!(PHASE_BANDS[PHASE_BANDS.len() - 1].0, 0);
    }
}

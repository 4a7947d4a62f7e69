//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Larger than any reachable score; root window bound
pub const SCORE_INF: i32 = 1 << 29;

/// Added to (subtracted from) the disc differential of a won (lost) finished game
pub const WIN_BONUS: i32 = 10_000;

/// Score reported for a move taken from the opening book
pub const BOOK_SCORE: i32 = 1_000_000;

// ============================================================================
// DEFAULT TUNING
// ============================================================================

/// Fixed search depth (plies) while more than the endgame threshold cells are empty
pub const DEFAULT_MIDGAME_DEPTH: u32 = 6;

/// At or below this many empty cells the game is solved exhaustively
pub const DEFAULT_ENDGAME_THRESHOLD: u32 = 12;

/// Transposition table slots
pub const DEFAULT_TT_SLOTS: usize = 1 << 16;

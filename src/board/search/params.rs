use std::fmt;
use std::str::FromStr;

use crate::book::BookSource;
use crate::zobrist::DEFAULT_ZOBRIST_SEED;

use super::constants::{DEFAULT_ENDGAME_THRESHOLD, DEFAULT_MIDGAME_DEPTH, DEFAULT_TT_SLOTS};

/// Named tuning profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Profile {
    /// Depth 6, exhaustive from 12 empties
    #[default]
    Standard,
    /// Depth 7, exhaustive from 14 empties
    Deep,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Standard => write!(f, "standard"),
            Profile::Deep => write!(f, "deep"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Profile::Standard),
            "deep" => Ok(Profile::Deep),
            other => Err(format!("unknown profile '{other}'")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub midgame_depth: u32,
    pub endgame_threshold: u32,
    pub tt_slots: usize,
    pub zobrist_seed: u64,
    pub use_tt: bool,
    pub book: BookSource,
}

impl EngineConfig {
    #[must_use]
    pub fn profile(profile: Profile) -> Self {
        let (midgame_depth, endgame_threshold) = match profile {
            Profile::Standard => (DEFAULT_MIDGAME_DEPTH, DEFAULT_ENDGAME_THRESHOLD),
            Profile::Deep => (7, 14),
        };
        EngineConfig {
            midgame_depth,
            endgame_threshold,
            ..EngineConfig::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.midgame_depth = depth.max(1);
        self
    }

    #[must_use]
    pub fn with_endgame_threshold(mut self, empties: u32) -> Self {
        self.endgame_threshold = empties;
        self
    }

    #[must_use]
    pub fn with_tt(mut self, enabled: bool) -> Self {
        self.use_tt = enabled;
        self
    }

    #[must_use]
    pub fn with_book(mut self, book: BookSource) -> Self {
        self.book = book;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            midgame_depth: DEFAULT_MIDGAME_DEPTH,
            endgame_threshold: DEFAULT_ENDGAME_THRESHOLD,
            tt_slots: DEFAULT_TT_SLOTS,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
            use_tt: true,
            book: BookSource::Embedded,
        }
    }
}

use std::io::{self, Write};
use std::path::PathBuf;

use crate::board::{EngineConfig, Profile, StrategyKind};
use crate::book::BookSource;

use super::ProtocolError;

const MAX_DEPTH: u32 = 20;
const MAX_HASH_SLOTS: usize = 1 << 24;

/// Settings adjustable through `setoption`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub kind: StrategyKind,
    pub config: EngineConfig,
}

fn book_label(book: &BookSource) -> String {
    match book {
        BookSource::Disabled => "none".to_string(),
        BookSource::Embedded => "embedded".to_string(),
        BookSource::File(path) => path.display().to_string(),
        BookSource::Inline => "inline".to_string(),
    }
}

fn invalid(name: &str, value: &str) -> ProtocolError {
    ProtocolError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

impl EngineOptions {
    /// Identification block followed by `engineok`.
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        let config = &self.config;
        writeln!(out, "id name othello_engine {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
            config.midgame_depth
        )?;
        writeln!(
            out,
            "option name Endgame Threshold type spin default {} min 0 max 64",
            config.endgame_threshold
        )?;
        writeln!(
            out,
            "option name Hash Slots type spin default {} min 1 max {MAX_HASH_SLOTS}",
            config.tt_slots
        )?;
        writeln!(out, "option name Seed type string default {}", config.zobrist_seed)?;
        writeln!(out, "option name Use Hash type check default {}", config.use_tt)?;
        writeln!(out, "option name Book type string default {}", book_label(&config.book))?;
        writeln!(
            out,
            "option name Profile type combo default {} var standard var deep",
            Profile::default()
        )?;
        writeln!(
            out,
            "option name Strategy type combo default {} var search var greedy",
            self.kind
        )?;
        writeln!(out, "engineok")
    }

    /// Apply one `setoption`. Names are case-insensitive.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), ProtocolError> {
        let normalized = name.trim().to_ascii_lowercase();
        let raw = value.unwrap_or("").trim();
        let config = &mut self.config;

        match normalized.as_str() {
            "depth" => {
                let depth: u32 = raw.parse().map_err(|_| invalid(name, raw))?;
                config.midgame_depth = depth.clamp(1, MAX_DEPTH);
            }
            "endgame threshold" => {
                let empties: u32 = raw.parse().map_err(|_| invalid(name, raw))?;
                config.endgame_threshold = empties.min(64);
            }
            "hash slots" => {
                let slots: usize = raw.parse().map_err(|_| invalid(name, raw))?;
                config.tt_slots = slots.clamp(1, MAX_HASH_SLOTS);
            }
            "seed" => {
                config.zobrist_seed = raw.parse().map_err(|_| invalid(name, raw))?;
            }
            "use hash" => {
                config.use_tt = parse_bool(raw).ok_or_else(|| invalid(name, raw))?;
            }
            "book" => {
                config.book = match raw.to_ascii_lowercase().as_str() {
                    "" => return Err(invalid(name, raw)),
                    "none" | "off" => BookSource::Disabled,
                    "embedded" | "default" => BookSource::Embedded,
                    _ => BookSource::File(PathBuf::from(raw)),
                };
            }
            "profile" => {
                let profile: Profile = raw.parse().map_err(|_| invalid(name, raw))?;
                let tuned = EngineConfig::profile(profile);
                config.midgame_depth = tuned.midgame_depth;
                config.endgame_threshold = tuned.endgame_threshold;
            }
            "strategy" => {
                self.kind = raw.parse().map_err(|_| invalid(name, raw))?;
            }
            _ => {
                return Err(ProtocolError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// Split `setoption name <name...> [value <value...>]`.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" if mode.is_empty() => mode = "name",
            "value" if mode == "name" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_multi_word_names() {
        let parts = ["setoption", "name", "Endgame", "Threshold", "value", "14"];
        assert_eq!(
            parse_setoption(&parts),
            Some(("Endgame Threshold".to_string(), Some("14".to_string())))
        );
        assert_eq!(parse_setoption(&["setoption", "value", "3"]), None);
    }

    #[test]
    fn applies_known_options() {
        let mut options = EngineOptions::default();
        options.apply_setoption("depth", Some("40")).unwrap();
        assert_eq!(options.config.midgame_depth, MAX_DEPTH);
        options.apply_setoption("Use Hash", Some("false")).unwrap();
        assert!(!options.config.use_tt);
        options.apply_setoption("Book", Some("none")).unwrap();
        assert_eq!(options.config.book, BookSource::Disabled);
        options.apply_setoption("Strategy", Some("greedy")).unwrap();
        assert_eq!(options.kind, StrategyKind::Greedy);
    }

    #[test]
    fn profile_keeps_unrelated_settings() {
        let mut options = EngineOptions::default();
        options.apply_setoption("Seed", Some("42")).unwrap();
        options.apply_setoption("Profile", Some("deep")).unwrap();
        assert_eq!(options.config.midgame_depth, 7);
        assert_eq!(options.config.endgame_threshold, 14);
        assert_eq!(options.config.zobrist_seed, 42);
    }

    #[test]
    fn rejects_bad_names_and_values() {
        let mut options = EngineOptions::default();
        assert!(matches!(
            options.apply_setoption("Threads", Some("4")),
            Err(ProtocolError::UnknownOption { .. })
        ));
        assert!(matches!(
            options.apply_setoption("Depth", Some("deep")),
            Err(ProtocolError::InvalidOptionValue { .. })
        ));
        assert_eq!(options, EngineOptions::default());
    }

    #[test]
    fn option_list_ends_with_engineok() {
        let mut out = Vec::new();
        EngineOptions::default().print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("id name othello_engine"));
        assert!(text.contains("option name Depth type spin default 6"));
        assert_eq!(text.lines().last(), Some("engineok"));
    }
}

//! Opening book.
//!
//! Maps a 64-character position key, written from the mover's point of view
//! (`-` empty, `X` mover, `O` opponent, row-major from a1), to preferred
//! replies in order. Book text has one entry per line:
//!
//! ```text
//! # comment
//! ---------------------------OX------XO--------------------------- f5 d3 c4 e6
//! ```
//!
//! Missing or malformed book data never fails a search: bad lines are
//! skipped with a warning and a missing file behaves as an empty book.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::board::{Player, Position, Square};

/// Built-in book: the four symmetric first moves and two common replies.
pub const EMBEDDED_BOOK: &str = "\
# start, black to move
---------------------------OX------XO--------------------------- f5 d3 c4 e6
# after f5
---------------------------XO------OOO-------------------------- d6 f6 f4
# after d3
-------------------O-------OO------OX--------------------------- c5 c3 e3
";

/// Where the book's entries come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookSource {
    Disabled,
    Embedded,
    File(PathBuf),
    /// Text handed to [`OpeningBook::from_text`]; has no backing data of its own.
    Inline,
}

/// Problems found while reading book data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// File could not be read
    Io { path: PathBuf, message: String },
    /// Key is not 64 characters of `-`, `X`, `O`
    BadKey { line: usize },
    /// Move notation is not `<a-h><1-8>`
    BadMove { line: usize, notation: String },
    /// Key without any replies
    MissingMoves { line: usize },
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::Io { path, message } => {
                write!(f, "cannot read book {}: {message}", path.display())
            }
            BookError::BadKey { line } => write!(f, "line {line}: malformed position key"),
            BookError::BadMove { line, notation } => {
                write!(f, "line {line}: invalid move '{notation}'")
            }
            BookError::MissingMoves { line } => write!(f, "line {line}: no moves listed"),
        }
    }
}

impl std::error::Error for BookError {}

type BookTable = HashMap<String, Vec<Square>>;

/// Parse book text, keeping every well-formed line.
///
/// Returns the table together with the problems found on rejected lines.
#[must_use]
pub fn parse_book(text: &str) -> (BookTable, Vec<BookError>) {
    let mut table = BookTable::new();
    let mut errors = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut tokens = content.split_whitespace();
        let Some(key) = tokens.next() else { continue };
        if key.len() != 64 || !key.chars().all(|c| matches!(c, '-' | 'X' | 'O')) {
            errors.push(BookError::BadKey { line });
            continue;
        }

        let mut replies = Vec::new();
        let mut bad = None;
        for token in tokens {
            match token.parse::<Square>() {
                Ok(sq) => replies.push(sq),
                Err(_) => {
                    bad = Some(token.to_string());
                    break;
                }
            }
        }

        match bad {
            Some(notation) => errors.push(BookError::BadMove { line, notation }),
            None if replies.is_empty() => errors.push(BookError::MissingMoves { line }),
            None => {
                table.insert(key.to_string(), replies);
            }
        }
    }

    (table, errors)
}

/// Lazily loaded opening book. The backing data is read once, in full, on
/// the first lookup.
pub struct OpeningBook {
    source: BookSource,
    entries: OnceCell<BookTable>,
}

impl OpeningBook {
    #[must_use]
    pub fn new(source: BookSource) -> Self {
        OpeningBook {
            source,
            entries: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        OpeningBook::new(BookSource::Disabled)
    }

    #[must_use]
    pub fn embedded() -> Self {
        OpeningBook::new(BookSource::Embedded)
    }

    #[must_use]
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        OpeningBook::new(BookSource::File(path.as_ref().to_path_buf()))
    }

    /// Book over in-memory text, parsed immediately.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let book = OpeningBook::new(BookSource::Inline);
        let _ = book.entries.set(load_text(text, "inline"));
        book
    }

    #[must_use]
    pub fn source(&self) -> &BookSource {
        &self.source
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.entries.get().is_some()
    }

    fn entries(&self) -> &BookTable {
        self.entries.get_or_init(|| match &self.source {
            BookSource::Disabled | BookSource::Inline => BookTable::new(),
            BookSource::Embedded => load_text(EMBEDDED_BOOK, "embedded"),
            BookSource::File(path) => match fs::read_to_string(path) {
                Ok(text) => load_text(&text, &path.display().to_string()),
                Err(e) => {
                    let err = BookError::Io {
                        path: path.clone(),
                        message: e.to_string(),
                    };
                    log_warn!("{err}; continuing without a book");
                    BookTable::new()
                }
            },
        })
    }

    /// Number of positions in the book (loads it if needed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Preferred replies for `mover` in `position`, best first. Empty when
    /// the position is not in the book.
    #[must_use]
    pub fn lookup(&self, position: &Position, mover: Player) -> Vec<Square> {
        if self.source == BookSource::Disabled {
            return Vec::new();
        }
        self.entries()
            .get(&position.perspective_key(mover))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        OpeningBook::embedded()
    }
}

fn load_text(text: &str, origin: &str) -> BookTable {
    let (table, errors) = parse_book(text);
    for err in &errors {
        log_warn!("book {origin}: {err}; line skipped");
    }
    log_debug!("book {origin}: {} positions loaded", table.len());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_book_parses_cleanly() {
        let (table, errors) = parse_book(EMBEDDED_BOOK);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn embedded_replies_are_legal() {
        let book = OpeningBook::embedded();
        let start = Position::new();
        let replies = book.lookup(&start, Player::Black);
        assert_eq!(replies.len(), 4);
        for sq in &replies {
            assert!(start.find_move(Player::Black, *sq).is_some());
        }

        let f5 = start.parse_move(Player::Black, "f5").unwrap();
        let after = start.apply_move(&f5, Player::Black);
        let replies = book.lookup(&after, Player::White);
        assert_eq!(replies.first().map(ToString::to_string).as_deref(), Some("d6"));
        for sq in &replies {
            assert!(after.find_move(Player::White, *sq).is_some());
        }
    }

    #[test]
    fn unknown_position_yields_nothing() {
        let book = OpeningBook::embedded();
        // Same discs, wrong side to move
        assert!(book.lookup(&Position::new(), Player::White).is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = format!(
            "too-short f5\n{key} z9\n{key}\n{key} c4 # trailing comment\n",
            key = "-".repeat(64)
        );
        let (table, errors) = parse_book(&text);
        assert_eq!(table.len(), 1);
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], BookError::BadKey { line: 1 }));
        assert!(matches!(errors[1], BookError::BadMove { line: 2, .. }));
        assert!(matches!(errors[2], BookError::MissingMoves { line: 3 }));
    }

    #[test]
    fn missing_file_is_an_empty_book() {
        let book = OpeningBook::from_file("/nonexistent/othello/book.txt");
        assert!(!book.is_loaded());
        assert!(book.lookup(&Position::new(), Player::Black).is_empty());
        assert!(book.is_loaded());
        assert!(book.is_empty());
    }

    #[test]
    fn disabled_book_never_loads() {
        let book = OpeningBook::disabled();
        assert!(book.lookup(&Position::new(), Player::Black).is_empty());
        assert!(!book.is_loaded());
    }

    #[test]
    fn text_book_reports_inline_source() {
        let key = Position::new().perspective_key(Player::Black);
        let book = OpeningBook::from_text(&format!("{key} d3\n"));
        assert_eq!(book.source(), &BookSource::Inline);
        assert!(book.is_loaded());
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.lookup(&Position::new(), Player::Black),
            vec![Square(2, 3)]
        );
    }
}

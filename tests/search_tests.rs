//! Search tests against the public API.

use othello_engine::board::{
    build_strategy, final_score, Cell, EngineConfig, MoveSource, Player, Position, Profile,
    SearchEngine, Square, Strategy, StrategyKind, BOOK_SCORE, WIN_BONUS,
};
use othello_engine::book::BookSource;

fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

fn searcher(depth: u32) -> SearchEngine {
    SearchEngine::new(
        EngineConfig::default()
            .with_depth(depth)
            .with_book(BookSource::Disabled),
    )
}

/// Black's four opening moves each flip exactly one disc
#[test]
fn opening_moves_flip_one_disc() {
    let pos = Position::new();
    let moves = pos.legal_moves(Player::Black);
    let names: Vec<String> = moves.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["d3", "c4", "f5", "e6"]);
    assert!(moves.iter().all(|m| m.flip_count() == 1));
}

/// Opening search returns one of the four moves with a finite score
#[test]
fn opening_search_returns_legal_move() {
    let mut engine = searcher(4);
    let pos = Position::new();
    let result = engine.best_move(&pos, Player::Black).expect("Should find a move");
    assert!(pos.find_move(Player::Black, result.best_move.to()).is_some());
    assert!(result.score.abs() < WIN_BONUS);
}

/// Default engine plays straight from the book
#[test]
fn default_engine_uses_book_first() {
    let mut engine = SearchEngine::default();
    let result = engine.best_move(&Position::new(), Player::Black).unwrap();
    assert_eq!(result.source, MoveSource::Book);
    assert_eq!(result.score, BOOK_SCORE);
}

/// Taking the last empty cell is found and scored exactly
#[test]
fn endgame_takes_winning_corner() {
    // Row 8 is b8..h8 White except h8 empty, a8 Black; rest of the board Black
    let mut pos = Position::empty();
    for idx in 0..56usize {
        pos = pos.with(Square::try_from(idx).unwrap(), Cell::Black);
    }
    pos = pos.with(sq("a8"), Cell::Black);
    for col in 1..7 {
        pos = pos.with(Square::new(7, col).unwrap(), Cell::White);
    }

    let mut engine = searcher(6);
    let result = engine.best_move(&pos, Player::Black).unwrap();
    assert_eq!(result.source, MoveSource::Endgame);
    assert_eq!(result.best_move.to(), sq("h8"));
    assert_eq!(result.score, 64 + WIN_BONUS);

    let after = pos.apply_move(&result.best_move, Player::Black);
    assert_eq!(final_score(&after, Player::Black), result.score);
}

/// Both strategies agree that a lone capture is the only option
#[test]
fn strategies_agree_on_forced_move() {
    let pos = Position::empty()
        .with(sq("a1"), Cell::Black)
        .with(sq("b1"), Cell::White);
    for kind in [StrategyKind::Search, StrategyKind::Greedy] {
        let mut strategy: Box<dyn Strategy> =
            build_strategy(kind, EngineConfig::profile(Profile::Standard));
        let result = strategy.best_move(&pos, Player::Black).unwrap();
        assert_eq!(result.best_move.to(), sq("c1"), "{}", strategy.name());
    }
}

/// Independent engines never share state
#[test]
fn engines_are_independent() {
    let mut a = searcher(3);
    let b = searcher(3);
    a.best_move(&Position::new(), Player::Black);
    assert!(a.stats().nodes > 0);
    assert_eq!(b.stats().nodes, 0);
    assert_eq!(b.tt().occupancy_per_mille(), 0);
}

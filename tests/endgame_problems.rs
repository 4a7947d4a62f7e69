use serde::Deserialize;

use othello_engine::board::{EngineConfig, SearchEngine};
use othello_engine::book::BookSource;
use othello_engine::protocol::parse_position_command;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    board: String,
    mover: String,
    best: String,
    score: i32,
}

#[test]
fn endgame_problem_suite() {
    let data = include_str!("data/endgame_problems.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid endgame_problems.json");
    assert!(!set.problems.is_empty());

    for problem in &set.problems {
        let parts = ["position", "board", problem.board.as_str(), problem.mover.as_str()];
        let (position, mover) = parse_position_command(&parts)
            .unwrap_or_else(|e| panic!("{}: bad problem: {e}", problem.name));

        let mut engine =
            SearchEngine::new(EngineConfig::default().with_book(BookSource::Disabled));
        let result = engine
            .best_move(&position, mover)
            .unwrap_or_else(|| panic!("{}: no move found", problem.name));

        assert_eq!(result.best_move.to_string(), problem.best, "{}", problem.name);
        assert_eq!(result.score, problem.score, "{}", problem.name);
        assert_eq!(engine.solve(&position, mover), problem.score, "{}", problem.name);
    }
}

//! Engine controller implementation.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::board::{
    build_strategy, EngineConfig, MoveList, Player, Position, SearchResult, Strategy,
    StrategyKind,
};

/// Finished search as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when the side to move had to pass
    pub result: Option<SearchResult>,
    /// Wall time including any requested delay
    pub elapsed: Duration,
}

/// Per-request search parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    /// Pause before searching, for front ends that want a visible think time
    pub delay: Duration,
}

/// Handle to a search running on a worker thread
pub struct SearchJob {
    slot: Arc<Mutex<Option<SearchOutcome>>>,
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Outcome if the worker has finished, without blocking.
    #[must_use]
    pub fn try_result(&self) -> Option<SearchOutcome> {
        *self.slot.lock()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Block until the worker finishes.
    ///
    /// Returns `None` only if the worker died before recording an outcome.
    pub fn wait(self) -> Option<SearchOutcome> {
        if self.handle.join().is_err() {
            log_warn!("search worker panicked");
        }
        self.slot.lock().take()
    }
}

/// Owns the game state and one strategy for the whole game.
pub struct EngineController {
    position: Position,
    mover: Player,
    kind: StrategyKind,
    config: EngineConfig,
    strategy: Arc<Mutex<Box<dyn Strategy>>>,
    current_job: Option<SearchJob>,
}

impl EngineController {
    #[must_use]
    pub fn new(kind: StrategyKind, config: EngineConfig) -> Self {
        EngineController {
            position: Position::new(),
            mover: Player::Black,
            kind,
            strategy: Arc::new(Mutex::new(build_strategy(kind, config.clone()))),
            config,
            current_job: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Side to move
    #[must_use]
    pub fn mover(&self) -> Player {
        self.mover
    }

    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves(self.mover)
    }

    /// Replace the game state. Waits for any running search first.
    pub fn set_position(&mut self, position: Position, mover: Player) {
        self.wait_for_search();
        self.position = position;
        self.mover = mover;
    }

    /// Start position, Black to move, strategy state cleared.
    pub fn new_game(&mut self) {
        self.wait_for_search();
        self.position = Position::new();
        self.mover = Player::Black;
        self.strategy.lock().new_game();
    }

    /// Apply a configuration, rebuilding the strategy only when its kind changes.
    pub fn configure(&mut self, kind: StrategyKind, config: EngineConfig) {
        self.wait_for_search();
        if kind == self.kind {
            self.strategy.lock().configure(&config);
        } else {
            log_debug!("switching strategy {} -> {}", self.kind, kind);
            *self.strategy.lock() = build_strategy(kind, config.clone());
            self.kind = kind;
        }
        self.config = config;
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.as_ref().is_some_and(|job| !job.is_finished())
    }

    /// Search the current position on this thread.
    pub fn search_blocking(&mut self) -> Option<SearchResult> {
        self.wait_for_search();
        self.strategy.lock().best_move(&self.position, self.mover)
    }

    /// Search the current position on a worker thread.
    ///
    /// `on_complete` runs on the worker once the search is done. Any earlier
    /// search is waited for first; searches never overlap.
    pub fn start_search<F>(&mut self, params: SearchParams, on_complete: F) -> io::Result<()>
    where
        F: FnOnce(SearchOutcome) + Send + 'static,
    {
        self.wait_for_search();

        let position = self.position;
        let mover = self.mover;
        let strategy = Arc::clone(&self.strategy);
        let slot = Arc::new(Mutex::new(None));
        let worker_slot = Arc::clone(&slot);

        let handle = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || {
                let start = Instant::now();
                if !params.delay.is_zero() {
                    thread::sleep(params.delay);
                }
                let result = strategy.lock().best_move(&position, mover);
                let outcome = SearchOutcome {
                    result,
                    elapsed: start.elapsed(),
                };
                *worker_slot.lock() = Some(outcome);
                on_complete(outcome);
            })?;

        self.current_job = Some(SearchJob { slot, handle });
        Ok(())
    }

    /// Join the running search, if any, and return its outcome.
    pub fn wait_for_search(&mut self) -> Option<SearchOutcome> {
        self.current_job.take().and_then(SearchJob::wait)
    }
}

impl Default for EngineController {
    fn default() -> Self {
        EngineController::new(StrategyKind::default(), EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, MoveSource, Square};
    use crate::book::BookSource;
    use std::sync::mpsc;

    fn quick_config() -> EngineConfig {
        EngineConfig::default()
            .with_depth(2)
            .with_book(BookSource::Disabled)
    }

    #[test]
    fn background_search_reports_through_callback_and_job() {
        let mut controller = EngineController::new(StrategyKind::Search, quick_config());
        let (tx, rx) = mpsc::channel();
        controller
            .start_search(SearchParams::default(), move |outcome| {
                let _ = tx.send(outcome);
            })
            .unwrap();

        let from_callback = rx.recv().unwrap();
        let from_job = controller.wait_for_search().unwrap();
        assert_eq!(from_callback, from_job);

        let result = from_job.result.unwrap();
        assert_eq!(result.source, MoveSource::Midgame);
        assert!(controller.legal_moves().find(result.best_move.to()).is_some());
        assert!(!controller.is_searching());
    }

    #[test]
    fn delay_is_included_in_elapsed_time() {
        let mut controller = EngineController::new(StrategyKind::Greedy, quick_config());
        let params = SearchParams {
            delay: Duration::from_millis(30),
        };
        controller.start_search(params, |_| {}).unwrap();
        let outcome = controller.wait_for_search().unwrap();
        assert!(outcome.elapsed >= Duration::from_millis(30));
        assert_eq!(outcome.result.unwrap().source, MoveSource::Greedy);
    }

    #[test]
    fn blocked_mover_yields_no_result() {
        let mut controller = EngineController::default();
        let pos = Position::empty()
            .with(Square(0, 0), Cell::Black)
            .with(Square(0, 1), Cell::Black);
        controller.set_position(pos, Player::White);
        assert!(controller.search_blocking().is_none());
    }

    #[test]
    fn configure_switches_strategy_kind() {
        let mut controller = EngineController::new(StrategyKind::Search, quick_config());
        controller.configure(StrategyKind::Greedy, quick_config());
        assert_eq!(controller.kind(), StrategyKind::Greedy);
        let result = controller.search_blocking().unwrap();
        assert_eq!(result.source, MoveSource::Greedy);
    }

    #[test]
    fn new_game_restores_start_position() {
        let mut controller = EngineController::default();
        controller.set_position(Position::empty(), Player::White);
        controller.new_game();
        assert_eq!(*controller.position(), Position::new());
        assert_eq!(controller.mover(), Player::Black);
    }
}

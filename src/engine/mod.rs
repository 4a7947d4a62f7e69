//! Engine controller for running searches off the caller's thread.
//!
//! The search itself is single-threaded; the controller only moves it onto a
//! worker so an interactive front end can keep reading input.

mod controller;

pub use controller::{EngineController, SearchJob, SearchOutcome, SearchParams};

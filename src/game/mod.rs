//! Game flow: setup, hinter selection, and the hint/guess loop.

pub mod engine;
pub mod outcome;

pub use engine::Game;
pub use outcome::{GuessOutcome, TeamPreferences};

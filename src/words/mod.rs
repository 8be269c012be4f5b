//! Board words.
//!
//! - `word`: a single word with its secret role and reveal flag
//! - `board`: the dealt word set and its public / hinter projections

pub mod board;
pub mod word;

pub use board::{Board, HinterWords, PublicWords};
pub use word::{normalize, Word, WordRole};

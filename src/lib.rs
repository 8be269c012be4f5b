//! # rust-codenames
//!
//! Rules engine for a two-team word game with hidden identities.
//!
//! Each team has one hinter, who can see which words belong to whom, and
//! one or more guessers, who cannot. Hinters give one-word clues with a
//! number; guessers reveal words until they miss, run out of guesses, or
//! pass. The first team to find all of its words wins; revealing the
//! assassin loses on the spot.
//!
//! ## Design Principles
//!
//! 1. **Transport-Agnostic**: Players are opaque identities (`I: Identity`).
//!    The engine never talks to a network, a chat channel, or a clock.
//!
//! 2. **Validate, Then Mutate**: Every action checks all of its
//!    preconditions first. A rejected action is a `GameError` and leaves
//!    the game untouched.
//!
//! 3. **Reproducible**: All randomness flows through a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Team ids, phases, roles, rules configuration, RNG, errors
//! - `players`: Player records, team views, team assignment
//! - `words`: Words and the board, with public and hinter views
//! - `turn`: Hints, hint numbers, guess allowances
//! - `game`: The game state machine
//! - `registry`: Many games, with ids and a default word pool

pub mod core;
pub mod game;
pub mod players;
pub mod registry;
pub mod turn;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, InvariantViolation, Phase, Result, Role, Seat, TeamId,
    TeamMap, TEAM_COUNT,
};

pub use crate::players::{Assignment, Identity, Team, TeamAssigner};

pub use crate::words::{Board, HinterWords, PublicWords, WordRole};

pub use crate::turn::{Guess, GuessAllowance, Hint, HintNumber, RequestedNumber};

pub use crate::game::{Game, GuessOutcome, TeamPreferences};

pub use crate::registry::{GameId, GameRegistry};

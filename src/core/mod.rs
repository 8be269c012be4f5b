//! Core engine types: teams, phases, roles, errors, RNG, configuration.
//!
//! Everything else in the crate is built from these.

pub mod config;
pub mod error;
pub mod phase;
pub mod rng;
pub mod team;

pub use config::{GameConfig, HINTERS_PER_TEAM, MIN_SUPPORTED_PLAYERS};
pub use error::{GameError, InvariantViolation, Result};
pub use phase::{Phase, Role};
pub use rng::GameRng;
pub use team::{Seat, TeamId, TeamMap, TEAM_COUNT};

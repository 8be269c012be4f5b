//! Players and teams.
//!
//! - `player`: per-player record with write-once seat and role
//! - `team`: read-only team view handed to callers
//! - `assigner`: splits players into teams at game start

pub mod assigner;
pub mod player;
pub mod team;

pub use assigner::{Assignment, TeamAssigner};
pub use player::{Identity, Player};
pub use team::Team;

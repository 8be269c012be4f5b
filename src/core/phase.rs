//! Game phases and player roles.

use serde::{Deserialize, Serialize};

/// Where the game is in its lifecycle.
///
/// `Setup → ChooseHinter → Hint ⇄ Guess → GameOver`. Three-player games
/// skip `ChooseHinter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players join, leave and state team preferences.
    Setup,
    /// Each team picks its hinter.
    ChooseHinter,
    /// The current team's hinter gives a clue.
    Hint,
    /// The current team's guessers reveal words.
    Guess,
    /// A team has won. Nothing else may change.
    GameOver,
}

impl Phase {
    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::ChooseHinter => "choose_hinter",
            Phase::Hint => "hint",
            Phase::Guess => "guess",
            Phase::GameOver => "game_over",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a player does on their team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Gives clues; sees every word's secret role.
    Hinter,
    /// Reveals words; sees only revealed roles.
    Guesser,
}

impl Role {
    /// The phase in which this role acts.
    #[must_use]
    pub const fn acting_phase(self) -> Phase {
        match self {
            Role::Hinter => Phase::Hint,
            Role::Guesser => Phase::Guess,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Hinter => f.write_str("hinter"),
            Role::Guesser => f.write_str("guesser"),
        }
    }
}

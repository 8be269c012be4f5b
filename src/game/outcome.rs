//! Values handed back to callers by the game.

use serde::{Deserialize, Serialize};

use crate::core::{TeamId, TeamMap};
use crate::players::Identity;
use crate::words::WordRole;

/// What happened on a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Role of the revealed word.
    pub role: WordRole,
    /// The word belonged to the guessing team.
    pub correct: bool,
    /// The guessing team's turn is over. May be false on a winning guess;
    /// check `winner`.
    pub turn_ends: bool,
    /// Set when this guess ended the game.
    pub winner: Option<TeamId>,
}

impl GuessOutcome {
    /// Check if this guess ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// Pre-game team preferences, grouped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPreferences<I> {
    /// Players who asked for each team, in join order.
    pub teams: TeamMap<Vec<I>>,
    /// Players who did not ask for a team.
    pub undecided: Vec<I>,
}

impl<I: Identity> TeamPreferences<I> {
    /// Players preferring `team`, or the undecided players for `None`.
    #[must_use]
    pub fn get(&self, team: Option<TeamId>) -> &[I] {
        match team {
            Some(team) => &self.teams[team],
            None => &self.undecided,
        }
    }
}

//! Rule configuration.
//!
//! `GameConfig::default()` is the standard rule set: a 25-word board with
//! 9 words for the first team, 8 for the second, 1 assassin and 7 neutral
//! words, for 3 to 100 players. Custom boards go through the `with_*`
//! builders and must pass [`GameConfig::validate`] before a game accepts them.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::team::{TeamId, TeamMap};

/// Hinters each team gets. Every team needs at least one more player than this.
pub const HINTERS_PER_TEAM: usize = 1;

/// Fewest players any game can start with.
pub const MIN_SUPPORTED_PLAYERS: usize = 3;

/// Board and roster limits for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Words on the board.
    pub words_per_game: usize,

    /// Words each team must reveal to win.
    pub team_words: TeamMap<usize>,

    /// Words that end the game for the guessing team.
    pub assassin_words: usize,

    /// Fewest players `start` accepts.
    pub min_players: usize,

    /// Most players the game holds.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words_per_game: 25,
            team_words: TeamMap::from_array([9, 8]),
            assassin_words: 1,
            min_players: MIN_SUPPORTED_PLAYERS,
            max_players: 100,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_words_per_game(mut self, words: usize) -> Self {
        self.words_per_game = words;
        self
    }

    /// Set the word target of each team, in team order.
    #[must_use]
    pub fn with_team_words(mut self, team_words: [usize; 2]) -> Self {
        self.team_words = TeamMap::from_array(team_words);
        self
    }

    /// Set the number of assassin words.
    #[must_use]
    pub fn with_assassin_words(mut self, words: usize) -> Self {
        self.assassin_words = words;
        self
    }

    /// Set the roster limits.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Words one team must reveal to win.
    #[must_use]
    pub fn target(&self, team: TeamId) -> usize {
        self.team_words[team]
    }

    /// Sum of every team's target.
    #[must_use]
    pub fn total_team_words(&self) -> usize {
        self.team_words.iter().map(|(_, n)| n).sum()
    }

    /// Words that belong to nobody.
    #[must_use]
    pub fn neutral_words(&self) -> usize {
        self.words_per_game
            .saturating_sub(self.total_team_words())
            .saturating_sub(self.assassin_words)
    }

    /// Check the rule set is playable.
    pub fn validate(&self) -> Result<()> {
        if let Some((team, _)) = self.team_words.iter().find(|(_, n)| **n == 0) {
            return Err(GameError::InvalidConfig(format!("{team} needs at least one word")));
        }
        if self.total_team_words() + self.assassin_words > self.words_per_game {
            return Err(GameError::InvalidConfig(format!(
                "{} team words and {} assassin words do not fit on a {}-word board",
                self.total_team_words(),
                self.assassin_words,
                self.words_per_game
            )));
        }
        if self.min_players < MIN_SUPPORTED_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "games need at least {MIN_SUPPORTED_PLAYERS} players"
            )));
        }
        if self.min_players > self.max_players {
            return Err(GameError::InvalidConfig(format!(
                "minimum of {} players exceeds maximum of {}",
                self.min_players, self.max_players
            )));
        }
        Ok(())
    }
}

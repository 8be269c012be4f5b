//! Error taxonomy.
//!
//! [`GameError`] is returned to callers for every rejected action. Each
//! variant maps to a stable snake_case key via [`GameError::key`] so a
//! transport can translate or localize it.
//!
//! [`InvariantViolation`] is a broken contract inside the engine itself
//! (a write-once field written twice, a word revealed twice). The game
//! validates every action before mutating, so these never reach callers;
//! the game treats one as fatal.

use thiserror::Error;

use super::phase::{Phase, Role};
use super::team::{Seat, TeamId};
use crate::registry::GameId;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// A rejected action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A team ended up too small for a hinter and a guesser.
    #[error("both teams need at least one guesser ({0} does not have enough players)")]
    NoGuesser(TeamId),

    #[error("not enough words given, we need {needed}")]
    NotEnoughWords { needed: usize },

    #[error("at least {min} players are needed to start")]
    NotEnoughPlayers { min: usize },

    #[error("the game is full ({max} players)")]
    GameFull { max: usize },

    #[error("you are not in the game")]
    NotInGame,

    #[error("team {0} is invalid")]
    InvalidTeam(usize),

    #[error("your team already has a hinter")]
    AlreadyChoseHinter,

    /// The action belongs to another phase.
    #[error("you must wait for the {0} phase to do that")]
    WrongTime(Phase),

    #[error("you are not on that team")]
    WrongTeam,

    /// The action needs a different role.
    #[error("you are not a {0}")]
    WrongRole(Role),

    #[error("that word is not in this game")]
    WordNotFound,

    #[error("that word has already been guessed")]
    WordAlreadyGuessed,

    #[error("you must make at least one guess")]
    MustGuess,

    /// The hint number is not `unlimited` or an integer in `0..=max`.
    #[error("that is an invalid number: need unlimited or number between 0 and {max}")]
    BadNumber { max: usize },

    #[error("invalid rules: {0}")]
    InvalidConfig(String),

    #[error("no game with id {0}")]
    UnknownGame(GameId),
}

impl GameError {
    /// Stable machine-readable key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            GameError::NoGuesser(_) => "no_guesser",
            GameError::NotEnoughWords { .. } => "not_enough_words",
            GameError::NotEnoughPlayers { .. } => "not_enough_players",
            GameError::GameFull { .. } => "game_full",
            GameError::NotInGame => "not_in_game",
            GameError::InvalidTeam(_) => "invalid_team",
            GameError::AlreadyChoseHinter => "already_chose_hinter",
            GameError::WrongTime(_) => "wrong_time",
            GameError::WrongTeam => "wrong_team",
            GameError::WrongRole(_) => "wrong_role",
            GameError::WordNotFound => "word_not_found",
            GameError::WordAlreadyGuessed => "word_already_guessed",
            GameError::MustGuess => "must_guess",
            GameError::BadNumber { .. } => "bad_number",
            GameError::InvalidConfig(_) => "invalid_config",
            GameError::UnknownGame(_) => "unknown_game",
        }
    }
}

/// The engine broke one of its own invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("player already seated at {current:?}")]
    SeatAlreadyAssigned { current: Seat },

    #[error("player already has role {current}")]
    RoleAlreadyAssigned { current: Role },

    #[error("word {word:?} already revealed")]
    AlreadyRevealed { word: String },

    #[error("word {word:?} is not on the board")]
    MissingWord { word: String },

    #[error("guesses for hint {hint:?} exhausted")]
    GuessesExhausted { hint: String },

    #[error("no hint is active")]
    NoActiveHint,

    #[error("expected {expected} phase, game is in {actual}")]
    PhaseMismatch { expected: Phase, actual: Phase },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_snake_case() {
        let errors = [
            GameError::NoGuesser(TeamId::FIRST),
            GameError::WrongTime(Phase::ChooseHinter),
            GameError::WrongRole(Role::Guesser),
            GameError::BadNumber { max: 9 },
        ];
        let keys: Vec<_> = errors.iter().map(GameError::key).collect();
        assert_eq!(keys, vec!["no_guesser", "wrong_time", "wrong_role", "bad_number"]);
    }

    #[test]
    fn test_messages_carry_arguments() {
        assert_eq!(
            GameError::WrongTime(Phase::ChooseHinter).to_string(),
            "you must wait for the choose_hinter phase to do that"
        );
        assert_eq!(GameError::WrongRole(Role::Hinter).to_string(), "you are not a hinter");
        assert_eq!(
            GameError::BadNumber { max: 4 }.to_string(),
            "that is an invalid number: need unlimited or number between 0 and 4"
        );
        assert_eq!(
            GameError::NotEnoughWords { needed: 25 }.to_string(),
            "not enough words given, we need 25"
        );
    }

    #[test]
    fn test_invariant_messages() {
        let violation = InvariantViolation::RoleAlreadyAssigned { current: Role::Hinter };
        assert_eq!(violation.to_string(), "player already has role hinter");
    }
}

//! Hints and the guesses made against them.
//!
//! ## Hint numbers
//!
//! A hinter declares how many words the clue covers. `0` and `unlimited`
//! both let the team guess until it misses or passes. Any other `N` allows
//! `N + 1` guesses: the team may keep going for one extra word after
//! finding the declared ones.
//!
//! Callers pass the number as whatever they received ([`RequestedNumber`]),
//! and [`RequestedNumber::resolve`] turns it into a [`HintNumber`] or a
//! `BadNumber` error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameError, InvariantViolation, Result, TeamId};
use crate::words::{normalize, WordRole};

/// Sentinel accepted (case-insensitively) for an unlimited hint.
pub const UNLIMITED: &str = "unlimited";

/// A validated hint number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintNumber {
    /// The clue covers this many words. `0` means "guess freely".
    Count(usize),
    /// No stated bound.
    Unlimited,
}

impl std::fmt::Display for HintNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HintNumber::Count(n) => write!(f, "{n}"),
            HintNumber::Unlimited => f.write_str(UNLIMITED),
        }
    }
}

/// A hint number as supplied by the caller, before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestedNumber {
    Integer(i64),
    Float(f64),
    Text(String),
    Unlimited,
}

impl RequestedNumber {
    /// Validate against the number of words the team still has to find.
    ///
    /// Accepts integers in `0..=max`, `unlimited`, positive infinity, whole
    /// floats, and strings that are exactly an integer's decimal form.
    ///
    /// ```
    /// use rust_codenames::turn::{HintNumber, RequestedNumber};
    ///
    /// assert_eq!(RequestedNumber::from("3").resolve(9), Ok(HintNumber::Count(3)));
    /// assert_eq!(RequestedNumber::from(f64::INFINITY).resolve(9), Ok(HintNumber::Unlimited));
    /// assert!(RequestedNumber::from("1cheese").resolve(9).is_err());
    /// assert!(RequestedNumber::from(10).resolve(9).is_err());
    /// ```
    pub fn resolve(&self, max: usize) -> Result<HintNumber> {
        let bad = GameError::BadNumber { max };
        match self {
            RequestedNumber::Unlimited => Ok(HintNumber::Unlimited),
            RequestedNumber::Integer(n) => Self::count(*n, max),
            RequestedNumber::Float(f) if *f == f64::INFINITY => Ok(HintNumber::Unlimited),
            RequestedNumber::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                Self::count(*f as i64, max)
            }
            RequestedNumber::Float(_) => Err(bad),
            RequestedNumber::Text(s) if s.eq_ignore_ascii_case(UNLIMITED) => Ok(HintNumber::Unlimited),
            RequestedNumber::Text(s) => match s.parse::<i64>() {
                Ok(n) if n.to_string() == *s => Self::count(n, max),
                _ => Err(bad),
            },
        }
    }

    fn count(n: i64, max: usize) -> Result<HintNumber> {
        match usize::try_from(n) {
            Ok(n) if n <= max => Ok(HintNumber::Count(n)),
            _ => Err(GameError::BadNumber { max }),
        }
    }
}

impl From<i64> for RequestedNumber {
    fn from(n: i64) -> Self {
        RequestedNumber::Integer(n)
    }
}

impl From<i32> for RequestedNumber {
    fn from(n: i32) -> Self {
        RequestedNumber::Integer(n.into())
    }
}

impl From<u32> for RequestedNumber {
    fn from(n: u32) -> Self {
        RequestedNumber::Integer(n.into())
    }
}

impl From<usize> for RequestedNumber {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(RequestedNumber::Integer(i64::MAX), RequestedNumber::Integer)
    }
}

impl From<f64> for RequestedNumber {
    fn from(f: f64) -> Self {
        RequestedNumber::Float(f)
    }
}

impl From<&str> for RequestedNumber {
    fn from(s: &str) -> Self {
        RequestedNumber::Text(s.to_owned())
    }
}

impl From<String> for RequestedNumber {
    fn from(s: String) -> Self {
        RequestedNumber::Text(s)
    }
}

impl From<HintNumber> for RequestedNumber {
    fn from(number: HintNumber) -> Self {
        match number {
            HintNumber::Count(n) => n.into(),
            HintNumber::Unlimited => RequestedNumber::Unlimited,
        }
    }
}

/// Guesses left under the active hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessAllowance {
    Limited(usize),
    Unlimited,
}

impl GuessAllowance {
    /// Allowance granted by a hint number.
    #[must_use]
    pub fn for_number(number: HintNumber) -> Self {
        match number {
            HintNumber::Count(0) | HintNumber::Unlimited => GuessAllowance::Unlimited,
            HintNumber::Count(n) => GuessAllowance::Limited(n + 1),
        }
    }

    #[must_use]
    pub fn is_exhausted(self) -> bool {
        self == GuessAllowance::Limited(0)
    }
}

/// One guess made under a hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub word: String,
    pub role: WordRole,
}

/// The active clue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    team: TeamId,
    word: String,
    number: HintNumber,
    guesses_remaining: GuessAllowance,
    guesses: SmallVec<[Guess; 4]>,
}

impl Hint {
    #[must_use]
    pub fn new(team: TeamId, word: impl Into<String>, number: HintNumber) -> Self {
        Self {
            team,
            word: word.into(),
            number,
            guesses_remaining: GuessAllowance::for_number(number),
            guesses: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn team(&self) -> TeamId {
        self.team
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn number(&self) -> HintNumber {
        self.number
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> GuessAllowance {
        self.guesses_remaining
    }

    /// Guesses made under this hint, oldest first.
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn guessed_this_turn(&self) -> bool {
        !self.guesses.is_empty()
    }

    /// Record a guess, spending one from the allowance.
    pub fn record_guess(&mut self, word: &str, role: WordRole) -> std::result::Result<(), InvariantViolation> {
        if self.guesses_remaining.is_exhausted() {
            return Err(InvariantViolation::GuessesExhausted {
                hint: self.to_string(),
            });
        }
        self.guesses.push(Guess {
            word: normalize(word),
            role,
        });
        if let GuessAllowance::Limited(n) = &mut self.guesses_remaining {
            *n -= 1;
        }
        Ok(())
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.word, self.number)
    }
}

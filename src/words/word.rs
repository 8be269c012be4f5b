//! Board words and their secret roles.

use serde::{Deserialize, Serialize};

use crate::core::{InvariantViolation, TeamId};

/// Normalize word text for storage and lookup: trimmed, lowercased.
///
/// ```
/// use rust_codenames::words::normalize;
///
/// assert_eq!(normalize("  Apple\n"), "apple");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Who a word belongs to.
///
/// Serialized as `"team_0"`, `"team_1"`, `"neutral"` or `"assassin"` so that
/// role-keyed maps encode as plain JSON objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WordRole {
    /// Scores for this team.
    Team(TeamId),
    /// Ends the turn without scoring.
    Neutral,
    /// Ends the game in the other team's favour.
    Assassin,
}

impl std::fmt::Display for WordRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordRole::Team(team) => write!(f, "team_{}", team.index()),
            WordRole::Neutral => f.write_str("neutral"),
            WordRole::Assassin => f.write_str("assassin"),
        }
    }
}

impl From<WordRole> for String {
    fn from(role: WordRole) -> Self {
        role.to_string()
    }
}

impl TryFrom<String> for WordRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "neutral" => Ok(WordRole::Neutral),
            "assassin" => Ok(WordRole::Assassin),
            other => other
                .strip_prefix("team_")
                .and_then(|n| n.parse::<usize>().ok())
                .and_then(TeamId::new)
                .map(WordRole::Team)
                .ok_or_else(|| format!("unknown word role {other:?}")),
        }
    }
}

/// One word on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    text: String,
    role: WordRole,
    revealed: bool,
}

impl Word {
    /// Create an unrevealed word. The text is normalized.
    #[must_use]
    pub fn new(text: &str, role: WordRole) -> Self {
        Self {
            text: normalize(text),
            role,
            revealed: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn role(&self) -> WordRole {
        self.role
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Turn the word face up. A word is revealed at most once.
    pub fn reveal(&mut self) -> Result<(), InvariantViolation> {
        if self.revealed {
            return Err(InvariantViolation::AlreadyRevealed {
                word: self.text.clone(),
            });
        }
        self.revealed = true;
        Ok(())
    }
}

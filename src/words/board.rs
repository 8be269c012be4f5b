//! The board: a fixed set of words with secret roles.
//!
//! ## Dealing
//!
//! The candidate pool is normalized and de-duplicated, then the board's
//! words are sampled without replacement. All randomness lives in that
//! sample; roles are then handed out by position from the end:
//!
//! ```text
//! [ neutral ... | team 1 | team 0 | assassin ]
//! ```
//!
//! ## Views
//!
//! Two read-only projections of the same words:
//! - [`Board::public_words`]: what everybody sees.
//! - [`Board::hinter_words`]: every secret role, for hinters only.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::word::{normalize, Word, WordRole};
use crate::core::{GameConfig, GameError, GameRng, InvariantViolation, Result};

/// What every player may see.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicWords {
    /// Face-down words, alphabetical.
    pub unguessed: Vec<String>,
    /// Face-up words by their now public role.
    pub guessed: BTreeMap<WordRole, Vec<String>>,
}

/// Words grouped by secret role.
pub type HinterWords = BTreeMap<WordRole, Vec<String>>;

/// The game's words. Empty until the game starts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Board {
    /// Sample a board from `pool` under the given rules.
    ///
    /// Fails with `NotEnoughWords` if the pool has fewer distinct
    /// (normalized, non-empty) entries than the board needs.
    pub fn deal<S: AsRef<str>>(pool: &[S], config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        let candidates = Self::candidates(pool);
        if candidates.len() < config.words_per_game {
            return Err(GameError::NotEnoughWords {
                needed: config.words_per_game,
            });
        }
        let sample = rng.sample(&candidates, config.words_per_game);
        Ok(Self::from_sample(sample, config))
    }

    /// Normalized, non-empty, first-occurrence-unique pool entries.
    fn candidates<S: AsRef<str>>(pool: &[S]) -> Vec<String> {
        let mut seen = FxHashSet::default();
        pool.iter()
            .map(|raw| normalize(raw.as_ref()))
            .filter(|word| !word.is_empty() && seen.insert(word.clone()))
            .collect()
    }

    /// Hand out roles by position. `sample` must hold exactly
    /// `words_per_game` distinct normalized words.
    fn from_sample(mut sample: Vec<String>, config: &GameConfig) -> Self {
        assert_eq!(sample.len(), config.words_per_game, "sample does not fill the board");

        let mut words = Vec::with_capacity(sample.len());
        let assassins = sample.split_off(sample.len() - config.assassin_words);
        words.extend(assassins.iter().map(|w| Word::new(w, WordRole::Assassin)));
        for (team, &count) in config.team_words.iter() {
            let chunk = sample.split_off(sample.len() - count);
            words.extend(chunk.iter().map(|w| Word::new(w, WordRole::Team(team))));
        }
        words.extend(sample.iter().map(|w| Word::new(w, WordRole::Neutral)));

        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_owned(), i))
            .collect();
        Self { words, index }
    }

    /// Number of words on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look a word up by (unnormalized) text.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(&normalize(text)).map(|&i| &self.words[i])
    }

    /// Iterate over every word.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Reveal a word and return its role.
    pub fn reveal(&mut self, text: &str) -> std::result::Result<WordRole, InvariantViolation> {
        let key = normalize(text);
        let Some(&i) = self.index.get(&key) else {
            return Err(InvariantViolation::MissingWord { word: key });
        };
        let word = &mut self.words[i];
        word.reveal()?;
        Ok(word.role())
    }

    /// The view every player gets.
    #[must_use]
    pub fn public_words(&self) -> PublicWords {
        let mut view = PublicWords::default();
        for word in &self.words {
            if word.is_revealed() {
                view.guessed
                    .entry(word.role())
                    .or_default()
                    .push(word.text().to_owned());
            } else {
                view.unguessed.push(word.text().to_owned());
            }
        }
        view.unguessed.sort();
        view
    }

    /// Every word's secret role, optionally leaving out revealed words.
    #[must_use]
    pub fn hinter_words(&self, exclude_revealed: bool) -> HinterWords {
        let mut grouped = HinterWords::new();
        for word in self.words.iter().filter(|w| !(exclude_revealed && w.is_revealed())) {
            grouped
                .entry(word.role())
                .or_default()
                .push(word.text().to_owned());
        }
        grouped
    }
}

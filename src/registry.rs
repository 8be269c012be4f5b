//! Registry of running games.
//!
//! The `GameRegistry` owns every game a host is running, hands out ids, and
//! keeps the default word pool used when a game is started without one.
//!
//! ## Example
//!
//! ```
//! use rust_codenames::{GameRegistry, Phase};
//!
//! let mut registry: GameRegistry<u32> = GameRegistry::new()
//!     .with_seed(42)
//!     .with_default_words((0..25).map(|i| format!("word{i}")));
//!
//! let id = registry.create("#lobby");
//! let game = registry.game_mut(id).unwrap();
//! for player in 0..4 {
//!     game.add_player(player).unwrap();
//! }
//! registry.start_with_default_words(id).unwrap();
//! assert_eq!(registry.game(id).unwrap().phase(), Phase::ChooseHinter);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameError, GameRng, Result};
use crate::game::Game;
use crate::players::Identity;

/// Registry-assigned game id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(u64);

impl GameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every game a host is running.
#[derive(Clone, Debug)]
pub struct GameRegistry<I> {
    games: FxHashMap<GameId, Game<I>>,
    games_created: u64,
    default_config: GameConfig,
    default_words: Vec<String>,
    seed: Option<u64>,
}

impl<I: Identity> Default for GameRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Identity> GameRegistry<I> {
    /// Create an empty registry using standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games: FxHashMap::default(),
            games_created: 0,
            default_config: GameConfig::default(),
            default_words: Vec::new(),
            seed: None,
        }
    }

    /// Rules for games created with [`GameRegistry::create`].
    pub fn with_config(mut self, config: GameConfig) -> Result<Self> {
        config.validate()?;
        self.default_config = config;
        Ok(self)
    }

    /// Seed every game's RNG from `seed` and its id, for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_default_words<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.set_default_words(words);
        self
    }

    /// Replace the pool used by [`GameRegistry::start_with_default_words`].
    pub fn set_default_words<S: Into<String>>(&mut self, words: impl IntoIterator<Item = S>) {
        self.default_words = words.into_iter().map(Into::into).collect();
        debug!(words = self.default_words.len(), "default word pool replaced");
    }

    #[must_use]
    pub fn default_words(&self) -> &[String] {
        &self.default_words
    }

    /// Create a game in `channel_name` with the registry's rules.
    pub fn create(&mut self, channel_name: impl Into<String>) -> GameId {
        let config = self.default_config.clone();
        self.insert(channel_name.into(), Game::new_unchecked(config))
    }

    /// Create a game with its own rules.
    pub fn create_with_config(
        &mut self,
        channel_name: impl Into<String>,
        config: GameConfig,
    ) -> Result<GameId> {
        let game = Game::with_config(config)?;
        Ok(self.insert(channel_name.into(), game))
    }

    fn insert(&mut self, channel_name: String, game: Game<I>) -> GameId {
        let id = GameId(self.games_created);
        self.games_created += 1;

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed.wrapping_add(id.0)),
            None => GameRng::from_entropy(),
        };
        debug!(game = %id, channel = %channel_name, "game created");
        self.games.insert(id, game.with_rng(rng).with_label(id, channel_name));
        id
    }

    #[must_use]
    pub fn get(&self, id: GameId) -> Option<&Game<I>> {
        self.games.get(&id)
    }

    pub fn get_mut(&mut self, id: GameId) -> Option<&mut Game<I>> {
        self.games.get_mut(&id)
    }

    /// Like [`GameRegistry::get`], failing with `UnknownGame`.
    pub fn game(&self, id: GameId) -> Result<&Game<I>> {
        self.games.get(&id).ok_or(GameError::UnknownGame(id))
    }

    /// Like [`GameRegistry::get_mut`], failing with `UnknownGame`.
    pub fn game_mut(&mut self, id: GameId) -> Result<&mut Game<I>> {
        self.games.get_mut(&id).ok_or(GameError::UnknownGame(id))
    }

    /// Drop a game (finished or abandoned), returning it.
    pub fn remove(&mut self, id: GameId) -> Option<Game<I>> {
        let game = self.games.remove(&id);
        if game.is_some() {
            debug!(game = %id, "game removed");
        }
        game
    }

    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    /// Number of live games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Games ever created, including removed ones.
    #[must_use]
    pub fn games_created(&self) -> u64 {
        self.games_created
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameId, &Game<I>)> {
        self.games.iter().map(|(&id, game)| (id, game))
    }

    /// Games played in `channel_name`.
    pub fn find_by_channel<'a>(
        &'a self,
        channel_name: &'a str,
    ) -> impl Iterator<Item = (GameId, &'a Game<I>)> + 'a {
        self.iter()
            .filter(move |(_, game)| game.channel_name() == Some(channel_name))
    }

    /// Start a game with an explicit word pool.
    pub fn start<S: AsRef<str>>(&mut self, id: GameId, pool: &[S]) -> Result<()> {
        self.game_mut(id)?.start(pool)
    }

    /// Start a game with the registry's default word pool.
    pub fn start_with_default_words(&mut self, id: GameId) -> Result<()> {
        let game = self.games.get_mut(&id).ok_or(GameError::UnknownGame(id))?;
        game.start(self.default_words.as_slice())
    }
}
